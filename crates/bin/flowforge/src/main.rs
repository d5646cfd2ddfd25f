//! # flowforge — simulation CLI
//!
//! Composition root that wires the store, services, and engine together.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the storage adapter and application services
//! - Seed demo data when configured
//! - Simulate every active automation against its test payload, record the
//!   runs, and print the step traces
//! - Print dashboard insights, a builder suggestion, and the executive
//!   summary
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;

use flowforge_adapter_storage_memory::MemoryStore;
use flowforge_app::choice::{FixedChoice, RngChoice};
use flowforge_app::generate::suggest_next_step;
use flowforge_app::insights::{dashboard_insights, executive_summary};
use flowforge_app::services::{
    AutomationService, DemoService, RunHistoryService, SettingsService,
};
use flowforge_app::simulator::{RunOptions, Simulation, simulate_run};
use flowforge_domain::automation::Automation;
use flowforge_domain::payload::SamplePayload;

use config::Config;

fn simulate(
    automation: &Automation,
    payload: &SamplePayload,
    options: &RunOptions,
    deterministic: bool,
) -> Simulation {
    if deterministic {
        simulate_run(automation, payload, options, &mut FixedChoice::first())
    } else {
        simulate_run(automation, payload, options, &mut RngChoice)
    }
}

fn print_simulation(automation: &Automation, simulation: &Simulation) {
    println!(
        "Run: {} -> {} ({} ms)",
        automation.name, simulation.status, simulation.duration_ms
    );
    for step in &simulation.steps_executed {
        match &step.ai_output {
            Some(output) => println!("    {} | {output}", step.result),
            None => println!("    {}", step.result),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();
    tracing::info!(
        seed = config.demo.seed,
        deterministic = config.demo.deterministic,
        "flowforge starting"
    );

    let store = MemoryStore::new();
    let settings_service = SettingsService::new(store.clone());
    let automation_service = AutomationService::new(store.clone());
    let run_service = RunHistoryService::new(store.clone());

    // Config is the source of truth for this session's generation settings;
    // persist it so reporting echoes what the engine actually used.
    let mut settings = settings_service.load().await?;
    settings.tone = config.generation.tone;
    settings.risk_level = config.generation.risk_level;
    settings.mask_pii_in_logs = config.generation.mask_pii;
    settings.demo_mode = config.demo.deterministic;
    settings_service.save(&settings).await?;

    if config.demo.seed {
        DemoService::new(store.clone()).seed_if_empty().await?;
    }

    let options = RunOptions {
        tone: settings.tone,
        risk_level: settings.risk_level,
        mask_pii: settings.mask_pii_in_logs,
    };

    let automations = automation_service.list().await?;
    for automation in automations.iter().filter(|a| a.is_active()) {
        let payload = automation.test_payload.clone().unwrap_or_default();
        let simulation = simulate(automation, &payload, &options, settings.demo_mode);
        print_simulation(automation, &simulation);
        run_service.record(automation, simulation).await?;
    }

    let automations = automation_service.list().await?;
    let history = run_service.list().await?;

    println!();
    println!("Insights:");
    for insight in dashboard_insights(&automations, &history) {
        println!("    [{}] {}: {}", insight.kind, insight.title, insight.text);
    }

    if let Some(automation) = automations.first() {
        let suggestion = if settings.demo_mode {
            suggest_next_step(
                &automation.trigger.kind,
                &automation.conditions,
                &automation.actions,
                &mut FixedChoice::first(),
            )
        } else {
            suggest_next_step(
                &automation.trigger.kind,
                &automation.conditions,
                &automation.actions,
                &mut RngChoice,
            )
        };
        println!();
        println!(
            "Builder suggestion for \"{}\": {}",
            automation.name,
            serde_json::to_string(&suggestion).unwrap_or_default()
        );
    }

    println!();
    println!("{}", executive_summary(&automations, &history, &settings));

    Ok(())
}
