//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `flowforge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use flowforge_domain::settings::{RiskLevel, Tone};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Generation/governance settings threaded into the engine.
    pub generation: GenerationConfig,
    /// Demo dataset toggles.
    pub demo: DemoConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Engine options for simulated runs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Reply tone; unknown values fall back to `professional`.
    pub tone: Tone,
    /// Governance risk level; unknown values fall back to `low`.
    pub risk_level: RiskLevel,
    /// Pass action outputs through the PII redactor.
    pub mask_pii: bool,
}

/// Demo dataset toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed the two sample automations and runs on an empty store.
    pub seed: bool,
    /// Use the deterministic choice source so output is reproducible.
    pub deterministic: bool,
}

impl Config {
    /// Load configuration from `flowforge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("flowforge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FLOWFORGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("FLOWFORGE_TONE") {
            self.generation.tone = Tone::from(val);
        }
        if let Ok(val) = std::env::var("FLOWFORGE_RISK_LEVEL") {
            self.generation.risk_level = RiskLevel::from(val);
        }
        if let Ok(val) = std::env::var("FLOWFORGE_MASK_PII")
            && let Ok(flag) = val.parse()
        {
            self.generation.mask_pii = flag;
        }
        if let Ok(val) = std::env::var("FLOWFORGE_SEED")
            && let Ok(flag) = val.parse()
        {
            self.demo.seed = flag;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "flowforge=info,flowforge_app=info".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: true,
            deterministic: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
