//! Application services — use-cases orchestrating persistence over the
//! storage port.

pub mod automation_service;
pub mod demo_service;
pub mod run_service;
pub mod settings_service;

pub use automation_service::AutomationService;
pub use demo_service::DemoService;
pub use run_service::{HISTORY_CAP, RunHistoryService};
pub use settings_service::SettingsService;
