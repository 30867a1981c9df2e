// File: dashboard/src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

use crate::constants::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the admin API, e.g. `http://localhost:8000/api`
    pub api_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_recent_jobs_limit")]
    pub recent_jobs_limit: usize,
    #[serde(default = "default_cron_expression")]
    pub default_cron_expression: String,
}

fn default_request_timeout() -> u64 {
    defaults::REQUEST_TIMEOUT_SECONDS
}

fn default_recent_jobs_limit() -> usize {
    defaults::RECENT_JOBS_LIMIT
}

fn default_cron_expression() -> String {
    defaults::CRON_EXPRESSION.to_string()
}
