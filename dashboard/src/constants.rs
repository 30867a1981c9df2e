//! Central place for dashboard defaults and fixed display values
//!
//! Values here mirror what the backend assumes when a field is missing, so the
//! dashboard and backend agree without a round trip.

/// Default configuration values
pub mod defaults {
    /// Config file read when no `--config` is given
    pub const CONFIG_PATH: &str = "config/dashboard.toml";

    /// Cron expression used when a scheduled job form has none
    pub const CRON_EXPRESSION: &str = "0 0 * * *";

    /// Search result limit used when the form value is missing or not a number
    pub const CRAWL_LIMIT: u32 = 50;

    /// Number of jobs shown in the dashboard's "recent jobs" table
    pub const RECENT_JOBS_LIMIT: usize = 5;

    /// Request timeout towards the admin API
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Output format passed to the crawler
    pub const OUTPUT_FORMAT: &str = "json";

    /// Output directory passed to the crawler
    pub const OUTPUT_DIR: &str = "output";
}

/// Placeholder texts for empty tables
pub mod placeholders {
    pub const NO_JOBS: &str = "작업이 없습니다.";
    pub const NO_SCHEDULED_JOBS: &str = "예약된 작업이 없습니다.";
    pub const ALL_SEARCH: &str = "전체 검색";
    pub const NO_TIMESTAMP: &str = "-";
}

/// Form checkbox value submitted by browsers when checked
pub const CHECKBOX_ON: &str = "on";
