pub mod api;
pub mod config;
pub mod constants;
pub mod cron;
pub mod errors;
pub mod forms;
pub mod jobs;
pub mod scheduled;

// Re-export commonly used types
pub use api::AdminApiClient;
pub use config::{ConfigManager, DashboardConfig};
pub use cron::{CronError, CronExpressionAnalyzer, CronField, ValidationResult};
pub use errors::{ApiError, ConfigError, DashboardError, FormError};
pub use forms::{CrawlRequestForm, FormData, ScheduledJobForm};
pub use jobs::{CrawlJob, JobListView, JobParams, JobStats, JobStatus};
pub use scheduled::{ScheduledJob, ScheduledJobListView, ScheduledJobRequest};
