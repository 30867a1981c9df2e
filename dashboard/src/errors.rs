//! Error types for the crawler dashboard
//!
//! Provides structured errors for configuration, admin API calls and form handling.

use crate::cron::CronError;
use std::fmt;

/// Main error type for the dashboard
#[derive(Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    Config(ConfigError),

    /// Admin API communication errors
    Api(ApiError),

    /// Form input errors
    Form(FormError),

    /// Other errors with context
    Other(String),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

/// Admin API error variants
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    RequestFailed { url: String, reason: String },

    /// Backend answered with a non-success status
    Status { status: u16, detail: String },

    /// Response body did not match the expected shape
    InvalidResponse { url: String, reason: String },
}

/// Form input error variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Cron expression rejected before submission
    InvalidCron(CronError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Config(e) => write!(f, "Configuration error: {}", e),
            DashboardError::Api(e) => write!(f, "API error: {}", e),
            DashboardError::Form(e) => write!(f, "{}", e),
            DashboardError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            ApiError::Status { status, detail } => {
                write!(f, "오류: {} (HTTP {})", detail, status)
            }
            ApiError::InvalidResponse { url, reason } => {
                write!(f, "Invalid response from {}: {}", url, reason)
            }
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidCron(e) => write!(f, "크론 표현식 오류: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ApiError {}
impl std::error::Error for FormError {}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::Other(err.to_string())
    }
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

impl From<ApiError> for DashboardError {
    fn from(err: ApiError) -> Self {
        DashboardError::Api(err)
    }
}

impl From<FormError> for DashboardError {
    fn from(err: FormError) -> Self {
        DashboardError::Form(err)
    }
}

impl From<CronError> for FormError {
    fn from(err: CronError) -> Self {
        FormError::InvalidCron(err)
    }
}
