// File: dashboard/src/config/manager.rs
use super::DashboardConfig;
use crate::cron::CronExpressionAnalyzer;
use crate::errors::ConfigError;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<DashboardConfig>,
}

impl ConfigManager {
    pub async fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load_configuration(config_path.as_ref()).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<DashboardConfig> {
        self.current_config.clone()
    }

    async fn load_configuration(config_path: &Path) -> Result<DashboardConfig> {
        debug!("Loading dashboard config: {}", config_path.display());

        let content = fs::read_to_string(config_path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config = Self::parse(&content)?;

        info!(
            "Loaded dashboard config: api_url={}, timeout={}s, default cron '{}'",
            config.api_url, config.request_timeout_seconds, config.default_cron_expression
        );

        Ok(config)
    }

    /// Parse and validate config file contents.
    pub fn parse(content: &str) -> Result<DashboardConfig, ConfigError> {
        let mut config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                reason: e.to_string(),
            })?;

        config.api_url = config.api_url.trim().trim_end_matches('/').to_string();
        Self::validate(&config)?;

        Ok(config)
    }

    fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
        if config.api_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if config.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_seconds".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if let Err(e) = CronExpressionAnalyzer::check(&config.default_cron_expression) {
            return Err(ConfigError::InvalidValue {
                field: "default_cron_expression".to_string(),
                reason: e.to_string(),
            });
        }

        Ok(())
    }
}
