//! Dashboard config files written to a temp directory

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestConfig {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestConfig {
    /// Write `contents` as `config/dashboard.toml` inside a fresh temp dir
    pub fn write(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        let path = config_dir.join("dashboard.toml");
        fs::write(&path, contents).expect("Failed to write dashboard.toml");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Minimal config pointing at `api_url`
    pub fn for_api(api_url: &str) -> Self {
        Self::write(&format!("api_url = \"{}\"\n", api_url))
    }
}
