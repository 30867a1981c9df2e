//! This module provides reusable test utilities:
//! - Mock admin API server
//! - Config files in temp directories
//! - Common test data

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_api;
pub mod test_config;
pub mod test_data;

pub use mock_api::MockAdminApi;
pub use test_config::TestConfig;
pub use test_data::*;
