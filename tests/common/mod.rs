//! Integration test common infrastructure.
//!
//! Provides a recording host and helpers for loading the plugin against it.

pub mod host;

#[allow(unused_imports)]
pub use host::{Sent, TestHost};

use adminpp::{AdminPlusPlus, Config, Plugin};
use std::sync::Arc;

/// Plugin type driven by the recording host.
#[allow(dead_code)]
pub type TestPlugin = AdminPlusPlus<TestHost>;

/// Load the plugin on a fresh in-memory database.
#[allow(dead_code)]
pub async fn load(host: Arc<TestHost>) -> anyhow::Result<TestPlugin> {
    let config = Config {
        database: adminpp::config::DatabaseConfig {
            path: ":memory:".to_string(),
        },
        ..Config::default()
    };
    load_with(host, &config).await
}

/// Load the plugin with an explicit configuration.
#[allow(dead_code)]
pub async fn load_with(host: Arc<TestHost>, config: &Config) -> anyhow::Result<TestPlugin> {
    Ok(<TestPlugin as Plugin<TestHost>>::load(host, config).await?)
}
