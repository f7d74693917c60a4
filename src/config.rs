use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default config file locations, first existing one wins
pub const CONFIG_PATHS: [&str; 2] = ["/etc/typetest/typetest.toml", "./typetest.toml"];

/// Limits applied by the in-memory executor, mirroring the table's DDL
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// VARCHAR(n), measured in bytes
    #[serde(default = "default_max_varchar_len")]
    pub max_varchar_len: usize,
    /// VARBINARY(n)
    #[serde(default = "default_max_varbinary_len")]
    pub max_varbinary_len: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub executor: ExecutorConfig,
}

fn default_max_varchar_len() -> usize { 100 }
fn default_max_varbinary_len() -> usize { 4 }
fn default_log_filter() -> String { "info".to_string() }

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_varchar_len: default_max_varchar_len(),
            max_varbinary_len: default_max_varbinary_len(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            executor: ExecutorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration with priority: ENV > config file > defaults.
    ///
    /// An explicit `path` must exist; otherwise the first of [`CONFIG_PATHS`]
    /// that exists is used, if any.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(found) = CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists()) {
                    builder = builder.add_source(File::from(found));
                }
            }
        }

        builder.add_source(env).build()?.try_deserialize()
    }
}

/// TYPETEST_LOG_FILTER, TYPETEST_EXECUTOR__MAX_VARCHAR_LEN, ...
fn environment() -> Environment {
    Environment::with_prefix("TYPETEST")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
