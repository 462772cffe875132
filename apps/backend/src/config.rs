//! Runtime configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;
use trivia_core::{DateKey, FailurePolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where day files are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Read `<data_dir>/<YYYYMM>/<YYYYMMDD>.txt` from disk.
    Fs,
    /// GET `<base_url>/data/<YYYYMM>/<YYYYMMDD>.txt`.
    Http { base_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub source: SourceConfig,
    pub data_dir: PathBuf,
    pub images_dir: PathBuf,
    pub initial_date: String,
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// Env vars (all optional unless noted):
    /// - HOST, PORT: listen address (`0.0.0.0:3000`)
    /// - DATA_SOURCE: `fs` or `http` (`fs`)
    /// - DATA_BASE_URL: required when DATA_SOURCE is `http`
    /// - DATA_DIR, IMAGES_DIR: static roots (`data`, `images`)
    /// - INITIAL_DATE: date loaded at startup (today, UTC)
    /// - LOAD_FAILURE_POLICY: `reset` or `keep_previous` (`reset`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");

        let port_raw = env_or("PORT", "3000");
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        let source = match env_or("DATA_SOURCE", "fs").as_str() {
            "fs" => SourceConfig::Fs,
            "http" => SourceConfig::Http {
                base_url: std::env::var("DATA_BASE_URL")
                    .map_err(|_| ConfigError::Missing("DATA_BASE_URL"))?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    name: "DATA_SOURCE",
                    value: other.to_string(),
                })
            }
        };

        let policy_raw = env_or("LOAD_FAILURE_POLICY", FailurePolicy::default().as_str());
        let failure_policy =
            FailurePolicy::from_str(&policy_raw).ok_or_else(|| ConfigError::Invalid {
                name: "LOAD_FAILURE_POLICY",
                value: policy_raw.clone(),
            })?;

        Ok(Self {
            host,
            port,
            source,
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            images_dir: PathBuf::from(env_or("IMAGES_DIR", "images")),
            initial_date: std::env::var("INITIAL_DATE")
                .unwrap_or_else(|_| DateKey::today().to_string()),
            failure_policy,
        })
    }

    /// Local defaults rooted at `root`; used by tests and tooling.
    pub fn local(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            source: SourceConfig::Fs,
            data_dir: root.join("data"),
            images_dir: root.join("images"),
            initial_date: DateKey::today().to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_config_roots_static_dirs() {
        let config = Config::local("/srv/trivia");
        assert_eq!(config.data_dir, PathBuf::from("/srv/trivia/data"));
        assert_eq!(config.images_dir, PathBuf::from("/srv/trivia/images"));
        assert_eq!(config.source, SourceConfig::Fs);
        assert_eq!(config.addr(), "127.0.0.1:0");
    }

    #[test]
    fn missing_base_url_message() {
        let error = ConfigError::Missing("DATA_BASE_URL");
        assert_eq!(error.to_string(), "DATA_BASE_URL not set");
    }
}
