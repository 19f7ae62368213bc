// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{MemoryError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub index: IndexConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Base URL of the Meilisearch instance, e.g. http://127.0.0.1:7700
    pub url: String,
    /// Index uid holding the memories
    pub index_uid: String,
    pub api_key: Option<String>,
    /// Seconds to wait for the index to report healthy before giving up
    pub ready_timeout_secs: u64,
    /// Poll interval while waiting, in milliseconds
    pub ready_poll_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Maximum number of documents fetched for TF-IDF re-ranking
    pub fetch_limit: usize,
    /// Number of ranked matches reported in TF-IDF mode
    pub top_n: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("MNEMO")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| MemoryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| MemoryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            index: IndexConfig {
                url: "http://127.0.0.1:7700".to_string(),
                index_uid: "memories".to_string(),
                api_key: None,
                ready_timeout_secs: 30,
                ready_poll_ms: 500,
            },
            query: QueryConfig {
                fetch_limit: 1000,
                top_n: 5,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.index.url.is_empty() {
            return Err(MemoryError::Config("index.url must not be empty".to_string()));
        }

        if self.index.index_uid.is_empty() {
            return Err(MemoryError::Config(
                "index.index_uid must not be empty".to_string(),
            ));
        }

        if self.query.fetch_limit == 0 {
            return Err(MemoryError::Config(
                "fetch_limit must be greater than 0".to_string(),
            ));
        }

        if self.query.top_n == 0 {
            return Err(MemoryError::Config(
                "top_n must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.query.fetch_limit, 1000);
        assert_eq!(config.query.top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
[index]
url = "http://localhost:7700"
index_uid = "notes"
ready_timeout_secs = 10
ready_poll_ms = 250

[query]
fetch_limit = 500
top_n = 3
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.index.index_uid, "notes");
        assert_eq!(config.query.fetch_limit, 500);
        assert_eq!(config.query.top_n, 3);
        assert!(config.index.api_key.is_none());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = Config::default_config();
        config.query.fetch_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.query.top_n = 0;
        assert!(config.validate().is_err());
    }
}
