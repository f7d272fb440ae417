//! Client configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! url = "https://search.internal:9200"
//! username = "elastic"
//! password = "changeme"
//! timeout_secs = 30
//! default_index = "logs-*"
//! ```
//!
//! `ELASTICSEARCH_URL`, `ELASTICSEARCH_USERNAME`, `ELASTICSEARCH_PASSWORD` and
//! `ELASTICSEARCH_API_KEY` override file values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

pub const ENV_URL: &str = "ELASTICSEARCH_URL";
pub const ENV_USERNAME: &str = "ELASTICSEARCH_USERNAME";
pub const ENV_PASSWORD: &str = "ELASTICSEARCH_PASSWORD";
pub const ENV_API_KEY: &str = "ELASTICSEARCH_API_KEY";

/// Connection settings for [`Client`](crate::Client)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Base64 encoded API key, sent as `Authorization: ApiKey <key>`
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overall request timeout (default: 30s, 0 disables it)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Index targeted when a request names none
    #[serde(default)]
    pub default_index: Option<String>,
}

fn default_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: None,
            password: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            default_index: None,
        }
    }
}

/// How the client authenticates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic {
        username: String,
        password: Option<String>,
    },
    ApiKey(String),
}

impl ClientConfig {
    /// Defaults overridden by the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load config from a TOML file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: ClientConfig = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Load config from file path, falling back to the environment alone
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::from_env())
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(ENV_URL) {
            self.url = url;
        }
        if let Some(username) = non_empty(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = non_empty(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(api_key) = non_empty(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.url.trim())?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base URL: {}", self.url)));
        }
        Ok(url)
    }

    /// API key wins over basic auth when both are configured
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(key) = &self.api_key {
            return Some(Credentials::ApiKey(key.clone()));
        }
        self.username.as_ref().map(|username| Credentials::Basic {
            username: username.clone(),
            password: self.password.clone(),
        })
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.credentials().is_none());
        assert!(config.default_index.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
url = "https://es.example.com:9243"
username = "elastic"
"#,
        )
        .unwrap();
        assert_eq!(config.url, "https://es.example.com:9243");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.credentials(),
            Some(Credentials::Basic {
                username: "elastic".into(),
                password: None
            })
        );
    }

    #[test]
    fn test_api_key_preferred() {
        let config = ClientConfig {
            username: Some("elastic".into()),
            password: Some("secret".into()),
            api_key: Some("a2V5OnNlY3JldA==".into()),
            ..Default::default()
        };
        assert_eq!(
            config.credentials(),
            Some(Credentials::ApiKey("a2V5OnNlY3JldA==".into()))
        );
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let env: HashMap<&str, &str> = [
            (ENV_URL, "http://es-node:9200"),
            (ENV_USERNAME, "  "),
            (ENV_API_KEY, "key"),
        ]
        .into_iter()
        .collect();
        let mut config = ClientConfig {
            username: Some("from-file".into()),
            ..Default::default()
        };
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.url, "http://es-node:9200");
        assert_eq!(config.username.as_deref(), Some("from-file"));
        assert_eq!(config.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_base_url_validation() {
        let ok = ClientConfig::default();
        assert_eq!(ok.base_url().unwrap().as_str(), "http://localhost:9200/");

        let bad = ClientConfig {
            url: "mailto:ops@example.com".into(),
            ..Default::default()
        };
        assert!(matches!(bad.base_url(), Err(Error::Config(_))));

        let garbage = ClientConfig {
            url: "::not a url".into(),
            ..Default::default()
        };
        assert!(matches!(garbage.base_url(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("esquery.toml");
        let config = ClientConfig {
            url: "http://127.0.0.1:9201".into(),
            timeout_secs: 5,
            default_index: Some("products".into()),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let mut loaded: ClientConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        loaded.apply_overrides(|_| None);
        assert_eq!(loaded.url, "http://127.0.0.1:9201");
        assert_eq!(loaded.timeout_secs, 5);
        assert_eq!(loaded.default_index.as_deref(), Some("products"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "url = [").unwrap();
        assert!(matches!(ClientConfig::load(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(matches!(ClientConfig::load(&path), Err(Error::Io(_))));
    }
}
