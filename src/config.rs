use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("HOST")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a positive integer"))?,
        };

        tracing::debug!("Server bind: {}", config.bind_addr());
        tracing::debug!("Max body bytes: {}", config.max_body_bytes);

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration shared by the HTTP clients (CLI, exporter, seeder).
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs: u64 = lookup("API_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("API_TIMEOUT_SECS must be a whole number of seconds"))?;

        let config = Self::new(api_url, Duration::from_secs(timeout_secs))?;
        tracing::debug!("API URL: {}", config.api_url);
        Ok(config)
    }

    /// Environment config, with `api_url` taking precedence over `API_URL` when given.
    pub fn from_env_or(api_url: Option<String>) -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        match api_url {
            Some(url) => Self::new(url, config.timeout),
            None => Ok(config),
        }
    }

    /// Validates and normalises a base URL.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let api_url = api_url.into();
        let api_url = api_url.trim().trim_end_matches('/');
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("API_URL must start with http:// or https://");
        }
        Ok(Self {
            api_url: api_url.to_string(),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "99999")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "abc")])).is_err());
    }

    #[test]
    fn test_client_default_url() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_url_trailing_slash_trimmed() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("API_URL", "http://backend:9000/")])).unwrap();
        assert_eq!(config.api_url, "http://backend:9000");
    }

    #[test]
    fn test_client_url_requires_scheme() {
        assert!(ClientConfig::from_lookup(lookup_from(&[("API_URL", "backend:9000")])).is_err());
    }
}
