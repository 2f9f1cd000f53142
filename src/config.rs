//! Configuration management for the company lookup service using the prefer crate.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the server binds to.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// Company directory file (None = built-in table).
    pub companies_file: Option<PathBuf>,
    /// Artificial delay before answering a directory hit, in milliseconds.
    pub simulated_latency_ms: u64,
    /// Client request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            companies_file: None,
            simulated_latency_ms: 500,
            request_timeout: 30,
        }
    }
}

impl Settings {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bind address.
    #[serde(default)]
    pub host: Option<String>,
    /// Listen port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Path to a TOML file of `[[company]]` tables.
    #[serde(default)]
    pub companies_file: Option<String>,
    /// Artificial delay for directory hits in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: Option<u64>,
    /// Client request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers company-lookup config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("company-lookup").await {
            Ok(pref_config) => {
                let host: Option<String> = pref_config.get("host").ok();
                let port: Option<u16> = pref_config.get("port").ok();
                let companies_file: Option<String> =
                    pref_config.get("companies_file").ok();
                let simulated_latency_ms: Option<u64> =
                    pref_config.get("simulated_latency_ms").ok();
                let request_timeout: Option<u64> = pref_config.get("request_timeout").ok();

                Config {
                    host,
                    port,
                    companies_file,
                    simulated_latency_ms,
                    request_timeout,
                }
            }
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(ref file) = self.companies_file {
            let path = shellexpand::tilde(file);
            settings.companies_file = Some(PathBuf::from(path.as_ref()));
        }
        if let Some(latency) = self.simulated_latency_ms {
            settings.simulated_latency_ms = latency;
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
    }
}

/// Load settings from configuration (async version).
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.port, 3001);
        assert_eq!(settings.simulated_latency(), Duration::from_millis(500));
        assert!(settings.companies_file.is_none());
    }

    #[test]
    fn test_apply_overrides_only_set_values() {
        let config = Config {
            port: Some(8080),
            companies_file: Some("/srv/companies.toml".to_string()),
            simulated_latency_ms: Some(0),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(
            settings.companies_file,
            Some(PathBuf::from("/srv/companies.toml"))
        );
        assert!(settings.simulated_latency().is_zero());
        assert_eq!(settings.request_timeout, 30);
    }
}
