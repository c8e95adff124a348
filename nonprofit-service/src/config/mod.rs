use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9090;

/// ProPublica Nonprofit Explorer search endpoint.
pub const DEFAULT_PROPUBLICA_BASE_URL: &str =
    "https://projects.propublica.org/nonprofits/api/v2/search.json";

const DEFAULT_PROPUBLICA_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct NonprofitConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub propublica: ProPublicaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProPublicaConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ProPublicaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProPublicaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROPUBLICA_BASE_URL.to_string(),
            timeout_secs: DEFAULT_PROPUBLICA_TIMEOUT_SECS,
        }
    }
}

impl NonprofitConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load_with_port(DEFAULT_PORT)?;

        let timeout_secs = match env::var("PROPUBLICA_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "PROPUBLICA_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?,
            Err(_) => DEFAULT_PROPUBLICA_TIMEOUT_SECS,
        };

        Ok(NonprofitConfig {
            common,
            propublica: ProPublicaConfig {
                base_url: env::var("PROPUBLICA_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_PROPUBLICA_BASE_URL.to_string()),
                timeout_secs,
            },
        })
    }
}
