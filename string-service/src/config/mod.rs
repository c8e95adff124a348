use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct StringConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl StringConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(StringConfig {
            common: core_config::Config::load_with_port(DEFAULT_PORT)?,
        })
    }
}
