use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub pokeapi: PokeapiConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PokeapiConfig {
    pub base_url: String,
    pub timeout: u32,
    pub page_size: u32,
}

impl Config {
    pub fn load() -> Result<Config, AppError> {
        let config_str = include_str!("../config/config.toml");
        toml::from_str(config_str).map_err(|e| {
            tracing::error!("Failed to parse config.toml: {}", e);
            AppError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = Config::load().unwrap();
        assert!(config.pokeapi.base_url.starts_with("https://"));
        assert_eq!(config.pokeapi.page_size, 20);
    }
}
