use anyhow::{Context, Result};
use config::{Environment, Map};
use serde::Deserialize;
use std::time::Duration;

/// Runtime settings, read from the environment once at startup.
///
/// API keys are optional here; a provider without its key fails each call
/// instead of stopping the server from starting.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    #[serde(default)]
    pub google_maps_api_key: Option<String>,
    /// Older deployments spell the key without the S.
    #[serde(default)]
    google_map_api_key: Option<String>,
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_openai_temperature() -> f32 {
    0.7
}

fn default_geocoder_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Loads from the given variables instead of the process environment.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self> {
        Self::load(Some(vars))
    }

    fn load(source: Option<Map<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(Environment::default().try_parsing(true).source(source))
            .build()
            .context("Failed to build configuration")?;

        let mut config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if config.google_maps_api_key.is_none() {
            config.google_maps_api_key = config.google_map_api_key.take();
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        Config::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.openai_temperature, 0.7);
        assert_eq!(config.google_maps_api_key, None);
        assert_eq!(
            config.geocoder_url,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_TEMPERATURE", "0.2"),
            ("GOOGLE_MAPS_API_KEY", "maps-key"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_temperature, 0.2);
        assert_eq!(config.google_maps_api_key.as_deref(), Some("maps-key"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_legacy_maps_key() {
        let config = config_from(&[("GOOGLE_MAP_API_KEY", "old-key")]).unwrap();
        assert_eq!(config.google_maps_api_key.as_deref(), Some("old-key"));
    }

    #[test]
    fn test_current_maps_key_wins() {
        let config = config_from(&[
            ("GOOGLE_MAP_API_KEY", "old-key"),
            ("GOOGLE_MAPS_API_KEY", "new-key"),
        ])
        .unwrap();
        assert_eq!(config.google_maps_api_key.as_deref(), Some("new-key"));
    }

    #[test]
    fn test_bad_port() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }
}
