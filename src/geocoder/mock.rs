use crate::{geocoder::GeocoderProvider, utils::maptypes::GeoPosition};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Answers from a fixed table and remembers every address it was asked for.
#[derive(Clone, Debug, Default)]
pub struct MockGeocoderProvider {
    responses: HashMap<String, GeoPosition>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockGeocoderProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, input: &str, latitude: f64, longitude: f64) -> Self {
        self.responses.insert(
            input.to_string(),
            GeoPosition {
                latitude,
                longitude,
            },
        );
        self
    }

    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait::async_trait]
impl GeocoderProvider for MockGeocoderProvider {
    async fn geocode(&self, input: &str) -> Result<GeoPosition> {
        self.lookups.write().await.push(input.to_string());

        self.responses
            .get(input)
            .cloned()
            .ok_or_else(|| anyhow!("ZERO_RESULTS"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[allow(clippy::float_cmp)]
    async fn test_mock_geocoder() {
        let geocoder = MockGeocoderProvider::new().with_position("Tokyo", 35.6762, 139.6503);

        let position = geocoder.geocode("Tokyo").await.unwrap();
        assert_eq!(position.latitude, 35.6762);
        assert_eq!(position.longitude, 139.6503);

        assert!(geocoder.geocode("Unknown Location").await.is_err());
        assert_eq!(
            geocoder.lookups().await,
            vec!["Tokyo".to_string(), "Unknown Location".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clones_share_lookups() {
        let geocoder = MockGeocoderProvider::new();
        let clone = geocoder.clone();

        let _ = clone.geocode("London").await;
        assert_eq!(geocoder.lookups().await, vec!["London".to_string()]);
    }
}
