use crate::geocoder::GeocoderProvider;
use crate::utils::maptypes::GeoPosition;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct GoogleGeocoderProvider {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl GoogleGeocoderProvider {
    pub fn new(client: Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GoogleGeocoderPosition {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct GoogleGeocoderGeometry {
    location: GoogleGeocoderPosition,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct GoogleGeocoderResult {
    geometry: GoogleGeocoderGeometry,
}

#[derive(Deserialize, Clone, Debug)]
struct GoogleGeocoderResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleGeocoderResult>,
    error_message: Option<String>,
}

#[async_trait::async_trait]
impl GeocoderProvider for GoogleGeocoderProvider {
    async fn geocode(&self, input: &str) -> Result<GeoPosition> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GOOGLE_MAPS_API_KEY is not set"))?;

        debug!("Requesting geocode for '{}'", input);
        let res = self
            .client
            .get(&self.url)
            .query(&[("address", input), ("key", api_key)])
            .send()
            .await?
            .error_for_status()?;

        let body = res.json::<GoogleGeocoderResponse>().await?;
        body.into()
    }
}

impl From<GoogleGeocoderResponse> for Result<GeoPosition> {
    fn from(value: GoogleGeocoderResponse) -> Self {
        if value.status != "OK" {
            return Err(match value.error_message {
                Some(message) => anyhow!("Geocoder returned {}: {}", value.status, message),
                None => anyhow!("Geocoder returned {}", value.status),
            });
        }

        // The first hit is taken as-is; Google ranks the best match first.
        if let Some(result) = value.results.first() {
            Ok((&result.geometry.location).into())
        } else {
            Err(anyhow!("Geocoder returned no results"))
        }
    }
}

impl From<&GoogleGeocoderPosition> for GeoPosition {
    fn from(value: &GoogleGeocoderPosition) -> Self {
        Self {
            latitude: value.lat,
            longitude: value.lng,
        }
    }
}
