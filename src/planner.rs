use crate::error::PlannerError;
use crate::geocoder::{GeocoderProvider, GeocoderRequest};
use crate::location_parser::{ChatCompletionService, LocationParser};
use crate::utils::maptypes::Destination;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const MAX_FIELD_CHARS: usize = 255;

/// Body of `POST /public/search-destination`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TravelPlanRequest {
    pub region: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub destinations: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TravelPlanRequest {
    /// Trims every field and checks the shape rules, returning the cleaned request.
    pub fn validate(self) -> Result<Self, PlannerError> {
        let region = self.region.trim().to_string();
        if region.is_empty() {
            return Err(PlannerError::validation("region is required"));
        }
        if region.chars().count() > MAX_FIELD_CHARS {
            return Err(PlannerError::validation(format!(
                "region must not exceed {MAX_FIELD_CHARS} characters"
            )));
        }

        let mut destinations = Vec::with_capacity(self.destinations.len());
        for (i, destination) in self.destinations.iter().enumerate() {
            let destination = destination.trim();
            if destination.is_empty() {
                return Err(PlannerError::validation(format!(
                    "destinations.{i} must not be empty"
                )));
            }
            if destination.chars().count() > MAX_FIELD_CHARS {
                return Err(PlannerError::validation(format!(
                    "destinations.{i} must not exceed {MAX_FIELD_CHARS} characters"
                )));
            }
            destinations.push(destination.to_string());
        }

        Ok(Self {
            region,
            destinations,
        })
    }
}

/// Runs one request through suggestion and geocoding. Holds no per-request state.
pub struct TravelPlanner<P, G>
where
    P: ChatCompletionService,
    G: GeocoderProvider,
{
    pub chat: P,
    pub geocoder: G,
}

impl<P, G> TravelPlanner<P, G>
where
    P: ChatCompletionService,
    G: GeocoderProvider,
{
    pub fn new(chat: P, geocoder: G) -> Self {
        Self { chat, geocoder }
    }

    /// Caller-supplied names pass through untouched; otherwise ask the model.
    pub async fn resolve_destinations(
        &self,
        region: &str,
        destinations: Vec<String>,
    ) -> Result<Vec<String>, PlannerError> {
        if !destinations.is_empty() {
            return Ok(destinations);
        }

        let parser = LocationParser {
            provider: &self.chat,
            region: region.to_string(),
        };
        let suggestions = parser.parse_locations().await;
        if suggestions.is_empty() {
            warn!("No destinations could be generated for region '{}'", region);
            return Err(PlannerError::DestinationGenerationFailed);
        }

        Ok(suggestions)
    }

    pub async fn plan(&self, request: TravelPlanRequest) -> Result<Vec<Destination>, PlannerError> {
        let names = self
            .resolve_destinations(&request.region, request.destinations)
            .await?;
        info!("Geocoding {} destination(s) for '{}'", names.len(), request.region);

        GeocoderRequest {
            input: &names,
            service: &self.geocoder,
        }
        .geocode()
        .await
    }
}
