use crate::error::PlannerError;
use crate::utils::maptypes::{Destination, GeoPosition};
use anyhow::Result;
use tracing::{debug, warn};

#[async_trait::async_trait]
pub trait GeocoderProvider: Send + Sync {
    async fn geocode(&self, input: &str) -> Result<GeoPosition>;
}

/// Resolves a list of destination names in order.
///
/// Stops at the first name the provider can't resolve; no partial list is
/// ever returned.
#[derive(Clone, Debug)]
pub struct GeocoderRequest<'a, T>
where
    T: GeocoderProvider,
{
    pub input: &'a [String],
    pub service: &'a T,
}

impl<T> GeocoderRequest<'_, T>
where
    T: GeocoderProvider,
{
    pub async fn geocode(&self) -> Result<Vec<Destination>, PlannerError> {
        let mut destinations = Vec::with_capacity(self.input.len());

        for name in self.input {
            match self.service.geocode(name).await {
                Ok(position) => {
                    let destination = Destination::new(name.as_str(), &position);
                    debug!("Geocoded {}", destination);
                    destinations.push(destination);
                }
                Err(e) => {
                    warn!("Failed to geocode '{}': {:#}", name, e);
                    return Err(PlannerError::GeocodingFailed(name.clone()));
                }
            }
        }

        Ok(destinations)
    }
}
