use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named point of interest with resolved coordinates.
///
/// Only the coordinate resolver builds these; they live for a single request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Destination {
    pub fn new(name: impl Into<String>, position: &GeoPosition) -> Self {
        Self {
            name: name.into(),
            lat: position.latitude,
            lng: position.longitude,
        }
    }

    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

impl Display for GeoPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.latitude, self.longitude)
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.position())
    }
}
