pub mod core;
pub mod google;
#[cfg(test)]
pub(crate) mod mock;

pub use self::core::{GeocoderProvider, GeocoderRequest};
pub use google::GoogleGeocoderProvider;
