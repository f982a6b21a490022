use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current conditions at the requested coordinates, in metric units.
/// Fetched once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Primary weather label, verbatim from the provider (e.g. "Clear").
    pub condition: String,
    /// Longer human-readable description (e.g. "clear sky").
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
}
