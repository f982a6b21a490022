use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, weather::entities::WeatherSnapshot};

/// Outbound port for the weather data provider.
#[cfg_attr(test, mockall::automock)]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for the given coordinates. One network
    /// call per invocation; no retry, no caching.
    fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<WeatherSnapshot, CoreError>> + Send;
}
