use crate::domain::{recommendation::ports::LlmClient, weather::ports::WeatherProvider};

/// Aggregate service holding the outbound adapters. Constructed once by the
/// process entry point and shared through the application state; handlers
/// never reach for the adapters directly.
#[derive(Debug, Clone)]
pub struct Service<W, L>
where
    W: WeatherProvider,
    L: LlmClient,
{
    pub weather_provider: W,
    pub llm_client: L,
}

impl<W, L> Service<W, L>
where
    W: WeatherProvider,
    L: LlmClient,
{
    pub fn new(weather_provider: W, llm_client: L) -> Self {
        Self {
            weather_provider,
            llm_client,
        }
    }
}
