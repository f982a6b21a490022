use crate::{
    domain::common::{services::Service, ForkcastConfig},
    infrastructure::{llm::openai_client::OpenAiLlmClient, weather::openweather::OpenWeatherClient},
};

pub type ForkcastService = Service<OpenWeatherClient, OpenAiLlmClient>;

/// Wires the concrete outbound adapters into the aggregate service. Called
/// once by the process entry point; handlers receive the result through the
/// application state.
pub fn create_service(config: ForkcastConfig) -> ForkcastService {
    let weather_provider = OpenWeatherClient::new(config.weather.api_key);
    let llm_client = OpenAiLlmClient::new(config.llm.api_key, config.llm.model);

    Service::new(weather_provider, llm_client)
}
