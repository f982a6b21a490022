pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ForkcastConfig {
    pub weather: WeatherConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
}
