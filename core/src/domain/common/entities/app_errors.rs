use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Weather provider error: {0}")]
    WeatherProvider(String),

    #[error("Invalid time format: {0}")]
    TimeParse(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}
