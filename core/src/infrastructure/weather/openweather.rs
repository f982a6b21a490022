use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    weather::{entities::WeatherSnapshot, ports::WeatherProvider},
};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

fn decode_snapshot(body: &str) -> Result<WeatherSnapshot, CoreError> {
    let parsed: OwResponse = serde_json::from_str(body)
        .map_err(|e| CoreError::WeatherProvider(format!("Failed to decode weather response: {e}")))?;

    let primary = parsed.weather.into_iter().next().ok_or_else(|| {
        CoreError::WeatherProvider("Weather response contained no conditions".to_string())
    })?;

    Ok(WeatherSnapshot {
        temperature: parsed.main.temp,
        condition: primary.main,
        description: primary.description,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        feels_like: parsed.main.feels_like,
    })
}

impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, CoreError> {
        let response = self
            .client
            .get(OPENWEATHER_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather API request failed: {}", e);
                CoreError::WeatherProvider(format!("Weather API request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read weather response body: {}", e);
            CoreError::WeatherProvider(format!("Failed to read weather response body: {e}"))
        })?;

        if !status.is_success() {
            // The provider reports failures as {"cod":..., "message":...}.
            let message = serde_json::from_str::<OwErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| body.clone());
            tracing::error!("Weather API error: {} - {}", status, message);
            return Err(CoreError::WeatherProvider(message));
        }

        decode_snapshot(&body)
    }
}
