use clap::Parser;
use forkcast_core::domain::common::{ForkcastConfig, LlmConfig, WeatherConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "forkcast-api", about = "Weather- and mood-aware food recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub weather: WeatherArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix under which all routes are mounted.
    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Comma-separated list of allowed CORS origins.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct WeatherArgs {
    /// OpenWeatherMap API key. Startup fails without it.
    #[arg(long, env = "OPENWEATHERMAP_API_KEY")]
    pub openweathermap_api_key: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// OpenAI API key. Startup fails without it.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    /// Model used for recommendation synthesis.
    #[arg(long, env = "MODEL_NAME", default_value = "gpt-4-turbo-preview")]
    pub model_name: String,
}

impl From<Args> for ForkcastConfig {
    fn from(args: Args) -> Self {
        Self {
            weather: WeatherConfig {
                api_key: args.weather.openweathermap_api_key,
            },
            llm: LlmConfig {
                api_key: args.llm.openai_api_key,
                model: args.llm.model_name,
            },
        }
    }
}
