use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use forkcast_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    // Missing required configuration (weather or model API key) aborts here,
    // before anything is bound.
    let args = Arc::new(Args::parse());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = state(args.clone());
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
