mod config;
mod error;
mod geocoder;
mod location_parser;
mod planner;
mod utils;
mod web;

use crate::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    web::start_server(config).await
}
