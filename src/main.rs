#![allow(non_snake_case)]

mod cli;

use std::env;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tripPlanner::config::AppConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_else(|e| {
            warn!("Ignoring config file {}: {}", path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };

    cli::cli(config).await;
}
