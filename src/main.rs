use anyhow::Result;
use tracing_subscriber::EnvFilter;
use utm_builder::config;
use utm_builder::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    config.print_summary();

    server::run(config).await
}
