use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();

    // Load configuration
    let config = cr_console::config::Config::load()?;

    // Initialize logging
    cr_console::logging::init_logging(&config.logging);

    info!("Starting CR Console v{}", env!("CARGO_PKG_VERSION"));

    cli::run(args, config).await
}
