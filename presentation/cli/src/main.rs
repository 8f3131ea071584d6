use clap::Parser;
use dotenvy::dotenv;

mod command {
    pub mod args;
    pub mod output;
    pub mod run;
}
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod payment_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
}

use command::args::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront command line client
///
/// Drives the storefront view-models from the terminal:
/// - config/: backend, storage and payment-polling settings from the environment
/// - setup/: dependency wiring (stores, HTTP adapters, use cases, view-models)
/// - command/: argument parsing, command dispatch and terminal output
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter; logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config, cli.ephemeral).await?;
    tracing::debug!(
        api = %config.api.base_url,
        ephemeral = cli.ephemeral,
        "Storefront client ready"
    );

    // 5. Run the command
    command::run::execute(cli.command, &container).await
}
