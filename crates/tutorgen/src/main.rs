//! Tutorgen CLI - Educational ML content generator.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tutorgen::TutorConfig;
use tutorgen::cancellation;
use tutorgen::cli::{Cli, Commands, handle_explain_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TutorConfig::load(cli.config.as_deref())?;

    let (source, cancel) = cancellation();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, cancelling");
                source.cancel();
            }
            Err(e) => error!(error = %e, "Failed to install CTRL+C signal handler"),
        }
    });

    match &cli.command {
        Commands::Explain(args) => handle_explain_command(&config, args, &cancel).await?,
    }

    Ok(())
}
