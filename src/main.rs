use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use scaffold_gateway::{serve, AnthropicConfig, Commands, Container};

#[derive(Parser)]
#[command(name = "scaffold-gateway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Loaded first so a RUST_LOG from .env reaches the filter below.
    let dotenv_result = dotenvy::dotenv();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = dotenv_result {
        warn!("Could not load .env file: {e}");
    }

    // No degraded mode: a missing API key stops the process here.
    let config = AnthropicConfig::from_env()?;
    let container = Arc::new(Container::new(config));

    match cli.command.unwrap_or_default() {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid bind address {host}:{port}"))?;
            serve(container, addr).await?;
        }

        Commands::Classify { prompt } => {
            let bundle = container.classify_use_case().execute(prompt).await?;
            info!(
                "Resolved bundle with {} prompts and {} UI prompts",
                bundle.prompts().len(),
                bundle.ui_prompts().len()
            );
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
    }

    Ok(())
}
