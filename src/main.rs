use anyhow::Result;
use clap::{Parser, Subcommand};

mod migrate;
mod server;

/// recipebook - recipe catalog service
#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Recipe catalog with listing, search and CRUD over HTTP", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipebook::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipebook::observability::init_observability(
        "recipebook",
        env!("CARGO_PKG_VERSION"),
        &config,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: recipebook::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting recipebook server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    server::serve(&config, &host, port).await
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: recipebook::Config) -> Result<()> {
    migrate::migrate(&config).await
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: recipebook::Config) -> Result<()> {
    tracing::info!("Resetting database...");
    migrate::reset(&config).await
}
