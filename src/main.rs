//! randsearch: send each query to a random search engine
//!
//! This is the main entry point for the application.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use randsearch::{
    config::{self, Settings},
    engines::{CatalogLoader, CatalogProvider},
    web::{create_router, AppState},
    QueryRouter, SearchOutcome,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search redirector: random engine per query, or `!shortcut` to pick one
#[derive(Parser)]
#[command(name = "randsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP redirector (default)
    Serve,

    /// Resolve a query and print the target URL
    Resolve {
        /// Search query, e.g. `!gh octocat`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// List the engines in the catalog
    Engines,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::load(cli.config.as_deref())?;
    init_logging(cli.verbose || settings.general.debug);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings).await,
        Commands::Resolve { query } => resolve(settings, &query.join(" ")).await,
        Commands::Engines => list_engines(settings).await,
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn serve(settings: Settings) -> Result<()> {
    info!("Starting randsearch v{}", randsearch::VERSION);
    info!(
        "Instance '{}' reading engines from {}",
        settings.general.instance_name, settings.catalog.source
    );

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(settings)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn resolve(settings: Settings, query: &str) -> Result<()> {
    let loader = CatalogLoader::from_settings(&settings)?;
    let router = QueryRouter::new(Arc::new(loader));

    match router.route(query).await {
        SearchOutcome::Navigate(resolution) => {
            println!("{}", resolution.url);
            Ok(())
        }
        SearchOutcome::Idle(randsearch::router::IdleReason::EmptyQuery) => Ok(()),
        SearchOutcome::Idle(randsearch::router::IdleReason::NoEngines) => {
            bail!("No search engines available")
        }
    }
}

async fn list_engines(settings: Settings) -> Result<()> {
    let loader = CatalogLoader::from_settings(&settings)?;
    let catalog = loader.load().await;

    if catalog.is_empty() {
        bail!("No search engines available from {}", loader.source());
    }

    let width = catalog.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for engine in &catalog {
        if engine.has_shortcut() {
            println!("{:width$}  !{}", engine.name, engine.shortcut, width = width);
        } else {
            println!("{}", engine.name);
        }
    }

    Ok(())
}
