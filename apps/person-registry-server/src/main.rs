//! Person registry HTTP server.

mod config;
mod logging;
mod server;

use std::path::PathBuf;

use clap::Parser;
use person_registry::PersonRegistry;
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "person-registry-server")]
#[command(about = "REST backend for persons, their addresses and contact infos")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Listen address (overrides `server.bind_addr`)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    info!("Starting person-registry-server");

    let db = server::connect_db(&config.database).await?;
    let module = PersonRegistry::init(
        db,
        &config.person_registry,
        config.database.run_migrations,
    )
    .await?;

    let router = server::build_router(&module, &config.server);
    server::serve(router, &config.server.bind_addr).await?;

    info!("Server stopped");
    Ok(())
}
