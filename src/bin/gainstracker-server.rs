// ABOUTME: Server binary starting the Gainstracker nutrition API
// ABOUTME: Loads configuration, initializes logging and the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Gainstracker Server Binary
//!
//! Starts the nutrition API with SQLite persistence and structured logging.

use anyhow::Result;
use clap::Parser;
use gainstracker::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "gainstracker-server")]
#[command(about = "Gainstracker - Nutrition metric and user profile API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Gainstracker API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let server = HttpServer::new(resources);

    server.run(port).await
}
