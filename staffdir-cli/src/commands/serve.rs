//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;
use staffdir_core::{DirectoryConfig, PageSize};
use staffdir_server::http::{run_server, ServerConfig};
use std::net::SocketAddr;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Employees per page (overrides config/environment)
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: DirectoryConfig) -> Result<()> {
    let page_size = match args.page_size {
        Some(n) => PageSize::new(n).context("Invalid --page-size")?,
        None => config.listing.page_size,
    };

    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.server.bind),
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    tracing::info!("Starting staffdir server on {}", server_config.bind_addr);

    let pool = super::connect(&config, args.database_url).await?;

    // Run server (blocks until shutdown)
    run_server(pool, page_size, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
