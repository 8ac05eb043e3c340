//! HubApi - PeopleHub HR Backend
//!
//! HTTP service exposing the PeopleHub REST and GraphQL surfaces. Feature
//! modules are assembled into one application behind an entry adapter that
//! owns the mount root.

mod app;
mod composition;
mod config;
mod dto;
mod entry;
mod error;
mod extract;
mod graphql;
mod handlers;
mod modules;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::LazyApplication;
use crate::config::{AppConfig, LogFormat};
use crate::entry::EntryAdapter;

fn init_tracing(format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing before anything else logs
    init_tracing(&LogFormat::from_env().context("invalid configuration")?);

    let config = AppConfig::from_env().context("invalid configuration")?;

    info!("Starting PeopleHub API");

    let addr = config.bind_addr();
    let adapter = EntryAdapter::new(config.mount_root.clone());
    let lazy = LazyApplication::new(config);

    // A wiring error is fatal before the listener opens
    let application: Arc<_> = lazy
        .get()
        .await
        .context("failed to assemble the application")?;

    info!(
        addr = %addr,
        modules = ?application.modules(),
        mount_root = %adapter.mount_root(),
        "Starting HTTP server"
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, adapter.into_router(application)).await?;

    Ok(())
}
