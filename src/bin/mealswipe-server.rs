// ABOUTME: Server binary exposing the recipe swipe API over HTTP
// ABOUTME: Loads configuration, initializes logging, and serves until ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Mealswipe Server Binary
//!
//! Starts the recipe swipe API backed by TheMealDB.

use anyhow::{Context, Result};
use clap::Parser;
use mealswipe_server::{
    config::ServerConfig, context::ServerResources, logging, routes::build_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealswipe-server")]
#[command(about = "Mealswipe - swipe-style recipe discovery backed by TheMealDB")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Mealswipe server");
    info!("{}", config.summary());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let resources = Arc::new(ServerResources::new(config).await?);
    let app = build_router(resources);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("=== Available API Endpoints ===");
    info!("   Current Recipe:  GET  http://{addr}/recipes?ingredients=chicken,rice");
    info!("   Feedback:        POST http://{addr}/feedback");
    info!("   Health:          GET  http://{addr}/health");
    info!("   Readiness:       GET  http://{addr}/ready");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, draining connections");
}
