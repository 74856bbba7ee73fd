// ABOUTME: HTTP server binary for the diet planner API
// ABOUTME: Loads environment configuration, wires resources, and serves axum routes until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner Server Binary
//!
//! Requires `MISTRAL_API_KEY`; exits with an error when it is missing.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use diet_planner::{
    config::environment::ServerConfig, logging, resources::ServerResources, routes,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "diet-planner-server")]
#[command(about = "Diet Planner API - Regional 7-day meal plans and meal nutrition estimates")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }
    config.validate()?;

    info!("Starting Diet Planner API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(&config)?);
    let app = routes::build_router(resources, config.request_timeout());

    let listener = tokio::net::TcpListener::bind((config.http_host.as_str(), config.http_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.http_host, config.http_port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Diet Planner API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal"),
        () = terminate => info!("Received SIGTERM signal"),
    }

    info!("Starting graceful shutdown...");
}
