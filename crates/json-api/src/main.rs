//! Promotions JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use promotions_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod config;
mod extensions;
mod healthcheck;
mod index;
mod observability;
mod promotions;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Promotions JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::from_database(&config.database.options()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(router::app_router(
            State::from_app_context(app),
            config.server.static_dir,
        ))
        .await;

    info!("server stopped");
}
