mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use ridecompare::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    let now = Instant::now();
    let catalog = match args.get(1) {
        Some(path) => match Catalog::from_path(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("Failed to load catalog {path}: {err}");
                std::process::exit(1);
            }
        },
        None => {
            info!("No catalog given, serving the demo catalog");
            Catalog::demo()
        }
    };
    info!("Loaded {} offers in {:?}", catalog.len(), now.elapsed());
    let state = Arc::new(AppState::new(catalog));

    let app = axum::Router::new()
        .route("/estimate", get(api::estimate))
        .route("/rides", get(api::rides))
        .route("/search", get(api::search))
        .route("/locate", get(api::locate))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
