//! Appunti Service — HTTP backend for the Appunti note-taking app.
//!
//! Serves and saves the note document as JSON, and scrapes descriptions and
//! image listings from Wikimedia pages for the annotation UI.
//!
//! Default: http://127.0.0.1:5174/

mod config;
mod error;
mod extract;
mod routes;
mod store;
mod wikimedia_client;

use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let addr = config.bind_addr();
    if config.expose_error_detail {
        log::warn!("Error responses include full error chains");
    }

    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Reading appunti from {}", state.store.read_path().display());
    log::info!("Saving appunti to {}", state.store.write_path().display());

    let app = routes::router(state);

    log::info!("Appunti Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
