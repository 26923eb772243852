//! Axum route handlers for the Appunti HTTP API.

use crate::config::{Config, VERSION};
use crate::error::ScrapeError;
use crate::extract;
use crate::store::NoteStore;
use crate::wikimedia_client::WikimediaClient;
use appunti_types::*;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: NoteStore,
    pub wikimedia: WikimediaClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let wikimedia = WikimediaClient::new(&config.user_agent)?;
        let store = NoteStore::new(config.read_path.clone(), config.write_path.clone());
        Ok(Self {
            config,
            store,
            wikimedia,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/api/getAppunti", get(get_appunti))
        .route("/api/saveAppunti", post(save_appunti))
        .route("/api/wikimedia-description", get(wikimedia_description))
        .route("/api/wikimedia-images", get(wikimedia_images))
        .route("/api/health", get(health))
        .with_state(state)
        .layer(cors)
}

// GET /api/getAppunti
pub async fn get_appunti(State(state): State<Arc<AppState>>) -> Response {
    log::info!("GET request received for /api/getAppunti");

    match state.store.load().await {
        Ok(doc) => {
            log::info!("Appunti read successfully");
            Json(doc).into_response()
        }
        Err(e) => {
            log::error!("Error reading appunti: {}", e);
            e.into_response_with(state.config.expose_error_detail)
        }
    }
}

// POST /api/saveAppunti
//
// The body is taken raw so malformed JSON reports through the store error
// envelope instead of the extractor's rejection.
pub async fn save_appunti(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    log::info!("POST request received for /api/saveAppunti");

    match state.store.save_body(&body).await {
        Ok(()) => {
            log::info!("Appunti written to {}", state.store.write_path().display());
            Json(SaveResponse::ok()).into_response()
        }
        Err(e) => {
            log::error!("Error saving appunti: {}", e);
            e.into_response_with(state.config.expose_error_detail)
        }
    }
}

// GET /api/wikimedia-description?url=
pub async fn wikimedia_description(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<DescriptionResponse>, ScrapeError> {
    let url = required_url(query.as_deref())?;
    log::info!("Fetching description from Wikimedia URL: {}", url);

    let html = state.wikimedia.fetch_html(&url).await.map_err(|e| {
        log::error!("Error fetching Wikimedia description: {}", e);
        ScrapeError::description(e)
    })?;

    Ok(Json(DescriptionResponse {
        description: extract::description(&html),
    }))
}

// GET /api/wikimedia-images?url=
pub async fn wikimedia_images(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<ImageRecord>>, ScrapeError> {
    let url = required_url(query.as_deref())?;
    log::info!("Fetching images from Wikimedia URL: {}", url);

    let html = state.wikimedia.fetch_html(&url).await.map_err(|e| {
        log::error!("Error fetching Wikimedia images: {}", e);
        ScrapeError::Scrape(e)
    })?;

    let images = extract::images(&html);
    log::info!("Extracted {} image records", images.len());
    Ok(Json(images))
}

// GET /api/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

/// First `url` value of the query string. Later duplicates are ignored and
/// an empty first value counts as missing.
fn required_url(query: Option<&str>) -> Result<String, ScrapeError> {
    query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|u| !u.is_empty())
        .ok_or(ScrapeError::MissingParameter)
}
