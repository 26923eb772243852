//! Error types for the note store and the scraping endpoints, and their
//! mapping onto HTTP responses.

use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use appunti_types::ErrorEnvelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::wikimedia_client::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Save,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Read => f.write_str("read"),
            StoreOp::Save => f.write_str("save"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreErrorKind {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
#[error("Failed to {op} appunti: {kind}")]
pub struct StoreError {
    pub op: StoreOp,
    pub path: PathBuf,
    #[source]
    pub kind: StoreErrorKind,
}

impl StoreError {
    pub fn new(op: StoreOp, path: &Path, kind: impl Into<StoreErrorKind>) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            kind: kind.into(),
        }
    }

    /// Render as a 500 response. The error chain is only included when
    /// `expose_detail` is set.
    pub fn into_response_with(self, expose_detail: bool) -> Response {
        let envelope = ErrorEnvelope {
            error: self.to_string(),
            path: Some(self.path.display().to_string()),
            stack: expose_detail.then(|| error_chain(&self)),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Missing URL parameter")]
    MissingParameter,
    /// Upstream answered the description fetch with a non-success status
    #[error("Failed to fetch description: {0}")]
    Upstream(#[source] FetchError),
    #[error("Failed to fetch description: {0}")]
    Extraction(#[source] FetchError),
    #[error("Failed to fetch Wikimedia images: {0}")]
    Scrape(#[source] FetchError),
}

impl ScrapeError {
    pub fn description(err: FetchError) -> Self {
        match err {
            FetchError::Status(_) => ScrapeError::Upstream(err),
            FetchError::Transport(_) => ScrapeError::Extraction(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::MissingParameter => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorEnvelope::new(self.to_string()))).into_response()
    }
}

/// One line per error in the source chain, outermost first
fn error_chain(err: &dyn StdError) -> String {
    let mut lines = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    lines.join("\n")
}
