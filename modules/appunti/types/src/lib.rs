//! Wire types for the Appunti service and its HTTP clients.

use serde::{Deserialize, Serialize};

/// Fallback returned when a page carries no English description block.
pub const NO_DESCRIPTION: &str = "No description available.";

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
}

impl SaveResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

/// Error body returned by every endpoint on failure.
///
/// `path` is only set by the note store endpoints. `stack` carries the
/// rendered error chain and is only present when the service runs with
/// error detail exposure enabled.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            path: None,
            stack: None,
        }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// One entry of a Wikimedia media search result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub title: String,
    /// Link to the file page, when the result carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}
