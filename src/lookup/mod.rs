//! Drive filename lookup
//!
//! The editor resolves a pasted Drive link to the file's display name so
//! bulk-imported cards get a caption and lesson code for free. The lookup
//! runs server-side because it needs an API key; this module holds the
//! endpoint logic, independent of the HTTP framework serving it.

pub mod bulk;
#[cfg(target_arch = "wasm32")]
pub mod endpoint;
#[cfg(feature = "server")]
pub mod google;
#[cfg(feature = "server")]
pub mod server;

use crate::parse::{is_file_id, strip_extension};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

pub use bulk::{apply_bulk_links, apply_bulk_texts, BulkReport, FilenameSource};

/// Environment variable holding the Drive API key
pub const API_KEY_VAR: &str = "GOOGLE_DRIVE_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFilenameRequest {
    #[serde(default)]
    pub file_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFilenameResponse {
    pub filename: String,
    pub file_id: String,
}

/// Server-side lookup settings
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    pub api_key: Option<String>,
}

impl LookupConfig {
    /// Read the API key; a missing key is reported per request, not here
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());
        Self { api_key }
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
        }
    }
}

/// Failure talking to the Drive metadata API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriveError {
    #[error("Drive API returned status {0}")]
    Status(u16),

    #[error("Drive request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("fileId is required")]
    MissingFileId,

    #[error("API key not configured. Set GOOGLE_DRIVE_API_KEY in the server environment.")]
    MissingApiKey,

    #[error("File not found. Make sure the file exists and is publicly accessible.")]
    NotFound,

    #[error("Access denied. Make sure the file is shared publicly or API key has correct permissions.")]
    AccessDenied,

    #[error("Failed to fetch file info from Google Drive")]
    Upstream(u16),

    #[error("Internal server error")]
    Transport(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl LookupError {
    /// HTTP status for this error
    pub fn status(&self) -> u16 {
        match self {
            LookupError::MissingFileId | LookupError::BadRequest(_) => 400,
            LookupError::AccessDenied => 403,
            LookupError::NotFound => 404,
            LookupError::MissingApiKey | LookupError::Upstream(_) | LookupError::Transport(_) => 500,
        }
    }
}

impl From<DriveError> for LookupError {
    fn from(err: DriveError) -> Self {
        match err {
            DriveError::Status(404) => LookupError::NotFound,
            DriveError::Status(403) => LookupError::AccessDenied,
            DriveError::Status(status) => LookupError::Upstream(status),
            DriveError::Transport(message) => LookupError::Transport(message),
        }
    }
}

/// Drive file metadata
pub trait DriveFiles {
    /// Display name of `file_id`, extension included
    fn file_name(&self, file_id: &str, api_key: &str) -> impl Future<Output = Result<String, DriveError>> + Send;
}

/// Resolve a file id to its display name without extension
pub async fn extract_filename<D: DriveFiles>(
    request: ExtractFilenameRequest,
    config: &LookupConfig,
    drive: &D,
) -> Result<ExtractFilenameResponse, LookupError> {
    let file_id = request
        .file_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(LookupError::MissingFileId)?;
    if !is_file_id(&file_id) {
        log::warn!("rejected malformed file id {:?}", file_id);
        return Err(LookupError::BadRequest("fileId is not a Drive file id".to_string()));
    }

    let Some(api_key) = config.api_key.as_deref() else {
        log::error!("{} is not set", API_KEY_VAR);
        return Err(LookupError::MissingApiKey);
    };

    let name = drive.file_name(&file_id, api_key).await.map_err(|e| {
        log::error!("Drive lookup for {} failed: {}", file_id, e);
        LookupError::from(e)
    })?;

    let filename = strip_extension(&name);
    log::info!("resolved filename for {}: {}", file_id, filename);
    Ok(ExtractFilenameResponse { filename, file_id })
}
