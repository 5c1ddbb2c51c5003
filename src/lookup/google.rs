//! Drive v3 metadata client

use super::{DriveError, DriveFiles};
use serde::Deserialize;

pub const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

#[derive(Debug, Deserialize)]
struct FileMetadata {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Clone, Default)]
pub struct GoogleDriveClient {
    http: reqwest::Client,
}

impl GoogleDriveClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DriveFiles for GoogleDriveClient {
    async fn file_name(&self, file_id: &str, api_key: &str) -> Result<String, DriveError> {
        let url = format!("{}/{}", DRIVE_FILES_URL, file_id);
        let response = self
            .http
            .get(url)
            .query(&[("key", api_key), ("fields", "name")])
            .send()
            .await
            .map_err(|e| DriveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "Google Drive API error");
            return Err(DriveError::Status(status.as_u16()));
        }

        let metadata: FileMetadata = response
            .json()
            .await
            .map_err(|e| DriveError::Transport(e.to_string()))?;
        Ok(metadata.name)
    }
}
