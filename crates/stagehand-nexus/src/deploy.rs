//! Uploading artifact files into an open staging repository.

use std::path::Path;

use reqwest::Client;

use stagehand_core::credentials::Credentials;
use stagehand_util::errors::{StagehandError, StagehandResult};

use crate::auth;

/// Upload one file's raw bytes to a staging deploy URL.
///
/// No retries: the first failure aborts the batch and files uploaded
/// before it stay in the staging repository.
pub async fn upload_file(
    client: &Client,
    credentials: &Credentials,
    url: &str,
    path: &Path,
) -> StagehandResult<()> {
    let bytes = std::fs::read(path).map_err(StagehandError::Io)?;
    tracing::debug!(%url, size = bytes.len(), "uploading artifact");

    let mut req = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
        .body(bytes);
    req = auth::apply_auth(req, credentials);

    let resp = req.send().await.map_err(|e| StagehandError::Network {
        message: format!("Request to {url} failed: {e}"),
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(StagehandError::Remote {
            message: format!("HTTP {status} uploading to {url}"),
        }
        .into());
    }

    Ok(())
}
