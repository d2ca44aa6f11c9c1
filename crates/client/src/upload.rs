//! Run creation and archive upload orchestration

use crate::api::{CiRunRequest, CiRunResponse, RunFileUpload, UpdateRunFileInfo, UploadStatus};
use crate::error::{Error, Result};
use crate::http::Api;
use reqwest::Method;
use tracing::{debug, info};

/// Orchestrates idempotent run creation and the three-step file upload.
pub struct Uploader {
    api: Api,
}

impl Uploader {
    /// Create an uploader on top of an authenticated API client.
    #[must_use]
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Create a CI run, or reuse the existing record for this
    /// `(runId, group)` pair.
    ///
    /// The remote service enforces the idempotency key: a 201 means the run
    /// was newly created, a 200 means a retried CI step hit an existing
    /// record. Any other status is fatal.
    pub async fn create_run(&self, body: &CiRunRequest) -> Result<(CiRunResponse, bool)> {
        let resp = self
            .api
            .send(self.api.request(Method::POST, "/api/v1/runs")?.json(body))
            .await?;

        let status = resp.status().as_u16();
        let created = match status {
            200 => false,
            201 => true,
            _ => return Err(Error::unexpected_status("create run", status)),
        };

        let run: CiRunResponse = resp
            .json()
            .await
            .map_err(|e| Error::decode("create run", e.to_string()))?;

        Ok((run, created))
    }

    /// Upload the compressed archive bytes for a run.
    ///
    /// Requests a pre-signed upload slot, PUTs the bytes there, then marks
    /// the file record completed. Any non-success status at any step aborts
    /// the whole upload; retries happen inside the transport, not here.
    pub async fn upload_run_file(&self, run: &CiRunResponse, data: Vec<u8>) -> Result<()> {
        let path = format!("/api/v1/runs/{}/files/upload", run.id);
        let resp = self.api.send(self.api.request(Method::POST, &path)?).await?;

        let status = resp.status().as_u16();
        if status != 201 {
            return Err(Error::unexpected_status("request upload url", status));
        }

        let upload: RunFileUpload = resp
            .json()
            .await
            .map_err(|e| Error::decode("request upload url", e.to_string()))?;

        debug!(file_id = upload.id, url = upload.url, "got run file upload");

        let resp = self.api.send(self.api.put_archive(&upload.url, data)).await?;
        if !resp.status().is_success() {
            return Err(Error::unexpected_status(
                "upload archive",
                resp.status().as_u16(),
            ));
        }

        info!(file_id = upload.id, "upload successful");

        let path = format!("/api/v1/runs/{}/files/{}", run.id, upload.id);
        let body = UpdateRunFileInfo {
            upload_status: UploadStatus::Completed,
        };
        let resp = self
            .api
            .send(self.api.request(Method::PATCH, &path)?.json(&body))
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::unexpected_status("update file info", status));
        }

        Ok(())
    }
}
