//! Wire types for the TestLab REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use testlab_git::GitSummary;

/// Request body for `POST /api/v1/runs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiRunRequest {
    /// User or system that triggered the run
    pub actor_name: String,
    /// CI provider identifier (e.g. `github`)
    pub ci_provider_name: String,
    /// Full git ref
    pub git_ref: String,
    /// Short ref name
    pub git_ref_name: String,
    /// Repository identifier
    pub git_repo: String,
    /// Commit SHA
    pub git_sha: String,
    /// Partition key for parallel jobs
    pub group: String,
    /// Attempt number of this run
    pub run_attempt: u64,
    /// Provider run identifier
    pub run_id: u64,
    /// Provider run number
    pub run_number: u64,
    /// Provider-specific extras
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ci_env: BTreeMap<String, serde_json::Value>,
    /// Start time of the run, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,
}

/// Response body of run creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiRunResponse {
    /// Remote run record identifier
    pub id: String,
}

/// Response body of `POST /api/v1/runs/{id}/files/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFileUpload {
    /// Remote file record identifier
    pub id: String,
    /// Pre-signed URL the archive bytes are PUT to
    pub url: String,
}

/// Upload state of a run file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// The upload has not finished yet
    Pending,
    /// The archive bytes are fully uploaded
    Completed,
}

/// Request body for `PATCH /api/v1/runs/{id}/files/{fileId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunFileInfo {
    /// New upload state
    pub upload_status: UploadStatus,
}

/// Request body for `POST /api/v1/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    /// Descriptor of the current run
    pub ci_run: CiRunRequest,
    /// Diff summary of the current change
    pub git_summary: GitSummary,
    /// Unfiltered candidate test files
    pub test_files: Vec<String>,
}

/// Response body of prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    /// Filtered test files relevant to the change
    pub test_files: Vec<String>,
}
