//! Resilient TestLab API client.
//!
//! Wraps the REST API behind typed calls with a retrying transport:
//! idempotent run creation, pre-signed archive upload with completion
//! marking, and the optional test prediction call. All requests carry the
//! static API key header; transient failures are retried with exponential
//! backoff and jitter inside the transport.

pub mod api;
pub mod error;
pub mod http;
mod predict;
pub mod retry;
pub mod upload;

pub use api::{
    CiRunRequest, CiRunResponse, PredictRequest, PredictResponse, RunFileUpload,
    UpdateRunFileInfo, UploadStatus,
};
pub use error::{Error, Result};
pub use http::{Api, HEADER_API_KEY};
pub use retry::{DEFAULT_MAX_RETRIES, INITIAL_BACKOFF, RetryTransport, Transport};
pub use upload::Uploader;
