//! Remote test prediction call

use crate::api::{PredictRequest, PredictResponse};
use crate::error::{Error, Result};
use crate::http::Api;
use reqwest::Method;

impl Api {
    /// Ask the service which of the candidate test files are relevant.
    ///
    /// Any failure here (non-200 status, transport error, malformed body)
    /// is surfaced to the caller, which is expected to fall back to the
    /// unfiltered candidate list.
    pub async fn predict(&self, body: &PredictRequest) -> Result<PredictResponse> {
        let resp = self
            .send(self.request(Method::POST, "/api/v1/predict")?.json(body))
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::unexpected_status("predict", status));
        }

        resp.json()
            .await
            .map_err(|e| Error::decode("predict", e.to_string()))
    }
}
