//! Retrying HTTP transport with exponential backoff and jitter

use crate::error::{Error, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

/// First backoff interval; doubles after every attempt.
pub const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Default number of attempts per request.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Low-level request execution, abstracted so the retry loop can be tested
/// against scripted responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request attempt.
    async fn execute(&self, req: reqwest::Request) -> Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        reqwest::Client::execute(self, req)
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

type SleepFn = Box<dyn Fn(Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Wraps a [`Transport`] and retries failed attempts.
///
/// Network-level errors and 5xx responses are retried up to `max_retries`
/// times with exponential backoff plus jitter; any response below 500 is
/// terminal. The jitter source is seeded lazily and shared behind a mutex
/// because one transport instance may serve concurrent in-flight requests.
pub struct RetryTransport {
    base: Box<dyn Transport>,
    max_retries: u32,
    sleep: SleepFn,
    rng: Mutex<Option<StdRng>>,
}

impl RetryTransport {
    /// Wrap `base` with the given attempt budget.
    #[must_use]
    pub fn new(base: Box<dyn Transport>, max_retries: u32) -> Self {
        Self {
            base,
            max_retries,
            sleep: Box::new(|d| Box::pin(tokio::time::sleep(d))),
            rng: Mutex::new(None),
        }
    }

    /// Replace the sleep function. Tests use this to observe backoff
    /// durations without waiting for them.
    #[must_use]
    pub fn with_sleep(mut self, sleep: SleepFn) -> Self {
        self.sleep = sleep;
        self
    }

    /// Draw a jitter duration uniformly from `[0, half)`.
    fn jitter(&self, half: Duration) -> Duration {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = guard.get_or_insert_with(StdRng::from_os_rng);

        let max_ms = u64::try_from(half.as_millis()).unwrap_or(u64::MAX);
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.random_range(0..max_ms))
    }

    /// Execute `req`, retrying on transport errors and server errors.
    ///
    /// Exhausting all attempts returns the last transport error if the final
    /// attempt failed at the network level, otherwise a synthesized
    /// retry-exhausted error; callers never see a success value for a failed
    /// request.
    pub async fn execute(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();

        let mut backoff = INITIAL_BACKOFF;
        let mut last_err = None;

        for attempt in 1..=self.max_retries {
            let attempt_req = req
                .try_clone()
                .ok_or_else(|| Error::config("request body is not clonable for retry"))?;

            match self.base.execute(attempt_req).await {
                Err(err) => {
                    // Could be a network error, DNS issue, etc. Retry.
                    info!(%method, path, attempt, error = %err, "request failed with error");
                    last_err = Some(err);
                }
                Ok(resp) if resp.status().as_u16() < 500 => {
                    // Success or any non-5xx code is terminal.
                    return Ok(resp);
                }
                Ok(resp) => {
                    info!(
                        %method,
                        path,
                        attempt,
                        status = resp.status().as_u16(),
                        "request failed with server error"
                    );
                    // Drop the response to release the connection.
                    drop(resp);
                    last_err = None;
                }
            }

            if attempt < self.max_retries {
                let delay = backoff + self.jitter(backoff / 2);
                (self.sleep)(delay).await;
                backoff *= 2;
            }
        }

        Err(last_err.unwrap_or(Error::RetryExhausted {
            attempts: self.max_retries,
        }))
    }
}
