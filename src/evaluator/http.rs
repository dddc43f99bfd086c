//! HTTP guess evaluator
//!
//! Talks to the game backend:
//! - `POST /api/guess` with `{"guess": "CRANE"}` → `{"result": ["correct", ...]}`
//! - `GET /api/health` → `{"ok": true}`
//!
//! Non-success responses may carry a `{"detail": "..."}` body; a string
//! detail becomes the toast text.

use super::{EvaluateError, GuessEvaluator};
use crate::core::LetterStatus;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

#[derive(Debug, Serialize)]
struct GuessRequest<'a> {
    guess: &'a str,
}

#[derive(Debug, Deserialize)]
struct GuessResponse {
    result: Vec<LetterStatus>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    ok: bool,
}

/// Evaluator backed by the game server's REST API
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEvaluator {
    /// Create an evaluator for the server at `base_url`
    ///
    /// A trailing slash on the URL is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create an evaluator sharing an existing `reqwest::Client`
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe `GET /api/health`
    ///
    /// # Errors
    ///
    /// Returns `EvaluateError` if the server is unreachable, answers with a
    /// non-success status, or does not report `{"ok": true}`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn health(&self) -> Result<(), EvaluateError> {
        let response = self
            .client
            .get(self.endpoint("/api/health"))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(EvaluateError::rejected(status.as_u16(), detail_from_body(&body)));
        }

        match serde_json::from_slice::<HealthResponse>(&body) {
            Ok(HealthResponse { ok: true }) => Ok(()),
            Ok(HealthResponse { ok: false }) => {
                Err(EvaluateError::malformed("server reported ok=false"))
            }
            Err(e) => Err(EvaluateError::malformed(e.to_string())),
        }
    }
}

#[async_trait]
impl GuessEvaluator for HttpEvaluator {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn evaluate(&self, guess: &str) -> Result<Vec<LetterStatus>, EvaluateError> {
        debug!("Posting guess");
        let response = self
            .client
            .post(self.endpoint("/api/guess"))
            .json(&GuessRequest { guess })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        interpret_guess_response(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> EvaluateError {
    warn!(error = %err, "Evaluator request failed");
    EvaluateError::Transport {
        message: err.to_string(),
    }
}

/// Map a raw `/api/guess` response onto statuses or an error
fn interpret_guess_response(
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<LetterStatus>, EvaluateError> {
    if !status.is_success() {
        let detail = detail_from_body(body);
        debug!(status = status.as_u16(), ?detail, "Guess rejected");
        return Err(EvaluateError::rejected(status.as_u16(), detail));
    }

    serde_json::from_slice::<GuessResponse>(body)
        .map(|r| r.result)
        .map_err(|e| EvaluateError::malformed(e.to_string()))
}

/// Best-effort extraction of a string `detail` field
///
/// Validation errors carry a list under `detail`; those fall back to the
/// generic message.
fn detail_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::to_owned)
        .filter(|d| !d.trim().is_empty())
}
