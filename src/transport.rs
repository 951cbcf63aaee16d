/// Blocking HTTP transport with bounded fixed-delay retry.
///
/// The upstream Envista endpoints fail transiently at non-trivial
/// rates, so every GET/POST is wrapped in `with_retry`: up to
/// `max_attempts` tries with a fixed sleep between them, and the final
/// failure surfaced verbatim when the budget is exhausted. The retry
/// loop is an ordinary function rather than middleware so the attempt
/// budget and delay stay visible, configurable, and unit-testable.

use std::thread;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::model::EnvistaError;

// ---------------------------------------------------------------------------
// Retry policy
// ---------------------------------------------------------------------------

/// Bounded fixed-delay retry policy applied to every HTTP round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (so 1 means no retries).
    pub max_attempts: u32,
    /// Sleep between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 10,
            delay: Duration::from_secs(10),
        }
    }
}

/// Runs `op` until it succeeds or the attempt budget is spent.
///
/// Between attempts the calling thread sleeps for `policy.delay`. On
/// exhaustion the error from the *final* attempt is returned unchanged
/// — no wrapping that would lose the original status or reason.
pub fn with_retry<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, EnvistaError>
where
    F: FnMut() -> Result<T, EnvistaError>,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_err = None;

    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt < attempts {
                    eprintln!(
                        "Warning: request attempt {}/{} failed ({}), retrying",
                        attempt, attempts, e
                    );
                    thread::sleep(policy.delay);
                }
                last_err = Some(e);
            }
        }
    }

    // attempts >= 1, so last_err is always set here
    Err(last_err.unwrap_or_else(|| EnvistaError::NetworkError("no attempts made".to_string())))
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// HTTP client wrapper: one blocking reqwest client plus the retry
/// policy, shared by every catalog/data/auth request.
pub struct Transport {
    client: reqwest::blocking::Client,
    policy: RetryPolicy,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Transport, EnvistaError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| EnvistaError::NetworkError(format!("client construction: {}", e)))?;

        Ok(Transport {
            client,
            policy: RetryPolicy {
                max_attempts: config.max_attempts,
                delay: Duration::from_secs(config.retry_delay_secs),
            },
        })
    }

    /// Issues a GET with the given headers, retrying per the policy.
    /// Returns the response body on the first 2xx status.
    pub fn get(&self, url: &str, headers: &[(String, String)]) -> Result<String, EnvistaError> {
        with_retry(&self.policy, || {
            let mut request = self.client.get(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            Self::execute(request)
        })
    }

    /// Issues a POST with a JSON body, retrying per the policy. The
    /// Content-Type comes from `headers` (upstream wants the charset
    /// spelled out), so the body is serialized here rather than via
    /// reqwest's `json()` helper.
    pub fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &[(String, String)],
    ) -> Result<String, EnvistaError> {
        let payload = body.to_string();
        with_retry(&self.policy, || {
            let mut request = self.client.post(url).body(payload.clone());
            for (name, value) in headers {
                request = request.header(name, value);
            }
            Self::execute(request)
        })
    }

    /// One attempt: send, promote non-2xx to HttpError, read the body.
    fn execute(request: reqwest::blocking::RequestBuilder) -> Result<String, EnvistaError> {
        let response = request
            .send()
            .map_err(|e| EnvistaError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnvistaError::HttpError {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        response
            .text()
            .map_err(|e| EnvistaError::NetworkError(format!("reading response body: {}", e)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
