//! Bounded retry for the people-search request.
//!
//! Only transient conditions are retried: timeouts, connection failures, and
//! 5xx responses. Everything else is returned on the first attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::FacebookError;

/// Upper bound on a single back-off sleep.
const MAX_DELAY_MS: u64 = 30_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`FacebookError::Http`] when the request timed out or could not connect.
/// - [`FacebookError::UnexpectedStatus`] with a 5xx status.
///
/// **Not retriable:**
/// - Any other HTTP client failure (TLS setup, body decoding, redirects).
/// - [`FacebookError::InvalidBaseUrl`] and [`FacebookError::EmptyName`].
pub(crate) fn is_retriable(err: &FacebookError) -> bool {
    match err {
        FacebookError::Http(e) => e.is_timeout() || e.is_connect(),
        FacebookError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        FacebookError::InvalidBaseUrl { .. } | FacebookError::EmptyName { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The n-th retry sleeps `backoff_base_ms * 2^(n-1)` milliseconds with ±25 %
/// jitter, capped at [`MAX_DELAY_MS`].
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, FacebookError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FacebookError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient Facebook request error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
