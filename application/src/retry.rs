//! Bounded retry with exponential backoff
//!
//! Wraps one generation call. Transient failures are retried up to the
//! attempt bound with a doubling delay; fatal failures and exhausted
//! retries surface the last error with its classification intact. The
//! wrapper never substitutes empty content for a failure.

use crate::ports::generation::GenerationError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Retry schedule for generation calls
///
/// The delay before attempt `n+1` is `base_delay * 2^(n-1)`, capped at
/// `max_delay`. The schedule is deliberately un-jittered so it stays
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given 1-based failed attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let doubled = self
            .base_delay
            .saturating_mul(1u32 << (attempt - 1).min(16));
        doubled.min(self.max_delay)
    }
}

/// Run a generation call under the retry policy
///
/// `call` is invoked up to `max_attempts` times. Only transient error
/// classes are retried; a fatal class returns immediately after a single
/// call.
pub async fn call_with_retry<T, F, Fut>(policy: &RetryPolicy, mut call: F) -> Result<T, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GenerationError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "Attempt {attempt}/{max_attempts} failed ({}), retrying in {delay:?}",
                    error.class()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_then_success() {
        let calls: Arc<Mutex<Vec<Instant>>> = Arc::new(Mutex::new(Vec::new()));
        let failures_left = Arc::new(AtomicU32::new(2));

        let result = call_with_retry(&fast_policy(5), || {
            let calls = Arc::clone(&calls);
            let failures_left = Arc::clone(&failures_left);
            async move {
                calls.lock().unwrap().push(Instant::now());
                if failures_left.fetch_sub(1, Ordering::SeqCst) > 0 {
                    Err(GenerationError::RateLimited)
                } else {
                    Ok("spoken".to_string())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "spoken");

        // k failures then success means exactly k+1 calls
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 3);

        // inter-call delays strictly increase: 100ms then 200ms
        let first_gap = calls[1] - calls[0];
        let second_gap = calls[2] - calls[1];
        assert_eq!(first_gap, Duration::from_millis(100));
        assert_eq!(second_gap, Duration::from_millis(200));
        assert!(second_gap > first_gap);
    }

    #[tokio::test]
    async fn test_fatal_error_is_not_retried() {
        let calls = AtomicU32::new(0);

        let result: Result<String, _> = call_with_retry(&fast_policy(5), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GenerationError::InvalidAuth) }
        })
        .await;

        assert_eq!(result.unwrap_err(), GenerationError::InvalidAuth);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_preserves_last_error() {
        let calls = AtomicU32::new(0);

        let result: Result<String, _> = call_with_retry(&fast_policy(3), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(GenerationError::ServerError {
                    status: 503,
                    message: "overloaded".to_string(),
                })
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let error = result.unwrap_err();
        assert_eq!(error.class(), "server-error");
    }

    #[test]
    fn test_delay_schedule_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(8),
        };

        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(2), Duration::from_secs(2));
        assert_eq!(policy.delay_after(3), Duration::from_secs(4));
        assert_eq!(policy.delay_after(4), Duration::from_secs(8));
        // capped from here on
        assert_eq!(policy.delay_after(5), Duration::from_secs(8));
    }
}
