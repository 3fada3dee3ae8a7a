use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::RetryConfig;
use crate::error::InvokeError;

/// Bounded-retry policy: every error is retried, the backoff doubles each
/// retry starting at one time-unit and caps at `max_delay_ms`.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay_ms: cfg.base_delay_ms,
            max_delay_ms: cfg.max_delay_ms,
        }
    }
}

impl RetryPolicy {
    /// Wait inserted before retry `retry_index` (0-based): the pause between
    /// attempt N and attempt N+1 is `delay_before_retry(N - 1)`.
    pub fn delay_before_retry(&self, retry_index: usize) -> Duration {
        let ms = self
            .base_delay_ms
            .saturating_mul(1u64 << retry_index.min(16))
            .min(self.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Drives `op` until it succeeds or `max_attempts` is reached. The last
    /// attempt's error is wrapped in `RetryExhausted` so the caller can
    /// still unwrap the real cause.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, InvokeError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, InvokeError>>,
    {
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            match op().await {
                Ok(v) => return Ok(v),
                Err(err) if attempt >= self.max_attempts => {
                    return Err(InvokeError::RetryExhausted {
                        attempts: attempt,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        error = %err,
                        "attempt failed, backing off before retry"
                    );
                    sleep(self.delay_before_retry(attempt - 1)).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use pretty_assertions::assert_eq;

    use super::*;

    fn fast_policy(max_attempts: usize) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay_ms: 10,
            max_delay_ms: 100,
        }
    }

    #[test]
    fn backoff_doubles_from_one_unit_and_caps_at_ten() {
        // Default units: 1s base, 10s cap.
        let policy = RetryPolicy::from(&RetryConfig::default());
        let delays: Vec<u64> = (0..6)
            .map(|i| policy.delay_before_retry(i).as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![1_000, 2_000, 4_000, 8_000, 10_000, 10_000]);
    }

    #[test]
    fn zero_configured_attempts_still_runs_once() {
        let policy = RetryPolicy::from(&RetryConfig {
            max_attempts: 0,
            ..RetryConfig::default()
        });
        assert_eq!(policy.max_attempts, 1);
    }

    #[tokio::test]
    async fn two_failures_then_success_takes_exactly_three_attempts() {
        let calls = AtomicUsize::new(0);
        let result = fast_policy(3)
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err(InvokeError::Api {
                            status: 500,
                            body: format!("attempt {n} down"),
                        })
                    } else {
                        Ok("generated")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "generated");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhaustion_wraps_the_last_attempts_error() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), _> = fast_policy(3)
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    Err(InvokeError::Api {
                        status: 500,
                        body: format!("attempt {n} down"),
                    })
                }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), "RetryExhausted");
        let terminal = err.terminal_cause();
        assert_eq!(terminal.kind(), "ApiError");
        assert!(terminal.to_string().contains("attempt 3 down"));
    }

    #[tokio::test]
    async fn retries_are_spaced_by_the_exponential_schedule() {
        // base 10ms: waits of 10ms then 20ms, so three attempts take >= 30ms.
        let start = Instant::now();
        let result: Result<(), _> = fast_policy(3)
            .run(|| async {
                Err(InvokeError::Api {
                    status: 503,
                    body: "down".into(),
                })
            })
            .await;

        assert!(result.is_err());
        assert!(
            start.elapsed() >= Duration::from_millis(30),
            "elapsed {:?} shorter than the backoff schedule",
            start.elapsed()
        );
    }

    #[tokio::test]
    async fn success_on_first_attempt_makes_exactly_one_call() {
        let calls = AtomicUsize::new(0);
        let result = fast_policy(3)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(42) }
            })
            .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
