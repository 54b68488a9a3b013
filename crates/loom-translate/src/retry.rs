//! Retry timing for translation requests

use rand::Rng;
use std::time::Duration;

/// How a worker paces and retries its requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per text before giving up
    pub max_retries: u32,
    /// Backoff base; attempt `n` waits `base * 2^n` plus jitter
    pub base_delay: Duration,
    /// Upper bound of the random jitter added to each backoff
    pub jitter: Duration,
    /// Random delay range slept before every request
    pub pre_request: (Duration, Duration),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            jitter: Duration::from_millis(1000),
            pre_request: (Duration::from_millis(500), Duration::from_millis(1500)),
        }
    }
}

impl RetryPolicy {
    /// No sleeping at all; for tests and local translators
    pub fn immediate() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::ZERO,
            jitter: Duration::ZERO,
            pre_request: (Duration::ZERO, Duration::ZERO),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before retrying after failed attempt `attempt` (0-based)
    pub fn backoff<R: Rng + ?Sized>(&self, attempt: u32, rng: &mut R) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let exp = base_ms.saturating_mul(1u64 << attempt.min(16));
        Duration::from_millis(exp.saturating_add(random_ms(rng, 0, self.jitter)))
    }

    /// Delay slept before a request is sent
    pub fn pre_request_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (min, max) = self.pre_request;
        let min_ms = min.as_millis() as u64;
        Duration::from_millis(random_ms(rng, min_ms, max))
    }
}

fn random_ms<R: Rng + ?Sized>(rng: &mut R, min_ms: u64, max: Duration) -> u64 {
    let max_ms = max.as_millis() as u64;
    if max_ms <= min_ms {
        return min_ms;
    }
    rng.gen_range(min_ms..=max_ms)
}

/// Whether a "successful" response is really an error page returned as text
pub fn looks_like_error(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("error")
        && (lower.contains("504") || lower.contains("server") || lower.contains("request"))
}
