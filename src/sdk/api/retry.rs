//! Exponential backoff policy shared by every request the client issues

use rand::Rng;
use std::time::Duration;

use crate::config::SwcConfig;
use crate::constants::retry::{
    BACKOFF_FACTOR, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_DELAY_MS, DEFAULT_MAX_RETRIES,
};

/// Retry/backoff policy captured from the configuration when a client is built.
///
/// The delay before retry `n` (0-based) is
/// `min(max_delay, base_delay * 2^n + jitter)`, where `jitter` is drawn
/// uniformly from `[0, base_delay * 2^n / 2)`. Because the jitter never
/// exceeds half of the exponential step, the sequence of delays is
/// non-decreasing for any random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// When false, the first transient failure is terminal.
    pub enabled: bool,
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            enabled: true,
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn disabled() -> Self {
        RetryPolicy {
            enabled: false,
            ..RetryPolicy::default()
        }
    }

    pub fn from_config(config: &SwcConfig) -> Self {
        RetryPolicy {
            enabled: config.backoff,
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.backoff_base_delay_ms),
            max_delay: Duration::from_millis(config.backoff_max_delay_ms),
            jitter: true,
        }
    }

    /// Same policy with jitter switched off, giving a deterministic schedule.
    pub fn without_jitter(self) -> Self {
        RetryPolicy {
            jitter: false,
            ..self
        }
    }

    /// Number of retries allowed after the first attempt.
    pub fn retry_budget(&self) -> u32 {
        if self.enabled { self.max_retries } else { 0 }
    }

    /// Total attempts a request may make, first attempt included.
    pub fn max_attempts(&self) -> u32 {
        self.retry_budget().saturating_add(1)
    }

    /// Exponential step for retry `n` before jitter and capping.
    pub fn exponential_step(&self, retry: u32) -> Duration {
        let factor = BACKOFF_FACTOR.checked_pow(retry).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Delay to sleep before retry `n`, using the thread-local RNG for jitter.
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.delay_with_rng(retry, &mut rand::rng())
    }

    pub fn delay_with_rng<R: Rng>(&self, retry: u32, rng: &mut R) -> Duration {
        let step = self.exponential_step(retry);
        let jitter = if self.jitter {
            let spread_ms = u64::try_from(step.as_millis() / 2).unwrap_or(u64::MAX);
            if spread_ms > 0 {
                Duration::from_millis(rng.random_range(0..spread_ms))
            } else {
                Duration::ZERO
            }
        } else {
            Duration::ZERO
        };
        step.saturating_add(jitter).min(self.max_delay)
    }

    /// Clamp a server supplied `Retry-After` to the configured ceiling.
    pub fn clamp_retry_after(&self, retry_after: Duration) -> Duration {
        retry_after.min(self.max_delay)
    }

    /// Delay to sleep before retry `n` of a running request.
    ///
    /// A server `Retry-After` and the delay slept before the previous retry
    /// are floors under the computed backoff, never replacements, so the
    /// delays of one request never shrink. The result is capped by
    /// `max_delay`.
    pub fn wait_before(
        &self,
        retry: u32,
        retry_after: Option<Duration>,
        previous: Duration,
    ) -> Duration {
        self.wait_with_rng(retry, retry_after, previous, &mut rand::rng())
    }

    pub fn wait_with_rng<R: Rng>(
        &self,
        retry: u32,
        retry_after: Option<Duration>,
        previous: Duration,
        rng: &mut R,
    ) -> Duration {
        let computed = self.delay_with_rng(retry, rng);
        let floor = retry_after.unwrap_or(Duration::ZERO).max(previous);
        self.clamp_retry_after(computed.max(floor))
    }
}
