// src/retry_policy.rs

pub const DEFAULT_RETRY_BACKOFF_MS: u32 = 1000;

/// How long the configure workflows keep re-reading the configuration.
///
/// The default never gives up: a mismatch right after power-up is expected to
/// clear once the chip is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total verify rounds, `None` for no limit.
    pub max_attempts: Option<u32>,
    /// Wait between two verify rounds.
    pub backoff_ms: u32,
}

impl RetryPolicy {
    pub const fn unbounded() -> Self {
        RetryPolicy {
            max_attempts: None,
            backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }

    /// Gives up after `max_attempts` verify rounds (at least one is always made).
    pub const fn capped(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts: Some(max_attempts),
            backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }

    pub const fn with_backoff_ms(mut self, backoff_ms: u32) -> Self {
        self.backoff_ms = backoff_ms;
        self
    }

    /// True if another round may follow the `attempts` rounds already made.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempts < max,
            None => true,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}
