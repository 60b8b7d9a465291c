//! Bounded polling for asynchronous UI state.
//!
//! The application under test pushes no notifications to the suite; the only
//! way to observe "the welcome banner appeared" or "the provider page
//! rendered" is to re-check at a fixed cadence. Every poll here carries a
//! deadline: a condition that never becomes true surfaces as
//! [`SuiteError::Timeout`] instead of blocking until the test runner kills
//! the process.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::result::{SuiteError, SuiteResult};

/// Default deadline for polled conditions (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default polling cadence (500ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Options for a polled wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Deadline after which the wait fails
    pub timeout: Duration,
    /// Cadence at which the condition is re-checked
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitOptions {
    /// Create options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default deadline at the given cadence
    #[must_use]
    pub fn cadence(poll_interval: Duration) -> Self {
        Self::new().with_poll_interval(poll_interval)
    }

    /// Set the deadline
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling cadence
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Outcome of a satisfied wait
#[derive(Debug, Clone)]
pub struct WaitResult {
    /// Time spent waiting
    pub elapsed: Duration,
    /// Number of times the condition was checked
    pub checks: u32,
    /// Description of what was waited for
    pub waited_for: String,
}

/// Re-evaluate `probe` at the configured cadence until it returns `true`.
///
/// The probe runs at least once, immediately; success is only ever returned
/// after a check that observed `true`. Once the deadline passes with the
/// probe still false the wait fails with [`SuiteError::Timeout`], and a probe
/// error fails the wait immediately.
pub async fn poll_until<F, Fut>(
    description: &str,
    options: &WaitOptions,
    mut probe: F,
) -> SuiteResult<WaitResult>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SuiteResult<bool>>,
{
    let start = Instant::now();
    let mut checks = 0u32;

    loop {
        checks += 1;
        if probe().await? {
            return Ok(WaitResult {
                elapsed: start.elapsed(),
                checks,
                waited_for: description.to_string(),
            });
        }
        if start.elapsed() >= options.timeout {
            return Err(SuiteError::Timeout {
                condition: description.to_string(),
                ms: options.timeout.as_millis() as u64,
            });
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}
