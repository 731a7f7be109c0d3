use log::error;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Fixed-delay retry: up to `max_attempts` tries, `delay` between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `operation` until it succeeds or attempts run out.
    ///
    /// The closure receives the 1-based attempt number. Every failure is logged
    /// under `label`; the last one is returned to the caller.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    self.log_failure(label, attempt, &e);
                    if self.is_last(attempt) {
                        return Err(e);
                    }
                }
            }
            self.apply_delay().await;
            attempt += 1;
        }
    }

    fn is_last(&self, attempt: u32) -> bool {
        attempt >= self.max_attempts
    }

    fn log_failure(&self, label: &str, attempt: u32, err: &impl Display) {
        error!(
            "{} (Attempt {}/{}): {}",
            label, attempt, self.max_attempts, err
        );
    }

    async fn apply_delay(&self) {
        sleep(self.delay).await;
    }
}
