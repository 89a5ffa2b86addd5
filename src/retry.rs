use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{warn_time, Error, Result};

/// How hard to try a single comic before giving up.
///
/// Every error is retried. The only way out of an unbounded policy is the
/// cancellation token, which is checked after each failed attempt and while waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry immediately, forever.
    pub const fn unbounded() -> Self {
        Self {
            delay: Duration::ZERO,
            max_attempts: None,
        }
    }

    pub const fn bounded(max_attempts: u32) -> Self {
        Self {
            delay: Duration::ZERO,
            max_attempts: Some(max_attempts),
        }
    }

    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Runs `op` until it succeeds. Returns the value and the number of retries it took.
    pub async fn run<T, F, Fut>(
        &self,
        id: u32,
        cancel: &CancellationToken,
        mut op: F,
    ) -> Result<(T, u32)>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempts = 0u32;
        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            attempts += 1;
            let err = match op().await {
                Ok(value) => return Ok((value, attempts - 1)),
                Err(err) => err,
            };

            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(Error::RetriesExhausted {
                    id,
                    attempts,
                    last: Box::new(err),
                });
            }
            warn_time!("error, retrying.. comic {id}, attempt {attempts}: {err}");

            if !self.delay.is_zero() {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(Error::Cancelled),
                    _ = tokio::time::sleep(self.delay) => {}
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}
