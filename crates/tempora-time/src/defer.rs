//! Deferred execution on the tokio timer
//!
//! Intervals become tokio deadlines via `now + interval`. Negative and NaN
//! intervals fire immediately. The default config never shortens a delay;
//! [`DeferConfig::capped`] opts into clamping at `max_delay`.

use std::future::Future;
use std::time::Duration;

use tempora_core::{Interval, Unit};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::{TimeError, TimeResult};

/// Roughly 30 years, used when `now + delay` would overflow `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Deferrer configuration
#[derive(Clone, Debug)]
pub struct DeferConfig {
    /// Longest delay a task may be deferred by
    pub max_delay: Duration,
    /// Tag attached to log events
    pub label: String,
}

impl Default for DeferConfig {
    fn default() -> Self {
        DeferConfig {
            max_delay: Duration::MAX,
            label: "default".to_string(),
        }
    }
}

impl DeferConfig {
    /// No clamping beyond what `Duration` can represent. Same as `default()`.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Clamp every delay to `max_delay`. Tasks asking for more run early.
    pub fn capped(max_delay: Duration) -> Self {
        DeferConfig {
            max_delay,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Schedules work after an interval elapses
#[derive(Clone, Debug, Default)]
pub struct Deferrer {
    config: DeferConfig,
}

impl Deferrer {
    pub fn new(config: DeferConfig) -> Self {
        Deferrer { config }
    }

    pub fn config(&self) -> &DeferConfig {
        &self.config
    }

    /// Delay for an interval, saturating and clamped to `max_delay`
    pub fn delay_for<U: Unit>(&self, interval: Interval<U>) -> Duration {
        let delay = interval.to_std_saturating();
        if delay > self.config.max_delay {
            warn!(
                label = %self.config.label,
                requested = ?delay,
                max = ?self.config.max_delay,
                "clamping deferred delay"
            );
            return self.config.max_delay;
        }
        delay
    }

    /// Strict variant of [`Deferrer::delay_for`]: rejects negative, non-finite
    /// and over-long intervals instead of adjusting them.
    pub fn try_delay_for<U: Unit>(&self, interval: Interval<U>) -> TimeResult<Duration> {
        let delay = Duration::try_from(interval)?;
        if delay > self.config.max_delay {
            return Err(TimeError::DelayTooLong {
                requested: delay,
                max: self.config.max_delay,
            });
        }
        Ok(delay)
    }

    pub fn deadline_after<U: Unit>(&self, interval: Interval<U>) -> Instant {
        let now = Instant::now();
        let delay = self.delay_for(interval);
        now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
    }

    pub async fn sleep<U: Unit>(&self, interval: Interval<U>) {
        tokio::time::sleep_until(self.deadline_after(interval)).await;
    }

    /// Run `task` on the tokio runtime once `interval` has elapsed
    pub fn spawn_after<U, F>(&self, interval: Interval<U>, task: F) -> JoinHandle<F::Output>
    where
        U: Unit,
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let deadline = self.deadline_after(interval);
        debug!(
            label = %self.config.label,
            after_secs = interval.canonical_seconds(),
            "scheduling deferred task"
        );
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await
        })
    }
}
