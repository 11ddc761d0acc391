//! Timed auto-open sequence
//!
//! On the first desktop load a fixed list of apps is opened one at a time,
//! `delay_ms` apart. Time is injected by the caller so the sequence can be
//! driven deterministically in tests.

use tracing::debug;

use crate::app::AppId;

/// Lifecycle of the sequence; it only ever moves forward
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoOpenState {
    /// Not started yet
    Pending,
    /// Started at the given time (ms)
    Running { started_at: f64 },
    /// Every step has fired
    Finished,
    /// Abandoned (mobile layout); will never run
    Skipped,
}

/// One step that is due to fire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoOpenStep {
    /// App to open
    pub app: AppId,
    /// Position in the sequence, used as the cascade index
    pub cascade_index: u32,
}

/// The once-per-load auto-open sequence
#[derive(Clone, Debug)]
pub struct AutoOpenSequence {
    apps: Vec<AppId>,
    delay_ms: f64,
    fired: usize,
    state: AutoOpenState,
}

impl AutoOpenSequence {
    /// Create a pending sequence
    pub fn new(apps: Vec<AppId>, delay_ms: f64) -> Self {
        Self {
            apps,
            delay_ms,
            fired: 0,
            state: AutoOpenState::Pending,
        }
    }

    /// Get the current state
    pub fn state(&self) -> AutoOpenState {
        self.state
    }

    /// Start the clock; only a pending sequence can start
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.state != AutoOpenState::Pending {
            return false;
        }
        self.state = if self.apps.is_empty() {
            AutoOpenState::Finished
        } else {
            AutoOpenState::Running { started_at: now_ms }
        };
        debug!(steps = self.apps.len(), "auto-open started");
        true
    }

    /// Abandon the sequence unless it already finished
    pub fn skip(&mut self) {
        if self.state != AutoOpenState::Finished && self.state != AutoOpenState::Skipped {
            debug!(fired = self.fired, "auto-open skipped");
            self.state = AutoOpenState::Skipped;
        }
    }

    /// Take every step whose time has come
    ///
    /// Step `i` fires at `started_at + (i + 1) * delay_ms`. Steps are
    /// returned in order and never returned twice.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<AutoOpenStep> {
        let AutoOpenState::Running { started_at } = self.state else {
            return Vec::new();
        };

        let mut due = Vec::new();
        while let Some(app) = self.apps.get(self.fired).copied() {
            let fire_at = started_at + (self.fired as f64 + 1.0) * self.delay_ms;
            if now_ms < fire_at {
                break;
            }
            due.push(AutoOpenStep {
                app,
                cascade_index: self.fired as u32,
            });
            self.fired += 1;
        }

        if self.fired == self.apps.len() {
            self.state = AutoOpenState::Finished;
            debug!("auto-open finished");
        }
        due
    }

    /// Check if steps remain to fire
    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoOpenState::Running { .. })
    }
}
