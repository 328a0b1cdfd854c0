//! Single-slot transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms report the outcome of user actions (login, registration, failures)
//! through one `AlertController` per view. The banner component renders
//! `AlertState`; it picks its styling from `AlertKind` alone.
//!
//! DESIGN
//! ======
//! `show_alert` always cancels the pending expiry timer before installing the
//! new alert, then starts a fresh `ALERT_DURATION` timer. Each timer carries
//! the generation it was started for and only clears the slot if that
//! generation is still current, so a superseded timer cannot hide a newer
//! alert early.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::Listener;
use crate::util::task::{TaskHandle, sleep, spawn_cancellable};

/// How long an alert stays visible unless superseded.
pub const ALERT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    /// Lowercase name, used as a style modifier by the view layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

/// Read-only projection of the alert slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    active: Option<Alert>,
}

impl AlertState {
    pub fn active(&self) -> Option<&Alert> {
        self.active.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.message.as_str())
    }

    pub fn kind(&self) -> Option<AlertKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Handle to a view's alert slot. Clones share the slot.
#[derive(Clone)]
pub struct AlertController {
    shared: Arc<Shared>,
}

struct Shared {
    duration: Duration,
    listener: Option<Listener<AlertState>>,
    inner: Mutex<AlertInner>,
}

#[derive(Default)]
struct AlertInner {
    current: AlertState,
    generation: u64,
    expiry: Option<TaskHandle>,
    torn_down: bool,
}

impl Default for AlertController {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertController {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Like `new`, with `listener` invoked after every state change.
    pub fn with_listener(listener: Listener<AlertState>) -> Self {
        Self::build(Some(listener))
    }

    fn build(listener: Option<Listener<AlertState>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                duration: ALERT_DURATION,
                listener,
                inner: Mutex::new(AlertInner::default()),
            }),
        }
    }

    pub fn current_alert(&self) -> AlertState {
        self.shared.lock().current.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.lock().torn_down
    }

    /// Show `message`, replacing any visible alert, and schedule its expiry.
    ///
    /// Must run inside a local executor (see `util::task`). Ignored after
    /// `teardown`.
    pub fn show_alert(&self, message: impl Into<String>, kind: AlertKind) {
        let message = message.into();

        let generation = {
            let mut inner = self.shared.lock();
            if inner.torn_down {
                log::debug!("alert ignored after teardown: {message}");
                return;
            }
            if let Some(previous) = inner.expiry.take() {
                previous.cancel();
            }
            inner.generation += 1;
            inner.current = AlertState { active: Some(Alert { message, kind }) };
            inner.generation
        };

        let shared = Arc::clone(&self.shared);
        let duration = self.shared.duration;
        let handle = spawn_cancellable(async move {
            sleep(duration).await;
            shared.expire(generation);
        });

        let snapshot = {
            let mut inner = self.shared.lock();
            if inner.generation == generation && !inner.torn_down {
                inner.expiry = Some(handle);
            }
            inner.current.clone()
        };
        self.shared.notify(&snapshot);
    }

    /// Cancel the pending expiry timer and ignore all later calls. The slot
    /// keeps its last value. Idempotent.
    pub fn teardown(&self) {
        let pending = {
            let mut inner = self.shared.lock();
            inner.torn_down = true;
            inner.expiry.take()
        };
        if let Some(handle) = pending {
            handle.cancel();
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, AlertInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn expire(&self, generation: u64) {
        let finished = {
            let mut inner = self.lock();
            if inner.torn_down || inner.generation != generation {
                return;
            }
            inner.current = AlertState::default();
            inner.expiry.take()
        };
        drop(finished);
        self.notify(&AlertState::default());
    }

    fn notify(&self, state: &AlertState) {
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }
}
