//! Caller-role resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view owns one `RoleResolver` for the lifetime of its
//! mount. The resolver reads the session token, asks the remote service for
//! the role, and publishes `Loading -> Resolved | Failed`. Access decisions
//! are derived from that state (see `state::access`).
//!
//! DESIGN
//! ======
//! Each `resolve()` bumps an epoch and replaces the in-flight task handle,
//! which aborts the previous lookup. A result is applied only if its epoch is
//! still current and the resolver has not been torn down, so a stale or
//! orphaned response can never overwrite newer state.
//!
//! A missing token is still sent to the service as an anonymous lookup; the
//! service is authoritative on whether that yields a role.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Listener;
use super::token::SharedTokenStore;
use crate::net::api::SharedAuthClient;
use crate::util::task::{TaskHandle, spawn_cancellable};

/// Authorization level reported by the remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    /// Any value the client does not recognize. Never treated as privileged.
    Unrecognized(String),
}

impl Role {
    /// Parse the wire value. Matching is exact and case-sensitive.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "Admin" => Self::Admin,
            "User" => Self::User,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RolePhase {
    Loading,
    Resolved,
    Failed,
}

/// Result of the current resolution cycle. A role exists only when resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoleState {
    #[default]
    Loading,
    Resolved(Role),
    Failed,
}

impl RoleState {
    pub fn phase(&self) -> RolePhase {
        match self {
            Self::Loading => RolePhase::Loading,
            Self::Resolved(_) => RolePhase::Resolved,
            Self::Failed => RolePhase::Failed,
        }
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            Self::Resolved(role) => Some(role),
            Self::Loading | Self::Failed => None,
        }
    }
}

/// Handle to one activation's role resolution. Clones share state.
#[derive(Clone)]
pub struct RoleResolver {
    shared: Arc<Shared>,
}

struct Shared {
    tokens: SharedTokenStore,
    client: SharedAuthClient,
    listener: Option<Listener<RoleState>>,
    inner: Mutex<ResolverInner>,
}

#[derive(Default)]
struct ResolverInner {
    state: RoleState,
    epoch: u64,
    in_flight: Option<TaskHandle>,
    torn_down: bool,
}

impl RoleResolver {
    pub fn new(tokens: SharedTokenStore, client: SharedAuthClient) -> Self {
        Self::build(tokens, client, None)
    }

    /// Like `new`, with `listener` invoked after every state change.
    pub fn with_listener(tokens: SharedTokenStore, client: SharedAuthClient, listener: Listener<RoleState>) -> Self {
        Self::build(tokens, client, Some(listener))
    }

    fn build(tokens: SharedTokenStore, client: SharedAuthClient, listener: Option<Listener<RoleState>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                tokens,
                client,
                listener,
                inner: Mutex::new(ResolverInner::default()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RoleState {
        self.shared.lock().state.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.lock().torn_down
    }

    /// Start a new resolution cycle, discarding any lookup still in flight.
    ///
    /// Must run inside a local executor (see `util::task`). Ignored after
    /// `teardown`.
    pub fn resolve(&self) {
        let token = self.shared.tokens.read();

        let (epoch, superseded) = {
            let mut inner = self.shared.lock();
            if inner.torn_down {
                log::debug!("role resolve ignored after teardown");
                return;
            }
            inner.epoch += 1;
            inner.state = RoleState::Loading;
            (inner.epoch, inner.in_flight.take())
        };
        drop(superseded);

        let shared = Arc::clone(&self.shared);
        let handle = spawn_cancellable(async move {
            let next = match shared.client.role_by_token(token.as_deref()).await {
                Ok(resp) => RoleState::Resolved(Role::from_wire(&resp.role)),
                Err(e) => {
                    log::error!("failed to fetch role: {e}");
                    RoleState::Failed
                }
            };
            shared.apply(epoch, next);
        });

        {
            let mut inner = self.shared.lock();
            if inner.epoch == epoch && !inner.torn_down {
                inner.in_flight = Some(handle);
            }
        }

        self.shared.notify(&RoleState::Loading);
    }

    /// End the activation: abort any lookup in flight and ignore all later
    /// results and calls. Idempotent.
    pub fn teardown(&self) {
        let pending = {
            let mut inner = self.shared.lock();
            inner.torn_down = true;
            inner.in_flight.take()
        };
        if let Some(handle) = pending {
            handle.cancel();
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ResolverInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, epoch: u64, next: RoleState) {
        let finished = {
            let mut inner = self.lock();
            if inner.torn_down || inner.epoch != epoch {
                log::debug!("discarding stale role result (epoch {epoch})");
                return;
            }
            inner.state = next.clone();
            inner.in_flight.take()
        };
        drop(finished);
        self.notify(&next);
    }

    fn notify(&self, state: &RoleState) {
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }
}
