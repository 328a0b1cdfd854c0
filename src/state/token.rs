//! Persisted session-token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only durable state owned by the client. Written by a
//! successful login/registration, cleared by logout, read by every role
//! lookup. Components receive a `SharedTokenStore` handle and never touch the
//! storage medium directly, which keeps the in-memory store a drop-in fake.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Single-slot store for an opaque session token.
pub trait TokenStore: Send + Sync {
    /// Replace any existing token.
    fn write(&self, token: &str);

    /// Copy of the current token, if any.
    fn read(&self) -> Option<String>;

    /// Remove the token. Idempotent.
    fn clear(&self);
}

pub type SharedTokenStore = Arc<dyn TokenStore>;

/// Process-lifetime token slot for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn write(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Token slot backed by `window.localStorage`, surviving reloads.
///
/// Storage failures (private mode, quota) degrade to "no token" rather than
/// panicking.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

#[cfg(feature = "hydrate")]
impl BrowserTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserTokenStore {
    fn write(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; token not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }

    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
