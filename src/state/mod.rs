//! Client-side session, role, and notification state.
//!
//! DESIGN
//! ======
//! The controllers here are plain Rust state machines with explicit
//! teardown, independent of the view layer. Leptos glue (`util::hooks`)
//! mirrors their state into signals through a `Listener`.

use std::sync::Arc;

pub mod access;
pub mod alert;
pub mod role;
pub mod session;
pub mod token;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Change callback invoked after a controller updates its state.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;
