//! Remote auth/role service access.
//!
//! DESIGN
//! ======
//! `api` holds the `AuthClient` capability and its HTTP binding, `types` the
//! wire DTOs, and `error` the transport-level failure taxonomy. Callers above
//! this layer never see HTTP details.

pub mod api;
pub mod error;
pub mod types;
