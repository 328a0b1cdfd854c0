//! Route-level pages.
//!
//! Every page other than `auth` is wrapped in an `AccessGate`, which mounts
//! a fresh role lookup per visit.

pub mod admin;
pub mod auth;
pub mod main_page;
pub mod user;
