//! Reusable view components.

pub mod access_gate;
pub mod alert_banner;
pub mod main_header;
pub mod not_authorized;
pub mod spinner;
