//! Shared client helpers: task scheduling, Leptos hooks, navigation.

pub mod hooks;
pub mod nav;
pub mod task;
