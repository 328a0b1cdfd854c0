//! Render decisions for protected regions.
//!
//! A gate is a pure function of the current `RoleState`; it performs no I/O.
//! Loading always maps to `Pending`, so protected content and the denial view
//! are never shown before the role is known. Failed lookups and unrecognized
//! roles are denied (fail-closed).

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::role::{Role, RoleState};

/// Capability a protected region requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Requirement {
    /// Any recognized role, i.e. a valid session.
    #[default]
    Authenticated,
    Admin,
}

impl Requirement {
    pub fn permits(self, role: &Role) -> bool {
        match self {
            Self::Authenticated => role.is_recognized(),
            Self::Admin => role.is_admin(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Role still loading; render a placeholder only.
    Pending,
    /// Requirement met; the role is handed to the gated content.
    Granted(Role),
    /// Requirement not met or role unknown. Terminal for the activation.
    Denied,
}

pub fn evaluate(state: &RoleState, requirement: Requirement) -> GateDecision {
    match state {
        RoleState::Loading => GateDecision::Pending,
        RoleState::Resolved(role) if requirement.permits(role) => GateDecision::Granted(role.clone()),
        RoleState::Resolved(_) | RoleState::Failed => GateDecision::Denied,
    }
}
