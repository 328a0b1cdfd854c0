//! Role-gated region.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. The gate mounts its own `RoleResolver` and
//! renders exactly one of: placeholder (pending), children (granted), or
//! fallback (denied). Children receive the resolved role so they can pick
//! role-specific variants without resolving again.

use leptos::prelude::*;

use super::not_authorized::NotAuthorized;
use super::spinner::LoadingPlaceholder;
use crate::state::access::{GateDecision, Requirement, evaluate};
use crate::state::role::Role;
use crate::util::hooks::use_role;

#[component]
pub fn AccessGate<C, V>(
    #[prop(optional)] requirement: Requirement,
    /// Rendered when access is denied. Defaults to `NotAuthorized`.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    /// Rendered while the role is loading. Defaults to a spinner.
    #[prop(optional, into)]
    placeholder: Option<ViewFn>,
    children: C,
) -> impl IntoView
where
    C: Fn(Role) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let (role_state, _resolver) = use_role();

    move || match evaluate(&role_state.get(), requirement) {
        GateDecision::Pending => placeholder
            .as_ref()
            .map_or_else(|| view! { <LoadingPlaceholder/> }.into_any(), ViewFn::run),
        GateDecision::Granted(role) => children(role).into_any(),
        GateDecision::Denied => fallback
            .as_ref()
            .map_or_else(|| view! { <NotAuthorized requirement/> }.into_any(), ViewFn::run),
    }
}
