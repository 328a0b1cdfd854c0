//! Transient notification banner.

use leptos::prelude::*;

use crate::state::alert::{AlertKind, AlertState};

fn icon_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "bi bi-check-circle",
        AlertKind::Danger => "bi bi-exclamation-circle",
    }
}

/// Renders the active alert, if any. Styling follows the alert kind.
#[component]
pub fn AlertBanner(#[prop(into)] alert: Signal<AlertState>) -> impl IntoView {
    move || {
        alert.get().active().cloned().map(|active| {
            let kind = active.kind;
            view! {
                <div class="alert-banner">
                    <div class=format!("alert alert--{}", kind.as_str()) role="alert">
                        <i class=format!("alert__icon {}", icon_class(kind))></i>
                        <span>{active.message}</span>
                    </div>
                </div>
            }
        })
    }
}
