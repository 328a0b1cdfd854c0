//! Pages for any signed-in role.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::components::main_header::MainHeader;
use crate::state::access::Requirement;

#[component]
fn UserSection(title: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <AccessGate requirement=Requirement::Authenticated let:role>
            <MainHeader role/>
            <section class=format!("page {class}")>
                <h1>{title}</h1>
            </section>
        </AccessGate>
    }
}

#[component]
pub fn UserInfoPage() -> impl IntoView {
    view! { <UserSection title="Profile" class="page--user-info"/> }
}

#[component]
pub fn UserLikePage() -> impl IntoView {
    view! { <UserSection title="Favorite offices" class="page--user-like"/> }
}

#[component]
pub fn UserAppPage() -> impl IntoView {
    view! { <UserSection title="My applications" class="page--user-app"/> }
}
