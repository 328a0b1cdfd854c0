//! Administrator-only pages.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::components::main_header::MainHeader;
use crate::state::access::Requirement;

#[component]
fn AdminSection(title: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <AccessGate requirement=Requirement::Admin let:role>
            <MainHeader role/>
            <section class=format!("page page--admin {class}")>
                <h1>{title}</h1>
            </section>
        </AccessGate>
    }
}

#[component]
pub fn AdminInfoPage() -> impl IntoView {
    view! { <AdminSection title="Administrator profile" class="page--admin-info"/> }
}

#[component]
pub fn AdminOfficesPage() -> impl IntoView {
    view! { <AdminSection title="Offices" class="page--admin-offices"/> }
}

#[component]
pub fn AdminAppPage() -> impl IntoView {
    view! { <AdminSection title="Applications" class="page--admin-app"/> }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! { <AdminSection title="Users" class="page--admin-users"/> }
}
