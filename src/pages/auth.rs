//! Auth page with login and registration forms.
//!
//! Inputs are validated locally before any request; a validation failure is
//! reported through the same alert slot as server responses.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::alert::AlertKind;
use crate::state::session::SessionActions;
use crate::util::hooks::{use_alert, use_services};
use crate::util::nav::browser_navigate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStage {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter both email and password.")]
    MissingCredentials,
    #[error("Fill in all registration fields.")]
    MissingFields,
    #[error("Enter a valid age.")]
    InvalidAge,
}

/// Raw registration inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub last_name: String,
    pub first_name: String,
    pub tel: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

/// Trim and require both credentials. Passwords are sent untrimmed.
pub fn validate_login_form(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingCredentials);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

pub fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, FormError> {
    let required = [&form.last_name, &form.first_name, &form.tel, &form.age, &form.email];
    if required.iter().any(|v| v.trim().is_empty()) || form.password.is_empty() {
        return Err(FormError::MissingFields);
    }
    let age = form.age.trim().parse::<u32>().map_err(|_| FormError::InvalidAge)?;
    Ok(RegisterRequest {
        last_name: form.last_name.trim().to_owned(),
        first_name: form.first_name.trim().to_owned(),
        tel: form.tel.trim().to_owned(),
        age,
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let stage = RwSignal::new(AuthStage::Login);
    let busy = RwSignal::new(false);
    let (alert, alerts) = use_alert();
    let services = use_services();
    let actions = SessionActions::new(services.tokens, services.client, alerts, browser_navigate());

    let tab_class = move |target: AuthStage| {
        if stage.get() == target { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    view! {
        <div class="auth-page">
            <AlertBanner alert=alert/>
            <div class="auth-container">
                <div class="auth-tabs">
                    <button class=move || tab_class(AuthStage::Login) on:click=move |_| stage.set(AuthStage::Login)>
                        "Sign in"
                    </button>
                    <button
                        class=move || tab_class(AuthStage::Register)
                        on:click=move |_| stage.set(AuthStage::Register)
                    >
                        "Register"
                    </button>
                </div>
                {move || match stage.get() {
                    AuthStage::Login => view! { <LoginForm actions=actions.clone() busy=busy/> }.into_any(),
                    AuthStage::Register => view! { <RegisterFormView actions=actions.clone() busy=busy/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(actions: SessionActions, busy: RwSignal<bool>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_form(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                actions.alerts().show_alert(e.to_string(), AlertKind::Danger);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let actions = actions.clone();
            leptos::task::spawn_local(async move {
                actions.login(request).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Sign in"
            </button>
        </form>
    }
}

#[component]
fn RegisterFormView(actions: SessionActions, busy: RwSignal<bool>) -> impl IntoView {
    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let tel = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            last_name: last_name.get(),
            first_name: first_name.get(),
            tel: tel.get(),
            age: age.get(),
            email: email.get(),
            password: password.get(),
        };
        let request = match validate_register_form(&form) {
            Ok(request) => request,
            Err(e) => {
                actions.alerts().show_alert(e.to_string(), AlertKind::Danger);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let actions = actions.clone();
            leptos::task::spawn_local(async move {
                actions.register(request).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <FormField placeholder="Last name" value=last_name/>
            <FormField placeholder="First name" value=first_name/>
            <FormField placeholder="Phone" kind="tel" value=tel/>
            <FormField placeholder="Age" kind="number" value=age/>
            <FormField placeholder="Email" kind="email" value=email/>
            <FormField placeholder="Password" kind="password" value=password/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Register"
            </button>
        </form>
    }
}

#[component]
fn FormField(
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
