//! Combined login / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves both modes with a toggle between them. Success stores
//! the session and sets the auth context; the authed-redirect effect then
//! moves the visitor to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn toggled(self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Register => "Sign Up",
    }
}

fn intro(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Please enter your details",
        AuthMode::Register => "Create a new account",
    }
}

fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    if submitting { "Processing..." } else { heading(mode) }
}

fn switch_prompt(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Don't have an account?",
        AuthMode::Register => "Already have an account?",
    }
}

fn switch_action(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign up",
        AuthMode::Register => "Login",
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Auth form for the `/login` route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate);

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_switch_mode = move |_| {
        if submitting.get() {
            return;
        }
        mode.update(|m| *m = m.toggled());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        let auth_mode = mode.get();
        error.set(None);
        submitting.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match auth_mode {
                AuthMode::Login => crate::net::api::login(&email_value, &password_value).await,
                AuthMode::Register => {
                    crate::net::api::register(&email_value, &password_value, None).await
                }
            };
            match result {
                Ok(user) => {
                    // Settle page-local state before the redirect effect runs.
                    submitting.set(false);
                    crate::util::session::store(&user);
                    auth.update(|state| state.user = Some(user));
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, auth_mode);
            submitting.set(false);
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-header">
                <h1 class="auth-brand">"Find & Seek"</h1>
                <h2>{move || heading(mode.get())}</h2>
                <p>{move || intro(mode.get())}</p>
            </div>

            <form on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required=true
                        placeholder="netid@illinois.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || submitting.get()>
                    {move || submit_label(mode.get(), submitting.get())}
                </button>
            </form>

            <div class="auth-switch">
                <p>
                    {move || switch_prompt(mode.get())}
                    " "
                    <button class="switch-link" type="button" on:click=on_switch_mode>
                        {move || switch_action(mode.get())}
                    </button>
                </p>
            </div>
        </div>
    }
}
