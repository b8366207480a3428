//! Sign-in and registration page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::store::app_state::{self, AppStateUpdate, View};
use crate::util::session;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

const MIN_PASSWORD_CHARS: usize = 6;

/// Check sign-in fields before hitting the API.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    Ok(())
}

/// Check registration fields before hitting the API.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_register_input(email: &str, password: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Enter your full name.".to_owned());
    }
    validate_login_input(email, password)?;
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!("Password needs at least {MIN_PASSWORD_CHARS} characters."));
    }
    Ok(())
}

/// Route to land on after sign-in, by role.
pub fn post_login_path(role: &str) -> &'static str {
    if session::is_teacher_role(role) {
        "/dashboard"
    } else {
        "/courses"
    }
}

/// Email/password sign-in with a registration mode toggle.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let is_login = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        app_state::save(&AppStateUpdate {
            view: Some(View::Auth),
            ..AppStateUpdate::default()
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let name_value = name.get().trim().to_owned();

        let check = if is_login.get() {
            validate_login_input(&email_value, &password_value)
        } else {
            validate_register_input(&email_value, &password_value, &name_value)
        };
        if let Err(message) = check {
            info.set(message);
            return;
        }

        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if is_login.get() {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        session::save(&resp.token, &resp.user.role);
                        auth.update(|a| {
                            a.token = Some(resp.token.clone());
                            a.role = Some(resp.user.role.clone());
                        });
                        app_state::save(&AppStateUpdate {
                            logged_in: Some(true),
                            ..AppStateUpdate::default()
                        });
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href(post_login_path(&resp.user.role));
                        }
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            } else {
                match crate::net::api::register(&email_value, &password_value, &name_value).await {
                    Ok(()) => {
                        info.set("Registration successful! Please sign in.".to_owned());
                        is_login.set(true);
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, name_value, auth);
        }
    };

    let on_toggle_mode = move |_| {
        is_login.update(|v| *v = !*v);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || if is_login.get() { "Welcome Back" } else { "Create Account" }}</h1>
                <p class="login-card__subtitle">
                    {move || {
                        if is_login.get() {
                            "Enter your details to access your assistant"
                        } else {
                            "Join your course community"
                        }
                    }}
                </p>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !is_login.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="name@university.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if is_login.get() { "Sign In" } else { "Create Account" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <button class="login-toggle" on:click=on_toggle_mode>
                    {move || {
                        if is_login.get() {
                            "Don't have an account? Sign Up"
                        } else {
                            "Already have an account? Sign In"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
