//! Application chrome: header and footer shared by every page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Top bar with brand/home link, system panel toggle, and logout.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_home = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    let on_system = move |_| ui.update(|u| u.system_panel_open = !u.system_panel_open);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Sign out of CoursePilot?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            crate::util::session::clear();
            crate::store::app_state::reset_logged_out();
            auth.update(|a| {
                a.token = None;
                a.role = None;
            });
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    view! {
        <header class="header">
            <button class="header__brand" on:click=on_home>"CoursePilot"</button>
            <div class="header__actions">
                <button class="btn header__system" on:click=on_system title="System diagnostics">
                    "System"
                </button>
                <Show when=move || !auth.get().is_guest()>
                    <button class="btn header__logout" on:click=on_logout title="Sign out">
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}

/// Footer shown at the bottom of every page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"CoursePilot — course-aware AI assistance"</span>
        </footer>
    }
}
