//! Landing page with role pickers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::store::app_state::{self, AppStateUpdate, View};

/// Hero, feature grid, and the student/teacher entry points.
///
/// Students can browse the library without signing in; teachers go to the
/// dashboard when a session exists and to the sign-in page otherwise.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        app_state::save(&AppStateUpdate {
            view: Some(View::Welcome),
            ..AppStateUpdate::default()
        });
    });

    let nav_student = navigate.clone();
    let on_student = move |_| {
        nav_student("/courses", NavigateOptions::default());
    };

    let nav_teacher = navigate.clone();
    let on_teacher = move |_| {
        let target = if auth.get().is_guest() { "/login" } else { "/dashboard" };
        nav_teacher(target, NavigateOptions::default());
    };

    view! {
        <div class="welcome-page">
            <div class="welcome-page__hero">
                <h1>"Your Courses, Answered"</h1>
                <p class="welcome-page__tagline">
                    "An AI assistant indexed on the actual materials of every course you take."
                </p>
                <div class="welcome-page__roles">
                    <button class="btn btn--primary welcome-page__role" on:click=on_student>
                        "I'm a Student"
                    </button>
                    <button class="btn welcome-page__role" on:click=on_teacher>
                        "I'm a Teacher"
                    </button>
                </div>
            </div>

            <div class="welcome-page__features">
                <FeatureTile
                    title="Course-aware answers"
                    body="Every answer cites the uploaded lecture notes and readings it came from."
                />
                <FeatureTile
                    title="Community forum"
                    body="Questions other students already asked are shared with the whole course."
                />
                <FeatureTile
                    title="Teacher workspace"
                    body="Upload materials, watch them index, and keep the knowledge base fresh."
                />
            </div>
        </div>
    }
}

#[component]
fn FeatureTile(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="welcome-page__feature">
            <span class="welcome-page__feature-title">{title}</span>
            <p class="welcome-page__feature-body">{body}</p>
        </div>
    }
}
