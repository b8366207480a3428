//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{Footer, Header};
use crate::components::system_panel::SystemPanel;
use crate::pages::{
    chat::ChatPage, courses::CoursesPage, dashboard::DashboardPage, login::LoginPage,
    welcome::WelcomePage,
};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::courses::CoursesState;
use crate::state::materials::MaterialsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted shell state,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_session());
    let chat = RwSignal::new(ChatState::default());
    let courses = RwSignal::new(CoursesState::default());
    let materials = RwSignal::new(MaterialsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(courses);
    provide_context(materials);
    provide_context(ui);

    // Session restore: a missing bearer token always overrides the stored
    // record back to logged-out welcome; otherwise reopen the stored view
    // when the app lands at the root.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::store::app_state;

            if auth.get_untracked().is_guest() {
                app_state::reset_logged_out();
                return;
            }
            let record = app_state::load();
            let at_root = web_sys::window()
                .map(|w| w.location().pathname().unwrap_or_default())
                .is_some_and(|path| path == "/");
            if at_root && record.view != app_state::View::Welcome {
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(record.view.path());
                }
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/coursepilot.css"/>
        <Title text="CoursePilot"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WelcomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
                </Routes>
            </main>
            <Footer/>
            <SystemPanel/>
        </Router>
    }
}
