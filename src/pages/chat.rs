//! Full-screen chat route for one course.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_view::ChatView;
use crate::net::types::Course;
use crate::state::chat::ChatState;
use crate::state::courses::CoursesState;
use crate::store::app_state::{self, AppStateUpdate};
use crate::store::chat_log;
use crate::util::format;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Course subject for the chat header, from the in-memory list first and
/// the record-store cache second.
pub fn resolve_course_name(items: &[Course], course_id: &str) -> Option<String> {
    items
        .iter()
        .find(|c| c.id == course_id)
        .map(|c| c.subject.clone())
        .or_else(|| crate::store::courses::get(course_id).map(|c| c.subject))
}

/// Chat page bound to `/chat/:id`. Sessions are archived when the route
/// changes away or a new chat starts.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let courses = expect_context::<RwSignal<CoursesState>>();
    let params = use_params_map();

    let route_course_id = move || params.read().get("id");

    // Bind the session to the routed course.
    Effect::new(move || {
        let Some(course_id) = route_course_id() else {
            return;
        };
        if chat.get_untracked().course_id.as_deref() == Some(course_id.as_str()) {
            return;
        }

        let course_name = resolve_course_name(&courses.get_untracked().items, &course_id)
            .unwrap_or_else(|| "Course".to_owned());
        let history = chat_log::sessions_for_course(&chat_log::load(), &course_id);

        chat.update(|c| {
            c.course_id = Some(course_id.clone());
            c.course_name = Some(course_name.clone());
            c.history = history;
            c.forum = Vec::new();
            c.show_history = false;
            c.start_session(&course_name, format::now_ms());
        });
        app_state::save(&AppStateUpdate {
            active_course_id: Some(Some(course_id.clone())),
            ..AppStateUpdate::default()
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(entries) = crate::net::api::fetch_forum_history(&course_id).await {
                chat.update(|c| c.forum = entries);
            }
        });
    });

    // Archive the session when the user leaves the chat.
    on_cleanup(move || {
        let state = chat.get_untracked();
        if let Some(course_id) = state.course_id {
            let _ = chat_log::archive_session(&course_id, &state.messages);
        }
    });

    view! { <ChatView/> }
}
