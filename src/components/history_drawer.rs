//! Drawer listing archived chat sessions for the active course.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::format;

/// Archived sessions, newest first. Clicking one restores its messages.
#[component]
pub fn HistoryDrawer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="history-drawer">
            <span class="history-drawer__title">"Chat History"</span>
            {move || {
                let sessions = chat.get().history;
                if sessions.is_empty() {
                    return view! {
                        <div class="history-drawer__empty">"No saved chats yet"</div>
                    }
                        .into_any();
                }

                sessions
                    .iter()
                    .map(|session| {
                        let title = session.title.clone();
                        let stamp = format::date_label(session.saved_ms);
                        let messages = session.messages.clone();
                        let on_restore = move |_| {
                            let restored = messages.clone();
                            chat.update(|c| {
                                c.messages = restored;
                                c.typing = false;
                                c.ticket = None;
                                c.show_history = false;
                            });
                        };
                        view! {
                            <button class="history-drawer__session" on:click=on_restore>
                                <span class="history-drawer__session-title">{title}</span>
                                <span class="history-drawer__session-stamp">{stamp}</span>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
