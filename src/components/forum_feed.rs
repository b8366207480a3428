//! Shared community feed rendered above the private session.
//!
//! Entries come from `GET /api/chat/history/{course_id}` and show what other
//! students already asked, so common questions get answered without a new
//! completion round trip.

use leptos::prelude::*;

use crate::components::message_content::MessageContent;
use crate::state::chat::{ChatState, Role};

/// Question/answer pairs from the course community feed.
#[component]
pub fn ForumFeed() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <Show when=move || !chat.get().forum.is_empty()>
            <div class="forum-feed">
                <span class="forum-feed__title">"Community Forum"</span>
                {move || {
                    chat.get()
                        .forum
                        .iter()
                        .map(|entry| {
                            let asked_by = entry.user_name.clone();
                            let question = entry.question.clone();
                            let answer = entry.answer.clone();
                            view! {
                                <div class="forum-feed__entry">
                                    <div class="forum-feed__question">
                                        <span class="forum-feed__author">{asked_by}</span>
                                        <span>{question}</span>
                                    </div>
                                    <div class="forum-feed__answer">
                                        <MessageContent content=answer role=Role::Assistant/>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
