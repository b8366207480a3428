//! Full-screen chat interface for one course.
//!
//! ARCHITECTURE
//! ============
//! The private session lives in `ChatState` and is archived locally through
//! the record store; the shared forum feed above it comes from the API. A
//! submitted question runs the queue polling protocol in a background task,
//! mirroring queue progress into the ticket pill until the answer lands.

use leptos::prelude::*;

use crate::components::forum_feed::ForumFeed;
use crate::components::history_drawer::HistoryDrawer;
use crate::components::message_content::MessageContent;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, Role};
use crate::store::chat_log;
use crate::util::format;

#[cfg(test)]
#[path = "chat_view_test.rs"]
mod chat_view_test;

const GUEST_PLACEHOLDER: &str = "Sign in to ask your own questions";
const INPUT_PLACEHOLDER: &str = "Ask anything about this course...";

fn input_placeholder(guest: bool) -> &'static str {
    if guest { GUEST_PLACEHOLDER } else { INPUT_PLACEHOLDER }
}

fn can_submit(input: &str, typing: bool, guest: bool) -> bool {
    !guest && !typing && !input.trim().is_empty()
}

/// Chat interface: forum feed, private session, queue pill, input row.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let is_guest = move || auth.get().is_guest();

    // Keep the newest message visible.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.typing;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let state = chat.get();
        if !can_submit(&text, state.typing, is_guest()) {
            return;
        }
        let Some(course_id) = state.course_id else {
            return;
        };

        let question = text.trim().to_owned();
        chat.update(|c| {
            c.push(Role::User, question.clone(), format::now_ms());
            c.typing = true;
        });
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let req = crate::net::chat_queue::ChatRequest {
                message: question,
                course_id,
                is_voice: chat.get().voice_mode,
            };
            leptos::task::spawn_local(async move {
                let outcome = crate::net::chat_queue::run_exchange(&req, move |ticket| {
                    chat.update(|c| c.ticket = ticket);
                })
                .await;

                let content = match outcome {
                    Ok(answer) => answer,
                    Err(message) => message,
                };
                chat.update(|c| {
                    c.push(Role::Assistant, content, format::now_ms());
                    c.typing = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (question, course_id);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_new_chat = move |_| {
        let state = chat.get();
        let Some(course_id) = state.course_id else {
            return;
        };
        let Some(course_name) = state.course_name else {
            return;
        };
        let history = chat_log::archive_session(&course_id, &state.messages);
        chat.update(|c| {
            c.history = history;
            c.start_session(&course_name, format::now_ms());
        });
    };

    let on_toggle_voice = move |_| chat.update(|c| c.voice_mode = !c.voice_mode);
    let on_toggle_history = move |_| chat.update(|c| c.show_history = !c.show_history);

    view! {
        <div class="chat-view">
            <div class="chat-view__toolbar">
                <span class="chat-view__course">
                    {move || chat.get().course_name.unwrap_or_default()}
                </span>
                <div class="chat-view__actions">
                    <button
                        class="btn chat-view__voice"
                        class:chat-view__voice--on=move || chat.get().voice_mode
                        on:click=on_toggle_voice
                        title="Toggle spoken answers"
                    >
                        "Voice"
                    </button>
                    <button class="btn" on:click=on_toggle_history>"History"</button>
                    <button class="btn" on:click=on_new_chat>"New Chat"</button>
                </div>
            </div>

            <Show when=move || chat.get().show_history>
                <HistoryDrawer/>
            </Show>

            <div class="chat-view__messages" node_ref=messages_ref>
                <ForumFeed/>

                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.role == Role::User;
                            let stamp = format::clock_label(msg.timestamp_ms);
                            view! {
                                <div
                                    class="chat-view__message"
                                    class:chat-view__message--user=is_user
                                >
                                    <MessageContent content=msg.content.clone() role=msg.role/>
                                    <span class="chat-view__stamp">{stamp}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}

                <Show when=move || chat.get().typing>
                    <div class="chat-view__typing">
                        {move || match chat.get().ticket {
                            Some(ticket) => ticket.label(),
                            None => "Assistant is typing...".to_owned(),
                        }}
                    </div>
                </Show>
            </div>

            <div class="chat-view__input-row">
                <input
                    class="chat-view__input"
                    placeholder=move || input_placeholder(is_guest())
                    disabled=is_guest
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    disabled=move || !can_submit(&input.get(), chat.get().typing, is_guest())
                    on:click=move |_| do_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
