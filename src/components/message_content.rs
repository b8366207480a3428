//! Assistant message body: markdown rendering plus citation badges.
//!
//! Assistant answers interleave markdown prose with `[source]` citation
//! spans pointing at course materials. Citations render inline as badges
//! and again, deduplicated, in a "Verified Sources" footer.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::Role;

#[cfg(test)]
#[path = "message_content_test.rs"]
mod message_content_test;

/// A bracketed span longer than this is treated as prose, not a citation.
const CITATION_MAX_CHARS: usize = 100;

/// One run of an assistant message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Markdown(String),
    Citation(String),
}

/// Split a message into markdown runs and inline citation spans.
///
/// A citation is a `[...]` span with no nested bracket and fewer than 100
/// characters overall; anything else (including markdown link syntax that
/// grew past the cap) stays in the surrounding prose.
pub fn split_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(open) = content[cursor..].find('[') {
        let open = cursor + open;
        let Some(close) = content[open..].find(']') else {
            break;
        };
        let close = open + close;
        let span = &content[open..=close];
        let inner = &content[open + 1..close];

        if span.chars().count() < CITATION_MAX_CHARS && !inner.is_empty() {
            if plain_start < open {
                segments.push(Segment::Markdown(content[plain_start..open].to_owned()));
            }
            segments.push(Segment::Citation(inner.to_owned()));
            plain_start = close + 1;
        }
        cursor = close + 1;
    }

    if plain_start < content.len() {
        segments.push(Segment::Markdown(content[plain_start..].to_owned()));
    }
    segments
}

/// Deduplicated citation texts for the sources footer, in first-seen order.
/// Spans containing URLs are skipped.
pub fn unique_sources(content: &str) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for segment in split_segments(content) {
        if let Segment::Citation(text) = segment {
            if !text.contains("http") && !sources.contains(&text) {
                sources.push(text);
            }
        }
    }
    sources
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Body of one chat bubble. User text renders verbatim; assistant text gets
/// markdown, citation badges, and the sources footer.
#[component]
pub fn MessageContent(content: String, role: Role) -> impl IntoView {
    if role == Role::User {
        return view! { <p class="message-content__plain">{content}</p> }.into_any();
    }

    let segments = split_segments(&content);
    let sources = unique_sources(&content);
    let has_sources = !sources.is_empty();

    view! {
        <div class="message-content">
            <div class="message-content__body">
                {segments
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Citation(text) => view! {
                            <span class="message-content__citation">{text}</span>
                        }
                            .into_any(),
                        Segment::Markdown(text) => {
                            let rendered = render_markdown_html(&text);
                            view! {
                                <span class="message-content__markdown" inner_html=rendered></span>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || has_sources>
                <div class="message-content__sources">
                    <span class="message-content__sources-title">"Verified Sources"</span>
                    {sources
                        .clone()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, source)| view! {
                            <div class="message-content__source-row">
                                <span class="message-content__source-index">
                                    {format!("[{}]", idx + 1)}
                                </span>
                                <span>{source}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
