use super::*;

#[test]
fn plain_text_is_one_markdown_segment() {
    let segments = split_segments("No citations here.");
    assert_eq!(segments, vec![Segment::Markdown("No citations here.".to_owned())]);
}

#[test]
fn bracket_spans_become_citations() {
    let segments = split_segments("See [week3.pdf] for details.");
    assert_eq!(
        segments,
        vec![
            Segment::Markdown("See ".to_owned()),
            Segment::Citation("week3.pdf".to_owned()),
            Segment::Markdown(" for details.".to_owned()),
        ]
    );
}

#[test]
fn adjacent_citations_split_cleanly() {
    let segments = split_segments("[a.pdf][b.pdf]");
    assert_eq!(
        segments,
        vec![
            Segment::Citation("a.pdf".to_owned()),
            Segment::Citation("b.pdf".to_owned()),
        ]
    );
}

#[test]
fn long_bracket_span_stays_prose() {
    let long = format!("[{}]", "x".repeat(120));
    let segments = split_segments(&long);
    assert_eq!(segments, vec![Segment::Markdown(long)]);
}

#[test]
fn empty_brackets_stay_prose() {
    let segments = split_segments("an empty [] pair");
    assert_eq!(segments, vec![Segment::Markdown("an empty [] pair".to_owned())]);
}

#[test]
fn unclosed_bracket_stays_prose() {
    let segments = split_segments("dangling [bracket");
    assert_eq!(segments, vec![Segment::Markdown("dangling [bracket".to_owned())]);
}

#[test]
fn unique_sources_dedupe_in_first_seen_order() {
    let content = "From [b.pdf] and [a.pdf], also [b.pdf] again.";
    assert_eq!(unique_sources(content), vec!["b.pdf".to_owned(), "a.pdf".to_owned()]);
}

#[test]
fn unique_sources_skip_urls() {
    let content = "See [notes.pdf] and [https://example.com/page].";
    assert_eq!(unique_sources(content), vec!["notes.pdf".to_owned()]);
}

#[test]
fn markdown_renders_emphasis_and_lists() {
    let out = render_markdown_html("**bold** text\n\n- one\n- two");
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<li>one</li>"));
}

#[test]
fn markdown_strips_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
}
