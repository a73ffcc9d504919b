use super::*;

#[test]
fn renders_list_items() {
    let out = render_markdown_html("* 1/2 x 3/4 inch parting strip\n* 1 x 2 common pine");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<li>1/2 x 3/4 inch parting strip</li>"));
    assert!(out.contains("<li>1 x 2 common pine</li>"));
}

#[test]
fn renders_paragraphs_and_emphasis() {
    let out = render_markdown_html("High-end furniture projects are *great*.");
    assert_eq!(out.trim(), "<p>High-end furniture projects are <em>great</em>.</p>");
}

#[test]
fn drops_raw_html_blocks() {
    let out = render_markdown_html("<script>alert(1)</script>\n\nplain");
    assert!(!out.contains("<script>"));
    assert!(out.contains("<p>plain</p>"));
}

#[test]
fn drops_inline_html() {
    let out = render_markdown_html("before <img src=x onerror=alert(1)> after");
    assert!(!out.contains("<img"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
