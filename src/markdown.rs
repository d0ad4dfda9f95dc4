//! Markdown Rendering
//!
//! Renders the shop's about text. Raw HTML in the source is escaped, since the
//! output is injected with `inner_html`.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Parse markdown into an HTML string
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_emphasis() {
        let html = parse_markdown("**StyleHub** — магазин.\n\nВторой абзац.");
        assert_eq!(html, "<p><strong>StyleHub</strong> — магазин.</p>\n<p>Второй абзац.</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("~~old~~ new"), "<del>old</del> new");
    }
}
