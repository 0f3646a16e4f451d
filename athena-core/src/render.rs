//! Message rendering for HTML-capable front-ends.
//!
//! Fenced code blocks become `<pre><code class="language-…">` elements.
//! All other text is escaped as well, so a message never carries live markup.

use regex::Regex;
use std::sync::LazyLock;

static CODE_BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w+)?\n([\s\S]*?)```").unwrap());

/// Language class used when a fence names none.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// Escape the five HTML metacharacters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render message text as an HTML fragment.
pub fn render_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    let mut last = 0;

    for caps in CODE_BLOCK_PATTERN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&escape_html(&text[last..whole.start()]));

        let lang = caps.get(1).map_or(DEFAULT_CODE_LANGUAGE, |m| m.as_str());
        let code = caps.get(2).map_or("", |m| m.as_str());
        out.push_str("<pre><code class=\"language-");
        out.push_str(&escape_html(lang));
        out.push_str("\">");
        out.push_str(&escape_html(code));
        out.push_str("</code></pre>");

        last = whole.end();
    }

    out.push_str(&escape_html(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let html = render_html("Try:\n```python\nprint(1 < 2)\n```\nDone");
        assert_eq!(
            html,
            "Try:\n<pre><code class=\"language-python\">print(1 &lt; 2)\n</code></pre>\nDone"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render_html("```\nlet x = 1;\n```");
        assert_eq!(html, "<pre><code class=\"language-text\">let x = 1;\n</code></pre>");
    }

    #[test]
    fn test_script_never_survives() {
        let html = render_html("```html\n<script>alert(1)</script>\n```");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_html("plain <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_unterminated_fence_is_plain_text() {
        let html = render_html("```rust\nfn main() {}");
        assert!(!html.contains("<pre>"));
        assert_eq!(html, "```rust\nfn main() {}");
    }

    #[test]
    fn test_multiple_blocks() {
        let text = "```a\n1\n``` and ```b\n2\n```";
        assert_eq!(
            render_html(text),
            "<pre><code class=\"language-a\">1\n</code></pre> and \
             <pre><code class=\"language-b\">2\n</code></pre>"
        );
    }

    #[test]
    fn test_templates_render() {
        use crate::category::Category;
        use crate::templates::pool;

        for template in pool(Category::Mathematics) {
            let html = render_html(template);
            assert!(!html.contains("```\n"), "fence left unrendered: {html}");
        }
    }
}
