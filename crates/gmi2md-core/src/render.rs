//! Per-line rendering
//!
//! Rewrites one classified line into its Markdown form. Everything is
//! emitted raw: Gemtext line content is already Markdown-safe text, and
//! preformatted content must pass through untouched.

use crate::line::LineKind;

/// Fence delimiter shared by Gemtext and Markdown
pub const FENCE: &str = "```";

/// Inline break marker prepended between adjacent link lines
pub const BREAK_MARKER: &str = "<br>";

const LINK_PREFIX: &str = "=>";

/// Render one line.
///
/// `trimmed` is the right-trimmed text used for classification and
/// `original` the untouched input line. `inside_preformatted` is the
/// post-toggle state: for a fence line it is true when the fence opens
/// a block and false when it closes one.
pub fn render(kind: LineKind, trimmed: &str, original: &str, inside_preformatted: bool) -> String {
    match kind {
        LineKind::Blank => String::new(),
        // Opening fences keep their language tag, closing fences are
        // reduced to the bare delimiter.
        LineKind::FenceToggle if inside_preformatted => original.to_string(),
        LineKind::FenceToggle => FENCE.to_string(),
        LineKind::Preformatted => original.to_string(),
        LineKind::Link => render_link(trimmed),
        LineKind::Heading | LineKind::List | LineKind::Quote | LineKind::Paragraph => {
            trimmed.to_string()
        }
    }
}

/// Rewrite a `=>` link line as a Markdown link.
///
/// A bare http(s) URL with no title becomes an autolink `<url>`; any
/// other link becomes `[title](url)`, where the title defaults to the
/// URL itself when absent.
fn render_link(trimmed: &str) -> String {
    let link = trimmed.strip_prefix(LINK_PREFIX).unwrap_or(trimmed).trim();

    if link.starts_with("http") && !link.contains(char::is_whitespace) {
        return format!("<{link}>");
    }

    let (url, title) = match link.split_once(char::is_whitespace) {
        Some((url, rest)) => (url, rest.trim_start()),
        None => (link, link),
    };
    format!("[{title}]({url})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autolink() {
        assert_eq!(
            render(LineKind::Link, "=> http://example.com", "=> http://example.com", false),
            "<http://example.com>"
        );
    }

    #[test]
    fn test_titled_link() {
        assert_eq!(
            render_link("=> http://example.com Example Site"),
            "[Example Site](http://example.com)"
        );
        assert_eq!(render_link("=> /local/path Local"), "[Local](/local/path)");
    }

    #[test]
    fn test_non_http_url_without_title() {
        // Title defaults to the URL when none is given
        assert_eq!(render_link("=> /local/path"), "[/local/path](/local/path)");
        assert_eq!(
            render_link("=> gemini://example.org"),
            "[gemini://example.org](gemini://example.org)"
        );
    }

    #[test]
    fn test_link_whitespace_handling() {
        assert_eq!(render_link("=>\thttp://a.example\tTabbed"), "[Tabbed](http://a.example)");
        assert_eq!(render_link("=>   http://a.example"), "<http://a.example>");
        assert_eq!(render_link("=> /p  wide  title"), "[wide  title](/p)");
    }

    #[test]
    fn test_fence_rendering() {
        // Post-toggle true: entering a block, keep the language tag
        assert_eq!(render(LineKind::FenceToggle, "```rust", "```rust", true), "```rust");
        // Post-toggle false: leaving a block, bare delimiter only
        assert_eq!(render(LineKind::FenceToggle, "``` extra", "``` extra", false), "```");
    }

    #[test]
    fn test_preformatted_preserves_original() {
        let original = "  indented <raw> \t";
        assert_eq!(
            render(LineKind::Preformatted, original.trim_end(), original, true),
            original
        );
    }

    #[test]
    fn test_passthrough_kinds() {
        assert_eq!(render(LineKind::Heading, "# T", "# T", false), "# T");
        assert_eq!(render(LineKind::List, "* a", "* a", false), "* a");
        assert_eq!(render(LineKind::Quote, "> q", "> q", false), "> q");
        assert_eq!(render(LineKind::Paragraph, "text <b>", "text <b>", false), "text <b>");
        assert_eq!(render(LineKind::Blank, "", "", false), "");
    }
}
