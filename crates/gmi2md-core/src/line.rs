//! Gemtext line classification
//!
//! Maps one raw line of text, plus the current preformatted-mode flag,
//! to a line kind. Classification looks only at the right-trimmed text
//! and the flag, never at prior lines.

use crate::render::FENCE;

/// The kind of a Gemtext line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty (or whitespace-only) line
    Blank,
    /// `#`, `##`, or `###` followed by a space
    Heading,
    /// `=>` link line
    Link,
    /// `* ` unordered list item
    List,
    /// `>` blockquote line
    Quote,
    /// Anything else
    Paragraph,
    /// Raw content inside a fenced block
    Preformatted,
    /// A ``` fence line toggling preformatted mode
    FenceToggle,
}

/// Classify one right-trimmed line.
///
/// Rules are evaluated in order, first match wins. Fence lines win even
/// inside preformatted mode; Paragraph is a total catch-all, so every
/// line gets a kind.
pub fn classify(trimmed: &str, inside_preformatted: bool) -> LineKind {
    if trimmed.starts_with(FENCE) {
        return LineKind::FenceToggle;
    }
    if inside_preformatted {
        return LineKind::Preformatted;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_heading(trimmed) {
        return LineKind::Heading;
    }
    if trimmed.starts_with("=>") {
        return LineKind::Link;
    }
    if trimmed.starts_with("* ") {
        return LineKind::List;
    }
    if trimmed.starts_with('>') {
        return LineKind::Quote;
    }
    LineKind::Paragraph
}

/// One to three `#` characters followed by a single space.
fn is_heading(line: &str) -> bool {
    let level = line.len() - line.trim_start_matches('#').len();
    (1..=3).contains(&level) && line.as_bytes().get(level) == Some(&b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic_kinds() {
        assert_eq!(classify("", false), LineKind::Blank);
        assert_eq!(classify("# Title", false), LineKind::Heading);
        assert_eq!(classify("=> /path", false), LineKind::Link);
        assert_eq!(classify("* item", false), LineKind::List);
        assert_eq!(classify("> quoted", false), LineKind::Quote);
        assert_eq!(classify("just text", false), LineKind::Paragraph);
        assert_eq!(classify("```", false), LineKind::FenceToggle);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# one", false), LineKind::Heading);
        assert_eq!(classify("## two", false), LineKind::Heading);
        assert_eq!(classify("### three", false), LineKind::Heading);
        // Four hashes is not a Gemtext heading
        assert_eq!(classify("#### four", false), LineKind::Paragraph);
        // Missing space after the hashes
        assert_eq!(classify("#tight", false), LineKind::Paragraph);
        assert_eq!(classify("#", false), LineKind::Paragraph);
    }

    #[test]
    fn test_preformatted_mode_suppresses_patterns() {
        assert_eq!(classify("# Title", true), LineKind::Preformatted);
        assert_eq!(classify("=> /path", true), LineKind::Preformatted);
        assert_eq!(classify("", true), LineKind::Preformatted);
    }

    #[test]
    fn test_fence_wins_inside_preformatted() {
        assert_eq!(classify("```", true), LineKind::FenceToggle);
        assert_eq!(classify("```rust", false), LineKind::FenceToggle);
    }

    #[test]
    fn test_quote_without_space() {
        // Gemtext quotes need no space after the marker
        assert_eq!(classify(">tight", false), LineKind::Quote);
    }

    #[test]
    fn test_list_requires_space() {
        assert_eq!(classify("*tight", false), LineKind::Paragraph);
    }
}
