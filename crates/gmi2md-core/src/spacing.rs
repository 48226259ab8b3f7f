//! Spacing normalization
//!
//! Decides, for each transition between output lines, whether a blank
//! separator line is inserted and whether the line gets a `<br>` prefix.
//! Both decisions are evaluated independently per line.

use crate::line::LineKind;

/// Spacing decision for one line transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    /// Insert an empty line before the current line
    pub blank_before: bool,
    /// Prefix the current line with the break marker
    pub break_marker: bool,
}

/// Decide spacing for `current` following `previous`.
///
/// With `line_breaks` enabled, adjacent link lines (and links following
/// a paragraph) get a `<br>` prefix; with it disabled, links join the
/// blank-separated kinds instead.
pub fn decide(current: LineKind, previous: LineKind, line_breaks: bool) -> Spacing {
    let blank_before = previous != LineKind::Blank
        && current != LineKind::Blank
        && blank_separated(previous, line_breaks)
        && blank_separated(current, line_breaks);

    let break_marker = line_breaks
        && current == LineKind::Link
        && matches!(previous, LineKind::Link | LineKind::Paragraph);

    Spacing {
        blank_before,
        break_marker,
    }
}

/// Kinds that get blank lines between adjacent members.
fn blank_separated(kind: LineKind, line_breaks: bool) -> bool {
    match kind {
        LineKind::FenceToggle | LineKind::Heading | LineKind::Paragraph => true,
        LineKind::Link => !line_breaks,
        LineKind::Blank | LineKind::List | LineKind::Quote | LineKind::Preformatted => false,
    }
}
