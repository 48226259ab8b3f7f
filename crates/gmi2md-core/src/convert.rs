//! Gemtext to Markdown conversion
//!
//! Drives the classifier, renderer, and spacing policy over the input
//! lines, threading the preformatted toggle and previous-line kind
//! through a single pass.

use crate::line::{LineKind, classify};
use crate::render::{BREAK_MARKER, render};
use crate::spacing::decide;


/// Options for the converter
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Prefix adjacent link lines with `<br>` instead of separating
    /// them with blank lines
    pub line_breaks: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self { line_breaks: true }
    }
}

/// Gemtext to Markdown converter
///
/// Stateless between calls: all conversion state lives inside one
/// [`Converter::convert`] invocation, so a converter can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Convert a whole Gemtext document to Markdown.
    ///
    /// Splits strictly on `\n`, so a trailing newline in the input
    /// yields a trailing newline in the output.
    pub fn convert(&self, input: &str) -> String {
        let mut inside_preformatted = false;
        let mut previous = LineKind::Blank;
        let mut output: Vec<String> = Vec::new();

        for original in input.split('\n') {
            let trimmed = original.trim_end();
            let kind = classify(trimmed, inside_preformatted);

            // The toggle flips before rendering so the renderer sees
            // the post-toggle state (entry vs. exit fence).
            if kind == LineKind::FenceToggle {
                inside_preformatted = !inside_preformatted;
            }

            let mut text = render(kind, trimmed, original, inside_preformatted);

            let spacing = decide(kind, previous, self.options.line_breaks);
            if spacing.blank_before {
                output.push(String::new());
            }
            if spacing.break_marker {
                text.insert_str(0, BREAK_MARKER);
            }

            output.push(text);
            previous = kind;
        }

        output.join("\n")
    }
}

/// Convert Gemtext to Markdown with default options
pub fn gmi_to_md(input: &str) -> String {
    Converter::new().convert(input)
}
