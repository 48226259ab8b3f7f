//! gmi2md-core: Core library for converting Gemtext to Markdown
//!
//! This crate provides:
//! - Line classification (Gemtext line types)
//! - Per-line rendering (link rewriting, fence handling)
//! - Spacing normalization (blank lines and `<br>` markers)
//! - The converter driving all three over a document

pub mod convert;
pub mod line;
pub mod render;
pub mod spacing;

pub use convert::{Converter, ConverterOptions, gmi_to_md};
pub use line::{LineKind, classify};
pub use render::{BREAK_MARKER, FENCE, render};
pub use spacing::{Spacing, decide};
