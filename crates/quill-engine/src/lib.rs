//! Quill Formatting Engine
//!
//! Decides where whitespace, line breaks, continuation indentation, and
//! braces go for a parsed source unit, under a caller-supplied
//! [`FormatProfile`]. Formatting is a pure synchronous computation: no I/O,
//! no shared state, no cancellation points. Concurrent calls only need
//! their own profile reference.

pub mod alignment;
mod edits;
pub mod policy;
pub mod spacing;
mod visitor;
mod writer;

pub use edits::{minimal_edits, TextEdit};
use quill_options::FormatProfile;
use quill_syntax::SourceUnit;

/// Format one source unit into fresh text.
pub fn format(unit: &SourceUnit, profile: &FormatProfile) -> String {
    visitor::format_unit(unit, profile)
}

/// Format one source unit and express the result as replacements against
/// the text it was parsed from.
pub fn format_edits(original: &str, unit: &SourceUnit, profile: &FormatProfile) -> Vec<TextEdit> {
    minimal_edits(original, &format(unit, profile))
}

/// Whether `original` is already in the profile's style.
pub fn is_formatted(original: &str, unit: &SourceUnit, profile: &FormatProfile) -> bool {
    format(unit, profile) == original
}
