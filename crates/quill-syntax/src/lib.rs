//! Quill structural input model
//!
//! The read-only tree the formatting engine consumes. An external parser (or
//! a test) builds one [`SourceUnit`] per file; the engine never mutates it
//! and never looks at raw source text except to compute replacement spans.

mod ast;

pub use ast::*;
