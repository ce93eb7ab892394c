//! Quill Formatting Profile
//!
//! The complete, typed, defaulted collection of style settings the
//! formatting engine reads during one format call:
//! - [`FormatProfile`]: one flat struct, every option defaulted at
//!   construction, mutated only through the tolerant [`FormatProfile::load`]
//! - the flat string-to-string wire map with stable keys and sentinel-token
//!   encodings, driven by a single descriptor table
//! - the option vocabularies: [`AlignMode`]/[`SplitStrategy`],
//!   [`BracePosition`], [`TabPolicy`]
//!
//! A profile is plain data. It is not internally synchronized; give each
//! concurrent format call its own clone or a shared read-only reference.

mod align;
mod profile;
mod registry;
mod vocab;

use thiserror::Error;

pub use align::{AlignMode, SplitStrategy};
pub use profile::FormatProfile;
pub use registry::{option_keys, KEY_PREFIX};
pub use vocab::{BracePosition, TabPolicy};

/// Sentinel token for an explicit "insert whitespace" decision.
pub const INSERT: &str = "insert";
/// Sentinel token for an explicit "do not insert whitespace" decision.
pub const DO_NOT_INSERT: &str = "do not insert";

/// Diagnoses produced by the strict loading entry point.
///
/// The tolerant [`FormatProfile::load`] repairs these conditions silently;
/// [`FormatProfile::try_load`] applies the same repairs but reports them so
/// a settings surface can tell the user which entries were ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown option key '{0}'")]
    UnknownKey(String),

    #[error("invalid value '{value}' for option '{key}'; compiled-in default restored")]
    InvalidValue { key: String, value: String },
}
