//! Settings validation error.
//!
//! Sub-crates define their own error enums (`sirs-output` has `OutputError`
//! for sink failures); this one covers the only failure the core can
//! produce — a configuration field outside its allowed domain.  It is
//! raised synchronously at `Settings` construction, never mid-run.

use thiserror::Error;

use crate::params::RangeError;

/// A configuration field rejected during [`Settings`] validation.
///
/// Carries the offending field's name so the caller can report exactly
/// which key of the settings file is wrong.
///
/// [`Settings`]: crate::Settings
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("invalid value for `{field}`: {source}")]
pub struct SettingsError {
    /// The settings-file key that failed validation.
    pub field: &'static str,
    #[source]
    pub source: RangeError,
}

impl SettingsError {
    pub(crate) fn new(field: &'static str, source: RangeError) -> SettingsError {
        SettingsError { field, source }
    }
}
