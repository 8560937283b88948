// WHY: Single error type for the lookup and input failures the library can signal
// Analysis itself is total, so these are the only distinct failure modes callers see

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlushError {
    /// Preset name is not one of the predefined style presets
    #[error("unknown style preset '{0}'")]
    UnknownPreset(String),

    /// Template name is not in the template library
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    /// Input file format that cannot be read as plain text
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
