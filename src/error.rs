//! Error types for the conversion engine.

use thiserror::Error;

use crate::registry::FormatKey;

/// Errors produced by parsing and format lookup.
///
/// There are exactly two kinds: a per-input rejection that callers recover
/// from by re-prompting, and a registry miss that indicates a caller bug
/// rather than bad user input. A failed conversion never yields partial
/// results alongside the error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The input text does not match the grammar of the notation it was
    /// declared to be in.
    #[error("invalid {format} color: {reason}")]
    InvalidFormat {
        /// The notation the input was declared to be in.
        format: FormatKey,
        /// What the input failed to satisfy.
        reason: String,
    },

    /// A format key outside the registry was requested. Only reachable from
    /// the string-keyed entry points; enum keys cannot miss.
    #[error("unknown color format: {0:?}")]
    UnknownFormat(String),
}

impl ConvertError {
    /// Shorthand for an [`InvalidFormat`](Self::InvalidFormat) rejection.
    pub(crate) fn invalid(format: FormatKey, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format,
            reason: reason.into(),
        }
    }
}
