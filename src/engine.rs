//! The conversion engine: one string in, every other notation out.

use crate::error::ConvertError;
use crate::registry::{self, FormatKey};

/// Convert `input`, declared to be in the `source` notation, into every other
/// registered notation.
///
/// The result preserves registry order and never includes the source
/// notation. An empty input yields an empty result set rather than an error;
/// it models a caller that has nothing to convert yet. A non-empty input that
/// the source notation rejects fails with
/// [`ConvertError::InvalidFormat`] and produces no partial results.
///
/// The engine is a pure function: identical arguments always yield an
/// identical result.
pub fn convert(input: &str, source: FormatKey) -> Result<Vec<(FormatKey, String)>, ConvertError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let color = registry::get(source).parse(input)?;

    Ok(registry::all()
        .iter()
        .filter(|format| format.key != source)
        .map(|format| (format.key, format.render(&color)))
        .collect())
}

/// Convert with the source notation given as its key string.
///
/// This is the entry point for callers that hold the key as text, e.g. the
/// value of a select list. An unrecognized key fails with
/// [`ConvertError::UnknownFormat`].
pub fn convert_str(
    input: &str,
    source_key: &str,
) -> Result<Vec<(FormatKey, String)>, ConvertError> {
    convert(input, source_key.parse()?)
}
