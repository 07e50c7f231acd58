//! Parse and render the functional RGB/RGBA notation.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, Component};
use crate::convert::round_alpha;
use crate::error::ConvertError;
use crate::registry::FormatKey;

/// Grammar for `rgb(r, g, b)` / `rgba(r, g, b, a)` after whitespace removal
/// and lowercasing. Digit-only channels structurally exclude negatives.
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgba?\((\d+),(\d+),(\d+)(?:,([\d.]+))?\)$").unwrap());

fn invalid(reason: impl Into<String>) -> ConvertError {
    ConvertError::invalid(FormatKey::Rgb, reason)
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`. Whitespace is insignificant
/// and the function name is case-insensitive. Channels above 255 and alpha
/// above 1 are rejected, never clamped; a missing alpha defaults to 1.
pub(crate) fn parse(input: &str) -> Result<Color, ConvertError> {
    let cleaned = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let caps = PATTERN
        .captures(&cleaned)
        .ok_or_else(|| invalid("expected rgb(r, g, b) or rgba(r, g, b, a)"))?;

    let red = channel(&caps[1])?;
    let green = channel(&caps[2])?;
    let blue = channel(&caps[3])?;
    let alpha = match caps.get(4) {
        Some(alpha) => parse_alpha(alpha.as_str())?,
        None => Color::OPAQUE,
    };

    Ok(Color::new(red, green, blue, alpha))
}

fn channel(text: &str) -> Result<u8, ConvertError> {
    text.parse()
        .map_err(|_| invalid(format!("channel {text} above 255")))
}

/// Alpha is rounded to 2 decimals before the range check, so a literal like
/// `1.004` is accepted as fully opaque.
fn parse_alpha(text: &str) -> Result<Component, ConvertError> {
    let alpha: Component = text.parse().map_err(|_| invalid("malformed alpha"))?;
    let alpha = round_alpha(alpha);
    if alpha > 1.0 {
        return Err(invalid("alpha above 1"));
    }
    Ok(alpha)
}

/// Render `RGB(r, g, b)`, or `RGBA(r, g, b, a)` with alpha rounded to 2
/// decimals when the color is not fully opaque.
pub(crate) fn render(color: &Color) -> String {
    if color.is_opaque() {
        format!("RGB({}, {}, {})", color.red, color.green, color.blue)
    } else {
        format!(
            "RGBA({}, {}, {}, {})",
            color.red,
            color.green,
            color.blue,
            round_alpha(color.alpha)
        )
    }
}
