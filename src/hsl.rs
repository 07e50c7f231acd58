//! Parse and render the functional HSL/HSLA notation.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, Component};
use crate::convert::{self, round_alpha};
use crate::error::ConvertError;
use crate::registry::FormatKey;

/// Grammar for `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` after whitespace
/// removal and lowercasing. Digit-only components structurally exclude
/// negatives.
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^hsla?\((\d+),(\d+)%,(\d+)%(?:,([\d.]+))?\)$").unwrap());

fn invalid(reason: impl Into<String>) -> ConvertError {
    ConvertError::invalid(FormatKey::Hsl, reason)
}

/// Parse `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`. Whitespace is
/// insignificant and the function name is case-insensitive.
///
/// Hue degrees and percentages are not range-checked up front; a hue above
/// 360 simply wraps through the interpolation, while percentages that drive
/// a channel outside the sRGB range are rejected once the transform has run.
/// Alpha follows the same rules as the RGB notation.
pub(crate) fn parse(input: &str) -> Result<Color, ConvertError> {
    let cleaned = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let caps = PATTERN
        .captures(&cleaned)
        .ok_or_else(|| invalid("expected hsl(h, s%, l%) or hsla(h, s%, l%, a)"))?;

    let hue = fraction(&caps[1], 360.0)?;
    let saturation = fraction(&caps[2], 100.0)?;
    let lightness = fraction(&caps[3], 100.0)?;
    let alpha = match caps.get(4) {
        Some(alpha) => parse_alpha(alpha.as_str())?,
        None => Color::OPAQUE,
    };

    let (red, green, blue) = convert::hsl_to_rgb(hue, saturation, lightness);

    Ok(Color::new(
        channel(red)?,
        channel(green)?,
        channel(blue)?,
        alpha,
    ))
}

/// Parse an integer component and scale it to a fraction of `unit`.
fn fraction(text: &str, unit: Component) -> Result<Component, ConvertError> {
    let value: Component = text.parse().map_err(|_| invalid("malformed component"))?;
    Ok(value / unit)
}

fn parse_alpha(text: &str) -> Result<Component, ConvertError> {
    let alpha: Component = text.parse().map_err(|_| invalid("malformed alpha"))?;
    let alpha = round_alpha(alpha);
    if alpha > 1.0 {
        return Err(invalid("alpha above 1"));
    }
    Ok(alpha)
}

/// Scale a fractional channel to 8 bits, rounding to the nearest integer.
/// Inputs whose percentages drive the transform outside `[0, 255]` fail here
/// rather than wrap or clamp; rounding itself may legitimately land exactly
/// on the boundary values.
fn channel(fraction: Component) -> Result<u8, ConvertError> {
    let scaled = (fraction * 255.0).round();
    if !scaled.is_finite() || !(0.0..=255.0).contains(&scaled) {
        return Err(invalid("channel outside the sRGB range"));
    }
    Ok(scaled as u8)
}

/// Render `HSL(h, s%, l%)`, or `HSLA(h, s%, l%, a)` with alpha rounded to 2
/// decimals when the color is not fully opaque. Hue rounds to the nearest
/// degree with no wrap-to-zero, saturation and lightness to the nearest
/// percent.
pub(crate) fn render(color: &Color) -> String {
    let (hue, saturation, lightness) = convert::rgb_to_hsl(
        Component::from(color.red) / 255.0,
        Component::from(color.green) / 255.0,
        Component::from(color.blue) / 255.0,
    );

    let hue = (hue * 360.0).round() as u16;
    let saturation = (saturation * 100.0).round() as u8;
    let lightness = (lightness * 100.0).round() as u8;

    if color.is_opaque() {
        format!("HSL({hue}, {saturation}%, {lightness}%)")
    } else {
        format!(
            "HSLA({hue}, {saturation}%, {lightness}%, {})",
            round_alpha(color.alpha)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_hues() {
        assert_eq!(
            parse("hsl(120, 100%, 50%)").unwrap(),
            Color::opaque(0, 255, 0)
        );
        assert_eq!(parse("hsl(0, 100%, 50%)").unwrap(), Color::opaque(255, 0, 0));
        assert_eq!(
            parse("hsl(240, 100%, 50%)").unwrap(),
            Color::opaque(0, 0, 255)
        );
    }

    #[test]
    fn zero_saturation_is_achromatic() {
        assert_eq!(
            parse("hsl(0, 0%, 50%)").unwrap(),
            Color::opaque(128, 128, 128)
        );
        // Hue is irrelevant without saturation.
        assert_eq!(
            parse("hsl(217, 0%, 50%)").unwrap(),
            Color::opaque(128, 128, 128)
        );
    }

    #[test]
    fn whitespace_and_case_are_insignificant() {
        assert_eq!(
            parse("  HSL( 120 , 100% , 50% )  ").unwrap(),
            Color::opaque(0, 255, 0)
        );
    }

    #[test]
    fn alpha_follows_the_rgb_rules() {
        assert_eq!(
            parse("hsla(120, 100%, 50%, 0.5)").unwrap(),
            Color::new(0, 255, 0, 0.5)
        );
        assert_eq!(parse("hsla(120, 100%, 50%, 0.456)").unwrap().alpha, 0.46);
        assert!(parse("hsla(120, 100%, 50%, 1.5)").is_err());
    }

    #[test]
    fn hue_above_a_full_turn_wraps_through_the_interpolation() {
        assert_eq!(
            parse("hsl(400, 100%, 50%)").unwrap(),
            Color::opaque(255, 170, 0)
        );
    }

    #[test]
    fn percentages_that_leave_the_srgb_range_are_rejected() {
        assert!(matches!(
            parse("hsl(0, 200%, 50%)"),
            Err(ConvertError::InvalidFormat { .. })
        ));
        assert!(parse("hsl(0, 100%, 150%)").is_err());
    }

    #[test]
    fn shape_deviations_are_rejected() {
        for input in [
            "hsl(120, 100, 50)",
            "hsl(120, 100%, 50)",
            "hsl(120%, 100%, 50%)",
            "hsl(120, 100%)",
            "hsl(120, 100%, 50%, 0.5, 1)",
            "hsl(-10, 100%, 50%)",
            "rgb(1, 2, 3)",
        ] {
            assert!(parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn renders_primary_hues() {
        assert_eq!(render(&Color::opaque(255, 0, 0)), "HSL(0, 100%, 50%)");
        assert_eq!(render(&Color::opaque(0, 255, 0)), "HSL(120, 100%, 50%)");
        assert_eq!(render(&Color::opaque(0, 0, 255)), "HSL(240, 100%, 50%)");
    }

    #[test]
    fn renders_achromatic_grays_with_zero_hue_and_saturation() {
        assert_eq!(render(&Color::opaque(128, 128, 128)), "HSL(0, 0%, 50%)");
        assert_eq!(render(&Color::opaque(255, 255, 255)), "HSL(0, 0%, 100%)");
        assert_eq!(render(&Color::opaque(0, 0, 0)), "HSL(0, 0%, 0%)");
    }

    #[test]
    fn renders_alpha_when_translucent() {
        assert_eq!(
            render(&Color::new(255, 0, 0, 0.5)),
            "HSLA(0, 100%, 50%, 0.5)"
        );
    }

    #[test]
    fn hue_just_below_a_full_turn_rounds_to_360() {
        // The hue fraction for this color is 0.99934...; rounding to whole
        // degrees lands on 360 and is emitted as-is.
        assert_eq!(render(&Color::opaque(255, 0, 1)), "HSL(360, 100%, 50%)");
    }

    #[test]
    fn round_trips_through_parse() {
        for original in [
            Color::opaque(255, 0, 0),
            Color::opaque(0, 0, 255),
            Color::opaque(128, 128, 128),
            Color::new(123, 45, 67, 0.25),
        ] {
            let rendered = render(&original);
            assert_eq!(parse(&rendered).unwrap(), original);
        }
    }
}
