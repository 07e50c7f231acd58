//! Pure numeric transforms between fractional RGB and HSL components.
//!
//! Everything here operates on fractions in `[0, 1]`, with hue expressed as a
//! fraction of a full turn. The functions know nothing about textual
//! notations; the notation modules scale to and from 8-bit channels and
//! degrees/percentages around them.

use crate::color::Component;

/// Round an alpha value to the 2-decimal precision every notation carries.
pub(crate) fn round_alpha(alpha: Component) -> Component {
    (alpha * 100.0).round() / 100.0
}

/// The piecewise hue interpolation at the heart of HSL→RGB: map the hue
/// offset `t` to a channel fraction between `p` and `q`.
///
/// `t` is wrapped into range by a single `+1`/`-1` step before branching on
/// the six sextants.
pub(crate) fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert fractional hue/saturation/lightness to fractional RGB channels.
pub(crate) fn hsl_to_rgb(
    hue: Component,
    saturation: Component,
    lightness: Component,
) -> (Component, Component, Component) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    (
        hue_to_rgb(p, q, hue + 1.0 / 3.0),
        hue_to_rgb(p, q, hue),
        hue_to_rgb(p, q, hue - 1.0 / 3.0),
    )
}

/// Convert fractional RGB channels to fractional hue/saturation/lightness.
///
/// When several channels tie for the maximum, the hue branch is chosen by the
/// first of them in red, green, blue order.
pub(crate) fn rgb_to_hsl(
    red: Component,
    green: Component,
    blue: Component,
) -> (Component, Component, Component) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == red {
        ((green - blue) / delta + if green < blue { 6.0 } else { 0.0 }) / 6.0
    } else if max == green {
        ((blue - red) / delta + 2.0) / 6.0
    } else {
        ((red - green) / delta + 4.0) / 6.0
    };

    (hue, saturation, lightness)
}
