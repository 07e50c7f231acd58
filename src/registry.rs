//! The fixed, ordered table of supported notations.
//!
//! The registry is immutable process-wide configuration: descriptors are
//! registered at compile time and enumerated in registration order, which is
//! the order callers see in select lists and in engine output.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ConvertError;
use crate::{hex, hsl, rgb};

/// Identifies one of the supported textual notations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum FormatKey {
    /// Hexadecimal notation, `#rrggbb` or `#rrggbbaa`.
    Hex = 0,
    /// Functional RGB notation, `rgb(..)` or `rgba(..)`.
    Rgb = 1,
    /// Functional HSL notation, `hsl(..)` or `hsla(..)`.
    Hsl = 2,
}

impl FormatKey {
    /// The key string used at the string boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = ConvertError;

    /// Resolve a key string to its notation. An unrecognized key fails with
    /// [`ConvertError::UnknownFormat`]; that is a caller bug, not a
    /// user-input problem.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }
}

/// The parse/render pair and metadata for one textual notation.
#[derive(Debug)]
pub struct Format {
    /// The key this descriptor is registered under.
    pub key: FormatKey,
    /// Human-readable label for the notation.
    pub display_name: &'static str,
    /// Input hint shown by callers next to a field expecting this notation.
    pub placeholder: &'static str,
}

impl Format {
    /// Parse `input` as this notation into a canonical [`Color`].
    pub fn parse(&self, input: &str) -> Result<Color, ConvertError> {
        match self.key {
            FormatKey::Hex => hex::parse(input),
            FormatKey::Rgb => rgb::parse(input),
            FormatKey::Hsl => hsl::parse(input),
        }
    }

    /// Render a canonical [`Color`] in this notation.
    pub fn render(&self, color: &Color) -> String {
        match self.key {
            FormatKey::Hex => hex::render(color),
            FormatKey::Rgb => rgb::render(color),
            FormatKey::Hsl => hsl::render(color),
        }
    }
}

/// Descriptor table. Indexed by the `FormatKey` discriminant, so registration
/// order and key order must stay in sync.
static FORMATS: [Format; 3] = [
    Format {
        key: FormatKey::Hex,
        display_name: "HEX",
        placeholder: "Enter HEX Code (E.g.#FFFFFF or #666666)",
    },
    Format {
        key: FormatKey::Rgb,
        display_name: "RGB/RGBA",
        placeholder: "Enter Value (E.g rgb(255, 100, 100) or rgba(255, 100, 100, 0.5))",
    },
    Format {
        key: FormatKey::Hsl,
        display_name: "HSL/HSLA",
        placeholder: "Enter Value (E.g hsl(120, 100%, 50%) or hsla(120, 100%, 50%, 0.5))",
    },
];

/// Look up the descriptor registered for `key`.
pub fn get(key: FormatKey) -> &'static Format {
    &FORMATS[key as usize]
}

/// All descriptors, in registration order.
pub fn all() -> &'static [Format] {
    &FORMATS
}
