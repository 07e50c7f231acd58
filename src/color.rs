//! The canonical [`Color`] that every supported notation converts through.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for alpha and fractional channel math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for alpha and fractional channel math.
pub type Component = f64;

/// A color in the sRGB color space with 8-bit channels and fractional alpha.
///
/// Parsers construct a fresh `Color` for every conversion and renderers only
/// read from it; it is never mutated and carries no identity beyond value
/// equality. Out-of-range channel literals are rejected at parse time rather
/// than clamped, so a `Color` always holds what the input actually said.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The opacity in `[0, 1]`.
    pub alpha: Component,
}

impl Color {
    /// The alpha value of a color whose source notation carried no alpha
    /// channel.
    pub const OPAQUE: Component = 1.0;

    /// Create a new color from 8-bit channels and a fractional alpha.
    pub fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color from 8-bit channels.
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, Self::OPAQUE)
    }

    /// Whether the color is fully opaque. Renderers use this to choose
    /// between the 3- and 4-component forms of their notation.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= Self::OPAQUE
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&crate::hex::render(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        crate::hex::parse(&s).map_err(serde::de::Error::custom)
    }
}
