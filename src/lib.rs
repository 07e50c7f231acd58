//! colorcast converts colors between the textual notations used on the web:
//! hexadecimal, functional RGB/RGBA and functional HSL/HSLA.
//!
//! Every notation parses into a canonical sRGB [`Color`] and renders back out
//! of it. The [`convert()`] engine ties the two together: one string in, the
//! full set of equivalent representations out.

#![deny(missing_docs)]

mod color;
mod convert;
mod engine;
mod error;
mod hex;
mod hsl;
pub mod registry;
mod rgb;

#[cfg(test)]
mod test;

pub use color::{Color, Component};
pub use engine::{convert, convert_str};
pub use error::ConvertError;
pub use registry::{Format, FormatKey};
