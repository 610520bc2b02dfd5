//! Each color format is modeled with its own type. Conversions between them
//! are implemented on the models themselves and always pass through [`Rgb`].
//!
//! ```rust
//! use colorshift::models::{Cmyk, Rgb};
//! use colorshift::{FromBase, ToBase};
//!
//! let cmyk = Cmyk::from_base(&Rgb::new(255, 128, 0));
//! assert_eq!(cmyk.to_string(), "cmyk(0.00, 49.80, 100.00, 0.00)");
//! assert_eq!(cmyk.to_base(), Rgb::new(255, 128, 0));
//! ```

use std::fmt;

use crate::{
    color::{Color, ColorFormat, Component},
    math::smart_round,
};

mod cmy;
mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod rgb;

pub use cmy::Cmy;
pub use cmyk::Cmyk;
pub use hex::Hex;
pub(crate) use hex::HEX_DIGITS;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// A trait implemented for color models that can be stored in a generic
/// [`Color`].
pub trait Model: Into<Color> {
    /// The format this model represents.
    const FORMAT: ColorFormat;

    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;
}

/// Render a single component of a model the way it appears inside
/// `name(v1, v2, ...)`.
pub trait Render {
    /// Write the component to the formatter.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for u8 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for Component {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print `-0.00`.
        let value = if *self == 0.0 { 0.0 } else { *self };
        write!(f, "{:.2}", value)
    }
}

/// A hue angle in degrees.
///
/// Validated input hues are whole degrees in `0..=360`. Hues produced by a
/// conversion keep their fraction and lie in `0..360`; they are only
/// rounded when rendered.
///
/// The wrapped value is not range checked. Conversions saturate out of
/// range components instead of panicking.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Hue(pub Component);

impl Hue {
    /// Return the hue in degrees.
    pub fn degrees(self) -> Component {
        self.0
    }

    /// Return the hue smart rounded to whole degrees in `0..360`.
    pub fn rounded(self) -> u16 {
        smart_round(self.0) as u16 % 360
    }
}

impl Render for Hue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
