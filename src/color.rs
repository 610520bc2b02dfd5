//! A [`Color`] holds the validated components of a color in any of the
//! supported formats.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    error::ConversionError,
    models::{Cmy, Cmyk, Hex, Hsl, Hsv, Rgb},
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored as.
pub type Component = f64;

/// The textual/numeric encodings a color can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColorFormat {
    /// Six hexadecimal digits, two per RGB channel, e.g. `#ff8000`.
    Hex = 0,
    /// Red, green and blue channels in `0..=255`.
    Rgb = 1,
    /// Cyan, magenta and yellow percentages.
    Cmy = 2,
    /// Cyan, magenta, yellow and key (black) percentages.
    Cmyk = 3,
    /// Hue in degrees with saturation and lightness percentages.
    Hsl = 4,
    /// Hue in degrees with saturation and value percentages.
    Hsv = 5,
}

impl ColorFormat {
    /// Every format, in canonical order.
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Cmy,
        ColorFormat::Cmyk,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
    ];

    /// The lower-case name of the format.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => Hex::NAME,
            ColorFormat::Rgb => Rgb::NAME,
            ColorFormat::Cmy => Cmy::NAME,
            ColorFormat::Cmyk => Cmyk::NAME,
            ColorFormat::Hsl => Hsl::NAME,
            ColorFormat::Hsv => Hsv::NAME,
        }
    }

    /// The number of tokens a color in this format is written with.
    pub fn arity(self) -> usize {
        match self {
            ColorFormat::Hex => 1,
            ColorFormat::Cmyk => 4,
            ColorFormat::Rgb | ColorFormat::Cmy | ColorFormat::Hsl | ColorFormat::Hsv => 3,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ConversionError;

    /// Parse a format name such as `cmyk`, also accepting flag spellings
    /// like `-cmyk` or `--CMYK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('-');

        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::UnknownFormat { name: s.to_owned() })
    }
}

bitflags! {
    /// A set of [`ColorFormat`]s, used to request conversions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Formats : u8 {
        /// Request [`ColorFormat::Hex`].
        const HEX = 1 << 0;
        /// Request [`ColorFormat::Rgb`].
        const RGB = 1 << 1;
        /// Request [`ColorFormat::Cmy`].
        const CMY = 1 << 2;
        /// Request [`ColorFormat::Cmyk`].
        const CMYK = 1 << 3;
        /// Request [`ColorFormat::Hsl`].
        const HSL = 1 << 4;
        /// Request [`ColorFormat::Hsv`].
        const HSV = 1 << 5;
    }
}

impl Formats {
    /// Iterate over the formats in this set, in canonical order.
    pub fn formats(self) -> impl Iterator<Item = ColorFormat> {
        ColorFormat::ALL
            .into_iter()
            .filter(move |format| self.contains(Formats::from(*format)))
    }
}

impl From<ColorFormat> for Formats {
    fn from(value: ColorFormat) -> Self {
        Formats::from_bits_retain(1 << value as u8)
    }
}

impl FromIterator<ColorFormat> for Formats {
    fn from_iter<T: IntoIterator<Item = ColorFormat>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Formats::empty(), |formats, format| formats | format.into())
    }
}

/// A validated color in one of the supported formats.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A color written as a hex code.
    Hex(Hex),
    /// A color written with RGB channels.
    Rgb(Rgb),
    /// A color written with CMY percentages.
    Cmy(Cmy),
    /// A color written with CMYK percentages.
    Cmyk(Cmyk),
    /// A color written in the HSL notation.
    Hsl(Hsl),
    /// A color written in the HSV notation.
    Hsv(Hsv),
}

impl Color {
    /// Return the format the components of this color are specified in.
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Hex(_) => ColorFormat::Hex,
            Color::Rgb(_) => ColorFormat::Rgb,
            Color::Cmy(_) => ColorFormat::Cmy,
            Color::Cmyk(_) => ColorFormat::Cmyk,
            Color::Hsl(_) => ColorFormat::Hsl,
            Color::Hsv(_) => ColorFormat::Hsv,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(model) => model.fmt(f),
            Color::Rgb(model) => model.fmt(f),
            Color::Cmy(model) => model.fmt(f),
            Color::Cmyk(model) => model.fmt(f),
            Color::Hsl(model) => model.fmt(f),
            Color::Hsv(model) => model.fmt(f),
        }
    }
}
