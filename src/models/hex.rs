//! Model a color as a six digit hexadecimal code.

use std::fmt;

use super::Model;
use crate::{
    color::{Color, ColorFormat},
    error::{ConversionError, Result},
};

/// The number of digits in a hex code.
pub(crate) const HEX_DIGITS: usize = 6;

/// A color specified as six hexadecimal digits, two per RGB channel.
///
/// The code is stored lower-cased and without the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    code: String,
}

impl Hex {
    /// The name used when rendering a color in this model.
    pub const NAME: &'static str = "hex";

    /// Create a new hex color from a code with or without a leading `#`.
    /// The code is case insensitive.
    pub fn new(code: &str) -> Result<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);

        if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConversionError::MalformedToken {
                text: code.to_owned(),
            });
        }

        Ok(Self {
            code: digits.to_ascii_lowercase(),
        })
    }

    /// Wrap a code that is already known to be six lower-case hex digits.
    pub(crate) fn from_valid_code(code: String) -> Self {
        debug_assert!(code.len() == HEX_DIGITS);
        Self { code }
    }

    /// Return the six lower-case hex digits, without the leading `#`.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Model for Hex {
    const FORMAT: ColorFormat = ColorFormat::Hex;

    fn to_color(&self) -> Color {
        Color::Hex(self.clone())
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.code)
    }
}
