//! Errors surfaced while detecting, parsing or validating a color.

use thiserror::Error;

use crate::color::Component;

/// Everything that can go wrong while turning a raw string into a color.
///
/// Errors are values: a failing color never stops other colors in a batch
/// from being converted, and no partially converted result is ever returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConversionError {
    /// No format was declared and none could be detected from the input.
    #[error("could not detect the color format of `{raw}`")]
    UndetectableFormat {
        /// The input that was inspected.
        raw: String,
    },

    /// The input did not contain enough numeric or hex tokens.
    #[error("expected {required} value(s) in `{raw}` but found {found}")]
    InsufficientTokens {
        /// The input the tokens were extracted from.
        raw: String,
        /// How many tokens were found.
        found: usize,
        /// How many tokens the format needs.
        required: usize,
    },

    /// A value fell outside the legal range of its component.
    #[error("{component} value `{text}` ({value}) must be between {min} and {max}")]
    OutOfRange {
        /// The name of the component, e.g. `red` or `hue`.
        component: &'static str,
        /// The token the value was parsed from.
        text: String,
        /// The parsed (and, for integer components, rounded) value.
        value: Component,
        /// The smallest legal value.
        min: Component,
        /// The largest legal value.
        max: Component,
    },

    /// A token survived extraction but is not a valid number.
    #[error("`{text}` is not a valid number")]
    MalformedToken {
        /// The offending token.
        text: String,
    },

    /// A format name did not match any supported format.
    #[error("unknown color format `{name}`, expected one of hex, rgb, cmy, cmyk, hsl or hsv")]
    UnknownFormat {
        /// The name that was given.
        name: String,
    },
}

/// Result type for color conversions.
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;
