//! colorshift converts colors between the hex, RGB, CMY, CMYK, HSL and HSV
//! notations.
//!
//! A raw string goes through three steps: [`detect`] guesses its format
//! (unless one is declared), [`parse`] extracts and validates its
//! components, and the conversion engine derives every requested format
//! from a single RGB value. [`convert`] runs all three:
//!
//! ```rust
//! use colorshift::{convert, Formats};
//!
//! let result = convert("cmyk(0%, 50%, 100%, 0%)", None, Formats::HEX | Formats::HSL).unwrap();
//! assert_eq!(result.to_string(), "HEX: #ff8000\nHSL: hsl(30, 100.00, 50.00)");
//! ```
//!
//! CMYK conversions use the naive, uncalibrated formula.

#![deny(missing_docs)]

mod color;
mod convert;
mod detect;
mod error;
mod math;
pub mod models;
mod parse;
mod pipeline;


pub use color::{Color, ColorFormat, Component, Formats};
pub use convert::{Base, FromBase, ToBase};
pub use detect::detect;
pub use error::{ConversionError, Result};
pub use math::smart_round;
pub use models::Hue;
pub use parse::{extract, parse};
pub use pipeline::{convert, convert_batch, ConversionResult};
