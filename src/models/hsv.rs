//! Model a color with the HSV notation.

use super::Hue;
use crate::color::Component;

colorshift_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color.
        hue: Hue,
        /// The saturation percentage.
        saturation: Component,
        /// The value percentage.
        value: Component,
    }
}
