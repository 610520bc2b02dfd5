//! Model a color with the HSL notation.

use super::Hue;
use crate::color::Component;

colorshift_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Hue,
        /// The saturation percentage.
        saturation: Component,
        /// The lightness percentage.
        lightness: Component,
    }
}
