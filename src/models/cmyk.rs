//! Model a color with the subtractive CMYK notation. The conversion is the
//! naive, uncalibrated one; no color profile is involved.

use crate::color::Component;

colorshift_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages.
    pub struct Cmyk {
        /// The cyan percentage.
        cyan: Component,
        /// The magenta percentage.
        magenta: Component,
        /// The yellow percentage.
        yellow: Component,
        /// The key (black) percentage.
        key: Component,
    }
}
