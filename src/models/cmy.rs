//! Model a color with the subtractive CMY notation.

use crate::color::Component;

colorshift_macros::gen_model! {
    /// A color specified with cyan, magenta and yellow percentages.
    pub struct Cmy {
        /// The cyan percentage.
        cyan: Component,
        /// The magenta percentage.
        magenta: Component,
        /// The yellow percentage.
        yellow: Component,
    }
}
