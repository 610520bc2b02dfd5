//! Model a color with 8-bit red, green and blue channels.

use crate::{
    color::Component,
    math::{denormalize, normalize},
};

colorshift_macros::gen_model! {
    /// A color specified with red, green and blue channels in `0..=255`.
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Return the red, green and blue channels.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Return the channels scaled into `0.0..=1.0`.
    pub fn normalized(&self) -> [Component; 3] {
        self.channels().map(normalize)
    }

    /// Create a color from channels in `0.0..=1.0`. Each channel is scaled
    /// to `0..=255` and smart rounded.
    pub fn from_normalized(channels: [Component; 3]) -> Self {
        let [red, green, blue] = channels.map(denormalize);
        Self::new(red, green, blue)
    }
}
