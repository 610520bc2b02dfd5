//! Conversions between the color models.
//!
//! RGB is the canonical pivot: every model converts to [`Rgb`] and can be
//! created from it, so any conversion is a trip to RGB and out again.
//!
//! ```rust
//! use colorshift::{Color, ColorFormat};
//! use colorshift::models::Rgb;
//!
//! let orange = Color::from(Rgb::new(255, 128, 0));
//! assert_eq!(orange.to_format(ColorFormat::Hex).to_string(), "#ff8000");
//! assert_eq!(orange.to_format(ColorFormat::Hsl).to_string(), "hsl(30, 100.00, 50.00)");
//! ```

use crate::{
    color::{Color, ColorFormat},
    models::{Cmy, Cmyk, Hex, Hsl, Hsv, Hue, Model, Rgb},
};

/// The model every conversion pivots through.
pub type Base = Rgb;

/// Used to convert any model to the base model.
pub trait ToBase {
    /// Convert the model to the base model.
    fn to_base(&self) -> Base;
}

/// Used to create any model from the base model.
pub trait FromBase {
    /// Create the model from the base model.
    fn from_base(base: &Base) -> Self;
}

type FromBaseFn = fn(&Base) -> Color;

fn from_base<M: FromBase + Model>(base: &Base) -> Color {
    M::from_base(base).to_color()
}

/// Conversions out of the base model, indexed by [`ColorFormat`].
const FROM_BASE: [FromBaseFn; 6] = [
    from_base::<Hex>,
    from_base::<Rgb>,
    from_base::<Cmy>,
    from_base::<Cmyk>,
    from_base::<Hsl>,
    from_base::<Hsv>,
];

impl Color {
    /// Convert this color to the base (RGB) model.
    pub fn to_base(&self) -> Base {
        match self {
            Color::Hex(model) => model.to_base(),
            Color::Rgb(model) => model.to_base(),
            Color::Cmy(model) => model.to_base(),
            Color::Cmyk(model) => model.to_base(),
            Color::Hsl(model) => model.to_base(),
            Color::Hsv(model) => model.to_base(),
        }
    }

    /// Create a color in the given format from the base (RGB) model.
    pub fn from_base(base: &Base, format: ColorFormat) -> Self {
        FROM_BASE[format as usize](base)
    }

    /// Convert this color to the specified format. Converting to the format
    /// the color is already in returns the color unchanged.
    pub fn to_format(&self, format: ColorFormat) -> Self {
        if self.format() == format {
            return self.clone();
        }

        Self::from_base(&self.to_base(), format)
    }
}

impl ToBase for Rgb {
    fn to_base(&self) -> Base {
        *self
    }
}

impl FromBase for Rgb {
    fn from_base(base: &Base) -> Self {
        *base
    }
}

impl ToBase for Hex {
    fn to_base(&self) -> Base {
        let [red, green, blue] = util::hex_to_rgb(self.code());
        Rgb::new(red, green, blue)
    }
}

impl FromBase for Hex {
    fn from_base(base: &Base) -> Self {
        Hex::from_valid_code(util::rgb_to_hex(base.channels()))
    }
}

impl ToBase for Cmy {
    fn to_base(&self) -> Base {
        Rgb::from_normalized(util::cmy_to_rgb([self.cyan, self.magenta, self.yellow]))
    }
}

impl FromBase for Cmy {
    fn from_base(base: &Base) -> Self {
        let [cyan, magenta, yellow] = util::rgb_to_cmy(base.normalized());
        Cmy::new(cyan, magenta, yellow)
    }
}

impl ToBase for Cmyk {
    fn to_base(&self) -> Base {
        Rgb::from_normalized(util::cmyk_to_rgb([
            self.cyan,
            self.magenta,
            self.yellow,
            self.key,
        ]))
    }
}

impl FromBase for Cmyk {
    fn from_base(base: &Base) -> Self {
        let [cyan, magenta, yellow, key] = util::rgb_to_cmyk(base.normalized());
        Cmyk::new(cyan, magenta, yellow, key)
    }
}

impl ToBase for Hsl {
    fn to_base(&self) -> Base {
        Rgb::from_normalized(util::hsl_to_rgb([
            self.hue.degrees(),
            self.saturation,
            self.lightness,
        ]))
    }
}

impl FromBase for Hsl {
    fn from_base(base: &Base) -> Self {
        let [hue, saturation, lightness] = util::rgb_to_hsl(base.normalized());
        Hsl::new(Hue(hue), saturation, lightness)
    }
}

impl ToBase for Hsv {
    fn to_base(&self) -> Base {
        Rgb::from_normalized(util::hsv_to_rgb([
            self.hue.degrees(),
            self.saturation,
            self.value,
        ]))
    }
}

impl FromBase for Hsv {
    fn from_base(base: &Base) -> Self {
        let [hue, saturation, value] = util::rgb_to_hsv(base.normalized());
        Hsv::new(Hue(hue), saturation, value)
    }
}

/// The formulas behind the conversions. RGB values are normalized to
/// `0.0..=1.0`, hues are in degrees and all other components are
/// percentages.
mod util {
    use crate::{
        color::Component,
        math::{almost_zero, to_percent},
        models::HEX_DIGITS,
    };

    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    /// Encode each channel as two hex digits.
    pub fn rgb_to_hex(channels: [u8; 3]) -> String {
        let mut code = String::with_capacity(HEX_DIGITS);
        for channel in channels {
            code.push(char::from(DIGITS[usize::from(channel / 16)]));
            code.push(char::from(DIGITS[usize::from(channel % 16)]));
        }
        code
    }

    fn hex_digit(digit: u8) -> u8 {
        match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            _ => unreachable!("hex codes are validated on construction"),
        }
    }

    /// Decode each pair of hex digits into a channel.
    pub fn hex_to_rgb(code: &str) -> [u8; 3] {
        let mut channels = [0; 3];
        for (channel, pair) in channels.iter_mut().zip(code.as_bytes().chunks_exact(2)) {
            *channel = hex_digit(pair[0]) * 16 + hex_digit(pair[1]);
        }
        channels
    }

    /// Convert from RGB to CMY.
    pub fn rgb_to_cmy(from: [Component; 3]) -> [Component; 3] {
        from.map(|value| to_percent(1.0 - value))
    }

    /// Convert from CMY to RGB.
    pub fn cmy_to_rgb(from: [Component; 3]) -> [Component; 3] {
        from.map(|value| 1.0 - value / 100.0)
    }

    /// Convert from RGB to CMYK.
    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let [red, green, blue] = from;

        let key = 1.0 - red.max(green).max(blue);
        let x = 1.0 - key;

        // Pure black.
        if almost_zero(x) {
            return [0.0, 0.0, 0.0, to_percent(key)];
        }

        [
            (1.0 - red - key) / x,
            (1.0 - green - key) / x,
            (1.0 - blue - key) / x,
            key,
        ]
        .map(to_percent)
    }

    /// Convert from CMYK to RGB.
    pub fn cmyk_to_rgb(from: [Component; 4]) -> [Component; 3] {
        let [cyan, magenta, yellow, key] = from;
        let x = 1.0 - key / 100.0;
        [cyan, magenta, yellow].map(|value| (1.0 - value / 100.0) * x)
    }

    /// Calculate the hue from RGB components and return it along with the
    /// min and max RGB values.
    fn rgb_to_hue_with_min_max(from: [Component; 3]) -> (Component, Component, Component) {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let chroma = max - min;

        let hue = if almost_zero(chroma) {
            0.0
        } else {
            60.0 * if max == red {
                (green - blue) / chroma + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / chroma + 2.0
            } else {
                (red - green) / chroma + 4.0
            }
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;

        let saturation = if almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        [hue, to_percent(saturation), to_percent(lightness)]
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        [hue, to_percent(saturation), to_percent(max)]
    }

    /// Spread `chroma` over the channels according to the sector of the hue
    /// circle `hue` falls in, then lift every channel by `m`.
    fn hue_to_rgb(hue: Component, chroma: Component, m: Component) -> [Component; 3] {
        let h = hue / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

        // A hue of exactly 360 degrees lands in the last sector.
        let (red, green, blue) = match h.floor() as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        [red + m, green + m, blue + m]
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: [Component; 3]) -> [Component; 3] {
        let [hue, saturation, lightness] = from;
        let (saturation, lightness) = (saturation / 100.0, lightness / 100.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let m = lightness - chroma / 2.0;

        hue_to_rgb(hue, chroma, m)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: [Component; 3]) -> [Component; 3] {
        let [hue, saturation, value] = from;
        let (saturation, value) = (saturation / 100.0, value / 100.0);

        let chroma = value * saturation;
        let m = value - chroma;

        hue_to_rgb(hue, chroma, m)
    }
}
