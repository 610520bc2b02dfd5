//! Guess the format of a color from the shape of its string.

use crate::color::ColorFormat;

/// Detect the format of a color string.
///
/// The tests run in a fixed order, so that `cmyk(...)` is not mistaken for
/// CMY and `#...` wins over everything else:
///
/// 1. contains `#`: [`ColorFormat::Hex`]
/// 2. contains `rgb`: [`ColorFormat::Rgb`]
/// 3. contains `cmyk`: [`ColorFormat::Cmyk`]
/// 4. contains `cmy`: [`ColorFormat::Cmy`]
/// 5. starts with `hsl`: [`ColorFormat::Hsl`]
/// 6. starts with `hsv`: [`ColorFormat::Hsv`]
///
/// All tests are case insensitive and leading whitespace is ignored.
/// Detection never looks at the component values.
pub fn detect(raw: &str) -> Option<ColorFormat> {
    let lower = raw.trim_start().to_ascii_lowercase();

    let format = if lower.contains('#') {
        Some(ColorFormat::Hex)
    } else if lower.contains("rgb") {
        Some(ColorFormat::Rgb)
    } else if lower.contains("cmyk") {
        Some(ColorFormat::Cmyk)
    } else if lower.contains("cmy") {
        Some(ColorFormat::Cmy)
    } else if lower.starts_with("hsl") {
        Some(ColorFormat::Hsl)
    } else if lower.starts_with("hsv") {
        Some(ColorFormat::Hsv)
    } else {
        None
    };

    tracing::debug!(raw, ?format, "detected color format");

    format
}
