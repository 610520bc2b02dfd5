//! The entry points that take a raw color string through detection,
//! parsing and conversion.

use std::fmt;

use rayon::prelude::*;

use crate::{
    color::{Color, ColorFormat, Formats},
    detect::detect,
    error::{ConversionError, Result},
    models::Rgb,
    parse::parse,
};

/// The conversions of a single color into every requested format.
///
/// All entries are derived from one RGB value computed during the
/// conversion, including an entry in the source format.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionResult {
    source: Color,
    rgb: Rgb,
    colors: Vec<Color>,
}

impl ConversionResult {
    /// The validated input color.
    pub fn source(&self) -> &Color {
        &self.source
    }

    /// The canonical RGB value every entry was derived from.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Return the converted color for `format`, if it was requested.
    pub fn get(&self, format: ColorFormat) -> Option<&Color> {
        self.colors.iter().find(|color| color.format() == format)
    }

    /// The formats contained in this result.
    pub fn formats(&self) -> Formats {
        self.colors.iter().map(Color::format).collect()
    }

    /// Iterate over the converted colors in canonical format order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// The number of converted colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if no format was requested.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConversionResult {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ConversionResult {
    /// One line per format, e.g. `RGB: rgb(255, 255, 255)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(
                f,
                "{}: {}",
                color.format().name().to_ascii_uppercase(),
                color
            )?;
        }
        Ok(())
    }
}

/// Convert a raw color string into every format in `wanted`.
///
/// If `declared` is `None` the format is detected from the string first.
///
/// ```rust
/// use colorshift::{convert, ColorFormat, Formats};
///
/// let result = convert("#ffffff", None, Formats::RGB | Formats::CMYK).unwrap();
/// assert_eq!(result.get(ColorFormat::Rgb).unwrap().to_string(), "rgb(255, 255, 255)");
/// assert_eq!(result.get(ColorFormat::Cmyk).unwrap().to_string(), "cmyk(0.00, 0.00, 0.00, 0.00)");
/// ```
#[tracing::instrument(level = "debug", skip(wanted))]
pub fn convert(
    raw: &str,
    declared: Option<ColorFormat>,
    wanted: Formats,
) -> Result<ConversionResult> {
    let format = match declared {
        Some(format) => format,
        None => detect(raw).ok_or_else(|| ConversionError::UndetectableFormat {
            raw: raw.to_owned(),
        })?,
    };

    let source = parse(raw, format).inspect_err(|error| {
        tracing::debug!(%error, "rejected color");
    })?;
    let rgb = source.to_base();

    let colors = wanted
        .formats()
        .map(|format| Color::from_base(&rgb, format))
        .collect();

    Ok(ConversionResult {
        source,
        rgb,
        colors,
    })
}

/// Convert many raw color strings in parallel. The results are returned in
/// the order of `inputs`, and a failing input does not affect the others.
pub fn convert_batch<S>(
    inputs: &[S],
    declared: Option<ColorFormat>,
    wanted: Formats,
) -> Vec<Result<ConversionResult>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|raw| convert(raw.as_ref(), declared, wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cmyk, Hex, Hsl, Hue};

    #[test]
    fn converts_white_hex() {
        let result = convert("#ffffff", None, Formats::RGB | Formats::CMYK).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.get(ColorFormat::Rgb),
            Some(&Color::Rgb(Rgb::new(255, 255, 255)))
        );
        assert_eq!(
            result.get(ColorFormat::Cmyk),
            Some(&Color::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 0.0)))
        );
        assert_eq!(result.get(ColorFormat::Hex), None);
        assert_eq!(result.formats(), Formats::RGB | Formats::CMYK);
    }

    #[test]
    fn declared_format_overrides_detection() {
        // Detection would pick RGB because of the label.
        let result = convert("rgb 10 20 30 40", Some(ColorFormat::Cmyk), Formats::CMYK).unwrap();
        assert_eq!(
            result.source(),
            &Color::Cmyk(Cmyk::new(10.0, 20.0, 30.0, 40.0))
        );

        let result = convert("FF0000", Some(ColorFormat::Hex), Formats::RGB).unwrap();
        assert_eq!(result.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn source_format_is_derived_from_rgb() {
        let result = convert("cmyk(12.34, 0, 0, 1)", None, Formats::all()).unwrap();
        assert_eq!(result.len(), 6);
        assert_eq!(result.rgb(), Rgb::new(221, 252, 252));
        assert_eq!(
            result.source(),
            &Color::Cmyk(Cmyk::new(12.34, 0.0, 0.0, 1.0))
        );
        assert_eq!(
            result.get(ColorFormat::Cmyk),
            Some(&Color::from_base(&result.rgb(), ColorFormat::Cmyk))
        );
        assert_eq!(
            result.get(ColorFormat::Cmyk).unwrap().to_string(),
            "cmyk(12.30, 0.00, 0.00, 1.18)"
        );
    }

    #[test]
    fn every_entry_is_derived_from_rgb() {
        let inputs = [
            "#336699",
            "rgb(10, 20, 30)",
            "cmy(1, 2, 3)",
            "hsl(200, 30%, 40%)",
            "hsv(10, 20, 30)",
        ];
        for raw in inputs {
            let result = convert(raw, None, Formats::all()).unwrap();
            for color in &result {
                let derived = Color::from_base(&result.rgb(), color.format());
                assert_eq!(color, &derived, "{}", raw);
            }
        }
    }

    #[test]
    fn results_are_in_canonical_order() {
        let result = convert("hsl(0, 100%, 50%)", None, Formats::HSV | Formats::HEX | Formats::RGB)
            .unwrap();
        let formats: Vec<_> = result.iter().map(Color::format).collect();
        assert_eq!(
            formats,
            vec![ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsv]
        );
        assert_eq!(
            result.source(),
            &Color::Hsl(Hsl::new(Hue(0.0), 100.0, 50.0))
        );
    }

    #[test]
    fn renders_one_line_per_format() {
        let result = convert("rgb(255, 128, 0)", None, Formats::all()).unwrap();
        assert_eq!(
            result.to_string(),
            "HEX: #ff8000\n\
             RGB: rgb(255, 128, 0)\n\
             CMY: cmy(0.00, 49.80, 100.00)\n\
             CMYK: cmyk(0.00, 49.80, 100.00, 0.00)\n\
             HSL: hsl(30, 100.00, 50.00)\n\
             HSV: hsv(30, 100.00, 100.00)"
        );
    }

    #[test]
    fn nothing_requested() {
        let result = convert("#000000", None, Formats::empty()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.to_string(), "");
        assert_eq!(result.source(), &Color::Hex(Hex::new("000000").unwrap()));
    }

    #[test]
    fn undetectable_format() {
        assert_eq!(
            convert("red", None, Formats::all()),
            Err(ConversionError::UndetectableFormat {
                raw: "red".to_owned()
            })
        );
    }

    #[test]
    fn validation_errors_are_returned() {
        assert!(matches!(
            convert("rgb(1, 2)", None, Formats::HEX),
            Err(ConversionError::InsufficientTokens {
                found: 2,
                required: 3,
                ..
            })
        ));
        assert!(matches!(
            convert("hsv(400, 0, 0)", None, Formats::HEX),
            Err(ConversionError::OutOfRange {
                component: "hue",
                ..
            })
        ));
    }

    #[test]
    fn batch_keeps_input_order() {
        let inputs: Vec<String> = (0..=255).map(|v| format!("rgb({v}, 0, 0)")).collect();
        let results = convert_batch(&inputs, None, Formats::HEX);
        assert_eq!(results.len(), 256);
        for (v, result) in results.into_iter().enumerate() {
            let result = result.unwrap();
            assert_eq!(result.rgb(), Rgb::new(v as u8, 0, 0));
        }
    }

    #[test]
    fn batch_failures_are_isolated() {
        let inputs = ["#ff0000", "nothing", "cmyk(0, 0, 0, 200)", "hsv(120, 100, 100)"];
        let results = convert_batch(&inputs, None, Formats::RGB);
        assert_eq!(results[0].as_ref().unwrap().rgb(), Rgb::new(255, 0, 0));
        assert!(matches!(
            results[1],
            Err(ConversionError::UndetectableFormat { .. })
        ));
        assert!(matches!(
            results[2],
            Err(ConversionError::OutOfRange { component: "key", .. })
        ));
        assert_eq!(results[3].as_ref().unwrap().rgb(), Rgb::new(0, 255, 0));
    }
}
