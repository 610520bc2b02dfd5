//! Extract component tokens from loosely formatted strings and validate
//! them into a [`Color`].
//!
//! Parsing happens in two phases. [`extract`] scans the string for runs of
//! legal characters without interpreting them, then [`parse`] turns each
//! token into a number and checks it against the range of its component.

use std::ops::RangeInclusive;

use crate::{
    color::{Color, ColorFormat, Component},
    error::{ConversionError, Result},
    math::smart_round,
    models::{Cmy, Cmyk, Hex, Hsl, Hsv, Hue, Rgb, HEX_DIGITS},
};

const CHANNEL_RANGE: RangeInclusive<Component> = 0.0..=255.0;
const PERCENT_RANGE: RangeInclusive<Component> = 0.0..=100.0;
const HUE_RANGE: RangeInclusive<Component> = 0.0..=360.0;

/// Extract exactly `arity` tokens from `raw`, scanning left to right.
///
/// In hex mode a token is a run of exactly six hex digits (case
/// insensitive); any other character discards the run collected so far. In
/// decimal mode a token is a maximal run of digits and `.`; a lone `.` is
/// not a token. Scanning stops as soon as `arity` tokens are found.
///
/// ```rust
/// use colorshift::extract;
/// assert_eq!(extract("rgb( 255 , 0,128 )", 3, false).unwrap(), ["255", "0", "128"]);
/// assert_eq!(extract("zx123abc def654", 1, true).unwrap(), ["123abc"]);
/// ```
pub fn extract(raw: &str, arity: usize, is_hex: bool) -> Result<Vec<&str>> {
    let tokens = if is_hex {
        extract_hex(raw, arity)
    } else {
        extract_decimal(raw, arity)
    };

    tracing::trace!(raw, ?tokens, arity, "extracted tokens");

    if tokens.len() != arity {
        return Err(ConversionError::InsufficientTokens {
            raw: raw.to_owned(),
            found: tokens.len(),
            required: arity,
        });
    }

    Ok(tokens)
}

fn extract_hex(raw: &str, arity: usize) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(arity);
    let mut start = None;

    for (index, c) in raw.char_indices() {
        if tokens.len() == arity {
            break;
        }

        if !c.is_ascii_hexdigit() {
            start = None;
            continue;
        }

        // Hex digits are ASCII, so a run of them spans one byte per digit.
        let begin = *start.get_or_insert(index);
        if index + 1 - begin == HEX_DIGITS {
            tokens.push(&raw[begin..=index]);
            start = None;
        }
    }

    tokens
}

fn extract_decimal(raw: &str, arity: usize) -> Vec<&str> {
    fn push<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
        if token != "." {
            tokens.push(token);
        }
    }

    let mut tokens = Vec::with_capacity(arity);
    let mut start = None;

    for (index, c) in raw.char_indices() {
        if tokens.len() == arity {
            return tokens;
        }

        if c.is_ascii_digit() || c == '.' {
            start.get_or_insert(index);
        } else if let Some(begin) = start.take() {
            push(&mut tokens, &raw[begin..index]);
        }
    }

    if tokens.len() < arity {
        if let Some(begin) = start {
            push(&mut tokens, &raw[begin..]);
        }
    }

    tokens
}

/// Parse `raw` as a color in the given format.
///
/// RGB channels and hues are smart rounded to integers before they are
/// range checked. Either the whole color is valid or an error is returned.
///
/// ```rust
/// use colorshift::{parse, ColorFormat};
/// let color = parse("hsl(210deg, 40%, 60.5%)", ColorFormat::Hsl).unwrap();
/// assert_eq!(color.to_string(), "hsl(210, 40.00, 60.50)");
/// ```
pub fn parse(raw: &str, format: ColorFormat) -> Result<Color> {
    let tokens = extract(raw, format.arity(), format == ColorFormat::Hex)?;

    let color = match (format, tokens.as_slice()) {
        (ColorFormat::Hex, &[code]) => Hex::new(code)?.into(),
        (ColorFormat::Rgb, &[red, green, blue]) => Rgb::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        )
        .into(),
        (ColorFormat::Cmy, &[cyan, magenta, yellow]) => Cmy::new(
            percent("cyan", cyan)?,
            percent("magenta", magenta)?,
            percent("yellow", yellow)?,
        )
        .into(),
        (ColorFormat::Cmyk, &[cyan, magenta, yellow, key]) => Cmyk::new(
            percent("cyan", cyan)?,
            percent("magenta", magenta)?,
            percent("yellow", yellow)?,
            percent("key", key)?,
        )
        .into(),
        (ColorFormat::Hsl, &[h, saturation, lightness]) => Hsl::new(
            hue(h)?,
            percent("saturation", saturation)?,
            percent("lightness", lightness)?,
        )
        .into(),
        (ColorFormat::Hsv, &[h, saturation, value]) => Hsv::new(
            hue(h)?,
            percent("saturation", saturation)?,
            percent("value", value)?,
        )
        .into(),
        _ => unreachable!("extract returns one token per component"),
    };

    Ok(color)
}

fn number(text: &str) -> Result<Component> {
    text.parse().map_err(|_| ConversionError::MalformedToken {
        text: text.to_owned(),
    })
}

fn bounded(
    component: &'static str,
    text: &str,
    value: Component,
    range: RangeInclusive<Component>,
) -> Result<Component> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::OutOfRange {
            component,
            text: text.to_owned(),
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn channel(component: &'static str, text: &str) -> Result<u8> {
    let value = bounded(component, text, smart_round(number(text)?), CHANNEL_RANGE)?;
    Ok(value as u8)
}

fn percent(component: &'static str, text: &str) -> Result<Component> {
    bounded(component, text, number(text)?, PERCENT_RANGE)
}

fn hue(text: &str) -> Result<Hue> {
    bounded("hue", text, smart_round(number(text)?), HUE_RANGE).map(Hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_decimal_tokens() {
        assert_eq!(
            extract("rgb( 255 , 0,128 )", 3, false).unwrap(),
            ["255", "0", "128"]
        );
        assert_eq!(
            extract("cmy(123, ba12.4,   51 )", 3, false).unwrap(),
            ["123", "12.4", "51"]
        );
        assert_eq!(
            extract("1.23 word 3,2 1.34", 4, false).unwrap(),
            ["1.23", "3", "2", "1.34"]
        );
    }

    #[test]
    fn extraction_stops_at_arity() {
        assert_eq!(extract("t3st 123 456", 2, false).unwrap(), ["3", "123"]);
        assert_eq!(extract("1 2 3 4 5", 3, false).unwrap(), ["1", "2", "3"]);
    }

    #[test]
    fn final_token_is_flushed() {
        assert_eq!(extract("10, 20, 30", 3, false).unwrap(), ["10", "20", "30"]);
    }

    #[test]
    fn lone_dot_is_not_a_token() {
        assert_eq!(
            extract("  .  ", 1, false),
            Err(ConversionError::InsufficientTokens {
                raw: "  .  ".to_owned(),
                found: 0,
                required: 1,
            })
        );
        assert_eq!(extract("1 . 2 .", 2, false).unwrap(), ["1", "2"]);
    }

    #[test]
    fn percent_signs_separate_tokens() {
        assert_eq!(
            extract("cmyk(10%,20%,30%,40%)", 4, false).unwrap(),
            ["10", "20", "30", "40"]
        );
    }

    #[test]
    fn too_few_tokens() {
        assert_eq!(
            extract("rgb(1, 2)", 3, false),
            Err(ConversionError::InsufficientTokens {
                raw: "rgb(1, 2)".to_owned(),
                found: 2,
                required: 3,
            })
        );
    }

    #[test]
    fn extracts_hex_tokens() {
        assert_eq!(extract("123abc", 1, true).unwrap(), ["123abc"]);
        assert_eq!(extract("zx123abc def654", 2, true).unwrap(), ["123abc", "def654"]);
        assert_eq!(
            extract(
                "test sentence with hex in it: 123456, 654321, abc123, aefacd",
                4,
                true
            )
            .unwrap(),
            ["123456", "654321", "abc123", "aefacd"]
        );
        assert_eq!(extract("#FFaa00", 1, true).unwrap(), ["FFaa00"]);
    }

    #[test]
    fn hex_runs_are_cut_at_six_digits() {
        assert_eq!(extract("#1234567", 1, true).unwrap(), ["123456"]);
    }

    #[test]
    fn short_hex_runs_are_discarded() {
        assert_eq!(
            extract("#fff", 1, true),
            Err(ConversionError::InsufficientTokens {
                raw: "#fff".to_owned(),
                found: 0,
                required: 1,
            })
        );
        assert!(extract("#ff ffff", 1, true).is_err());
    }

    #[test]
    fn parses_every_format() {
        assert_eq!(
            parse("#FF8000", ColorFormat::Hex).unwrap(),
            Color::Hex(Hex::new("ff8000").unwrap())
        );
        assert_eq!(
            parse("rgb(255, 128, 0)", ColorFormat::Rgb).unwrap(),
            Color::Rgb(Rgb::new(255, 128, 0))
        );
        assert_eq!(
            parse("cmy(0, 49.8, 100)", ColorFormat::Cmy).unwrap(),
            Color::Cmy(Cmy::new(0.0, 49.8, 100.0))
        );
        assert_eq!(
            parse("cmyk(10%, 20%, 30%, 40%)", ColorFormat::Cmyk).unwrap(),
            Color::Cmyk(Cmyk::new(10.0, 20.0, 30.0, 40.0))
        );
        assert_eq!(
            parse("hsl(30, 100%, 50%)", ColorFormat::Hsl).unwrap(),
            Color::Hsl(Hsl::new(Hue(30.0), 100.0, 50.0))
        );
        assert_eq!(
            parse("hsv(30, 100%, 100%)", ColorFormat::Hsv).unwrap(),
            Color::Hsv(Hsv::new(Hue(30.0), 100.0, 100.0))
        );
    }

    #[test]
    fn declared_formats_accept_bare_values() {
        assert_eq!(
            parse("ffffff", ColorFormat::Hex).unwrap(),
            Color::Hex(Hex::new("ffffff").unwrap())
        );
        assert_eq!(
            parse("10 20 30", ColorFormat::Rgb).unwrap(),
            Color::Rgb(Rgb::new(10, 20, 30))
        );
    }

    #[test]
    fn channels_and_hues_are_smart_rounded() {
        assert_eq!(
            parse("rgb(127.5, 0.49, 254.5)", ColorFormat::Rgb).unwrap(),
            Color::Rgb(Rgb::new(128, 0, 255))
        );
        assert_eq!(
            parse("hsl(359.5, 0, 0)", ColorFormat::Hsl).unwrap(),
            Color::Hsl(Hsl::new(Hue(360.0), 0.0, 0.0))
        );
    }

    #[test]
    fn channels_out_of_range() {
        assert_eq!(
            parse("rgb(256, 0, 0)", ColorFormat::Rgb),
            Err(ConversionError::OutOfRange {
                component: "red",
                text: "256".to_owned(),
                value: 256.0,
                min: 0.0,
                max: 255.0,
            })
        );
        assert_eq!(
            parse("rgb(0, 0, 255.5)", ColorFormat::Rgb),
            Err(ConversionError::OutOfRange {
                component: "blue",
                text: "255.5".to_owned(),
                value: 256.0,
                min: 0.0,
                max: 255.0,
            })
        );
    }

    #[test]
    fn percentages_out_of_range() {
        assert_eq!(
            parse("cmyk(0, 0, 0, 100.5)", ColorFormat::Cmyk),
            Err(ConversionError::OutOfRange {
                component: "key",
                text: "100.5".to_owned(),
                value: 100.5,
                min: 0.0,
                max: 100.0,
            })
        );
        assert!(parse("hsv(0, 0, 101)", ColorFormat::Hsv).is_err());
        assert!(parse("cmy(0, 120, 0)", ColorFormat::Cmy).is_err());
    }

    #[test]
    fn hue_out_of_range() {
        assert_eq!(
            parse("hsl(361, 50, 50)", ColorFormat::Hsl),
            Err(ConversionError::OutOfRange {
                component: "hue",
                text: "361".to_owned(),
                value: 361.0,
                min: 0.0,
                max: 360.0,
            })
        );
        assert!(parse("hsl(360, 50, 50)", ColorFormat::Hsl).is_ok());
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(
            parse("rgb(1.2.3, 0, 0)", ColorFormat::Rgb),
            Err(ConversionError::MalformedToken {
                text: "1.2.3".to_owned()
            })
        );
        assert_eq!(
            parse("cmy(.., 0, 0)", ColorFormat::Cmy),
            Err(ConversionError::MalformedToken {
                text: "..".to_owned()
            })
        );
    }

    #[test]
    fn first_error_aborts() {
        let error = parse("rgb(300, 1.2.3, 0)", ColorFormat::Rgb).unwrap_err();
        assert!(matches!(
            error,
            ConversionError::OutOfRange {
                component: "red",
                ..
            }
        ));
    }
}
