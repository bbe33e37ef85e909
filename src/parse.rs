//! Turning external color representations into validated channel values.
//!
//! Strings go through a small CSS-style grammar:
//! * hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (`#` optional)
//! * functions: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()` with
//!   comma or whitespace separated numbers or percentages
//! * CSS color keywords and `transparent`
//!
//! Typed HSL and HSV inputs are kept in their own space so the hue the user
//! picked survives exactly; everything else is decomposed to RGBA.

use core::fmt;

use crate::convert::{hsl_to_rgb, hsv_to_rgb, round_alpha, wrap_hue};
use crate::model::{ColorInput, Hsla, Hsva, ParsedColor, Rgba};
use crate::named;
use crate::patch::{Channel, ChannelPatch, ChannelValue, coerce_number, parse_decimal};

/// Why a color could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorParseError {
    /// Blank input.
    Empty,
    /// Wrong number of hex digits or a non-hex character.
    InvalidHex,
    /// Malformed `rgb()`/`hsl()`/`hsv()` arguments.
    InvalidFunction,
    /// Not a hex literal, color function or known keyword.
    UnknownFormat,
    /// A patch lacks a channel its color space needs.
    MissingChannel(Channel),
    /// A channel value does not coerce to a number.
    NotANumber(Channel),
    /// A channel value is infinite or NaN.
    NonFinite,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "empty color string"),
            ColorParseError::InvalidHex => write!(f, "invalid hex color"),
            ColorParseError::InvalidFunction => {
                write!(f, "invalid rgb()/hsl()/hsv() arguments")
            }
            ColorParseError::UnknownFormat => write!(f, "unrecognized color format"),
            ColorParseError::MissingChannel(channel) => {
                write!(f, "missing `{}` channel", channel.name())
            }
            ColorParseError::NotANumber(channel) => {
                write!(f, "`{}` channel is not a number", channel.name())
            }
            ColorParseError::NonFinite => write!(f, "channel value is not finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorParseError {}

/// Parses `input` into the one color space it is expressed in.
///
/// HSL and HSV inputs without a hue take `old_hue`, or 0 when nothing is
/// carried. Missing alpha is 1. With `disable_alpha` set, alpha is forced to 1
/// before anything is derived from it; otherwise it is clamped to `[0, 1]` and
/// rounded to hundredths. Hue wraps into `[0, 360)`; other channels clamp.
pub fn parse_color_input(
    input: &ColorInput<'_>,
    old_hue: Option<f64>,
    disable_alpha: bool,
) -> Result<ParsedColor, ColorParseError> {
    let parsed = match *input {
        ColorInput::Css(text) => ParsedColor::Rgb(parse_css(text)?),
        ColorInput::Hex(text) => ParsedColor::Rgb(parse_hex(text)?),
        ColorInput::Rgb { r, g, b, a } => ParsedColor::Rgb(Rgba::new(
            rgb_channel(finite(r)?),
            rgb_channel(finite(g)?),
            rgb_channel(finite(b)?),
            finite(a.unwrap_or(1.0))?,
        )),
        ColorInput::Hsl { h, s, l, a } => ParsedColor::Hsl(Hsla::new(
            wrap_hue(finite(h.or(old_hue).unwrap_or(0.0))?),
            clamp01(finite(s)?),
            clamp01(finite(l)?),
            finite(a.unwrap_or(1.0))?,
        )),
        ColorInput::Hsv { h, s, v, a } => ParsedColor::Hsv(Hsva::new(
            wrap_hue(finite(h.or(old_hue).unwrap_or(0.0))?),
            clamp01(finite(s)?),
            clamp01(finite(v)?),
            finite(a.unwrap_or(1.0))?,
        )),
    };

    let alpha = if disable_alpha {
        1.0
    } else {
        round_alpha(clamp01(parsed.alpha()))
    };

    Ok(match parsed {
        ParsedColor::Rgb(c) => ParsedColor::Rgb(Rgba { a: alpha, ..c }),
        ParsedColor::Hsl(c) => ParsedColor::Hsl(Hsla { a: alpha, ..c }),
        ParsedColor::Hsv(c) => ParsedColor::Hsv(Hsva { a: alpha, ..c }),
    })
}

/// Strict check for a hex color literal: optional `#` then 3, 4, 6 or 8 hex
/// digits.
pub fn is_valid_hex_string(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses a hex literal (see [`is_valid_hex_string`]) into RGBA.
pub fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    let hex = hex.trim();
    if hex.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if !is_valid_hex_string(hex) {
        return Err(ColorParseError::InvalidHex);
    }

    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    // Validated above, every byte is a hex digit.
    let nibble = |c: u8| match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    };
    let short = |i: usize| nibble(digits[i]) * 17;
    let long = |i: usize| (nibble(digits[i]) << 4) | nibble(digits[i + 1]);

    let (r, g, b, a) = match digits.len() {
        3 => (short(0), short(1), short(2), 255),
        4 => (short(0), short(1), short(2), short(3)),
        6 => (long(0), long(2), long(4), 255),
        _ => (long(0), long(2), long(4), long(6)),
    };

    Ok(Rgba::new(r, g, b, a as f64 / 255.0))
}

/// Parses any supported CSS-style color string into RGBA.
pub fn parse_css(text: &str) -> Result<Rgba, ColorParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if text.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba::new(0, 0, 0, 0.0));
    }
    if let Some([r, g, b]) = named::lookup(text) {
        return Ok(Rgba::opaque(r, g, b));
    }
    if let Some((name, args)) = split_function(text) {
        return parse_function(name, args);
    }
    if is_valid_hex_string(text) {
        return parse_hex(text);
    }
    if text.starts_with('#') {
        return Err(ColorParseError::InvalidHex);
    }

    Err(ColorParseError::UnknownFormat)
}

/// Splits `name(args)` into its parts. The closing parenthesis is optional.
fn split_function(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let name = text[..open].trim();
    let args = text[open + 1..].trim();
    let args = args.strip_suffix(')').unwrap_or(args);
    Some((name, args))
}

#[derive(Debug, Clone, Copy)]
struct Unit {
    value: f64,
    percent: bool,
}

fn parse_unit(token: &str) -> Option<Unit> {
    let (number, percent) = match token.strip_suffix('%') {
        Some(number) => (number, true),
        None => (token, false),
    };
    let value = parse_decimal(number)?;
    value.is_finite().then_some(Unit { value, percent })
}

fn parse_function(name: &str, args: &str) -> Result<Rgba, ColorParseError> {
    let mut units: heapless::Vec<Unit, 4> = heapless::Vec::new();
    for token in args
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
    {
        let unit = parse_unit(token).ok_or(ColorParseError::InvalidFunction)?;
        units
            .push(unit)
            .map_err(|_| ColorParseError::InvalidFunction)?;
    }

    if units.len() < 3 {
        return Err(ColorParseError::InvalidFunction);
    }
    let alpha = units.get(3).map(|u| alpha_unit(*u)).unwrap_or(1.0);

    let lower = |n: &str| name.eq_ignore_ascii_case(n);
    if lower("rgb") || lower("rgba") {
        Ok(Rgba::new(
            rgb_unit(units[0]),
            rgb_unit(units[1]),
            rgb_unit(units[2]),
            alpha,
        ))
    } else if lower("hsl") || lower("hsla") {
        Ok(hsl_to_rgb(Hsla::new(
            hue_unit(units[0]),
            fraction_unit(units[1]),
            fraction_unit(units[2]),
            alpha,
        )))
    } else if lower("hsv") || lower("hsva") {
        Ok(hsv_to_rgb(Hsva::new(
            hue_unit(units[0]),
            fraction_unit(units[1]),
            fraction_unit(units[2]),
            alpha,
        )))
    } else {
        Err(ColorParseError::UnknownFormat)
    }
}

fn rgb_unit(unit: Unit) -> u8 {
    if unit.percent {
        rgb_channel(unit.value * 255.0 / 100.0)
    } else {
        rgb_channel(unit.value)
    }
}

fn hue_unit(unit: Unit) -> f64 {
    if unit.percent {
        wrap_hue(unit.value * 3.6)
    } else {
        wrap_hue(unit.value)
    }
}

fn fraction_unit(unit: Unit) -> f64 {
    if unit.percent {
        clamp01(unit.value / 100.0)
    } else {
        percent_or_fraction(unit.value)
    }
}

fn alpha_unit(unit: Unit) -> f64 {
    if unit.percent {
        clamp01(unit.value / 100.0)
    } else {
        clamp01(unit.value)
    }
}

/// Values up to 1 are fractions, larger values are percentages.
fn percent_or_fraction(value: f64) -> f64 {
    if value <= 1.0 {
        clamp01(value)
    } else {
        clamp01(value / 100.0)
    }
}

/// Coerces a saturation/lightness/value field to a fraction.
///
/// `"42%"` and `42` both become `0.42`; `0.42` stays as is.
pub fn coerce_fraction(value: ChannelValue<'_>, channel: Channel) -> Result<f64, ColorParseError> {
    let (n, percent) = match value {
        ChannelValue::Text(text) => match text.trim().strip_suffix('%') {
            Some(number) => (coerce_number(number), true),
            None => (coerce_number(text), false),
        },
        ChannelValue::Number(n) => (n, false),
    };
    if n.is_nan() {
        return Err(ColorParseError::NotANumber(channel));
    }
    let n = finite(n)?;
    Ok(if percent {
        clamp01(n / 100.0)
    } else {
        percent_or_fraction(n)
    })
}

impl<'a> ColorInput<'a> {
    /// Infers the color space of a loose patch from the channels it carries.
    ///
    /// `hex` wins, then `s`+`l` (HSL), then `s`+`v` (HSV); anything else must
    /// carry `r`, `g` and `b`. Prefer building a [`ColorInput`] directly when
    /// the space is known.
    pub fn from_patch(patch: &ChannelPatch<'a>) -> Result<Self, ColorParseError> {
        if let Some(hex) = patch.hex.filter(|h| !h.is_empty()) {
            return Ok(ColorInput::Hex(hex));
        }

        let h = optional_number(patch.h, Channel::H)?;
        let a = optional_number(patch.a, Channel::A)?;

        match (patch.s, patch.l, patch.v) {
            (Some(s), Some(l), _) => Ok(ColorInput::Hsl {
                h,
                s: coerce_fraction(s, Channel::S)?,
                l: coerce_fraction(l, Channel::L)?,
                a,
            }),
            (Some(s), None, Some(v)) => Ok(ColorInput::Hsv {
                h,
                s: coerce_fraction(s, Channel::S)?,
                v: coerce_fraction(v, Channel::V)?,
                a,
            }),
            _ => Ok(ColorInput::Rgb {
                r: required_number(patch.r, Channel::R)?,
                g: required_number(patch.g, Channel::G)?,
                b: required_number(patch.b, Channel::B)?,
                a,
            }),
        }
    }
}

fn optional_number(
    value: Option<ChannelValue<'_>>,
    channel: Channel,
) -> Result<Option<f64>, ColorParseError> {
    value
        .map(|v| {
            let n = v.as_number();
            if n.is_nan() {
                Err(ColorParseError::NotANumber(channel))
            } else {
                Ok(n)
            }
        })
        .transpose()
}

fn required_number(value: Option<ChannelValue<'_>>, channel: Channel) -> Result<f64, ColorParseError> {
    optional_number(value, channel)?.ok_or(ColorParseError::MissingChannel(channel))
}

fn finite(x: f64) -> Result<f64, ColorParseError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ColorParseError::NonFinite)
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn rgb_channel(x: f64) -> u8 {
    libm::round(x.clamp(0.0, 255.0)) as u8
}
