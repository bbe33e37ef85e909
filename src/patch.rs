//! Loose channel patches produced by sliders and text fields.
//!
//! A [`ChannelPatch`] is what a UI surface emits before anything has been
//! checked: any subset of channels, each either a number or raw field text.

use crate::model::ColorSource;

/// A single channel value as typed or dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelValue<'a> {
    /// Numeric value from a slider or a parsed field.
    Number(f64),
    /// Raw text from an input field, e.g. `"42%"` or `"128"`.
    Text(&'a str),
}

impl ChannelValue<'_> {
    /// Whether the value counts as present.
    ///
    /// `0`, `NaN` and empty text are treated as absent.
    pub fn is_truthy(&self) -> bool {
        match *self {
            ChannelValue::Number(n) => n != 0.0 && !n.is_nan(),
            ChannelValue::Text(t) => !t.is_empty(),
        }
    }

    /// Numeric coercion with the loose rules of text fields.
    ///
    /// Returns `NaN` for text that is not a number literal.
    pub fn as_number(&self) -> f64 {
        match *self {
            ChannelValue::Number(n) => n,
            ChannelValue::Text(t) => coerce_number(t),
        }
    }
}

impl From<f64> for ChannelValue<'_> {
    fn from(n: f64) -> Self {
        ChannelValue::Number(n)
    }
}

impl From<u8> for ChannelValue<'_> {
    fn from(n: u8) -> Self {
        ChannelValue::Number(n as f64)
    }
}

impl<'a> From<&'a str> for ChannelValue<'a> {
    fn from(t: &'a str) -> Self {
        ChannelValue::Text(t)
    }
}

/// Channel keys a patch may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    R,
    G,
    B,
    A,
    H,
    S,
    L,
    V,
}

impl Channel {
    /// All channels, in validation order.
    pub const ALL: [Channel; 8] = [
        Channel::R,
        Channel::G,
        Channel::B,
        Channel::A,
        Channel::H,
        Channel::S,
        Channel::L,
        Channel::V,
    ];

    /// Single-letter key of the channel.
    pub fn name(self) -> &'static str {
        match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::A => "a",
            Channel::H => "h",
            Channel::S => "s",
            Channel::L => "l",
            Channel::V => "v",
        }
    }
}

/// A partial update: any subset of channels plus an optional hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelPatch<'a> {
    pub hex: Option<&'a str>,
    pub r: Option<ChannelValue<'a>>,
    pub g: Option<ChannelValue<'a>>,
    pub b: Option<ChannelValue<'a>>,
    pub a: Option<ChannelValue<'a>>,
    pub h: Option<ChannelValue<'a>>,
    pub s: Option<ChannelValue<'a>>,
    pub l: Option<ChannelValue<'a>>,
    pub v: Option<ChannelValue<'a>>,
    pub source: Option<ColorSource>,
}

impl<'a> ChannelPatch<'a> {
    /// Returns the value stored for `channel`.
    pub fn get(&self, channel: Channel) -> Option<ChannelValue<'a>> {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
            Channel::A => self.a,
            Channel::H => self.h,
            Channel::S => self.s,
            Channel::L => self.l,
            Channel::V => self.v,
        }
    }

    /// Hue carried by the patch, when it is present and numeric.
    pub fn hue(&self) -> Option<f64> {
        self.h
            .filter(ChannelValue::is_truthy)
            .map(|h| h.as_number())
            .filter(|h| h.is_finite())
    }
}

/// Converts field text to a number the way a browser coerces form values.
///
/// Surrounding whitespace is ignored and blank text is zero. Accepts decimal
/// literals with optional sign and exponent, `0x`/`0o`/`0b` integers and
/// `Infinity`. Everything else is `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    if unsigned == "Infinity" {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Radix prefixes are only valid unsigned.
    if unsigned.len() == t.len() && t.len() > 2 {
        let radix = match &t[..2] {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return u64::from_str_radix(&t[2..], radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses an optionally signed decimal literal, without the blank/radix
/// leniency of [`coerce_number`].
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    if !is_decimal_literal(unsigned) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// `digits [. digits] [e [+-] digits]`, or `. digits [...]`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
