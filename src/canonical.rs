//! Assembling the full [`Color`] record from a single update.

use crate::convert::{
    hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, preserve_hue, rgb_to_hsl, rgb_to_hsv,
    to_hex_string, to_hsl_string, to_hsv_string, to_rgb_string, wrap_hue,
};
use crate::model::{Color, ColorUpdate, ParsedColor};
use crate::parse::{ColorParseError, parse_color_input};

/// Builds the canonical record for `update`.
///
/// The parsed space is kept as is and the other two are derived from it. If
/// the result is achromatic in either HSL or HSV, both hues are replaced by
/// the hue the update supplied, else `old_hue`, else 0. The record's
/// `old_hue` is the update's hue, else `old_hue`, else the computed HSL hue.
/// Every hue that lands in the record is wrapped into `[0, 360)`.
///
/// Same arguments always give the same record.
pub fn to_canonical_color(
    update: &ColorUpdate<'_>,
    old_hue: Option<f64>,
    disable_alpha: bool,
) -> Result<Color, ColorParseError> {
    let old_hue = old_hue.filter(|h| h.is_finite()).map(wrap_hue);
    let parsed = parse_color_input(&update.input, old_hue, disable_alpha)?;

    let (rgb, hsl, hsv) = match parsed {
        ParsedColor::Rgb(rgb) => (rgb, rgb_to_hsl(rgb), rgb_to_hsv(rgb)),
        ParsedColor::Hsl(hsl) => (
            hsl_to_rgb(hsl),
            hsl,
            hsl_to_hsv(hsl.h, hsl.s, hsl.l, hsl.a),
        ),
        ParsedColor::Hsv(hsv) => (
            hsv_to_rgb(hsv),
            hsv_to_hsl(hsv.h, hsv.s, hsv.v, hsv.a),
            hsv,
        ),
    };

    let input_hue = update.input.hue().filter(|h| h.is_finite()).map(wrap_hue);
    let remembered = input_hue.or(old_hue).unwrap_or(0.0);
    let (hsl, hsv) = preserve_hue(hsl, hsv, remembered);

    Ok(Color {
        hex: to_hex_string(rgb, rgb.a != 1.0),
        rgb,
        rgb_string: to_rgb_string(rgb),
        hsl,
        hsl_string: to_hsl_string(hsl),
        hsv,
        hsv_string: to_hsv_string(hsv),
        old_hue: input_hue.or(old_hue).unwrap_or(hsl.h),
        source: update.source,
    })
}

/// Entry point for the UI layer: parses any accepted input into a [`Color`].
///
/// ```
/// use color_picker_core::parse_color;
///
/// let color = parse_color("#3366ff", None, false).unwrap();
/// assert_eq!(color.hex.as_str(), "#3366ff");
/// assert_eq!(color.hsl_string.as_str(), "hsl(225, 100%, 60%)");
/// ```
pub fn parse_color<'a>(
    update: impl Into<ColorUpdate<'a>>,
    old_hue: Option<f64>,
    disable_alpha: bool,
) -> Result<Color, ColorParseError> {
    to_canonical_color(&update.into(), old_hue, disable_alpha)
}
