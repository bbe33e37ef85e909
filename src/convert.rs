//! Color space conversion and string rendering.
//!
//! RGB to HSL/HSV and back go through `palette`. The direct HSL/HSV formulas
//! are written out here because their exact form is part of the picker's
//! behavior: sliders feed HSV, fields feed HSL, and both must agree.

use core::fmt::Write;

use palette::{FromColor, Hsl, Hsv, Srgb, encoding};

use crate::model::{ColorString, Hsla, Hsva, Rgba};

type Hsl64 = Hsl<encoding::Srgb, f64>;
type Hsv64 = Hsv<encoding::Srgb, f64>;

/// Converts RGB to HSL. Achromatic colors get hue 0.
///
/// Saturation and lightness are clamped to `[0, 1]`.
pub fn rgb_to_hsl(rgb: Rgba) -> Hsla {
    let hsl = Hsl64::from_color(unit_rgb(rgb));
    Hsla::new(
        wrap_hue(hsl.hue.into_positive_degrees()),
        hsl.saturation.clamp(0.0, 1.0),
        hsl.lightness.clamp(0.0, 1.0),
        rgb.a,
    )
}

/// Converts RGB to HSV. Achromatic colors get hue 0.
pub fn rgb_to_hsv(rgb: Rgba) -> Hsva {
    let hsv = Hsv64::from_color(unit_rgb(rgb));
    Hsva::new(
        wrap_hue(hsv.hue.into_positive_degrees()),
        hsv.saturation.clamp(0.0, 1.0),
        hsv.value.clamp(0.0, 1.0),
        rgb.a,
    )
}

/// Converts HSL to RGB, rounding channels to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsla) -> Rgba {
    let rgb = Srgb::<f64>::from_color(Hsl64::new(hsl.h, hsl.s, hsl.l));
    Rgba::new(
        channel_u8(rgb.red),
        channel_u8(rgb.green),
        channel_u8(rgb.blue),
        hsl.a,
    )
}

/// Converts HSV to RGB, rounding channels to the nearest integer.
pub fn hsv_to_rgb(hsv: Hsva) -> Rgba {
    let rgb = Srgb::<f64>::from_color(Hsv64::new(hsv.h, hsv.s, hsv.v));
    Rgba::new(
        channel_u8(rgb.red),
        channel_u8(rgb.green),
        channel_u8(rgb.blue),
        hsv.a,
    )
}

/// HSL to HSV. Hue and alpha pass through.
///
/// `v = l + s·min(l, 1−l)`, `s = 0` when `v == 0`, else `2·(1 − l/v)`,
/// clamped to `[0, 1]`.
pub fn hsl_to_hsv(h: f64, s: f64, l: f64, a: f64) -> Hsva {
    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsva::new(h, sv.clamp(0.0, 1.0), v, a)
}

/// HSV to HSL. Hue and alpha pass through.
///
/// `l = v·(1 − s/2)`, `s = 0` when `l` is 0 or 1, else `(v−l)/min(l, 1−l)`,
/// clamped to `[0, 1]`.
pub fn hsv_to_hsl(h: f64, s: f64, v: f64, a: f64) -> Hsla {
    let l = v * (1.0 - s / 2.0);
    let sl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    Hsla::new(h, sl.clamp(0.0, 1.0), l, a)
}

/// Replaces a meaningless hue with `hue`.
///
/// If either saturation is exactly zero, both records take `hue`.
pub fn preserve_hue(mut hsl: Hsla, mut hsv: Hsva, hue: f64) -> (Hsla, Hsva) {
    if hsl.s == 0.0 || hsv.s == 0.0 {
        hsl.h = hue;
        hsv.h = hue;
    }
    (hsl, hsv)
}

/// `#rrggbb`, or `#rrggbbaa` when `allow_8` is set.
pub fn to_hex_string(rgb: Rgba, allow_8: bool) -> ColorString {
    let mut out = ColorString::new();
    // Capacity is fixed well above the longest rendering.
    let _ = write!(out, "#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
    if allow_8 {
        let _ = write!(out, "{:02x}", alpha_u8(rgb.a));
    }
    out
}

/// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
///
/// Alpha is clamped and rounded to hundredths before it is printed.
pub fn to_rgb_string(rgb: Rgba) -> ColorString {
    let a = render_alpha(rgb.a);
    let mut out = ColorString::new();
    // Longest rendering is `rgba(255, 255, 255, 0.55)`.
    let _ = if a == 1.0 {
        write!(out, "rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    } else {
        write!(out, "rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, a)
    };
    out
}

/// `hsl(h, s%, l%)` when opaque, `hsla(h, s%, l%, a)` otherwise.
///
/// Hue is wrapped, the other channels are clamped and alpha is rounded to
/// hundredths before printing.
pub fn to_hsl_string(hsl: Hsla) -> ColorString {
    render_cylindrical("hsl", hsl.h, hsl.s, hsl.l, hsl.a)
}

/// `hsv(h, s%, v%)` when opaque, `hsva(h, s%, v%, a)` otherwise.
///
/// Normalized the same way as [`to_hsl_string`].
pub fn to_hsv_string(hsv: Hsva) -> ColorString {
    render_cylindrical("hsv", hsv.h, hsv.s, hsv.v, hsv.a)
}

fn render_cylindrical(name: &str, h: f64, s: f64, third: f64, a: f64) -> ColorString {
    // 359.6 rounds up to a full turn
    let h = (libm::round(wrap_hue(h)) as i32) % 360;
    let s = percent(s);
    let third = percent(third);
    let a = render_alpha(a);

    let mut out = ColorString::new();
    // Longest rendering is `hsla(359, 100%, 100%, 0.55)`.
    let _ = if a == 1.0 {
        write!(out, "{name}({h}, {s}%, {third}%)")
    } else {
        write!(out, "{name}a({h}, {s}%, {third}%, {a})")
    };
    out
}

fn percent(fraction: f64) -> i32 {
    libm::round(fraction.clamp(0.0, 1.0) * 100.0) as i32
}

fn render_alpha(a: f64) -> f64 {
    round_alpha(a.clamp(0.0, 1.0))
}

/// Wraps a hue in degrees into `[0, 360)`.
pub fn wrap_hue(h: f64) -> f64 {
    let w = libm::fmod(h, 360.0);
    let w = if w < 0.0 { w + 360.0 } else { w };
    // -tiny + 360 rounds to 360
    if w >= 360.0 { 0.0 } else { w }
}

/// Rounds alpha to hundredths.
pub fn round_alpha(a: f64) -> f64 {
    libm::round(a * 100.0) / 100.0
}

fn unit_rgb(rgb: Rgba) -> Srgb<f64> {
    Srgb::new(
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    )
}

fn channel_u8(unit: f64) -> u8 {
    libm::round(unit * 255.0).clamp(0.0, 255.0) as u8
}

fn alpha_u8(a: f64) -> u8 {
    libm::round(a * 255.0).clamp(0.0, 255.0) as u8
}
