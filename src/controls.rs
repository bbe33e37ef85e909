//! Reductions from picker controls to channel patches.
//!
//! The UI layer captures the pointer and measures the track; these functions
//! only map an offset inside a known container, or a single text-field edit,
//! onto the patch the session should receive.

use crate::model::{Color, ColorSource, Hsla};
use crate::parse::is_valid_hex_string;
use crate::patch::{ChannelPatch, ChannelValue};

/// Orientation of a slider track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Pointer position relative to the top-left corner of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerOffset {
    pub left: f64,
    pub top: f64,
    /// Container width in the same units as `left`.
    pub width: f64,
    /// Container height in the same units as `top`.
    pub height: f64,
}

impl PointerOffset {
    /// Creates an offset inside a `width` x `height` container.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the container has a positive, finite size along `direction`.
    fn has_extent(&self, direction: Direction) -> bool {
        let extent = match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        };
        extent.is_finite() && extent > 0.0
    }
}

/// Hue slider: maps the pointer to a hue.
///
/// Past the start of the track the hue pins to 0, past the end to 359. The
/// vertical slider runs bottom to top. Returns `None` when the hue would not
/// change or the track has no measurable extent.
pub fn hue_slider_patch(
    pointer: PointerOffset,
    direction: Direction,
    current: &Hsla,
) -> Option<ChannelPatch<'static>> {
    if !pointer.has_extent(direction) {
        return None;
    }
    let h = match direction {
        Direction::Horizontal => {
            if pointer.left < 0.0 {
                0.0
            } else if pointer.left > pointer.width {
                359.0
            } else {
                360.0 * pointer.left / pointer.width
            }
        }
        Direction::Vertical => {
            if pointer.top < 0.0 {
                359.0
            } else if pointer.top > pointer.height {
                0.0
            } else {
                let percent = 100.0 - pointer.top * 100.0 / pointer.height;
                360.0 * percent / 100.0
            }
        }
    };

    (current.h != h).then(|| hsl_patch(Hsla { h, ..*current }))
}

/// Alpha slider: maps the pointer to an alpha rounded to hundredths.
///
/// Returns `None` when the alpha would not change or the track has no
/// measurable extent.
pub fn alpha_slider_patch(
    pointer: PointerOffset,
    direction: Direction,
    current: &Hsla,
) -> Option<ChannelPatch<'static>> {
    if !pointer.has_extent(direction) {
        return None;
    }
    let (offset, extent) = match direction {
        Direction::Horizontal => (pointer.left, pointer.width),
        Direction::Vertical => (pointer.top, pointer.height),
    };
    let a = if offset < 0.0 {
        0.0
    } else if offset > extent {
        1.0
    } else {
        libm::round(offset * 100.0 / extent) / 100.0
    };

    (current.a != a).then(|| hsl_patch(Hsla { a, ..*current }))
}

/// Saturation/value area: x is saturation, y is value (top is bright).
///
/// The hue and alpha come from `current`. Returns `None` when the area has no
/// measurable width or height.
pub fn saturation_patch(pointer: PointerOffset, current: &Hsla) -> Option<ChannelPatch<'static>> {
    if !pointer.has_extent(Direction::Horizontal) || !pointer.has_extent(Direction::Vertical) {
        return None;
    }

    let left = pointer.left.max(0.0).min(pointer.width);
    let top = pointer.top.max(0.0).min(pointer.height);
    let saturation = left / pointer.width;
    let bright = (1.0 - top / pointer.height).clamp(0.0, 1.0);

    Some(ChannelPatch {
        h: Some(ChannelValue::Number(current.h)),
        s: Some(ChannelValue::Number(saturation)),
        v: Some(ChannelValue::Number(bright)),
        a: Some(ChannelValue::Number(current.a)),
        source: Some(ColorSource::Hsv),
        ..Default::default()
    })
}

fn hsl_patch(hsl: Hsla) -> ChannelPatch<'static> {
    ChannelPatch {
        h: Some(ChannelValue::Number(hsl.h)),
        s: Some(ChannelValue::Number(hsl.s)),
        l: Some(ChannelValue::Number(hsl.l)),
        a: Some(ChannelValue::Number(hsl.a)),
        source: Some(ColorSource::Rgb),
        ..Default::default()
    }
}

/// Which set of text fields the picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldFormat {
    Hex,
    Rgb,
    Hsl,
}

impl FieldFormat {
    /// Hex for opaque colors, RGB otherwise so alpha is editable.
    pub fn initial(hsl: &Hsla) -> Self {
        if hsl.a == 1.0 {
            FieldFormat::Hex
        } else {
            FieldFormat::Rgb
        }
    }

    /// Next format in the hex → rgb → hsl cycle.
    pub fn toggled(self) -> Self {
        match self {
            FieldFormat::Hex => FieldFormat::Rgb,
            FieldFormat::Rgb => FieldFormat::Hsl,
            FieldFormat::Hsl => FieldFormat::Hex,
        }
    }
}

/// Expands a single text-field edit into a complete patch.
///
/// The first non-empty group wins: `hex`, then any of `r`/`g`/`b`, then `a`,
/// then any of `h`/`s`/`l`. Channels the edit leaves empty (or zero) are
/// filled from `current`. Returns `None` for an invalid hex literal, a
/// non-numeric alpha, or an edit with nothing in it.
pub fn field_edit<'a>(
    edit: &ChannelPatch<'a>,
    current: &Color,
    disable_alpha: bool,
) -> Option<ChannelPatch<'a>> {
    let truthy = |v: Option<ChannelValue<'a>>| v.filter(ChannelValue::is_truthy);
    let or_current = |v: Option<ChannelValue<'a>>, fallback: f64| {
        Some(truthy(v).unwrap_or(ChannelValue::Number(fallback)))
    };

    if let Some(hex) = edit.hex.filter(|h| !h.is_empty()) {
        return is_valid_hex_string(hex).then_some(ChannelPatch {
            hex: Some(hex),
            source: Some(ColorSource::Hex),
            ..Default::default()
        });
    }

    if truthy(edit.r).is_some() || truthy(edit.g).is_some() || truthy(edit.b).is_some() {
        let rgb = current.rgb;
        return Some(ChannelPatch {
            r: or_current(edit.r, rgb.r as f64),
            g: or_current(edit.g, rgb.g as f64),
            b: or_current(edit.b, rgb.b as f64),
            a: Some(ChannelValue::Number(rgb.a)),
            source: Some(ColorSource::Rgb),
            ..Default::default()
        });
    }

    if let Some(a) = truthy(edit.a) {
        let a = a.as_number();
        if a.is_nan() {
            return None;
        }
        let a = if disable_alpha { 1.0 } else { a.clamp(0.0, 1.0) };
        let hsl = current.hsl;
        return Some(hsl_patch(Hsla {
            a: libm::round(a * 100.0) / 100.0,
            ..hsl
        }));
    }

    if truthy(edit.h).is_some() || truthy(edit.s).is_some() || truthy(edit.l).is_some() {
        let hsl = current.hsl;
        return Some(ChannelPatch {
            h: or_current(edit.h, hsl.h),
            s: or_current(edit.s, hsl.s),
            l: or_current(edit.l, hsl.l),
            a: Some(ChannelValue::Number(hsl.a)),
            source: Some(ColorSource::Hsl),
            ..Default::default()
        });
    }

    None
}
