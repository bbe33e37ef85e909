//! Picker state: the current record, its hue memory and the bound output.
//!
//! Provides [`PickerSession`], which owns what a picker widget keeps between
//! edits, and [`ColorMode`], which selects the shape of the value handed back
//! to a form binding.

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::canonical::to_canonical_color;
use crate::model::{Color, ColorInput, ColorString, ColorUpdate, Hsla, Hsva, Rgba};
use crate::parse::ColorParseError;
use crate::patch::{ChannelPatch, ChannelValue};
use crate::validate::simple_check_for_valid_color;

/// Representation used for the picker's bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// Hex string, e.g. `#3366ff`.
    #[default]
    Hex,
    /// RGBA record.
    Rgb,
    /// HSLA record.
    Hsl,
    /// HSVA record.
    Hsv,
}

/// A mode name other than `hex`, `rgb`, `hsl` or `hsv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedModeError;

impl fmt::Display for UnsupportedModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported color mode, expected hex, rgb, hsl or hsv")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedModeError {}

impl FromStr for ColorMode {
    type Err = UnsupportedModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(ColorMode::Hex),
            "rgb" => Ok(ColorMode::Rgb),
            "hsl" => Ok(ColorMode::Hsl),
            "hsv" => Ok(ColorMode::Hsv),
            _ => Err(UnsupportedModeError),
        }
    }
}

/// The picker's bound value, shaped by [`ColorMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Hex(ColorString),
    Rgb(Rgba),
    Hsl(Hsla),
    Hsv(Hsva),
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions<'a> {
    /// Starting color.
    pub color: ColorUpdate<'a>,
    /// Shape of [`PickerSession::value`].
    pub mode: ColorMode,
    /// Force every color to be fully opaque.
    pub disable_alpha: bool,
}

impl Default for PickerOptions<'_> {
    fn default() -> Self {
        Self {
            color: Hsla::new(250.0, 0.5, 0.2, 1.0).into(),
            mode: ColorMode::Hex,
            disable_alpha: false,
        }
    }
}

/// State owned by one picker instance.
///
/// Every accepted update replaces the record wholesale; the record's
/// `old_hue` is fed back into the next update so desaturated colors keep
/// their hue. Updates that fail to parse leave the last good record in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSession {
    color: Color,
    mode: ColorMode,
    disable_alpha: bool,
}

impl PickerSession {
    /// Creates a session from `options`. No hue is carried into the first
    /// record.
    pub fn new(options: PickerOptions<'_>) -> Result<Self, ColorParseError> {
        let color = to_canonical_color(&options.color, None, options.disable_alpha)?;
        Ok(Self {
            color,
            mode: options.mode,
            disable_alpha: options.disable_alpha,
        })
    }

    /// Replaces the color from outside, e.g. a form write or an input binding.
    ///
    /// # Errors
    /// Returns the parse error and keeps the current record when `update`
    /// cannot be parsed.
    pub fn set_color<'a>(
        &mut self,
        update: impl Into<ColorUpdate<'a>>,
    ) -> Result<&Color, ColorParseError> {
        let update = update.into();
        let hue = Some(self.color.old_hue);
        self.accept(&update, hue)
    }

    /// Applies a patch from a slider or input field.
    ///
    /// A patch that carries only part of an HSL or HSV triple, such as a lone
    /// `s`, is completed from the current record before it is parsed.
    ///
    /// # Returns
    /// * `Ok(Some(color))` - Patch accepted, record replaced
    /// * `Ok(None)` - Patch failed the plausibility check and was dropped
    /// * `Err` - Patch could not be parsed; record unchanged
    pub fn handle_change(
        &mut self,
        patch: &ChannelPatch<'_>,
    ) -> Result<Option<&Color>, ColorParseError> {
        let Some(patch) = simple_check_for_valid_color(patch) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("dropped implausible patch");
            return Ok(None);
        };

        let patch = &fill_cylindrical(patch, &self.color);
        let input = ColorInput::from_patch(patch).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("unparsable patch: {}", _err);
        })?;
        let update = ColorUpdate {
            input,
            source: patch.source,
        };
        let hue = patch.hue().or(Some(self.color.old_hue));
        self.accept(&update, hue).map(Some)
    }

    /// Applies a swatch hover preview. Same pipeline as
    /// [`handle_change`](Self::handle_change).
    pub fn handle_swatch_hover(
        &mut self,
        patch: &ChannelPatch<'_>,
    ) -> Result<Option<&Color>, ColorParseError> {
        self.handle_change(patch)
    }

    fn accept(
        &mut self,
        update: &ColorUpdate<'_>,
        hue: Option<f64>,
    ) -> Result<&Color, ColorParseError> {
        let color = to_canonical_color(update, hue, self.disable_alpha).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected color update: {}", _err);
        })?;
        self.color = color;
        Ok(&self.color)
    }

    /// Returns the current record.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the hue carried into the next update.
    pub fn old_hue(&self) -> f64 {
        self.color.old_hue
    }

    /// Returns the output mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Changes the output mode. The record is unaffected.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    /// Returns true if alpha is forced to 1.
    pub fn is_alpha_disabled(&self) -> bool {
        self.disable_alpha
    }

    /// Returns the bound value in the configured mode.
    pub fn value(&self) -> ColorValue {
        match self.mode {
            ColorMode::Hex => ColorValue::Hex(self.color.hex.clone()),
            ColorMode::Rgb => ColorValue::Rgb(self.color.rgb),
            ColorMode::Hsl => ColorValue::Hsl(self.color.hsl),
            ColorMode::Hsv => ColorValue::Hsv(self.color.hsv),
        }
    }

    /// CSS background for the preview swatch, `rgba(r, g, b, a)`.
    pub fn active_background(&self) -> ColorString {
        let rgb = self.color.rgb;
        let alpha = if self.disable_alpha { 1.0 } else { rgb.a };
        let mut out = ColorString::new();
        let _ = write!(out, "rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha);
        out
    }
}

/// Completes a partial `s`/`l`/`v` patch from `current`.
///
/// A lone `s` or `l` takes the missing channel from the HSL record, a lone
/// `v` takes `s` from the HSV record. Missing alpha comes from the record
/// too. Patches with a hex literal or any RGB channel are left alone.
fn fill_cylindrical<'a>(patch: &ChannelPatch<'a>, current: &Color) -> ChannelPatch<'a> {
    let has_hex = patch.hex.is_some_and(|h| !h.is_empty());
    let has_rgb = patch.r.is_some() || patch.g.is_some() || patch.b.is_some();
    if has_hex || has_rgb {
        return *patch;
    }

    let number = |n: f64| Some(ChannelValue::Number(n));
    let mut filled = *patch;
    match (patch.s, patch.l, patch.v) {
        (Some(_), None, None) => filled.l = number(current.hsl.l),
        (None, Some(_), None) => filled.s = number(current.hsl.s),
        (None, None, Some(_)) => filled.s = number(current.hsv.s),
        _ => return *patch,
    }
    if filled.a.is_none() {
        filled.a = number(current.hsl.a);
    }
    filled
}
