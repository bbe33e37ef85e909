//! Core value types shared by the parser, converter and canonicalizer.

/// Fixed-capacity string used for hex and CSS renderings.
///
/// The longest rendering, `hsla(360, 100%, 100%, 0.99)`, fits comfortably.
pub type ColorString = heapless::String<32>;

/// An sRGB color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgba {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha, 0.0-1.0.
    pub a: f64,
}

impl Rgba {
    /// Creates an RGBA color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Hue, saturation, lightness and alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsla {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, 0.0-1.0.
    pub s: f64,
    /// Lightness, 0.0-1.0.
    pub l: f64,
    /// Alpha, 0.0-1.0.
    pub a: f64,
}

impl Hsla {
    /// Creates an HSLA color.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

/// Hue, saturation, value and alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsva {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, 0.0-1.0.
    pub s: f64,
    /// Value, 0.0-1.0.
    pub v: f64,
    /// Alpha, 0.0-1.0.
    pub a: f64,
}

impl Hsva {
    /// Creates an HSVA color.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }
}

/// Which UI surface produced an update.
///
/// Carried through to [`Color::source`] untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSource {
    /// Hex text field.
    Hex,
    /// RGB fields, the hue slider and the alpha slider.
    Rgb,
    /// HSL fields.
    Hsl,
    /// Saturation/value area.
    Hsv,
}

/// The color an update describes, tagged by the space it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    /// Any CSS-style color string: hex, `rgb()`, `hsl()`, `hsv()`, or a name.
    Css(&'a str),

    /// A hex literal, `#` optional, 3/4/6/8 digits.
    Hex(&'a str),

    /// RGB channels (0-255, fractional values are rounded).
    Rgb { r: f64, g: f64, b: f64, a: Option<f64> },

    /// HSL channels; a missing hue falls back to the carried hue.
    Hsl {
        h: Option<f64>,
        s: f64,
        l: f64,
        a: Option<f64>,
    },

    /// HSV channels; a missing hue falls back to the carried hue.
    Hsv {
        h: Option<f64>,
        s: f64,
        v: f64,
        a: Option<f64>,
    },
}

impl ColorInput<'_> {
    /// Hue explicitly supplied by this input, if any.
    pub fn hue(&self) -> Option<f64> {
        match *self {
            ColorInput::Hsl { h, .. } | ColorInput::Hsv { h, .. } => h,
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(css: &'a str) -> Self {
        ColorInput::Css(css)
    }
}

impl From<Rgba> for ColorInput<'_> {
    fn from(c: Rgba) -> Self {
        ColorInput::Rgb {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: Some(c.a),
        }
    }
}

impl From<Hsla> for ColorInput<'_> {
    fn from(c: Hsla) -> Self {
        ColorInput::Hsl {
            h: Some(c.h),
            s: c.s,
            l: c.l,
            a: Some(c.a),
        }
    }
}

impl From<Hsva> for ColorInput<'_> {
    fn from(c: Hsva) -> Self {
        ColorInput::Hsv {
            h: Some(c.h),
            s: c.s,
            v: c.v,
            a: Some(c.a),
        }
    }
}

/// An input plus the tag of the surface that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorUpdate<'a> {
    /// The color being requested.
    pub input: ColorInput<'a>,
    /// Opaque origin label, copied to the resulting record.
    pub source: Option<ColorSource>,
}

impl<'a> ColorUpdate<'a> {
    /// Creates an update without a source tag.
    #[inline]
    pub fn new(input: ColorInput<'a>) -> Self {
        Self {
            input,
            source: None,
        }
    }

    /// Attaches a source tag.
    #[inline]
    pub fn with_source(mut self, source: ColorSource) -> Self {
        self.source = Some(source);
        self
    }
}

impl<'a> From<ColorInput<'a>> for ColorUpdate<'a> {
    fn from(input: ColorInput<'a>) -> Self {
        ColorUpdate::new(input)
    }
}

impl<'a> From<&'a str> for ColorUpdate<'a> {
    fn from(css: &'a str) -> Self {
        ColorUpdate::new(ColorInput::Css(css))
    }
}

impl From<Rgba> for ColorUpdate<'_> {
    fn from(c: Rgba) -> Self {
        ColorUpdate::new(c.into())
    }
}

impl From<Hsla> for ColorUpdate<'_> {
    fn from(c: Hsla) -> Self {
        ColorUpdate::new(c.into())
    }
}

impl From<Hsva> for ColorUpdate<'_> {
    fn from(c: Hsva) -> Self {
        ColorUpdate::new(c.into())
    }
}

/// The one color space an input was parsed into, before the others are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParsedColor {
    Rgb(Rgba),
    Hsl(Hsla),
    Hsv(Hsva),
}

impl ParsedColor {
    /// Alpha of the parsed color.
    pub fn alpha(&self) -> f64 {
        match self {
            ParsedColor::Rgb(c) => c.a,
            ParsedColor::Hsl(c) => c.a,
            ParsedColor::Hsv(c) => c.a,
        }
    }
}

/// A color expressed in every representation the picker displays.
///
/// Produced fresh for every accepted edit. `old_hue` is the hue to carry into
/// the next edit so that desaturating and resaturating keeps the user's hue.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// `#rrggbb`, or `#rrggbbaa` when alpha is below 1.
    pub hex: ColorString,
    pub rgb: Rgba,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub rgb_string: ColorString,
    pub hsl: Hsla,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    pub hsl_string: ColorString,
    pub hsv: Hsva,
    /// `hsv(h, s%, v%)` or `hsva(h, s%, v%, a)`.
    pub hsv_string: ColorString,
    /// Hue to thread into the next update.
    pub old_hue: f64,
    /// Origin of the update that produced this record.
    pub source: Option<ColorSource>,
}
