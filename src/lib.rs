#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: The canonical record: hex, RGBA, HSLA and HSVA plus their CSS strings
//! - **`ColorInput`** / **`ColorUpdate`**: A color in exactly one space, tagged with its origin
//! - **`parse_color`**: Builds a `Color` from any input, carrying the previous hue
//! - **`ChannelPatch`**: A loose partial edit from a slider or text field
//! - **`simple_check_for_valid_color`**: Plausibility gate for patches
//! - **`PickerSession`**: The state a picker keeps between edits
//! - **`controls`**: Pointer offsets and field edits reduced to patches
//!
//! Hue is undefined for grays. Every `Color` carries `old_hue`, the hue to pass
//! into the next update, so that a color dragged to zero saturation and back
//! returns to the user's hue instead of red.

pub mod canonical;
pub mod controls;
pub mod convert;
pub mod model;
pub mod named;
pub mod parse;
pub mod patch;
pub mod session;
pub mod validate;

pub use canonical::{parse_color, to_canonical_color};
pub use model::{
    Color, ColorInput, ColorSource, ColorString, ColorUpdate, Hsla, Hsva, ParsedColor, Rgba,
};
pub use parse::{ColorParseError, is_valid_hex_string, parse_color_input};
pub use patch::{Channel, ChannelPatch, ChannelValue};
pub use session::{ColorMode, ColorValue, PickerOptions, PickerSession, UnsupportedModeError};
pub use validate::simple_check_for_valid_color;
