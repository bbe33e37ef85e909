//! Shared test infrastructure for color-picker-core integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_picker_core::{Color, Hsla, Hsva, PickerOptions, PickerSession, parse_color};

// ============================================================================
// Float Comparison
// ============================================================================

/// Default tolerance for derived channel values
pub const EPSILON: f64 = 1e-9;

/// Compare two floats with the default tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Compare two HSLA records with a custom epsilon
pub fn hsla_close(a: Hsla, b: Hsla, epsilon: f64) -> bool {
    (a.h - b.h).abs() < epsilon
        && (a.s - b.s).abs() < epsilon
        && (a.l - b.l).abs() < epsilon
        && (a.a - b.a).abs() < epsilon
}

/// Compare two HSVA records with a custom epsilon
pub fn hsva_close(a: Hsva, b: Hsva, epsilon: f64) -> bool {
    (a.h - b.h).abs() < epsilon
        && (a.s - b.s).abs() < epsilon
        && (a.v - b.v).abs() < epsilon
        && (a.a - b.a).abs() < epsilon
}

// ============================================================================
// Fixtures
// ============================================================================

/// `#3366ff`: hsl(225, 100%, 60%), hsv(225, 80%, 100%)
pub fn royal_blue() -> Color {
    parse_color("#3366ff", None, false).unwrap()
}

/// Session starting at `css` with default options otherwise
pub fn session_at(css: &str) -> PickerSession {
    PickerSession::new(PickerOptions {
        color: css.into(),
        ..Default::default()
    })
    .unwrap()
}
