//! Integration tests for convert module

mod common;
use common::*;

use color_picker_core::convert::{
    hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, preserve_hue, rgb_to_hsl, rgb_to_hsv,
    to_hex_string, to_hsl_string, to_hsv_string, to_rgb_string,
};
use color_picker_core::{Hsla, Hsva, Rgba};

#[test]
fn hsl_to_hsv_matches_formula() {
    let hsv = hsl_to_hsv(225.0, 1.0, 0.6, 1.0);
    assert!(hsva_close(hsv, Hsva::new(225.0, 0.8, 1.0, 1.0), EPSILON));

    // Black has no value and therefore no saturation
    let black = hsl_to_hsv(10.0, 0.7, 0.0, 0.5);
    assert_eq!(black, Hsva::new(10.0, 0.0, 0.0, 0.5));
}

#[test]
fn hsv_to_hsl_matches_formula() {
    let hsl = hsv_to_hsl(225.0, 0.8, 1.0, 1.0);
    assert!(hsla_close(hsl, Hsla::new(225.0, 1.0, 0.6, 1.0), EPSILON));

    // White and black both collapse saturation to zero
    assert_eq!(hsv_to_hsl(40.0, 0.0, 1.0, 1.0).s, 0.0);
    assert_eq!(hsv_to_hsl(40.0, 0.9, 0.0, 1.0).s, 0.0);
}

#[test]
fn hsl_hsv_round_trip() {
    let samples = [
        (0.0, 0.5, 0.5, 1.0),
        (45.5, 0.25, 0.8, 0.3),
        (200.0, 0.9, 0.35, 0.75),
        (359.0, 1.0, 0.5, 0.0),
        (120.0, 0.01, 0.99, 1.0),
    ];

    for (h, s, v, a) in samples {
        let hsl = hsv_to_hsl(h, s, v, a);
        let back = hsl_to_hsv(hsl.h, hsl.s, hsl.l, hsl.a);
        assert!(
            hsva_close(back, Hsva::new(h, s, v, a), 1e-9),
            "hsv round trip failed for {:?}: {:?}",
            (h, s, v, a),
            back
        );
    }

    for (h, s, l, a) in samples {
        let hsv = hsl_to_hsv(h, s, l, a);
        let back = hsv_to_hsl(hsv.h, hsv.s, hsv.v, hsv.a);
        assert!(
            hsla_close(back, Hsla::new(h, s, l, a), 1e-9),
            "hsl round trip failed for {:?}: {:?}",
            (h, s, l, a),
            back
        );
    }
}

#[test]
fn rgb_to_cylindrical_spaces() {
    let blue = Rgba::new(51, 102, 255, 1.0);
    assert!(hsla_close(rgb_to_hsl(blue), Hsla::new(225.0, 1.0, 0.6, 1.0), 1e-9));
    assert!(hsva_close(rgb_to_hsv(blue), Hsva::new(225.0, 0.8, 1.0, 1.0), 1e-9));

    // Sectors: green and magenta
    assert!((rgb_to_hsl(Rgba::opaque(0, 255, 0)).h - 120.0).abs() < 1e-9);
    assert!((rgb_to_hsv(Rgba::opaque(255, 0, 255)).h - 300.0).abs() < 1e-9);
}

#[test]
fn achromatic_rgb_has_zero_saturation() {
    let gray = Rgba::opaque(128, 128, 128);
    let hsl = rgb_to_hsl(gray);
    let hsv = rgb_to_hsv(gray);
    assert_eq!(hsl.s, 0.0);
    assert_eq!(hsv.s, 0.0);
    assert_eq!(hsl.h, 0.0);
}

#[test]
fn cylindrical_to_rgb_rounds_channels() {
    assert_eq!(hsl_to_rgb(Hsla::new(225.0, 1.0, 0.6, 1.0)), Rgba::new(51, 102, 255, 1.0));
    assert_eq!(hsv_to_rgb(Hsva::new(225.0, 0.8, 1.0, 0.4)), Rgba::new(51, 102, 255, 0.4));
    assert_eq!(hsl_to_rgb(Hsla::new(0.0, 0.0, 0.6, 1.0)), Rgba::opaque(153, 153, 153));
}

#[test]
fn preserve_hue_only_touches_degenerate_colors() {
    let hsl = Hsla::new(0.0, 0.0, 0.5, 1.0);
    let hsv = Hsva::new(0.0, 0.0, 0.5, 1.0);
    let (hsl, hsv) = preserve_hue(hsl, hsv, 200.0);
    assert_eq!(hsl.h, 200.0);
    assert_eq!(hsv.h, 200.0);

    // HSV saturated but HSL degenerate (black): both take the carried hue
    let (hsl, hsv) = preserve_hue(
        Hsla::new(90.0, 0.0, 0.0, 1.0),
        Hsva::new(90.0, 1.0, 0.0, 1.0),
        15.0,
    );
    assert_eq!((hsl.h, hsv.h), (15.0, 15.0));

    let (hsl, hsv) = preserve_hue(
        Hsla::new(90.0, 0.5, 0.5, 1.0),
        Hsva::new(90.0, 0.6, 0.75, 1.0),
        15.0,
    );
    assert_eq!((hsl.h, hsv.h), (90.0, 90.0));
}

#[test]
fn hex_width_follows_flag() {
    let red = Rgba::new(255, 0, 0, 0.5);
    assert_eq!(to_hex_string(red, false).as_str(), "#ff0000");
    assert_eq!(to_hex_string(red, true).as_str(), "#ff000080");
    assert_eq!(to_hex_string(Rgba::opaque(1, 2, 3), false).as_str(), "#010203");
}

#[test]
fn css_strings_switch_on_alpha() {
    assert_eq!(to_rgb_string(Rgba::opaque(51, 102, 255)).as_str(), "rgb(51, 102, 255)");
    assert_eq!(
        to_rgb_string(Rgba::new(51, 102, 255, 0.5)).as_str(),
        "rgba(51, 102, 255, 0.5)"
    );

    assert_eq!(
        to_hsl_string(Hsla::new(224.6, 0.996, 0.6, 1.0)).as_str(),
        "hsl(225, 100%, 60%)"
    );
    assert_eq!(
        to_hsl_string(Hsla::new(225.0, 1.0, 0.6, 0.33)).as_str(),
        "hsla(225, 100%, 60%, 0.33)"
    );
    assert_eq!(
        to_hsv_string(Hsva::new(225.0, 0.8, 1.0, 1.0)).as_str(),
        "hsv(225, 80%, 100%)"
    );
    assert_eq!(
        to_hsv_string(Hsva::new(10.2, 0.123, 0.456, 0.05)).as_str(),
        "hsva(10, 12%, 46%, 0.05)"
    );
}

#[test]
fn css_strings_normalize_loose_records() {
    assert_eq!(
        to_rgb_string(Rgba::new(1, 2, 3, 0.123456789012345)).as_str(),
        "rgba(1, 2, 3, 0.12)"
    );
    assert_eq!(
        to_rgb_string(Rgba::new(255, 255, 255, 0.999)).as_str(),
        "rgb(255, 255, 255)"
    );
    assert_eq!(
        to_hsl_string(Hsla::new(400.0, 1.5, -0.2, 0.123456789)).as_str(),
        "hsla(40, 100%, 0%, 0.12)"
    );
    assert_eq!(
        to_hsv_string(Hsva::new(359.7, 0.5, 0.5, 1.0)).as_str(),
        "hsv(0, 50%, 50%)"
    );
    let huge = to_hsv_string(Hsva::new(1e300, 0.5, 0.5, -3.0));
    assert!(huge.as_str().starts_with("hsva("));
    assert!(huge.as_str().ends_with(", 50%, 50%, 0)"));
}
