//! Integration tests for parse module

use color_picker_core::parse::{coerce_fraction, parse_css, parse_hex};
use color_picker_core::{
    Channel, ChannelPatch, ChannelValue, ColorInput, ColorParseError, Hsla, Hsva, ParsedColor,
    Rgba, is_valid_hex_string, parse_color_input,
};

// ============================================================================
// Hex
// ============================================================================

#[test]
fn hex_lengths() {
    assert_eq!(parse_hex("#f00"), Ok(Rgba::opaque(255, 0, 0)));
    assert_eq!(parse_hex("3366ff"), Ok(Rgba::opaque(51, 102, 255)));
    assert_eq!(parse_hex("#3366FF"), Ok(Rgba::opaque(51, 102, 255)));
    assert_eq!(parse_hex("#0000"), Ok(Rgba::new(0, 0, 0, 0.0)));

    let half = parse_hex("#ff000080").unwrap();
    assert_eq!((half.r, half.g, half.b), (255, 0, 0));
    assert!((half.a - 128.0 / 255.0).abs() < 1e-12);
}

#[test]
fn hex_rejects_bad_literals() {
    assert_eq!(parse_hex(""), Err(ColorParseError::Empty));
    assert_eq!(parse_hex("#12345"), Err(ColorParseError::InvalidHex));
    assert_eq!(parse_hex("#ggg"), Err(ColorParseError::InvalidHex));
}

#[test]
fn strict_hex_validity() {
    assert!(is_valid_hex_string("#fff"));
    assert!(is_valid_hex_string("ffff"));
    assert!(is_valid_hex_string("#3366ff"));
    assert!(is_valid_hex_string("#3366ff80"));

    assert!(!is_valid_hex_string(""));
    assert!(!is_valid_hex_string("#"));
    assert!(!is_valid_hex_string("#12345"));
    assert!(!is_valid_hex_string("#xyz"));
    assert!(!is_valid_hex_string("red"));
    assert!(!is_valid_hex_string("rgb(1, 2, 3)"));
}

// ============================================================================
// CSS Strings
// ============================================================================

#[test]
fn css_functions() {
    assert_eq!(parse_css("rgb(255, 0, 0)"), Ok(Rgba::opaque(255, 0, 0)));
    assert_eq!(parse_css("rgba(10, 20, 30, 0.5)"), Ok(Rgba::new(10, 20, 30, 0.5)));
    assert_eq!(parse_css("rgb(10 20 30)"), Ok(Rgba::opaque(10, 20, 30)));
    assert_eq!(parse_css("RGB(100%, 0%, 50%)"), Ok(Rgba::opaque(255, 0, 128)));
    assert_eq!(parse_css("rgb(300, -4, 12.6)"), Ok(Rgba::opaque(255, 0, 13)));

    assert_eq!(parse_css("hsl(120, 100%, 50%)"), Ok(Rgba::opaque(0, 255, 0)));
    assert_eq!(parse_css("hsla(0, 100%, 50%, 0.25)"), Ok(Rgba::new(255, 0, 0, 0.25)));
    assert_eq!(parse_css("hsv(240, 100%, 100%)"), Ok(Rgba::opaque(0, 0, 255)));
    assert_eq!(parse_css("hsva(0, 0%, 100%, 50%)"), Ok(Rgba::new(255, 255, 255, 0.5)));
}

#[test]
fn css_keywords() {
    assert_eq!(parse_css("red"), Ok(Rgba::opaque(255, 0, 0)));
    assert_eq!(parse_css("RebeccaPurple"), Ok(Rgba::opaque(102, 51, 153)));
    assert_eq!(parse_css(" transparent "), Ok(Rgba::new(0, 0, 0, 0.0)));
}

#[test]
fn css_rejects_garbage() {
    assert_eq!(parse_css("   "), Err(ColorParseError::Empty));
    assert_eq!(parse_css("#12"), Err(ColorParseError::InvalidHex));
    assert_eq!(parse_css("not-a-color"), Err(ColorParseError::UnknownFormat));
    assert_eq!(parse_css("rgb(1, 2)"), Err(ColorParseError::InvalidFunction));
    assert_eq!(parse_css("rgb(1, 2, 3, 4, 5)"), Err(ColorParseError::InvalidFunction));
    assert_eq!(parse_css("rgb(a, b, c)"), Err(ColorParseError::InvalidFunction));
    assert_eq!(parse_css("lab(1, 2, 3)"), Err(ColorParseError::UnknownFormat));
}

// ============================================================================
// Typed Inputs
// ============================================================================

#[test]
fn hsl_input_stays_in_its_space() {
    let input = ColorInput::Hsl {
        h: Some(200.0),
        s: 0.5,
        l: 0.5,
        a: None,
    };
    assert_eq!(
        parse_color_input(&input, None, false),
        Ok(ParsedColor::Hsl(Hsla::new(200.0, 0.5, 0.5, 1.0)))
    );
}

#[test]
fn missing_hue_falls_back_to_carried_hue() {
    let input = ColorInput::Hsv {
        h: None,
        s: 0.0,
        v: 0.4,
        a: None,
    };
    assert_eq!(
        parse_color_input(&input, Some(200.0), false),
        Ok(ParsedColor::Hsv(Hsva::new(200.0, 0.0, 0.4, 1.0)))
    );
    assert_eq!(
        parse_color_input(&input, None, false),
        Ok(ParsedColor::Hsv(Hsva::new(0.0, 0.0, 0.4, 1.0)))
    );
}

#[test]
fn out_of_range_channels() {
    let input = ColorInput::Hsl {
        h: Some(-30.0),
        s: 1.5,
        l: -0.2,
        a: Some(2.0),
    };
    assert_eq!(
        parse_color_input(&input, None, false),
        Ok(ParsedColor::Hsl(Hsla::new(330.0, 1.0, 0.0, 1.0)))
    );

    let input = ColorInput::Hsl {
        h: Some(360.0),
        s: 0.5,
        l: 0.5,
        a: None,
    };
    let Ok(ParsedColor::Hsl(hsl)) = parse_color_input(&input, None, false) else {
        panic!("expected HSL");
    };
    assert_eq!(hsl.h, 0.0);
}

#[test]
fn alpha_rounding_and_disabling() {
    let input = ColorInput::Rgb {
        r: 1.0,
        g: 2.0,
        b: 3.0,
        a: Some(0.3333333),
    };
    assert_eq!(parse_color_input(&input, None, false).unwrap().alpha(), 0.33);
    assert_eq!(parse_color_input(&input, None, true).unwrap().alpha(), 1.0);
    assert_eq!(
        parse_color_input(&ColorInput::Css("#ff000080"), None, false)
            .unwrap()
            .alpha(),
        0.5
    );
}

#[test]
fn non_finite_channels_are_rejected() {
    let input = ColorInput::Rgb {
        r: f64::NAN,
        g: 0.0,
        b: 0.0,
        a: None,
    };
    assert_eq!(
        parse_color_input(&input, None, false),
        Err(ColorParseError::NonFinite)
    );

    let input = ColorInput::Hsl {
        h: Some(f64::INFINITY),
        s: 0.5,
        l: 0.5,
        a: None,
    };
    assert_eq!(
        parse_color_input(&input, None, false),
        Err(ColorParseError::NonFinite)
    );
}

// ============================================================================
// Patches
// ============================================================================

#[test]
fn patch_space_inference() {
    let hex = ChannelPatch {
        hex: Some("#abc"),
        r: Some(ChannelValue::Number(1.0)),
        ..Default::default()
    };
    assert_eq!(ColorInput::from_patch(&hex), Ok(ColorInput::Hex("#abc")));

    let hsl = ChannelPatch {
        s: Some("42%".into()),
        l: Some("10%".into()),
        ..Default::default()
    };
    assert_eq!(
        ColorInput::from_patch(&hsl),
        Ok(ColorInput::Hsl {
            h: None,
            s: 0.42,
            l: 0.1,
            a: None
        })
    );

    let hsv = ChannelPatch {
        h: Some(ChannelValue::Number(90.0)),
        s: Some(ChannelValue::Number(0.5)),
        v: Some(ChannelValue::Number(0.25)),
        a: Some(ChannelValue::Number(0.5)),
        ..Default::default()
    };
    assert_eq!(
        ColorInput::from_patch(&hsv),
        Ok(ColorInput::Hsv {
            h: Some(90.0),
            s: 0.5,
            v: 0.25,
            a: Some(0.5)
        })
    );

    let rgb = ChannelPatch {
        r: Some("12".into()),
        g: Some(0u8.into()),
        b: Some(255u8.into()),
        ..Default::default()
    };
    assert_eq!(
        ColorInput::from_patch(&rgb),
        Ok(ColorInput::Rgb {
            r: 12.0,
            g: 0.0,
            b: 255.0,
            a: None
        })
    );
}

#[test]
fn patch_errors_name_the_channel() {
    let partial = ChannelPatch {
        r: Some(ChannelValue::Number(1.0)),
        g: Some(ChannelValue::Number(2.0)),
        ..Default::default()
    };
    assert_eq!(
        ColorInput::from_patch(&partial),
        Err(ColorParseError::MissingChannel(Channel::B))
    );

    let garbage = ChannelPatch {
        r: Some("abc".into()),
        g: Some(ChannelValue::Number(2.0)),
        b: Some(ChannelValue::Number(3.0)),
        ..Default::default()
    };
    assert_eq!(
        ColorInput::from_patch(&garbage),
        Err(ColorParseError::NotANumber(Channel::R))
    );
}

#[test]
fn fraction_coercion() {
    assert_eq!(coerce_fraction(ChannelValue::Text("42%"), Channel::S), Ok(0.42));
    assert_eq!(coerce_fraction(ChannelValue::Text("150%"), Channel::S), Ok(1.0));
    assert_eq!(coerce_fraction(ChannelValue::Text("42"), Channel::L), Ok(0.42));
    assert_eq!(coerce_fraction(ChannelValue::Number(0.42), Channel::V), Ok(0.42));
    assert_eq!(coerce_fraction(ChannelValue::Number(1.0), Channel::V), Ok(1.0));
    assert_eq!(
        coerce_fraction(ChannelValue::Text("x"), Channel::L),
        Err(ColorParseError::NotANumber(Channel::L))
    );
}

#[test]
fn error_display() {
    assert_eq!(ColorParseError::InvalidHex.to_string(), "invalid hex color");
    assert_eq!(
        ColorParseError::MissingChannel(Channel::G).to_string(),
        "missing `g` channel"
    );
}
