//! The CSS textual forms, `rgb(r, g, b)` and `hsl(h, s%, l%)`. Parsing
//! tolerates the whitespace CSS permits and the percent-sign variants for
//! saturation and lightness; malformed syntax is rejected. Numeric overflow
//! clamps the same way the model constructors clamp, and hue wraps.

use crate::error::{ColorError, Violation};
use crate::hex::parse_rgb;
use crate::{Component, Hsl, Rgb};

impl Rgb {
    /// Encode as a CSS `rgb(r, g, b)` string.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse a CSS `rgb(R, G, B)` string. Channels outside [0, 255] are
    /// clamped; tokens that are not numbers are rejected.
    pub fn from_css(input: &str) -> Result<Self, ColorError> {
        parse_css_rgb("Rgb::from_css", input)
    }
}

impl Hsl {
    /// Encode as a CSS `hsl(h, s%, l%)` string.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// Parse a CSS `hsl(H, S%, L%)` string. The percent signs are optional.
    /// Hue wraps into [0, 360); saturation and lightness clamp to [0, 100].
    pub fn from_css(input: &str) -> Result<Self, ColorError> {
        parse_css_hsl("Hsl::from_css", input)
    }
}

/// Convert a hex color to its CSS `rgb(r, g, b)` string form.
pub fn hex_to_css_rgb(input: &str) -> Result<String, ColorError> {
    Ok(parse_rgb("hex_to_css_rgb", input)?.to_css())
}

/// Parse a CSS `rgb(r, g, b)` string and encode it as lowercase hex.
pub fn css_rgb_to_hex(input: &str) -> Result<String, ColorError> {
    Ok(parse_css_rgb("css_rgb_to_hex", input)?.to_hex())
}

/// Convert a hex color to its CSS `hsl(h, s%, l%)` string form.
pub fn hex_to_css_hsl(input: &str) -> Result<String, ColorError> {
    Ok(parse_rgb("hex_to_css_hsl", input)?.to_hsl().to_css())
}

/// Parse a CSS `hsl(h, s%, l%)` string and encode it as lowercase hex.
pub fn css_hsl_to_hex(input: &str) -> Result<String, ColorError> {
    Ok(parse_css_hsl("css_hsl_to_hex", input)?.to_hex())
}

/// Extract the argument list of a `name(...)` function form,
/// case-insensitive, tolerating surrounding whitespace.
fn function_args<'a>(input: &'a str, name: &'static str) -> Option<&'a str> {
    let trimmed = input.trim();
    let prefix = trimmed.get(..name.len())?;
    if !prefix.eq_ignore_ascii_case(name) {
        return None;
    }
    trimmed[name.len()..]
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

/// Split a comma-separated argument list on behalf of `operation`, checking
/// the channel count.
fn channel_tokens<'a>(
    operation: &'static str,
    input: &'a str,
    name: &'static str,
) -> Result<Vec<&'a str>, ColorError> {
    let Some(args) = function_args(input, name) else {
        return Err(ColorError::new(
            operation,
            input,
            vec![Violation::MissingFunction { expected: name }],
        ));
    };

    let tokens: Vec<&str> = args.split(',').map(str::trim).collect();
    if tokens.len() != 3 {
        return Err(ColorError::new(
            operation,
            input,
            vec![Violation::WrongChannelCount {
                expected: 3,
                found: tokens.len(),
            }],
        ));
    }

    Ok(tokens)
}

fn parse_css_rgb(operation: &'static str, input: &str) -> Result<Rgb, ColorError> {
    const CHANNELS: [&str; 3] = ["red", "green", "blue"];

    let tokens = channel_tokens(operation, input, "rgb")?;

    let mut channels = [0.0 as Component; 3];
    let mut violations = Vec::new();
    for ((token, channel), slot) in tokens.iter().zip(CHANNELS).zip(&mut channels) {
        match token.parse::<Component>() {
            Ok(value) => *slot = value,
            Err(_) => violations.push(Violation::MalformedChannel {
                channel,
                found: token.to_string(),
            }),
        }
    }

    if !violations.is_empty() {
        return Err(ColorError::new(operation, input, violations));
    }

    // Rgb::new clamps overflowing channels.
    Ok(Rgb::new(
        channels[0].round() as i32,
        channels[1].round() as i32,
        channels[2].round() as i32,
    ))
}

fn parse_css_hsl(operation: &'static str, input: &str) -> Result<Hsl, ColorError> {
    const CHANNELS: [&str; 3] = ["hue", "saturation", "lightness"];

    let tokens = channel_tokens(operation, input, "hsl")?;

    let mut channels = [0.0 as Component; 3];
    let mut violations = Vec::new();
    for (index, ((token, channel), slot)) in
        tokens.iter().zip(CHANNELS).zip(&mut channels).enumerate()
    {
        // The percent sign on saturation and lightness is optional.
        let token = if index > 0 {
            token.strip_suffix('%').map_or(*token, str::trim_end)
        } else {
            *token
        };
        match token.parse::<Component>() {
            Ok(value) => *slot = value,
            Err(_) => violations.push(Violation::MalformedChannel {
                channel,
                found: token.to_string(),
            }),
        }
    }

    if !violations.is_empty() {
        return Err(ColorError::new(operation, input, violations));
    }

    // Hsl::new wraps the hue and clamps the percentages.
    Ok(Hsl::new(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_emission() {
        assert_eq!(Rgb::from_bytes(210, 105, 30).to_css(), "rgb(210, 105, 30)");
        assert_eq!(Hsl::new(25.0, 75.0, 47.0).to_css(), "hsl(25, 75%, 47%)");
    }

    #[test]
    fn parse_tolerates_css_whitespace() {
        let expected = Rgb::from_bytes(210, 105, 30);
        assert_eq!(Rgb::from_css("rgb(210,105,30)").unwrap(), expected);
        assert_eq!(Rgb::from_css("  rgb( 210 , 105 ,  30 )  ").unwrap(), expected);
        assert_eq!(Rgb::from_css("RGB(210, 105, 30)").unwrap(), expected);
    }

    #[test]
    fn percent_signs_are_optional() {
        let with = Hsl::from_css("hsl(25, 75%, 47%)").unwrap();
        let without = Hsl::from_css("hsl(25, 75, 47)").unwrap();
        assert_eq!(with, without);
        assert_eq!(with, Hsl::new(25.0, 75.0, 47.0));
    }

    #[test]
    fn numeric_overflow_clamps_and_hue_wraps() {
        assert_eq!(
            Rgb::from_css("rgb(300, -5, 0)").unwrap(),
            Rgb::from_bytes(255, 0, 0)
        );

        let hsl = Hsl::from_css("hsl(480, 150%, 50%)").unwrap();
        assert_eq!(hsl, Hsl::new(120.0, 100.0, 50.0));
    }

    #[test]
    fn malformed_syntax_is_rejected() {
        let err = Rgb::from_css("rgb(a, 0, 0)").unwrap_err();
        assert_eq!(err.operation, "Rgb::from_css");
        assert_eq!(
            err.violations,
            vec![Violation::MalformedChannel {
                channel: "red",
                found: "a".to_string()
            }]
        );

        let err = Rgb::from_css("rgb(1, 2)").unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::WrongChannelCount {
                expected: 3,
                found: 2
            }]
        );

        for input in ["rgbx(1, 2, 3)", "rgb(1, 2, 3", "17", ""] {
            let err = Rgb::from_css(input).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::MissingFunction { expected: "rgb" }],
                "{input:?}"
            );
        }

        assert!(Hsl::from_css("hsl(0, x%, 0%)").is_err());
    }

    #[test]
    fn hex_and_css_forms_round_trip() {
        assert_eq!(hex_to_css_rgb("#d2691e").unwrap(), "rgb(210, 105, 30)");
        assert_eq!(css_rgb_to_hex("rgb(210, 105, 30)").unwrap(), "#d2691e");
        assert_eq!(hex_to_css_hsl("#d2691e").unwrap(), "hsl(25, 75%, 47%)");
        assert_eq!(css_hsl_to_hex("hsl(25, 75%, 47%)").unwrap(), "#d2691e");
    }

    #[test]
    fn convenience_functions_report_their_own_operation() {
        assert_eq!(
            hex_to_css_rgb("nope").unwrap_err().operation,
            "hex_to_css_rgb"
        );
        assert_eq!(
            css_rgb_to_hex("nope").unwrap_err().operation,
            "css_rgb_to_hex"
        );
        assert_eq!(
            hex_to_css_hsl("nope").unwrap_err().operation,
            "hex_to_css_hsl"
        );
        assert_eq!(
            css_hsl_to_hex("nope").unwrap_err().operation,
            "css_hsl_to_hex"
        );
    }
}
