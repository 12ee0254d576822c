//! The hex color grammar. Input accepts 3, 6 or 8 digits with an optional
//! leading `#` in any case; output is always `#` followed by lowercase
//! digits, 6 for [`Rgb`] and 8 for [`Rgba`].

use std::str::FromStr;

use crate::error::{ColorError, Violation};
use crate::{Component, Rgb, Rgba};

impl Rgb {
    /// Parse a 3- or 6-digit hex color, with or without a leading `#`,
    /// case-insensitive. 3-digit shorthand expands each digit, `#f80` ==
    /// `#ff8800`. An 8-digit value is rejected here; [`Rgba::from_hex`] is
    /// the alpha-aware entry point.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        parse_rgb("Rgb::from_hex", input)
    }

    /// Encode as a lowercase 6-digit hex string with a leading `#`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Rgba {
    /// Parse a hex color with an optional alpha byte. 8 digits are read as
    /// `rrggbbaa` with alpha scaled from [0, 255] to [0, 1]; 3- and 6-digit
    /// values parse like [`Rgb::from_hex`] with alpha 1.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        parse_rgba("Rgba::from_hex", input)
    }

    /// Encode as a lowercase 8-digit hex string with a leading `#`. The
    /// alpha component maps to a byte by scaling to [0, 255] and rounding to
    /// nearest.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r,
            self.g,
            self.b,
            (self.a * 255.0).round() as u8
        )
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Parse an opaque hex color on behalf of `operation`, so conversions that
/// start from hex (`Hsl::from_hex` and friends) report their own name.
pub(crate) fn parse_rgb(operation: &'static str, input: &str) -> Result<Rgb, ColorError> {
    let digits = validate(operation, input, "3 or 6", &[3, 6])?;
    Ok(channels(digits))
}

/// As [`parse_rgb`], accepting the 8-digit alpha form.
pub(crate) fn parse_rgba(operation: &'static str, input: &str) -> Result<Rgba, ColorError> {
    let digits = validate(operation, input, "3, 6 or 8", &[3, 6, 8])?;
    let alpha = if digits.len() == 8 {
        byte(digits, 6) as Component / 255.0
    } else {
        1.0
    };
    Ok(Rgba::from_rgb(channels(digits), alpha))
}

/// Check the digit part of `input` against the hex grammar, collecting every
/// violation rather than stopping at the first.
fn validate<'a>(
    operation: &'static str,
    input: &'a str,
    expected: &'static str,
    lengths: &[usize],
) -> Result<&'a str, ColorError> {
    let (digits, offset) = match input.strip_prefix('#') {
        Some(rest) => (rest, 1),
        None => (input, 0),
    };

    let mut violations = Vec::new();

    let found = digits.chars().count();
    if !lengths.contains(&found) {
        violations.push(Violation::WrongLength { expected, found });
    }

    for (position, found) in digits.chars().enumerate() {
        if !found.is_ascii_hexdigit() {
            violations.push(Violation::NonHexDigit {
                position: position + offset,
                found,
            });
        }
    }

    if violations.is_empty() {
        Ok(digits)
    } else {
        Err(ColorError::new(operation, input, violations))
    }
}

/// Decode the RGB channels of a validated 3-, 6- or 8-digit string.
fn channels(digits: &str) -> Rgb {
    if digits.len() == 3 {
        let bytes = digits.as_bytes();
        Rgb::from_bytes(
            nibble(bytes[0]) * 17,
            nibble(bytes[1]) * 17,
            nibble(bytes[2]) * 17,
        )
    } else {
        Rgb::from_bytes(byte(digits, 0), byte(digits, 2), byte(digits, 4))
    }
}

/// Decode the byte at digit offset `at` of a validated string.
fn byte(digits: &str, at: usize) -> u8 {
    let bytes = digits.as_bytes();
    (nibble(bytes[at]) << 4) | nibble(bytes[at + 1])
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        // Excluded by validation.
        _ => 0,
    }
}
