//! Conversions between the color models. Each pair is implemented on the
//! relevant models; the shared float math lives in the private `util`
//! module.
//!
//! Channel values are rounded at the model boundary to the resolution a
//! picker displays: whole degrees and percent for HSL/HSV, whole bytes for
//! RGB. Achromatic colors (r = g = b) always yield hue 0 and saturation 0.

use crate::hex::{parse_rgb, parse_rgba};
use crate::math::normalize_hue;
use crate::{ColorError, Hsl, Hsla, Hsv, Hsva, Rgb, Rgba};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = util::rgb_to_hsl(self.r, self.g, self.b);
        Hsl {
            h: normalize_hue(h.round()),
            s: (s * 100.0).round(),
            l: (l * 100.0).round(),
        }
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = util::rgb_to_hsv(self.r, self.g, self.b);
        Hsv {
            h: normalize_hue(h.round()),
            s: (s * 100.0).round(),
            v: (v * 100.0).round(),
        }
    }
}

impl Rgba {
    /// Convert this color to the HSL notation, carrying alpha over.
    pub fn to_hsla(&self) -> Hsla {
        let hsl = self.rgb().to_hsl();
        Hsla {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
            a: self.a,
        }
    }

    /// Convert this color to the HSV notation, carrying alpha over.
    pub fn to_hsva(&self) -> Hsva {
        let hsv = self.rgb().to_hsv();
        Hsva {
            h: hsv.h,
            s: hsv.s,
            v: hsv.v,
            a: self.a,
        }
    }
}

impl Hsl {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = util::hsl_to_rgb(self.h, self.s / 100.0, self.l / 100.0);
        Rgb::from_bytes(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Parse a 3- or 6-digit hex color into the HSL notation.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        Ok(parse_rgb("Hsl::from_hex", input)?.to_hsl())
    }

    /// Encode as a lowercase 6-digit hex string with a leading `#`.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Hsla {
    /// Convert this color to the RGB notation, carrying alpha over.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_rgb(self.hsl().to_rgb(), self.a)
    }

    /// Parse a hex color with an optional alpha byte into the HSL notation.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        Ok(parse_rgba("Hsla::from_hex", input)?.to_hsla())
    }

    /// Encode as a lowercase 8-digit hex string with a leading `#`.
    pub fn to_hex(&self) -> String {
        self.to_rgba().to_hex()
    }
}

impl Hsv {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = util::hsv_to_rgb(self.h, self.s / 100.0, self.v / 100.0);
        Rgb::from_bytes(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Parse a 3- or 6-digit hex color into the HSV notation.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        Ok(parse_rgb("Hsv::from_hex", input)?.to_hsv())
    }

    /// Encode as a lowercase 6-digit hex string with a leading `#`.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Hsva {
    /// Convert this color to the RGB notation, carrying alpha over.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_rgb(self.hsv().to_rgb(), self.a)
    }

    /// Parse a hex color with an optional alpha byte into the HSV notation.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        Ok(parse_rgba("Hsva::from_hex", input)?.to_hsva())
    }

    /// Encode as a lowercase 8-digit hex string with a leading `#`.
    pub fn to_hex(&self) -> String {
        self.to_rgba().to_hex()
    }
}

mod util {
    use crate::Component;

    /// Calculate the hue in degrees from RGB components and return it along
    /// with the min and max values. Achromatic input yields hue 0.
    fn rgb_to_hue_with_min_max(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    fn normalized(r: u8, g: u8, b: u8) -> (Component, Component, Component) {
        (
            r as Component / 255.0,
            g as Component / 255.0,
            b as Component / 255.0,
        )
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub(super) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (Component, Component, Component) {
        let (red, green, blue) = normalized(r, g, b);
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        // delta == 0 covers lightness 0 and 1, so the divisor is non-zero.
        let saturation = if delta == 0.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        (hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub(super) fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> (Component, Component, Component) {
        if saturation <= 0.0 {
            return (lightness, lightness, lightness);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        (f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HSV notation.
    pub(super) fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (Component, Component, Component) {
        let (red, green, blue) = normalized(r, g, b);
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        (hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub(super) fn hsv_to_rgb(
        hue: Component,
        saturation: Component,
        value: Component,
    ) -> (Component, Component, Component) {
        if saturation <= 0.0 {
            return (value, value, value);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        (f!(5.0), f!(3.0), f!(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Component};

    #[rustfmt::skip]
    const TESTS: &[(&str, (Component, Component, Component), (Component, Component, Component))] = &[
        // hex        hsl                  hsv
        ("#000000", (0.0, 0.0, 0.0),     (0.0, 0.0, 0.0)),
        ("#ffffff", (0.0, 0.0, 100.0),   (0.0, 0.0, 100.0)),
        ("#ff0000", (0.0, 100.0, 50.0),  (0.0, 100.0, 100.0)),
        ("#00ff00", (120.0, 100.0, 50.0), (120.0, 100.0, 100.0)),
        ("#0000ff", (240.0, 100.0, 50.0), (240.0, 100.0, 100.0)),
        ("#ffff00", (60.0, 100.0, 50.0),  (60.0, 100.0, 100.0)),
        ("#00ffff", (180.0, 100.0, 50.0), (180.0, 100.0, 100.0)),
        ("#ff00ff", (300.0, 100.0, 50.0), (300.0, 100.0, 100.0)),
        ("#808080", (0.0, 0.0, 50.0),    (0.0, 0.0, 50.0)),
        ("#808000", (60.0, 100.0, 25.0),  (60.0, 100.0, 50.0)),
        ("#008080", (180.0, 100.0, 25.0), (180.0, 100.0, 50.0)),
        ("#d2691e", (25.0, 75.0, 47.0),  (25.0, 86.0, 82.0)),
    ];

    #[test]
    fn hex_to_hsl_and_hsv() {
        for &(hex, (h, s, l), (hv, sv, vv)) in TESTS {
            let hsl = Hsl::from_hex(hex).unwrap();
            assert_eq!((hsl.h, hsl.s, hsl.l), (h, s, l), "{hex} as hsl");

            let hsv = Hsv::from_hex(hex).unwrap();
            assert_eq!((hsv.h, hsv.s, hsv.v), (hv, sv, vv), "{hex} as hsv");
        }
    }

    #[test]
    fn round_trips_stay_within_one_unit() {
        fn channel_diff(a: u8, b: u8) -> i32 {
            (a as i32 - b as i32).abs()
        }

        for &(hex, _, _) in TESTS {
            let source = Rgb::from_hex(hex).unwrap();

            let via_hsl = Hsl::from_hex(hex).unwrap().to_rgb();
            let via_hsv = Hsv::from_hex(hex).unwrap().to_rgb();

            for round_trip in [via_hsl, via_hsv] {
                assert!(channel_diff(source.r, round_trip.r) <= 1, "{hex} red");
                assert!(channel_diff(source.g, round_trip.g) <= 1, "{hex} green");
                assert!(channel_diff(source.b, round_trip.b) <= 1, "{hex} blue");
            }
        }
    }

    #[test]
    fn exact_primaries_from_hsv() {
        assert_eq!(Hsv::new(0.0, 100.0, 100.0).to_hex(), "#ff0000");
        assert_eq!(Hsv::new(120.0, 100.0, 100.0).to_hex(), "#00ff00");
        assert_eq!(Hsv::new(240.0, 100.0, 100.0).to_hex(), "#0000ff");
        assert_eq!(Hsv::new(0.0, 0.0, 50.0).to_hex(), "#808080");
    }

    #[test]
    fn exact_chocolate_from_hsl() {
        assert_eq!(Hsl::new(25.0, 75.0, 47.0).to_hex(), "#d2691e");
    }

    #[test]
    fn achromatic_yields_hue_and_saturation_zero() {
        for value in [0, 17, 128, 200, 255] {
            let gray = Rgb::from_bytes(value, value, value);
            let hsl = gray.to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);

            let hsv = gray.to_hsv();
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
        }
    }

    #[test]
    fn case_does_not_affect_conversion() {
        let lower = Hsv::from_hex("#ff0000").unwrap();
        let upper = Hsv::from_hex("#FF0000").unwrap();
        let mixed = Hsv::from_hex("#Ff0000").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn a_hue_that_rounds_to_360_wraps_to_zero() {
        // Hue 359.56 before rounding.
        let hsl = Rgb::from_bytes(255, 119, 120).to_hsl();
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn hex_entry_points_report_their_own_operation() {
        assert_eq!(Hsl::from_hex("nope").unwrap_err().operation, "Hsl::from_hex");
        assert_eq!(Hsv::from_hex("nope").unwrap_err().operation, "Hsv::from_hex");
        assert_eq!(
            Hsla::from_hex("nope").unwrap_err().operation,
            "Hsla::from_hex"
        );
        assert_eq!(
            Hsva::from_hex("nope").unwrap_err().operation,
            "Hsva::from_hex"
        );
    }

    #[test]
    fn alpha_survives_the_hsl_round_trip() {
        let hsla = Hsla::from_hex("#00ff0080").unwrap();
        assert_eq!(hsla.h, 120.0);
        assert_component_eq!(hsla.a, 128.0 / 255.0);
        assert_eq!(hsla.to_hex(), "#00ff0080");

        let hsva = Hsva::from_hex("#00ff0080").unwrap();
        assert_eq!(hsva.v, 100.0);
        assert_eq!(hsva.to_hex(), "#00ff0080");
    }

    #[test]
    fn opaque_alpha_models_convert_like_their_base() {
        let rgba = Rgba::from_hex("#d2691e").unwrap();
        let hsla = rgba.to_hsla();
        assert_eq!(hsla.hsl(), Hsl::new(25.0, 75.0, 47.0));
        assert_eq!(hsla.a, 1.0);

        let hsva = rgba.to_hsva();
        assert_eq!(hsva.hsv(), Hsv::new(25.0, 86.0, 82.0));
    }
}
