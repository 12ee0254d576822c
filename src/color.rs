//! The value records a picker round-trips a color through. Each notation is
//! modeled with its own type; conversions between them live in
//! [`crate::convert`].

use crate::math::{clamp, normalize_hue};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Gamma exponents below this are treated as this value, keeping
/// [`Rgb::with_gamma`] total.
const MIN_GAMMA: Component = 1.0e-3;

/// A color with red, green and blue channels, each an integer in [0, 255].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel of the color.
    pub r: u8,
    /// The green channel of the color.
    pub g: u8,
    /// The blue channel of the color.
    pub b: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels. Values
    /// outside [0, 255] are clamped.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a new color directly from channel bytes.
    pub const fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Return this color with a gamma adjustment applied to each channel,
    /// `(c / 255) ^ (1 / exponent)` scaled back to a byte. An exponent of
    /// 1.0 leaves the color unchanged; exponents at or below zero are
    /// treated as the smallest supported exponent.
    pub fn with_gamma(self, exponent: Component) -> Self {
        let exponent = exponent.max(MIN_GAMMA);
        let encode = |c: u8| {
            let normalized = c as Component / 255.0;
            (normalized.powf(1.0 / exponent) * 255.0).round() as u8
        };
        Self {
            r: encode(self.r),
            g: encode(self.g),
            b: encode(self.b),
        }
    }
}

/// A color with RGB channels in [0, 255] and an alpha component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The red channel of the color.
    pub r: u8,
    /// The green channel of the color.
    pub g: u8,
    /// The blue channel of the color.
    pub b: u8,
    /// The alpha component of the color.
    pub a: Component,
}

impl Rgba {
    /// Create a new color with RGB channels and an alpha component. Channels
    /// outside [0, 255] and alpha outside [0, 1] are clamped.
    pub fn new(r: i32, g: i32, b: i32, a: Component) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// Create a new color from an opaque [`Rgb`] and an alpha component.
    pub fn from_rgb(rgb: Rgb, a: Component) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// The opaque RGB part of this color.
    pub const fn rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Return this color with the alpha component replaced, clamped to
    /// [0, 1].
    pub fn with_alpha(self, a: Component) -> Self {
        Self {
            a: clamp(a, 0.0, 1.0),
            ..self
        }
    }
}

/// A color in the HSL notation: hue in degrees [0, 360), saturation and
/// lightness in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color, in degrees.
    pub h: Component,
    /// The saturation component of the color, as a percentage.
    pub s: Component,
    /// The lightness component of the color, as a percentage.
    pub l: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    /// The hue wraps into [0, 360); saturation and lightness are clamped to
    /// [0, 100].
    pub fn new(h: Component, s: Component, l: Component) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp(s, 0.0, 100.0),
            l: clamp(l, 0.0, 100.0),
        }
    }

    /// Return this color with the hue replaced, wrapped into [0, 360).
    pub fn with_hue(self, h: Component) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Return this color with the saturation replaced, clamped to [0, 100].
    pub fn with_saturation(self, s: Component) -> Self {
        Self {
            s: clamp(s, 0.0, 100.0),
            ..self
        }
    }

    /// Return this color with the lightness replaced, clamped to [0, 100].
    pub fn with_lightness(self, l: Component) -> Self {
        Self {
            l: clamp(l, 0.0, 100.0),
            ..self
        }
    }
}

/// A color in the HSL notation with an alpha component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    /// The hue component of the color, in degrees.
    pub h: Component,
    /// The saturation component of the color, as a percentage.
    pub s: Component,
    /// The lightness component of the color, as a percentage.
    pub l: Component,
    /// The alpha component of the color.
    pub a: Component,
}

impl Hsla {
    /// Create a new color with HSL components and an alpha component,
    /// normalized the same way as [`Hsl::new`] with alpha clamped to [0, 1].
    pub fn new(h: Component, s: Component, l: Component, a: Component) -> Self {
        let hsl = Hsl::new(h, s, l);
        Self {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// The opaque HSL part of this color.
    pub const fn hsl(&self) -> Hsl {
        Hsl {
            h: self.h,
            s: self.s,
            l: self.l,
        }
    }

    /// Return this color with the alpha component replaced, clamped to
    /// [0, 1].
    pub fn with_alpha(self, a: Component) -> Self {
        Self {
            a: clamp(a, 0.0, 1.0),
            ..self
        }
    }
}

/// A color in the HSV notation: hue in degrees [0, 360), saturation and
/// value in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color, in degrees.
    pub h: Component,
    /// The saturation component of the color, as a percentage.
    pub s: Component,
    /// The value component of the color, as a percentage.
    pub v: Component,
}

impl Hsv {
    /// Create a new color with HSV (hue, saturation, value) components. The
    /// hue wraps into [0, 360); saturation and value are clamped to
    /// [0, 100].
    pub fn new(h: Component, s: Component, v: Component) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp(s, 0.0, 100.0),
            v: clamp(v, 0.0, 100.0),
        }
    }

    /// Return this color with the hue replaced, wrapped into [0, 360).
    pub fn with_hue(self, h: Component) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Return this color with the saturation replaced, clamped to [0, 100].
    pub fn with_saturation(self, s: Component) -> Self {
        Self {
            s: clamp(s, 0.0, 100.0),
            ..self
        }
    }

    /// Return this color with the value replaced, clamped to [0, 100].
    pub fn with_value(self, v: Component) -> Self {
        Self {
            v: clamp(v, 0.0, 100.0),
            ..self
        }
    }
}

/// A color in the HSV notation with an alpha component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsva {
    /// The hue component of the color, in degrees.
    pub h: Component,
    /// The saturation component of the color, as a percentage.
    pub s: Component,
    /// The value component of the color, as a percentage.
    pub v: Component,
    /// The alpha component of the color.
    pub a: Component,
}

impl Hsva {
    /// Create a new color with HSV components and an alpha component,
    /// normalized the same way as [`Hsv::new`] with alpha clamped to [0, 1].
    pub fn new(h: Component, s: Component, v: Component, a: Component) -> Self {
        let hsv = Hsv::new(h, s, v);
        Self {
            h: hsv.h,
            s: hsv.s,
            v: hsv.v,
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// The opaque HSV part of this color.
    pub const fn hsv(&self) -> Hsv {
        Hsv {
            h: self.h,
            s: self.s,
            v: self.v,
        }
    }

    /// Return this color with the alpha component replaced, clamped to
    /// [0, 1].
    pub fn with_alpha(self, a: Component) -> Self {
        Self {
            a: clamp(a, 0.0, 1.0),
            ..self
        }
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
