//! huebox provides the color conversions and pointer-geometry mapping that
//! back a color-picker widget set: hex, RGB(A), HSL(A) and HSV(A) encodings,
//! CSS string forms, hue-ring and saturation/value area gestures, and the
//! English hue names a picker shows next to the wheel.

#![deny(missing_docs)]

mod color;
mod convert;
mod css;
mod error;
mod hex;
mod math;
mod naming;
mod position;

pub use color::{Component, Hsl, Hsla, Hsv, Hsva, Rgb, Rgba};
pub use css::{css_hsl_to_hex, css_rgb_to_hex, hex_to_css_hsl, hex_to_css_rgb};
pub use error::{ColorError, Violation};
pub use math::{clamp, lerp, normalize_hue};
pub use naming::hue_name_en;
pub use position::{hue_from_position, sv_from_position, Bounds, Point, Size};
