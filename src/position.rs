//! Mapping from pointer geometry to color channels: the polar hue-ring
//! gesture and the rectangular saturation/value area gesture.
//!
//! The UI layer supplies pixel coordinates relative to a measured element;
//! no measurement happens here. Positions outside the geometry clamp to its
//! edges, so a drag that leaves the area never produces an out-of-range
//! channel.

use euclid::default::{Point2D, Rect, Size2D};

use crate::math::{clamp, normalize_hue};
use crate::Component;

/// A pixel position supplied by the UI layer, in the same coordinate space
/// as the geometry it is measured against.
pub type Point = Point2D<Component>;

/// The pixel size of a measured element.
pub type Size = Size2D<Component>;

/// The measured bounds of a rectangular gesture area.
pub type Bounds = Rect<Component>;

/// The hue selected by a pointer on the hue ring, in degrees in [0, 360).
///
/// 0° points rightward from `center` (the positive x axis) and angles grow
/// toward positive y. Screen y grows downward, so the ring reads clockwise:
/// 90° is at the bottom, 180° at the left, 270° at the top. The distance
/// from the center does not affect the hue; a pointer exactly on the center
/// has no defined angle and yields hue 0.
pub fn hue_from_position(position: Point, center: Point) -> Component {
    let offset = position - center;
    if offset.x == 0.0 && offset.y == 0.0 {
        return 0.0;
    }
    normalize_hue(offset.y.atan2(offset.x).to_degrees())
}

/// The (saturation, value) pair selected by a pointer inside a rectangular
/// area, each in [0, 100] and clamped at the edges.
///
/// Saturation grows left to right; value grows bottom to top, so the top
/// edge is full value. A degenerate (zero-size) axis pins its channel to
/// the corresponding corner: saturation 0, value 100.
pub fn sv_from_position(position: Point, bounds: Bounds) -> (Component, Component) {
    let saturation = fraction(position.x - bounds.origin.x, bounds.size.width);
    let value = 1.0 - fraction(position.y - bounds.origin.y, bounds.size.height);
    (saturation * 100.0, value * 100.0)
}

fn fraction(offset: Component, extent: Component) -> Component {
    if extent <= 0.0 {
        0.0
    } else {
        clamp(offset / extent, 0.0, 1.0)
    }
}
