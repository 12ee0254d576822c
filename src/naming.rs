//! English names for hue angles, as shown next to the wheel while a hue
//! slider or ring gesture is in progress.

use crate::math::normalize_hue;
use crate::Component;

/// The twelve hue buckets, each 30° wide, anchored at hue 0.
const HUE_NAMES_EN: [&str; 12] = [
    "red",
    "orange",
    "yellow",
    "yellow-green",
    "green",
    "teal",
    "cyan",
    "blue",
    "indigo",
    "purple",
    "magenta",
    "pink",
];

/// The English name of the 30°-wide bucket a hue angle falls in. Each
/// boundary belongs to the bucket it starts, so hue 30 is already "orange".
/// The angle is reduced modulo 360 first: hue 360 names the same bucket as
/// hue 0, and negative angles wrap.
pub fn hue_name_en(hue: Component) -> &'static str {
    // normalize_hue yields [0, 360), so the index stays in range.
    HUE_NAMES_EN[(normalize_hue(hue) / 30.0) as usize]
}
