//! Star field synthesis
//!
//! Decorative background stars for a sector. The field is pure set
//! dressing — none of it is persisted or interactable — but it still has to
//! be deterministic: a shared screenshot and a revisited sector must show
//! the same sky.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Rgb;
use crate::name::SectorCoordinate;
use crate::stream::{bucket, stream};

/// Stars rendered per sector, always exactly this many.
pub const STARS_PER_SECTOR: usize = 400;

/// Fixed rendering palette, bucketed by one stream draw per star.
pub const STAR_PALETTE: [Rgb; 10] = [
    Rgb::new(0xFF, 0xFF, 0xFF), // white
    Rgb::new(0xFF, 0xF4, 0xE0), // warm white
    Rgb::new(0xB4, 0xD7, 0xFF), // pale blue
    Rgb::new(0x78, 0xCC, 0xE2), // ice blue
    Rgb::new(0xF2, 0xC5, 0x72), // gold
    Rgb::new(0xFF, 0xFA, 0xC0), // pale yellow
    Rgb::new(0xFF, 0xB3, 0x80), // orange
    Rgb::new(0xFF, 0x6B, 0x6B), // red
    Rgb::new(0xD8, 0xBF, 0xD8), // lavender
    Rgb::new(0x9F, 0xE2, 0xBF), // teal
];

/// One decorative star.
///
/// Positions are viewport percentages; the remaining fields feed the CSS
/// twinkle animation directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarDescriptor {
    /// Horizontal position as a percentage (0-100)
    pub x: f64,
    /// Vertical position as a percentage (0-100)
    pub y: f64,
    /// Rendered size in pixels (0.5-2.5)
    pub size: f64,
    /// Opacity (0.2-1.0)
    pub opacity: f64,
    /// Twinkle animation period in seconds (1.0-4.0)
    pub twinkle_speed: f64,
    pub color: Rgb,
}

impl StarDescriptor {
    pub const SIZE_MIN: f64 = 0.5;
    pub const SIZE_SPAN: f64 = 2.0;
    pub const OPACITY_MIN: f64 = 0.2;
    pub const OPACITY_SPAN: f64 = 0.8;
    pub const TWINKLE_MIN: f64 = 1.0;
    pub const TWINKLE_SPAN: f64 = 3.0;
}

/// Indices into a star's run of stream draws, one per field.
///
/// Each star consumes a contiguous run of `COUNT` indices, so no draw is
/// shared between two fields or two stars and the fields do not covary.
mod field {
    pub const POSITION_X: i64 = 0;
    pub const POSITION_Y: i64 = 1;
    pub const SIZE: i64 = 2;
    pub const OPACITY: i64 = 3;
    pub const TWINKLE: i64 = 4;
    pub const COLOR: i64 = 5;
    pub const COUNT: i64 = 6;
}

/// Synthesize the star field for a sector.
///
/// Always returns exactly [`STARS_PER_SECTOR`] descriptors in a stable
/// order. Two calls with the same coordinate are element-wise equal; there
/// are no failure modes for any coordinate magnitude or sign.
pub fn stars_for(x: i32, y: i32) -> Vec<StarDescriptor> {
    let seed = SectorCoordinate::new(x, y).seed();

    (0..STARS_PER_SECTOR)
        .map(|i| {
            let base = i as i64 * field::COUNT;
            let draw = |offset: i64| stream(seed, base + offset);

            StarDescriptor {
                x: draw(field::POSITION_X) * 100.0,
                y: draw(field::POSITION_Y) * 100.0,
                size: StarDescriptor::SIZE_MIN + draw(field::SIZE) * StarDescriptor::SIZE_SPAN,
                opacity: StarDescriptor::OPACITY_MIN
                    + draw(field::OPACITY) * StarDescriptor::OPACITY_SPAN,
                twinkle_speed: StarDescriptor::TWINKLE_MIN
                    + draw(field::TWINKLE) * StarDescriptor::TWINKLE_SPAN,
                color: STAR_PALETTE[bucket(draw(field::COLOR), STAR_PALETTE.len())],
            }
        })
        .collect()
}
