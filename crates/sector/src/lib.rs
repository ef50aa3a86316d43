//! Deterministic sector substrate.
//!
//! Everything the viewport renders for a sector — its name, its star field,
//! the placement of anomalies within it — is recomputed on demand from
//! integer identifiers. Nothing here is persisted; the same inputs must
//! produce the same outputs for the lifetime of the product, because shared
//! permalinks embed sector coordinates and anomaly identifiers and nothing
//! else.

pub mod color;
pub mod name;
pub mod starfield;
pub mod stream;

#[cfg(test)]
mod stream_test;

// Re-export key types at crate root
pub use color::Rgb;
pub use name::{GreekLetter, RegionType, SectorCoordinate, SectorName, sector_name};
pub use starfield::{STAR_PALETTE, STARS_PER_SECTOR, StarDescriptor, stars_for};
pub use stream::stream;
