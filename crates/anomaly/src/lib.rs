//! Anomaly synthesis pipeline.
//!
//! Takes the sparse anomaly rows the data layer persists (an integer id, a
//! free-text label, an organically-grown taxonomy tag) and projects each one
//! into the fully-realized object the viewport renders: canonical type,
//! gameplay project, display name, in-sector geometry. The projection is
//! pure and id-seeded, so nothing derived is ever written back.

pub mod filter;
pub mod record;
pub mod synthesis;
pub mod taxonomy;

#[cfg(test)]
mod synthesis_test;

// Re-export key types at crate root
pub use filter::{in_sector, in_sector_for_project};
pub use record::RawAnomalyRecord;
pub use synthesis::{CanonicalAnomaly, synthesize, synthesize_all};
pub use taxonomy::{AnomalyShape, AnomalyType, ProjectBucket, TaxonomyTable};
