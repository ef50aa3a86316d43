//! Sector membership filtering
//!
//! Membership is not a stored relation: an anomaly belongs to whatever
//! sector label its id derives, so filtering a pool against a viewport is a
//! recomputation, not a query. O(n) over the pool per call — acceptable
//! because the data layer bounds what one request returns.

use sector::{SectorCoordinate, SectorName};

use crate::synthesis::CanonicalAnomaly;
use crate::taxonomy::ProjectBucket;

/// The anomalies visible in the sector at (x, y), in input order.
///
/// Lazy and restartable: the returned iterator borrows the pool, so callers
/// can rebuild it cheaply for another sector. An anomaly matches when its
/// id-derived label equals the viewed sector's label — which also means a
/// far-away sector sharing the label shows the same anomalies.
pub fn in_sector(
    anomalies: &[CanonicalAnomaly],
    x: i32,
    y: i32,
) -> impl Iterator<Item = &CanonicalAnomaly> {
    let viewed = SectorName::for_coordinate(SectorCoordinate::new(x, y));
    anomalies.iter().filter(move |anomaly| anomaly.sector == viewed)
}

/// [`in_sector`], additionally restricted to one gameplay project.
///
/// The viewport's project panel shows per-project counts for the current
/// sector; this is the derivation behind those counts.
pub fn in_sector_for_project(
    anomalies: &[CanonicalAnomaly],
    x: i32,
    y: i32,
    project: ProjectBucket,
) -> impl Iterator<Item = &CanonicalAnomaly> {
    in_sector(anomalies, x, y).filter(move |anomaly| anomaly.project == project)
}
