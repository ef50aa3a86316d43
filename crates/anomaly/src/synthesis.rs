//! Anomaly property synthesis
//!
//! Projects one persisted [`RawAnomalyRecord`] into the fully-realized
//! [`CanonicalAnomaly`] the viewport renders. Every derived field is a pure
//! function of the record's stable id, so re-synthesizing — on reload, on
//! another user's machine, years later — reproduces the same object
//! byte-for-byte. Nothing derived here is ever persisted.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use sector::{Rgb, SectorCoordinate, SectorName, stream};

use crate::record::RawAnomalyRecord;
use crate::taxonomy::{AnomalyShape, AnomalyType, ProjectBucket, TaxonomyTable};

/// Indices into an anomaly's run of stream draws, all seeded by the
/// record id. The numbering is frozen: reordering it moves every anomaly
/// ever shared.
mod salt {
    pub const POSITION_X: i64 = 1;
    pub const POSITION_Y: i64 = 2;
    pub const BRIGHTNESS: i64 = 3;
    pub const SIZE: i64 = 4;
    pub const PULSE: i64 = 5;
    pub const GLOW: i64 = 6;
    pub const SECTOR_X: i64 = 7;
    pub const SECTOR_Y: i64 = 8;
    pub const DATE_YEAR: i64 = 9;
    pub const DATE_MONTH: i64 = 10;
    pub const DATE_DAY: i64 = 11;
}

/// The engine's output view over one anomaly record.
///
/// Plain serializable data with no behavior attached; safe to cross a
/// process or network boundary unchanged (permalinks embed
/// `sector=<x>,<y>&anomaly=<id>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CanonicalAnomaly {
    /// Stable id, prefixed to disambiguate from other id spaces ("db-42").
    pub id: String,
    /// Display name: record content verbatim, or a synthesized catalog
    /// designation for content-less records.
    pub name: String,
    pub anomaly_type: AnomalyType,
    pub project: ProjectBucket,
    /// Horizontal position within the sector, percent. Constrained to the
    /// interior band so markers never touch the viewport edge.
    pub x: f64,
    /// Vertical position within the sector, percent. Same band as `x`.
    pub y: f64,
    /// Render brightness (0.5-1.2)
    pub brightness: f64,
    /// Marker scale (0.6-1.4)
    pub size: f64,
    /// Pulse animation period in seconds (1.0-3.0)
    pub pulse_speed: f64,
    /// Glow halo strength (0.3-0.8)
    pub glow_intensity: f64,
    pub color: Rgb,
    pub shape: AnomalyShape,
    /// The sector label this anomaly belongs to, derived from its id. The
    /// membership filter recomputes this same derivation.
    pub sector: SectorName,
    /// Deterministic display date; never wall clock, so it cannot change
    /// between renders.
    pub discovery_date: String,
    /// The originating record, carried through untouched.
    pub db_record: RawAnomalyRecord,
}

impl CanonicalAnomaly {
    /// Interior margin keeping markers off the sector edges, in percent.
    /// An implementation constant inherited from the shipped client;
    /// preserved as-is rather than re-derived.
    pub const INTERIOR_MARGIN: f64 = 10.0;
    /// Width of the usable interior band (margin to 100 - margin).
    pub const INTERIOR_SPAN: f64 = 100.0 - 2.0 * Self::INTERIOR_MARGIN;

    pub const BRIGHTNESS_MIN: f64 = 0.5;
    pub const BRIGHTNESS_SPAN: f64 = 0.7;
    pub const SIZE_MIN: f64 = 0.6;
    pub const SIZE_SPAN: f64 = 0.8;
    pub const PULSE_MIN: f64 = 1.0;
    pub const PULSE_SPAN: f64 = 2.0;
    pub const GLOW_MIN: f64 = 0.3;
    pub const GLOW_SPAN: f64 = 0.5;

    /// Half-width of the coordinate window anomalies are assigned into.
    /// Ids map onto sectors within ±8 of the origin; the label derived
    /// from that coordinate is what membership is tested against.
    pub const SECTOR_WINDOW: i32 = 8;
}

/// Derive the owning sector label for a stable id.
///
/// The id picks a coordinate in the ±[`CanonicalAnomaly::SECTOR_WINDOW`]
/// window, and the label of that coordinate is the anomaly's home. Because
/// labels repeat over the grid, an anomaly is visible in every sector that
/// shares its label — accepted game-world behavior.
pub fn home_sector(id: i64) -> SectorName {
    let window = (CanonicalAnomaly::SECTOR_WINDOW * 2 + 1) as f64;
    let sx = (stream(id, salt::SECTOR_X) * window) as i32 - CanonicalAnomaly::SECTOR_WINDOW;
    let sy = (stream(id, salt::SECTOR_Y) * window) as i32 - CanonicalAnomaly::SECTOR_WINDOW;
    SectorName::for_coordinate(SectorCoordinate::new(sx, sy))
}

/// Deterministic discovery date for a stable id, formatted `M/D/YYYY`.
///
/// Year lands in the 2024-2027 mission era; days clamp to 28 so every
/// (year, month, day) tuple is valid without calendar arithmetic.
fn discovery_date(id: i64) -> String {
    let year = 2024 + (stream(id, salt::DATE_YEAR) * 4.0) as i64;
    let month = 1 + (stream(id, salt::DATE_MONTH) * 12.0) as i64;
    let day = 1 + (stream(id, salt::DATE_DAY) * 28.0) as i64;
    format!("{}/{}/{}", month, day, year)
}

/// Synthesize the canonical view of one record.
///
/// Total: every record produces an anomaly. Missing content falls back to
/// a catalog designation, an unknown taxonomy tag falls back to the
/// table's default mapping, and geometry needs nothing but the id.
pub fn synthesize(record: &RawAnomalyRecord, table: &TaxonomyTable) -> CanonicalAnomaly {
    let (anomaly_type, project) = table.resolve(record.anomaly_set.as_deref());
    let seed = record.id;

    let name = match record.content.as_deref() {
        Some(content) if !content.trim().is_empty() => content.to_string(),
        _ => format!("{}-{:03}", anomaly_type.catalog_prefix(), record.id),
    };

    CanonicalAnomaly {
        id: format!("db-{}", record.id),
        name,
        anomaly_type,
        project,
        x: CanonicalAnomaly::INTERIOR_MARGIN
            + stream(seed, salt::POSITION_X) * CanonicalAnomaly::INTERIOR_SPAN,
        y: CanonicalAnomaly::INTERIOR_MARGIN
            + stream(seed, salt::POSITION_Y) * CanonicalAnomaly::INTERIOR_SPAN,
        brightness: CanonicalAnomaly::BRIGHTNESS_MIN
            + stream(seed, salt::BRIGHTNESS) * CanonicalAnomaly::BRIGHTNESS_SPAN,
        size: CanonicalAnomaly::SIZE_MIN + stream(seed, salt::SIZE) * CanonicalAnomaly::SIZE_SPAN,
        pulse_speed: CanonicalAnomaly::PULSE_MIN
            + stream(seed, salt::PULSE) * CanonicalAnomaly::PULSE_SPAN,
        glow_intensity: CanonicalAnomaly::GLOW_MIN
            + stream(seed, salt::GLOW) * CanonicalAnomaly::GLOW_SPAN,
        color: anomaly_type.color(),
        shape: anomaly_type.shape(),
        sector: home_sector(seed),
        discovery_date: discovery_date(seed),
        db_record: record.clone(),
    }
}

/// Synthesize a whole batch.
///
/// One malformed record cannot abort the rest — synthesis is total per
/// record, so this is a plain map with no failure path.
pub fn synthesize_all(records: &[RawAnomalyRecord], table: &TaxonomyTable) -> Vec<CanonicalAnomaly> {
    records
        .iter()
        .map(|record| synthesize(record, table))
        .collect()
}
