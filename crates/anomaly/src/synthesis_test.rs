//! Tests for anomaly synthesis

use serde_json::json;

use crate::record::RawAnomalyRecord;
use crate::synthesis::{CanonicalAnomaly, home_sector, synthesize, synthesize_all};
use crate::taxonomy::{AnomalyType, ProjectBucket, TaxonomyTable};

fn table() -> &'static TaxonomyTable {
    TaxonomyTable::builtin()
}

#[test]
fn test_id_is_prefixed() {
    let anomaly = synthesize(&RawAnomalyRecord::new(42), table());
    assert_eq!(anomaly.id, "db-42");
}

#[test]
fn test_content_is_used_verbatim() {
    let record = RawAnomalyRecord::new(1).with_content("My Planet");
    assert_eq!(synthesize(&record, table()).name, "My Planet");
}

#[test]
fn test_blank_content_falls_back_to_catalog_name() {
    let record = RawAnomalyRecord::new(5).with_content("   ");
    assert_eq!(synthesize(&record, table()).name, "TESS-005");
}

#[test]
fn test_minor_planet_record_synthesizes_as_asteroid() {
    // A content-less minor-planet row: canonical type, project bucket and
    // the zero-padded designation all come from the id and the tag.
    let record = RawAnomalyRecord::new(99).with_set("telescope-minorPlanet");
    let anomaly = synthesize(&record, table());

    assert_eq!(anomaly.anomaly_type, AnomalyType::Asteroid);
    assert_eq!(anomaly.project, ProjectBucket::DailyMinorPlanet);
    assert!(anomaly.name.contains("099"), "name was {}", anomaly.name);
}

#[test]
fn test_wide_ids_are_not_truncated_by_padding() {
    let record = RawAnomalyRecord::new(123_456);
    assert_eq!(synthesize(&record, table()).name, "TESS-123456");
}

#[test]
fn test_synthesis_is_idempotent() {
    let record = RawAnomalyRecord::new(10)
        .with_set("telescope-tess")
        .with_content("Kepler Twin");
    let a = synthesize(&record, table());
    let b = synthesize(&record, table());
    assert_eq!(a, b);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.brightness.to_bits(), b.brightness.to_bits());
    assert_eq!(a.discovery_date, b.discovery_date);
}

#[test]
fn test_geometry_stays_in_interior_band() {
    for id in 0..500 {
        let anomaly = synthesize(&RawAnomalyRecord::new(id), table());
        assert!(anomaly.x >= CanonicalAnomaly::INTERIOR_MARGIN);
        assert!(anomaly.x <= 100.0 - CanonicalAnomaly::INTERIOR_MARGIN);
        assert!(anomaly.y >= CanonicalAnomaly::INTERIOR_MARGIN);
        assert!(anomaly.y <= 100.0 - CanonicalAnomaly::INTERIOR_MARGIN);
    }
}

#[test]
fn test_visual_attribute_ranges() {
    for id in 0..500 {
        let anomaly = synthesize(&RawAnomalyRecord::new(id), table());
        assert!((0.5..=1.2).contains(&anomaly.brightness));
        assert!((0.6..=1.4).contains(&anomaly.size));
        assert!((1.0..=3.0).contains(&anomaly.pulse_speed));
        assert!((0.3..=0.8).contains(&anomaly.glow_intensity));
    }
}

#[test]
fn test_color_and_shape_follow_type() {
    let asteroid = synthesize(
        &RawAnomalyRecord::new(3).with_set("telescope-minorPlanet"),
        table(),
    );
    assert_eq!(asteroid.color, AnomalyType::Asteroid.color());
    assert_eq!(asteroid.shape, AnomalyType::Asteroid.shape());
}

#[test]
fn test_discovery_date_is_deterministic_and_in_era() {
    let anomaly = synthesize(&RawAnomalyRecord::new(77), table());
    assert_eq!(anomaly.discovery_date, synthesize(&RawAnomalyRecord::new(77), table()).discovery_date);

    let parts: Vec<i64> = anomaly
        .discovery_date
        .split('/')
        .map(|p| p.parse().unwrap())
        .collect();
    assert_eq!(parts.len(), 3);
    assert!((1..=12).contains(&parts[0]), "month {}", parts[0]);
    assert!((1..=28).contains(&parts[1]), "day {}", parts[1]);
    assert!((2024..=2027).contains(&parts[2]), "year {}", parts[2]);
}

#[test]
fn test_configuration_blob_is_carried_untouched() {
    let blob = json!({"telescope": {"focus": 0.8}, "flags": [1, 2, 3]});
    let mut record = RawAnomalyRecord::new(8);
    record.configuration = Some(blob.clone());

    let anomaly = synthesize(&record, table());
    assert_eq!(anomaly.db_record.configuration, Some(blob));
    // The blob plays no part in derivation.
    let plain = synthesize(&RawAnomalyRecord::new(8), table());
    assert_eq!(anomaly.x.to_bits(), plain.x.to_bits());
    assert_eq!(anomaly.sector, plain.sector);
}

#[test]
fn test_home_sector_is_stable_per_id() {
    for id in 0..100 {
        assert_eq!(home_sector(id), home_sector(id));
    }
}

#[test]
fn test_batch_synthesis_never_drops_records() {
    let records: Vec<RawAnomalyRecord> = (0..50)
        .map(|id| match id % 3 {
            0 => RawAnomalyRecord::new(id),
            1 => RawAnomalyRecord::new(id).with_set("no-such-survey"),
            _ => RawAnomalyRecord::new(id).with_content(""),
        })
        .collect();

    let anomalies = synthesize_all(&records, table());
    assert_eq!(anomalies.len(), records.len());
    for (record, anomaly) in records.iter().zip(&anomalies) {
        assert_eq!(anomaly.id, format!("db-{}", record.id));
    }
}
