//! Synthesize a pool of anomaly records and walk the sectors around the
//! origin, printing what each viewport would show.
//!
//! Run with: cargo run --example synthesize_pool

use anomaly::{RawAnomalyRecord, TaxonomyTable, in_sector, synthesize_all};
use sector::sector_name;

fn main() {
    let sets = [
        "telescope-tess",
        "telescope-minorPlanet",
        "diskDetective",
        "superwasp-variable",
        "telescope-sunspot",
    ];

    let records: Vec<RawAnomalyRecord> = (0..40)
        .map(|id| RawAnomalyRecord::new(id).with_set(sets[id as usize % sets.len()]))
        .collect();

    let anomalies = synthesize_all(&records, TaxonomyTable::builtin());

    for y in -2..=2 {
        for x in -2..=2 {
            let visible: Vec<_> = in_sector(&anomalies, x, y).collect();
            if visible.is_empty() {
                continue;
            }
            println!("({x}, {y}) {}", sector_name(x, y));
            for anomaly in visible {
                println!(
                    "  {:<10} {:<18} {:<18} at ({:.1}, {:.1})",
                    anomaly.id,
                    anomaly.name,
                    anomaly.anomaly_type.to_string(),
                    anomaly.x,
                    anomaly.y
                );
            }
        }
    }
}
