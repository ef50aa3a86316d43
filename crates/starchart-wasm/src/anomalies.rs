//! WASM bindings for anomaly synthesis and sector filtering.

use wasm_bindgen::prelude::*;

use anomaly::{RawAnomalyRecord, TaxonomyTable, in_sector, synthesize, synthesize_all};

use crate::{from_js, to_js};

/// Synthesize the canonical view of one persisted anomaly record.
///
/// Total: malformed optional fields fall back to documented defaults
/// rather than raising.
#[wasm_bindgen(js_name = synthesizeAnomaly)]
pub fn synthesize_anomaly(record: JsValue) -> Result<JsValue, JsError> {
    let record: RawAnomalyRecord = from_js(record)?;
    to_js(&synthesize(&record, TaxonomyTable::builtin()))
}

/// Synthesize a batch of records.
#[wasm_bindgen(js_name = synthesizeAnomalies)]
pub fn synthesize_anomalies(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<RawAnomalyRecord> = from_js(records)?;
    to_js(&synthesize_all(&records, TaxonomyTable::builtin()))
}

/// Synthesize a batch and keep only the anomalies visible in the sector
/// at (x, y), preserving input order.
#[wasm_bindgen(js_name = anomaliesInSector)]
pub fn anomalies_in_sector(records: JsValue, x: i32, y: i32) -> Result<JsValue, JsError> {
    let records: Vec<RawAnomalyRecord> = from_js(records)?;
    let pool = synthesize_all(&records, TaxonomyTable::builtin());
    let visible: Vec<_> = in_sector(&pool, x, y).cloned().collect();
    to_js(&visible)
}
