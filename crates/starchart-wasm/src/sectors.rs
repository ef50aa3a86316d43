//! WASM bindings for sector naming and star fields.

use wasm_bindgen::prelude::*;

use sector::{sector_name as lib_sector_name, stars_for as lib_stars_for, stream as lib_stream};

use crate::to_js;

/// One draw from the deterministic value stream.
///
/// # Arguments
/// * `seed` - Stream seed (an anomaly id or a packed sector coordinate)
/// * `index` - Draw index within the seed's stream
#[wasm_bindgen]
pub fn stream(seed: i64, index: i64) -> f64 {
    lib_stream(seed, index)
}

/// The display label for the sector at (x, y), e.g. "Kappa Expanse".
#[wasm_bindgen(js_name = sectorName)]
pub fn sector_name(x: i32, y: i32) -> String {
    lib_sector_name(x, y)
}

/// The 400-star decorative field for the sector at (x, y).
///
/// Element-wise identical on every call with the same coordinate.
#[wasm_bindgen(js_name = starsFor)]
pub fn stars_for(x: i32, y: i32) -> Result<JsValue, JsError> {
    to_js(&lib_stars_for(x, y))
}
