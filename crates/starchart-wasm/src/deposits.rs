//! WASM bindings for physical state classification.

use wasm_bindgen::prelude::*;

use minerals::{AmbientLiquid, phase_for_tag, visuals_for_tag};
use units::Temperature;

use crate::to_js;

/// Phase of a mineral category at a temperature, as its snake_case name
/// ("solid", "liquid", "gas", "plasma").
///
/// # Arguments
/// * `tag` - Stored category tag (e.g. "water-ice"); unknown tags are solid
/// * `kelvin` - Temperature in Kelvin
#[wasm_bindgen(js_name = mineralPhase)]
pub fn mineral_phase(tag: &str, kelvin: f64) -> String {
    phase_for_tag(tag, Temperature::from_kelvin(kelvin))
        .name()
        .to_string()
}

/// Rendering tint for a mineral category at a temperature.
///
/// Unknown tags get the neutral gray tuple.
#[wasm_bindgen(js_name = depositVisuals)]
pub fn deposit_visuals(tag: &str, kelvin: f64) -> Result<JsValue, JsError> {
    to_js(&visuals_for_tag(tag, Temperature::from_kelvin(kelvin)))
}

/// The ambient liquid rendering tuple for a surface temperature.
#[wasm_bindgen(js_name = ambientLiquid)]
pub fn ambient_liquid(kelvin: f64) -> Result<JsValue, JsError> {
    let liquid = AmbientLiquid::classify(Temperature::from_kelvin(kelvin));
    to_js(&liquid.visuals())
}
