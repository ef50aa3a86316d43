//! WASM bindings for the starchart generation engine.
//!
//! This crate provides JavaScript/TypeScript bindings for the sector,
//! anomaly and minerals crates using `wasm-bindgen` and
//! `serde-wasm-bindgen` for seamless type conversion. Every export is a
//! thin shim over a pure library function; no logic lives here.

use wasm_bindgen::prelude::*;

mod anomalies;
mod deposits;
mod sectors;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
