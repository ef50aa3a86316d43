//! Physical state classification.
//!
//! Pure lookups from (mineral category, temperature) to a discrete phase
//! and a rendering tint, used by the extraction and planet-preview
//! surfaces. Same determinism discipline as the rest of the engine: fixed
//! tables, total functions, no stored state.

pub mod liquid;
pub mod phase;

#[cfg(test)]
mod phase_test;

// Re-export key types at crate root
pub use liquid::{AmbientLiquid, LiquidVisuals};
pub use phase::{
    DepositVisuals, MineralKind, Phase, PhaseThresholds, phase_for_tag, visuals_for_tag,
};
