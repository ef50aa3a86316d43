//! Ambient liquid classification
//!
//! Planet previews render one ambient liquid chosen by surface
//! temperature, as opposed to the per-deposit classification in
//! [`crate::phase`]. Five ordered Kelvin bands cover the whole axis, so
//! the lookup is total.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use sector::Rgb;
use units::Temperature;

/// The liquid rendered on a planet preview at a given surface temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum AmbientLiquid {
    /// T < 90 K — nitrogen seas (Triton-like)
    LiquidNitrogen,

    /// 90-120 K — methane lakes (Titan-like)
    LiquidMethane,

    /// 120-373 K — water; the band is generous below freezing so icy
    /// worlds still render blue rather than flipping to methane
    Water,

    /// 373-600 K — sulfuric acid (Venus cloud-deck chemistry)
    SulfuricAcid,

    /// >= 600 K — molten silicates
    MoltenRock,
}

impl AmbientLiquid {
    /// Classify a surface temperature into its liquid band.
    pub fn classify(temperature: Temperature) -> Self {
        match temperature.to_kelvin() {
            t if t < 90.0 => Self::LiquidNitrogen,
            t if t < 120.0 => Self::LiquidMethane,
            t if t < 373.0 => Self::Water,
            t if t < 600.0 => Self::SulfuricAcid,
            _ => Self::MoltenRock,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LiquidNitrogen => "Liquid Nitrogen",
            Self::LiquidMethane => "Liquid Methane",
            Self::Water => "Water",
            Self::SulfuricAcid => "Sulfuric Acid",
            Self::MoltenRock => "Molten Rock",
        }
    }

    /// Base surface color
    pub fn color(&self) -> Rgb {
        match self {
            Self::LiquidNitrogen => Rgb::new(0xD6, 0xE7, 0xFF),
            Self::LiquidMethane => Rgb::new(0xA2, 0xCD, 0xB0),
            Self::Water => Rgb::new(0x1E, 0x90, 0xFF),
            Self::SulfuricAcid => Rgb::new(0xD6, 0xC5, 0x62),
            Self::MoltenRock => Rgb::new(0xFF, 0x45, 0x00),
        }
    }

    /// Wave-pattern overlay color, a slightly darker companion to
    /// [`AmbientLiquid::color`]
    pub fn pattern_color(&self) -> Rgb {
        match self {
            Self::LiquidNitrogen => Rgb::new(0xC0, 0xD6, 0xFF),
            Self::LiquidMethane => Rgb::new(0x8E, 0xBD, 0xA0),
            Self::Water => Rgb::new(0x1E, 0x7F, 0xFF),
            Self::SulfuricAcid => Rgb::new(0xC4, 0xB2, 0x50),
            Self::MoltenRock => Rgb::new(0xFF, 0x24, 0x00),
        }
    }

    /// The rendering tuple for this band, in the shape the preview
    /// surface consumes.
    pub fn visuals(&self) -> LiquidVisuals {
        LiquidVisuals {
            name: self.name(),
            color: self.color(),
            pattern_color: self.pattern_color(),
        }
    }

    /// Returns the temperature band for this liquid in Kelvin.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::LiquidNitrogen => (0.0, 90.0),
            Self::LiquidMethane => (90.0, 120.0),
            Self::Water => (120.0, 373.0),
            Self::SulfuricAcid => (373.0, 600.0),
            Self::MoltenRock => (600.0, f64::INFINITY),
        }
    }
}

impl fmt::Display for AmbientLiquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rendering tuple for an ambient liquid band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct LiquidVisuals {
    pub name: &'static str,
    pub color: Rgb,
    pub pattern_color: Rgb,
}
