//! Mineral phase classification
//!
//! Each mineral category owns a fixed, monotonically increasing triple of
//! temperature thresholds. Below the melt point a deposit renders solid,
//! then liquid, then gas, then plasma. The thresholds are gameplay
//! constants tuned against real melting/boiling points where one exists
//! (water, iron, gold) and invented where it does not (metallic helium).

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use sector::Rgb;
use units::Temperature;

/// Discrete physical phase of a deposit at some temperature.
///
/// Ordered: classification is non-decreasing in temperature for every
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Plasma,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::Plasma => "plasma",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Phase transition points for one mineral category, in Kelvin.
///
/// `melt <= boil <= ionize` for every category. Below `melt` the phase is
/// solid; at or above `ionize` it is plasma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseThresholds {
    pub melt: Temperature,
    pub boil: Temperature,
    pub ionize: Temperature,
}

impl PhaseThresholds {
    const fn new(melt: f64, boil: f64, ionize: f64) -> Self {
        Self {
            melt: Temperature::from_kelvin(melt),
            boil: Temperature::from_kelvin(boil),
            ionize: Temperature::from_kelvin(ionize),
        }
    }
}

/// Closed set of extractable mineral and volatile categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum MineralKind {
    WaterIce,
    Co2Ice,
    MetallicHydrogen,
    MetallicHelium,
    Methane,
    Ammonia,
    Soil,
    Dust,
    WaterVapour,
    IronOre,
    CopperOre,
    GoldOre,
    Silicate,
    Carbon,
}

impl MineralKind {
    /// The full vocabulary.
    pub const ALL: [MineralKind; 14] = [
        Self::WaterIce,
        Self::Co2Ice,
        Self::MetallicHydrogen,
        Self::MetallicHelium,
        Self::Methane,
        Self::Ammonia,
        Self::Soil,
        Self::Dust,
        Self::WaterVapour,
        Self::IronOre,
        Self::CopperOre,
        Self::GoldOre,
        Self::Silicate,
        Self::Carbon,
    ];

    /// The tag the data layer stores for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::WaterIce => "water-ice",
            Self::Co2Ice => "co2-ice",
            Self::MetallicHydrogen => "metallic-hydrogen",
            Self::MetallicHelium => "metallic-helium",
            Self::Methane => "methane",
            Self::Ammonia => "ammonia",
            Self::Soil => "soil",
            Self::Dust => "dust",
            Self::WaterVapour => "water-vapour",
            Self::IronOre => "iron-ore",
            Self::CopperOre => "copper-ore",
            Self::GoldOre => "gold-ore",
            Self::Silicate => "silicate",
            Self::Carbon => "carbon",
        }
    }

    /// Parse a stored tag. Unknown tags return `None`; callers that need
    /// totality go through [`phase_for_tag`] / [`visuals_for_tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Phase transition points for this category.
    pub fn thresholds(&self) -> PhaseThresholds {
        match self {
            Self::WaterIce => PhaseThresholds::new(273.0, 373.0, 1000.0),
            Self::Co2Ice => PhaseThresholds::new(195.0, 216.0, 600.0),
            Self::MetallicHydrogen => PhaseThresholds::new(14.0, 33.0, 5000.0),
            Self::MetallicHelium => PhaseThresholds::new(1.0, 4.0, 5000.0),
            Self::Methane => PhaseThresholds::new(91.0, 112.0, 600.0),
            Self::Ammonia => PhaseThresholds::new(195.0, 240.0, 800.0),
            Self::Soil => PhaseThresholds::new(1800.0, 2200.0, 3000.0),
            Self::Dust => PhaseThresholds::new(1600.0, 2000.0, 2800.0),
            Self::WaterVapour => PhaseThresholds::new(273.0, 373.0, 1000.0),
            Self::IronOre => PhaseThresholds::new(1811.0, 3134.0, 5000.0),
            Self::CopperOre => PhaseThresholds::new(1358.0, 2835.0, 4500.0),
            Self::GoldOre => PhaseThresholds::new(1337.0, 3243.0, 5000.0),
            Self::Silicate => PhaseThresholds::new(1473.0, 2373.0, 3500.0),
            Self::Carbon => PhaseThresholds::new(3823.0, 4098.0, 5000.0),
        }
    }

    /// Classify this category's phase at a temperature.
    pub fn phase_at(&self, temperature: Temperature) -> Phase {
        let t = self.thresholds();
        match temperature {
            temp if temp < t.melt => Phase::Solid,
            temp if temp < t.boil => Phase::Liquid,
            temp if temp < t.ionize => Phase::Gas,
            _ => Phase::Plasma,
        }
    }

    /// Rendering tint for this category in a given phase.
    pub fn visuals(&self, phase: Phase) -> DepositVisuals {
        use Phase::{Gas, Liquid, Plasma, Solid};
        match (self, phase) {
            (Self::WaterIce, Solid) => dv(0xB4E7FF, 0x88CCFF, 0.3),
            (Self::WaterIce, Liquid) => dv(0x1E90FF, 0x1E90FF, 0.1),
            (Self::WaterIce, Gas) => dv(0xCCDDFF, 0xFFFFFF, 0.2),
            (Self::WaterIce, Plasma) => dv(0xFF0000, 0xFF0000, 0.8),

            (Self::Co2Ice, Solid) => dv(0xE8F4F8, 0xFFFFFF, 0.4),
            (Self::Co2Ice, Liquid) => dv(0xCCDDEE, 0xAABBCC, 0.2),
            (Self::Co2Ice, Gas) => dv(0xF0F0F0, 0xFFFFFF, 0.1),
            (Self::Co2Ice, Plasma) => dv(0xFF4444, 0xFF0000, 0.7),

            (Self::MetallicHydrogen, Solid) => dv(0xC0C0C0, 0xE0E0E0, 0.5),
            (Self::MetallicHydrogen, Liquid) => dv(0xA0A0D0, 0xC0C0FF, 0.6),
            (Self::MetallicHydrogen, Gas) => dv(0xD0D0FF, 0xE0E0FF, 0.3),
            (Self::MetallicHydrogen, Plasma) => dv(0xFF00FF, 0xFF00FF, 0.9),

            (Self::MetallicHelium, Solid) => dv(0xFFE4B5, 0xFFD700, 0.4),
            (Self::MetallicHelium, Liquid) => dv(0xFFA500, 0xFFD700, 0.5),
            (Self::MetallicHelium, Gas) => dv(0xFFCC99, 0xFFE4B5, 0.2),
            (Self::MetallicHelium, Plasma) => dv(0xFF6600, 0xFF6600, 0.8),

            (Self::Methane, Solid) => dv(0x9FE2BF, 0x7FC7AF, 0.3),
            (Self::Methane, Liquid) => dv(0x6FCDAF, 0x5FAD8F, 0.4),
            (Self::Methane, Gas) => dv(0xAFFFFF, 0x8FEFEF, 0.2),
            (Self::Methane, Plasma) => dv(0x00FF88, 0x00FF88, 0.7),

            (Self::Ammonia, Solid) => dv(0xE6E6FA, 0xD8BFD8, 0.3),
            (Self::Ammonia, Liquid) => dv(0xDDA0DD, 0xDA70D6, 0.4),
            (Self::Ammonia, Gas) => dv(0xF0E6FF, 0xE6D6FF, 0.2),
            (Self::Ammonia, Plasma) => dv(0xFF00FF, 0xFF00FF, 0.8),

            (Self::Soil, Solid) => dv(0x8B4513, 0x654321, 0.1),
            (Self::Soil, Liquid) => dv(0xA0522D, 0x8B4513, 0.2),
            (Self::Soil, Gas) => dv(0xD2691E, 0xCD853F, 0.1),
            (Self::Soil, Plasma) => dv(0xFF4500, 0xFF4500, 0.6),

            (Self::Dust, Solid) => dv(0xD2B48C, 0xC19A6B, 0.1),
            (Self::Dust, Liquid) => dv(0xDEB887, 0xD2B48C, 0.1),
            (Self::Dust, Gas) => dv(0xF5DEB3, 0xFFE4B5, 0.1),
            (Self::Dust, Plasma) => dv(0xFF6347, 0xFF6347, 0.5),

            (Self::WaterVapour, Solid) => dv(0xE0F8FF, 0xFFFFFF, 0.2),
            (Self::WaterVapour, Liquid) => dv(0xADD8E6, 0x87CEEB, 0.2),
            (Self::WaterVapour, Gas) => dv(0xF0F8FF, 0xFFFFFF, 0.15),
            (Self::WaterVapour, Plasma) => dv(0xFF6B6B, 0xFF0000, 0.7),

            (Self::IronOre, Solid) => dv(0x8B4726, 0xA0522D, 0.2),
            (Self::IronOre, Liquid) => dv(0xFF4500, 0xFF6347, 0.6),
            (Self::IronOre, Gas) => dv(0xFFA07A, 0xFF7F50, 0.3),
            (Self::IronOre, Plasma) => dv(0xFF0000, 0xFF0000, 0.9),

            (Self::CopperOre, Solid) => dv(0xB87333, 0xCD7F32, 0.3),
            (Self::CopperOre, Liquid) => dv(0xFF6347, 0xFF4500, 0.5),
            (Self::CopperOre, Gas) => dv(0xFFA07A, 0xFF8C69, 0.3),
            (Self::CopperOre, Plasma) => dv(0xFF4500, 0xFF4500, 0.8),

            (Self::GoldOre, Solid) => dv(0xFFD700, 0xFFA500, 0.5),
            (Self::GoldOre, Liquid) => dv(0xFF8C00, 0xFF6347, 0.7),
            (Self::GoldOre, Gas) => dv(0xFFFF00, 0xFFD700, 0.4),
            (Self::GoldOre, Plasma) => dv(0xFF00FF, 0xFF00FF, 0.9),

            (Self::Silicate, Solid) => dv(0x696969, 0x808080, 0.1),
            (Self::Silicate, Liquid) => dv(0xFF4500, 0xFF6347, 0.5),
            (Self::Silicate, Gas) => dv(0xA9A9A9, 0xC0C0C0, 0.2),
            (Self::Silicate, Plasma) => dv(0xFFA500, 0xFFA500, 0.7),

            (Self::Carbon, Solid) => dv(0x2F4F4F, 0x000000, 0.05),
            (Self::Carbon, Liquid) => dv(0xFF4500, 0xFF6347, 0.6),
            (Self::Carbon, Gas) => dv(0x696969, 0x808080, 0.1),
            (Self::Carbon, Plasma) => dv(0xFF00FF, 0xFF00FF, 0.8),
        }
    }
}

impl fmt::Display for MineralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Rendering tint for a deposit: surface color, emissive color and
/// emissive intensity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DepositVisuals {
    pub color: Rgb,
    pub emissive: Rgb,
    pub intensity: f64,
}

impl DepositVisuals {
    /// Fallback tint for categories the table does not know.
    pub const NEUTRAL: DepositVisuals = DepositVisuals {
        color: Rgb::new(0x80, 0x80, 0x80),
        emissive: Rgb::new(0x40, 0x40, 0x40),
        intensity: 0.2,
    };
}

const fn dv(color: u32, emissive: u32, intensity: f64) -> DepositVisuals {
    const fn rgb(packed: u32) -> Rgb {
        Rgb::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }
    DepositVisuals {
        color: rgb(color),
        emissive: rgb(emissive),
        intensity,
    }
}

/// Classify a stored category tag at a temperature.
///
/// Total over arbitrary strings: unknown tags classify as solid rather
/// than erroring, because the tag vocabulary is caller-owned and may grow.
pub fn phase_for_tag(tag: &str, temperature: Temperature) -> Phase {
    MineralKind::from_tag(tag).map_or(Phase::Solid, |kind| kind.phase_at(temperature))
}

/// Rendering tint for a stored category tag at a temperature.
///
/// Unknown tags get the neutral gray tuple.
pub fn visuals_for_tag(tag: &str, temperature: Temperature) -> DepositVisuals {
    MineralKind::from_tag(tag).map_or(DepositVisuals::NEUTRAL, |kind| {
        kind.visuals(kind.phase_at(temperature))
    })
}
