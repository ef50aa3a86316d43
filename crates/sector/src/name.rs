//! Sector coordinates and naming
//!
//! A sector is one cell of an unbounded 2-D integer grid. Its name is a
//! two-token label drawn from small fixed vocabularies — flavor text, not a
//! key. The coordinate pair is the real identity: the 128-combination label
//! space will repeat over an unbounded grid, and that repetition is part of
//! the game world (anomalies belong to a *name*, so a far-away sector with
//! the same name shows the same discoveries).

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::stream::{bucket, stream};

/// One cell of the exploration grid, identified by signed integers.
///
/// This pair is the identity key for everything sector-scoped. The derived
/// [`SectorName`] is a display label and is not unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SectorCoordinate {
    pub x: i32,
    pub y: i32,
}

impl SectorCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Seed for draws scoped to this sector.
    ///
    /// `x * 1000 + y`, the packing the original client shipped with. It is
    /// not injective over the full grid; neighboring rows 1000 apart alias.
    /// Preserved because the derived labels are display values and changing
    /// the packing would rename every sector players have already shared.
    pub fn seed(&self) -> i64 {
        self.x as i64 * 1000 + self.y as i64
    }

    /// Seed for the second, independent token draw (axes swapped).
    fn transposed_seed(&self) -> i64 {
        self.x as i64 + self.y as i64 * 1000
    }
}

impl fmt::Display for SectorCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// First token of a sector name: one of 16 Greek letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum GreekLetter {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    Nu,
    Xi,
    Omicron,
    Pi,
}

impl GreekLetter {
    /// The full vocabulary, in draw order.
    pub const ALL: [GreekLetter; 16] = [
        Self::Alpha,
        Self::Beta,
        Self::Gamma,
        Self::Delta,
        Self::Epsilon,
        Self::Zeta,
        Self::Eta,
        Self::Theta,
        Self::Iota,
        Self::Kappa,
        Self::Lambda,
        Self::Mu,
        Self::Nu,
        Self::Xi,
        Self::Omicron,
        Self::Pi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
            Self::Delta => "Delta",
            Self::Epsilon => "Epsilon",
            Self::Zeta => "Zeta",
            Self::Eta => "Eta",
            Self::Theta => "Theta",
            Self::Iota => "Iota",
            Self::Kappa => "Kappa",
            Self::Lambda => "Lambda",
            Self::Mu => "Mu",
            Self::Nu => "Nu",
            Self::Xi => "Xi",
            Self::Omicron => "Omicron",
            Self::Pi => "Pi",
        }
    }
}

impl fmt::Display for GreekLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Second token of a sector name: one of 8 region types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum RegionType {
    Sector,
    Region,
    Expanse,
    Zone,
    Field,
    Cluster,
    Nebula,
    Void,
}

impl RegionType {
    /// The full vocabulary, in draw order.
    pub const ALL: [RegionType; 8] = [
        Self::Sector,
        Self::Region,
        Self::Expanse,
        Self::Zone,
        Self::Field,
        Self::Cluster,
        Self::Nebula,
        Self::Void,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sector => "Sector",
            Self::Region => "Region",
            Self::Expanse => "Expanse",
            Self::Zone => "Zone",
            Self::Field => "Field",
            Self::Cluster => "Cluster",
            Self::Nebula => "Nebula",
            Self::Void => "Void",
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A two-token sector label, e.g. "Kappa Expanse".
///
/// Compared by token pair, never by formatted string. Equality of names is
/// meaningful (it drives anomaly membership) but does NOT imply equality of
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SectorName {
    pub letter: GreekLetter,
    pub region: RegionType,
}

impl SectorName {
    pub const fn new(letter: GreekLetter, region: RegionType) -> Self {
        Self { letter, region }
    }

    /// Derive the label for a coordinate.
    ///
    /// One stream draw per token, mapped into the vocabulary with the
    /// engine-wide bucket rule. Stable under restart by construction; NOT
    /// unique across coordinates, by design.
    pub fn for_coordinate(coordinate: SectorCoordinate) -> Self {
        let letter_draw = stream(coordinate.seed(), 0);
        let region_draw = stream(coordinate.transposed_seed(), 1);
        Self {
            letter: GreekLetter::ALL[bucket(letter_draw, GreekLetter::ALL.len())],
            region: RegionType::ALL[bucket(region_draw, RegionType::ALL.len())],
        }
    }
}

impl fmt::Display for SectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.letter, self.region)
    }
}

/// Convenience form of [`SectorName::for_coordinate`] returning the
/// formatted label, for callers that only need display text.
pub fn sector_name(x: i32, y: i32) -> String {
    SectorName::for_coordinate(SectorCoordinate::new(x, y)).to_string()
}
