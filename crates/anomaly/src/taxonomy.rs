//! Taxonomy normalization
//!
//! The data layer's `anomaly_set` tags grew organically: the same telescope
//! project appears as `diskDetective`, `disk-detective` and
//! `accretion_disc` depending on which era of the client wrote the row.
//! Everything downstream of this module works with two closed enumerations
//! instead — a canonical type (what the object *is*) and a project bucket
//! (which gameplay flow classifies it) — produced by one lookup through an
//! explicit, versioned, immutable table.
//!
//! Unknown and absent tags normalize to exoplanet / planet-hunters rather
//! than failing: the raw vocabulary is allowed to grow ahead of engine
//! deployments.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use sector::Rgb;

/// Canonical anomaly type: the small closed set every raw tag maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum AnomalyType {
    /// Transit candidates from survey light curves
    Exoplanet,
    /// Minor planets and active asteroids
    Asteroid,
    /// Solar surface activity
    Sunspot,
    /// Circumstellar debris discs
    AccretionDisc,
    /// Periodic photometry targets
    VariableStar,
    /// Atmospheric cloud features (satellite imagery)
    CloudFormation,
}

impl AnomalyType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exoplanet => "exoplanet",
            Self::Asteroid => "asteroid",
            Self::Sunspot => "sunspot",
            Self::AccretionDisc => "accretion_disc",
            Self::VariableStar => "variable_star",
            Self::CloudFormation => "cloud_formation",
        }
    }

    /// Catalog prefix used for synthesized display names, e.g. `TESS-042`.
    pub fn catalog_prefix(&self) -> &'static str {
        match self {
            Self::Exoplanet => "TESS",
            Self::Asteroid => "MP",
            Self::Sunspot => "SOL",
            Self::AccretionDisc => "DSK",
            Self::VariableStar => "WASP",
            Self::CloudFormation => "CLD",
        }
    }

    /// Viewport color for this type.
    pub fn color(&self) -> Rgb {
        match self {
            Self::Exoplanet => Rgb::new(0x78, 0xCC, 0xE2),
            Self::Asteroid => Rgb::new(0xF2, 0xC5, 0x72),
            Self::Sunspot => Rgb::new(0xFF, 0x6B, 0x6B),
            Self::AccretionDisc => Rgb::new(0xFF, 0xB3, 0x80),
            Self::VariableStar => Rgb::new(0xFF, 0xFA, 0xC0),
            Self::CloudFormation => Rgb::new(0xCC, 0xDD, 0xFF),
        }
    }

    /// Viewport marker shape for this type.
    pub fn shape(&self) -> AnomalyShape {
        match self {
            Self::Exoplanet => AnomalyShape::Circle,
            Self::Asteroid => AnomalyShape::Triangle,
            Self::Sunspot => AnomalyShape::Star,
            Self::AccretionDisc => AnomalyShape::Diamond,
            Self::VariableStar => AnomalyShape::Star,
            Self::CloudFormation => AnomalyShape::Cloud,
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Marker shape the renderer draws for an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum AnomalyShape {
    Circle,
    Triangle,
    Star,
    Diamond,
    Cloud,
}

impl AnomalyShape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Diamond => "diamond",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for AnomalyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Gameplay project bucket: routes an anomaly into a mission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ProjectBucket {
    PlanetHunters,
    DailyMinorPlanet,
    ActiveAsteroids,
    Sunspots,
    DiskDetective,
    SuperwaspVariable,
    CloudspottingMars,
}

impl ProjectBucket {
    /// The slug the gameplay layer keys missions on.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::PlanetHunters => "planet-hunters",
            Self::DailyMinorPlanet => "daily-minor-planet",
            Self::ActiveAsteroids => "active-asteroids",
            Self::Sunspots => "sunspots",
            Self::DiskDetective => "disk-detective",
            Self::SuperwaspVariable => "superwasp-variable",
            Self::CloudspottingMars => "cloudspotting-mars",
        }
    }
}

impl fmt::Display for ProjectBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One raw-tag mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub raw: &'static str,
    pub anomaly_type: AnomalyType,
    pub project: ProjectBucket,
}

/// The versioned raw-tag lookup table.
///
/// Loaded once (it is a `static`), never mutated, passed by reference into
/// synthesis. Lookup is case-sensitive byte equality on the raw tag; a miss
/// falls back to [`TaxonomyTable::default_mapping`]. Bump `version` whenever
/// an entry is added so data-layer migrations can assert against it.
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyTable {
    pub version: u32,
    entries: &'static [TaxonomyEntry],
    default: (AnomalyType, ProjectBucket),
}

const BUILTIN_ENTRIES: &[TaxonomyEntry] = &[
    // TESS transit survey
    TaxonomyEntry {
        raw: "telescope-tess",
        anomaly_type: AnomalyType::Exoplanet,
        project: ProjectBucket::PlanetHunters,
    },
    TaxonomyEntry {
        raw: "planet",
        anomaly_type: AnomalyType::Exoplanet,
        project: ProjectBucket::PlanetHunters,
    },
    // Minor planets
    TaxonomyEntry {
        raw: "telescope-minorPlanet",
        anomaly_type: AnomalyType::Asteroid,
        project: ProjectBucket::DailyMinorPlanet,
    },
    TaxonomyEntry {
        raw: "active-asteroids",
        anomaly_type: AnomalyType::Asteroid,
        project: ProjectBucket::ActiveAsteroids,
    },
    TaxonomyEntry {
        raw: "asteroid",
        anomaly_type: AnomalyType::Asteroid,
        project: ProjectBucket::ActiveAsteroids,
    },
    // Solar activity
    TaxonomyEntry {
        raw: "telescope-sunspot",
        anomaly_type: AnomalyType::Sunspot,
        project: ProjectBucket::Sunspots,
    },
    TaxonomyEntry {
        raw: "sunspot",
        anomaly_type: AnomalyType::Sunspot,
        project: ProjectBucket::Sunspots,
    },
    // Debris discs; the three spellings are different client eras
    TaxonomyEntry {
        raw: "diskDetective",
        anomaly_type: AnomalyType::AccretionDisc,
        project: ProjectBucket::DiskDetective,
    },
    TaxonomyEntry {
        raw: "disk-detective",
        anomaly_type: AnomalyType::AccretionDisc,
        project: ProjectBucket::DiskDetective,
    },
    TaxonomyEntry {
        raw: "accretion_disc",
        anomaly_type: AnomalyType::AccretionDisc,
        project: ProjectBucket::DiskDetective,
    },
    // Variable star photometry
    TaxonomyEntry {
        raw: "telescope-superwasp-variable",
        anomaly_type: AnomalyType::VariableStar,
        project: ProjectBucket::SuperwaspVariable,
    },
    TaxonomyEntry {
        raw: "superwasp-variable",
        anomaly_type: AnomalyType::VariableStar,
        project: ProjectBucket::SuperwaspVariable,
    },
    TaxonomyEntry {
        raw: "variable_star",
        anomaly_type: AnomalyType::VariableStar,
        project: ProjectBucket::SuperwaspVariable,
    },
    // Satellite cloud imagery
    TaxonomyEntry {
        raw: "balloon-marsCloudShapes",
        anomaly_type: AnomalyType::CloudFormation,
        project: ProjectBucket::CloudspottingMars,
    },
];

static BUILTIN: TaxonomyTable = TaxonomyTable {
    version: 1,
    entries: BUILTIN_ENTRIES,
    default: (AnomalyType::Exoplanet, ProjectBucket::PlanetHunters),
};

impl TaxonomyTable {
    /// The table covering every raw tag the data layer currently emits.
    pub fn builtin() -> &'static TaxonomyTable {
        &BUILTIN
    }

    /// Exact lookup of a raw tag.
    pub fn lookup(&self, raw: &str) -> Option<(AnomalyType, ProjectBucket)> {
        self.entries
            .iter()
            .find(|entry| entry.raw == raw)
            .map(|entry| (entry.anomaly_type, entry.project))
    }

    /// Normalize an optional raw tag, falling back to the default on a
    /// miss. This is the total function synthesis goes through.
    pub fn resolve(&self, raw: Option<&str>) -> (AnomalyType, ProjectBucket) {
        raw.and_then(|tag| self.lookup(tag)).unwrap_or(self.default)
    }

    /// The mapping used for unknown and absent tags.
    pub fn default_mapping(&self) -> (AnomalyType, ProjectBucket) {
        self.default
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        self.entries
    }
}
