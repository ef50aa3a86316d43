//! Tests for mineral phase classification

use units::Temperature;

use crate::phase::{DepositVisuals, MineralKind, Phase, phase_for_tag, visuals_for_tag};

fn k(t: f64) -> Temperature {
    Temperature::from_kelvin(t)
}

// ========== Phase Classification Tests ==========

#[test]
fn test_water_ice_bands() {
    assert_eq!(MineralKind::WaterIce.phase_at(k(100.0)), Phase::Solid);
    assert_eq!(MineralKind::WaterIce.phase_at(k(300.0)), Phase::Liquid);
    assert_eq!(MineralKind::WaterIce.phase_at(k(500.0)), Phase::Gas);
    assert_eq!(MineralKind::WaterIce.phase_at(k(1000.0)), Phase::Plasma);
}

#[test]
fn test_thresholds_are_exclusive_upper_bounds() {
    // At exactly the melt point the deposit has melted.
    assert_eq!(MineralKind::WaterIce.phase_at(k(273.0)), Phase::Liquid);
    assert_eq!(MineralKind::WaterIce.phase_at(k(272.999)), Phase::Solid);
    assert_eq!(MineralKind::IronOre.phase_at(k(1811.0)), Phase::Liquid);
}

#[test]
fn test_everything_is_solid_at_zero() {
    for kind in MineralKind::ALL {
        assert_eq!(kind.phase_at(k(0.0)), Phase::Solid, "{kind}");
    }
}

#[test]
fn test_everything_is_plasma_at_stellar_temperatures() {
    for kind in MineralKind::ALL {
        assert_eq!(kind.phase_at(k(6000.0)), Phase::Plasma, "{kind}");
    }
}

#[test]
fn test_phase_is_monotonic_in_temperature() {
    for kind in MineralKind::ALL {
        let mut previous = kind.phase_at(k(0.0));
        let mut t = 0.0;
        while t < 6500.0 {
            let current = kind.phase_at(k(t));
            assert!(current >= previous, "{kind} regressed at {t} K");
            previous = current;
            t += 10.0;
        }
    }
}

#[test]
fn test_thresholds_are_ordered_per_kind() {
    for kind in MineralKind::ALL {
        let t = kind.thresholds();
        assert!(t.melt <= t.boil, "{kind}");
        assert!(t.boil <= t.ionize, "{kind}");
    }
}

#[test]
fn test_volatiles_melt_before_refractories() {
    let helium = MineralKind::MetallicHelium.thresholds();
    let carbon = MineralKind::Carbon.thresholds();
    assert!(helium.melt < carbon.melt);
}

// ========== Tag Boundary Tests ==========

#[test]
fn test_tag_round_trip() {
    for kind in MineralKind::ALL {
        assert_eq!(MineralKind::from_tag(kind.tag()), Some(kind));
    }
}

#[test]
fn test_unknown_tag_classifies_solid() {
    assert_eq!(MineralKind::from_tag("unobtanium"), None);
    assert_eq!(phase_for_tag("unobtanium", k(5000.0)), Phase::Solid);
    assert_eq!(phase_for_tag("", k(300.0)), Phase::Solid);
}

#[test]
fn test_known_tag_classifies_through_table() {
    assert_eq!(phase_for_tag("water-ice", k(100.0)), Phase::Solid);
    assert_eq!(phase_for_tag("water-ice", k(300.0)), Phase::Liquid);
    assert_eq!(phase_for_tag("water-ice", k(1000.0)), Phase::Plasma);
}

// ========== Visuals Tests ==========

#[test]
fn test_visuals_vary_by_phase() {
    let solid = MineralKind::WaterIce.visuals(Phase::Solid);
    let liquid = MineralKind::WaterIce.visuals(Phase::Liquid);
    assert_ne!(solid, liquid);
    assert_eq!(liquid.color.to_hex(), "#1E90FF");
}

#[test]
fn test_plasma_runs_hot() {
    // Plasma tints carry the strongest emissive intensity for every kind.
    for kind in MineralKind::ALL {
        let plasma = kind.visuals(Phase::Plasma);
        for phase in [Phase::Solid, Phase::Liquid, Phase::Gas] {
            assert!(
                plasma.intensity >= kind.visuals(phase).intensity,
                "{kind} {phase}"
            );
        }
    }
}

#[test]
fn test_intensity_is_normalized() {
    for kind in MineralKind::ALL {
        for phase in [Phase::Solid, Phase::Liquid, Phase::Gas, Phase::Plasma] {
            let visuals = kind.visuals(phase);
            assert!((0.0..=1.0).contains(&visuals.intensity), "{kind} {phase}");
        }
    }
}

#[test]
fn test_unknown_tag_gets_neutral_visuals() {
    let visuals = visuals_for_tag("unobtanium", k(300.0));
    assert_eq!(visuals, DepositVisuals::NEUTRAL);
    assert_eq!(visuals.color.to_hex(), "#808080");
    assert_eq!(visuals.emissive.to_hex(), "#404040");
}

#[test]
fn test_known_tag_visuals_track_temperature() {
    let frozen = visuals_for_tag("water-ice", k(100.0));
    let molten = visuals_for_tag("water-ice", k(300.0));
    assert_eq!(frozen, MineralKind::WaterIce.visuals(Phase::Solid));
    assert_eq!(molten, MineralKind::WaterIce.visuals(Phase::Liquid));
}
