//! Tests for the Temperature quantity

use approx::assert_relative_eq;

use crate::temperature::Temperature;

#[test]
fn test_from_kelvin_round_trip() {
    let temp = Temperature::from_kelvin(288.0);
    assert_relative_eq!(temp.to_kelvin(), 288.0);
}

#[test]
fn test_celsius_conversion() {
    let temp = Temperature::from_celsius(0.0);
    assert_relative_eq!(temp.to_kelvin(), 273.15);
    assert_relative_eq!(temp.to_celsius(), 0.0);
}

#[test]
fn test_water_constants() {
    assert_relative_eq!(Temperature::water_freezing().to_kelvin(), 273.15);
    assert_relative_eq!(Temperature::water_boiling().to_kelvin(), 373.15);
}

#[test]
fn test_ordering() {
    let cold = Temperature::from_kelvin(90.0);
    let hot = Temperature::from_kelvin(1200.0);
    assert!(cold < hot);
    assert!(hot > Temperature::water_boiling());
}

#[test]
fn test_arithmetic() {
    let a = Temperature::from_kelvin(100.0);
    let b = Temperature::from_kelvin(50.0);
    assert_relative_eq!((a + b).to_kelvin(), 150.0);
    assert_relative_eq!((a - b).to_kelvin(), 50.0);
    assert_relative_eq!((a * 2.0).to_kelvin(), 200.0);
    assert_relative_eq!((2.0 * a).to_kelvin(), 200.0);
}

#[test]
fn test_negative_kelvin_is_representable() {
    // The type does not police physicality; classifiers treat anything
    // below the lowest threshold as solid.
    let t = Temperature::from_kelvin(-5.0);
    assert!(t < Temperature::from_kelvin(0.0));
}
