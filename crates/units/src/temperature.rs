use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A physical temperature quantity using f64 precision.
///
/// `Temperature` represents temperature with Kelvin as the base unit. Kelvin
/// is the natural axis for the phase classifier: every mineral threshold and
/// ambient-liquid band is an absolute temperature, and an absolute scale
/// keeps the ordering comparisons free of offset bookkeeping.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let deposit = Temperature::from_kelvin(300.0);
/// let surface = Temperature::from_celsius(15.0); // ~288 K
///
/// let freezing = Temperature::water_freezing(); // 273.15 K
/// assert!(deposit > freezing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    ///
    /// This is the most direct constructor since Kelvin is the base unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let freezing = Temperature::from_kelvin(273.15);
    /// let lava = Temperature::from_kelvin(1800.0);
    /// ```
    pub const fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    /// Returns the temperature value in Kelvin.
    pub const fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius (°C = K - 273.15).
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Water freezing point at 1 atm (273.15 K / 0°C).
    pub const fn water_freezing() -> Self {
        Self::from_kelvin(273.15)
    }

    /// Water boiling point at 1 atm (373.15 K / 100°C).
    pub const fn water_boiling() -> Self {
        Self::from_kelvin(373.15)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
