use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::UNIVERSE_TEMPERATURE_K;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let earth = Temperature::from_kelvin(255.0);
/// let floor = Temperature::universe_background();
///
/// assert!(earth > floor);
/// assert_eq!(Temperature::from_kelvin(1.0).at_least_background(), floor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// The 2.73 K cosmic background.
    pub fn universe_background() -> Self {
        Self(UNIVERSE_TEMPERATURE_K)
    }

    /// Clamps the temperature to the cosmic background.
    pub fn at_least_background(self) -> Self {
        Self(self.0.max(UNIVERSE_TEMPERATURE_K))
    }

    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

/// Adds two temperatures.
///
/// # Example
/// ```
/// use units::Temperature;
///
/// let total = Temperature::from_kelvin(1.5) + Temperature::from_kelvin(2.5);
/// assert_eq!(total.to_kelvin(), 4.0);
/// ```
impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

/// Difference of two temperatures; negative when `rhs` is larger.
///
/// # Example
/// ```
/// use units::Temperature;
///
/// let delta = Temperature::from_kelvin(1.5) - Temperature::from_kelvin(4.0);
/// assert_eq!(delta.to_kelvin(), -2.5);
/// ```
impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

/// Scales by a dimensionless factor.
///
/// # Example
/// ```
/// use units::Temperature;
///
/// let doubled = Temperature::from_kelvin(1.5) * 2.0;
/// assert_eq!(doubled.to_kelvin(), 3.0);
/// ```
impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

/// Divides by a dimensionless factor.
impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
