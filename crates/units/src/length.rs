use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{AU_M, EARTH_DIAMETER_M, SOLAR_DIAMETER_M};

/// A physical length quantity using f64 precision.
///
/// The base unit is the metre. Orbital radii, diameters and exclusion zones
/// all share this type.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let moon_orbit = Length::from_km(384_400.0);
///
/// assert!(earth_orbit > moon_orbit);
/// assert!((earth_orbit.to_au() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    /// Creates a length from a multiple of Earth's mean diameter.
    pub fn from_earth_diameters(value: f64) -> Self {
        Self(value * EARTH_DIAMETER_M)
    }

    /// Creates a length from a multiple of the Sun's diameter.
    pub fn from_solar_diameters(value: f64) -> Self {
        Self(value * SOLAR_DIAMETER_M)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }

    pub fn to_earth_diameters(&self) -> f64 {
        self.0 / EARTH_DIAMETER_M
    }

    pub fn to_solar_diameters(&self) -> f64 {
        self.0 / SOLAR_DIAMETER_M
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

/// Adds two lengths.
///
/// # Example
/// ```
/// use units::Length;
///
/// let total = Length::from_meters(1.5) + Length::from_meters(2.5);
/// assert_eq!(total.to_meters(), 4.0);
/// ```
impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

/// Difference of two lengths; negative when `rhs` is larger.
///
/// # Example
/// ```
/// use units::Length;
///
/// let delta = Length::from_meters(1.5) - Length::from_meters(4.0);
/// assert_eq!(delta.to_meters(), -2.5);
/// ```
impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

/// Scales by a dimensionless factor.
///
/// # Example
/// ```
/// use units::Length;
///
/// let doubled = Length::from_meters(1.5) * 2.0;
/// assert_eq!(doubled.to_meters(), 3.0);
/// ```
impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Divides by a dimensionless factor.
impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
///
/// # Example
/// ```
/// use units::Length;
///
/// let ratio = Length::from_meters(3.0) / Length::from_meters(1.5);
/// assert_eq!(ratio, 2.0);
/// ```
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
