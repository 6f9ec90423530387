use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::constants::{EARTH_MASS_KG, SOLAR_MASS_KG, YOTTAGRAM_KG};

/// A physical mass quantity using f64 precision.
///
/// The base unit is the kilogram. Stellar and planetary masses span more than
/// ten orders of magnitude, so the generators convert at the edges
/// (`from_solar_masses`, `to_earth_masses`) and keep everything else in SI.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// let ratio = sun / earth; // ~332 970
/// assert!(ratio > 3.0e5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in yottagrams (10²¹ kg).
    pub fn from_yottagrams(value: f64) -> Self {
        Self(value * YOTTAGRAM_KG)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let super_earth = Mass::from_earth_masses(5.0);
    /// assert!(super_earth.to_kg() > 2.9e25);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_yottagrams(&self) -> f64 {
        self.0 / YOTTAGRAM_KG
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_KG
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

    /// Power function on the raw kilogram value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root of the raw kilogram value
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

/// Adds two masses.
///
/// # Example
/// ```
/// use units::Mass;
///
/// let total = Mass::from_kg(1.5) + Mass::from_kg(2.5);
/// assert_eq!(total.to_kg(), 4.0);
/// ```
impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

/// Adds `rhs` in place.
impl AddAssign for Mass {
    fn add_assign(&mut self, rhs: Mass) {
        self.0 += rhs.0;
    }
}

/// Difference of two masses; negative when `rhs` is larger.
///
/// # Example
/// ```
/// use units::Mass;
///
/// let delta = Mass::from_kg(1.5) - Mass::from_kg(4.0);
/// assert_eq!(delta.to_kg(), -2.5);
/// ```
impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

/// Subtracts `rhs` in place.
impl SubAssign for Mass {
    fn sub_assign(&mut self, rhs: Mass) {
        self.0 -= rhs.0;
    }
}

/// Scales by a dimensionless factor.
///
/// # Example
/// ```
/// use units::Mass;
///
/// let doubled = Mass::from_kg(1.5) * 2.0;
/// assert_eq!(doubled.to_kg(), 3.0);
/// ```
impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

/// Divides by a dimensionless factor.
impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
///
/// # Example
/// ```
/// use units::Mass;
///
/// let ratio = Mass::from_kg(3.0) / Mass::from_kg(1.5);
/// assert_eq!(ratio, 2.0);
/// ```
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

/// Sums masses; an empty iterator sums to zero.
///
/// # Example
/// ```
/// use units::Mass;
///
/// let total: Mass = [1.0, 2.0, 0.5].into_iter().map(Mass::from_kg).sum();
/// assert_eq!(total.to_kg(), 3.5);
/// ```
impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        iter.fold(Mass::zero(), |acc, m| acc + m)
    }
}
