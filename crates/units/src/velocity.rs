use std::ops::{Add, Div, Mul, Sub};

/// A speed in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// Adds two velocities.
///
/// # Example
/// ```
/// use units::Velocity;
///
/// let total = Velocity::from_meters_per_sec(1.5) + Velocity::from_meters_per_sec(2.5);
/// assert_eq!(total.to_meters_per_sec(), 4.0);
/// ```
impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

/// Difference of two velocities; negative when `rhs` is larger.
///
/// # Example
/// ```
/// use units::Velocity;
///
/// let delta = Velocity::from_meters_per_sec(1.5) - Velocity::from_meters_per_sec(4.0);
/// assert_eq!(delta.to_meters_per_sec(), -2.5);
/// ```
impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

/// Scales by a dimensionless factor.
///
/// # Example
/// ```
/// use units::Velocity;
///
/// let doubled = Velocity::from_meters_per_sec(1.5) * 2.0;
/// assert_eq!(doubled.to_meters_per_sec(), 3.0);
/// ```
impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

/// Divides by a dimensionless factor.
impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
