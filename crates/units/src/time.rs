use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

/// A physical time quantity using f64 precision.
///
/// The base unit is the second. Rotation periods are signed: a negative
/// value describes retrograde spin.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let day = Time::from_hours(24.0);
/// assert_eq!(day.to_seconds(), 86_400.0);
/// assert!((day.to_days() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_retrograde(&self) -> bool {
        self.0 < 0.0
    }
}

/// Adds two durations.
///
/// # Example
/// ```
/// use units::Time;
///
/// let total = Time::from_seconds(1.5) + Time::from_seconds(2.5);
/// assert_eq!(total.to_seconds(), 4.0);
/// ```
impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

/// Difference of two durations; negative when `rhs` is larger.
///
/// # Example
/// ```
/// use units::Time;
///
/// let delta = Time::from_seconds(1.5) - Time::from_seconds(4.0);
/// assert_eq!(delta.to_seconds(), -2.5);
/// ```
impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

/// Reverses the sign, e.g. for retrograde periods.
impl Neg for Time {
    type Output = Time;

    fn neg(self) -> Time {
        Time(-self.0)
    }
}

/// Scales by a dimensionless factor.
///
/// # Example
/// ```
/// use units::Time;
///
/// let doubled = Time::from_seconds(1.5) * 2.0;
/// assert_eq!(doubled.to_seconds(), 3.0);
/// ```
impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

/// Divides by a dimensionless factor.
impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
///
/// # Example
/// ```
/// use units::Time;
///
/// let ratio = Time::from_seconds(3.0) / Time::from_seconds(1.5);
/// assert_eq!(ratio, 2.0);
/// ```
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
