use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Temperature};

use crate::error::OrbitError;

/// Band of a star system by blackbody temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitalZone {
    Hot,
    Habitable,
    Cold,
    Frozen,
}

impl OrbitalZone {
    pub const ALL: [OrbitalZone; 4] = [
        OrbitalZone::Hot,
        OrbitalZone::Habitable,
        OrbitalZone::Cold,
        OrbitalZone::Frozen,
    ];

    /// Classifies a distance from `star`.
    pub fn at(star: &Star, radius: Length) -> Self {
        if radius < star.habitable_zone_min() {
            OrbitalZone::Hot
        } else if radius < star.habitable_zone_max() {
            OrbitalZone::Habitable
        } else if radius < star.frost_line() {
            OrbitalZone::Cold
        } else {
            OrbitalZone::Frozen
        }
    }
}

impl fmt::Display for OrbitalZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            OrbitalZone::Hot => "hot",
            OrbitalZone::Habitable => "habitable",
            OrbitalZone::Cold => "cold",
            OrbitalZone::Frozen => "frozen",
        };
        write!(f, "{}", str)
    }
}

/// Raw orbital elements as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitElements {
    pub radius: Length,
    pub eccentricity: f64,
    pub inclination: f64,
}

/// A Keplerian orbit: semi-major axis, eccentricity and inclination.
///
/// Immutable; every constructor validates that the orbit is bound and
/// normalises the inclination into `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrbitElements")]
pub struct Orbit {
    radius: Length,
    eccentricity: f64,
    inclination: f64,
}

impl Orbit {
    pub fn new(radius: Length, eccentricity: f64, inclination: f64) -> Result<Self, OrbitError> {
        let r = radius.to_meters();
        if !(r.is_finite() && eccentricity.is_finite() && inclination.is_finite()) {
            return Err(OrbitError::NotFinite);
        }
        if r < 0.0 {
            return Err(OrbitError::NegativeRadius(r));
        }
        if eccentricity < 0.0 {
            return Err(OrbitError::NegativeEccentricity(eccentricity));
        }
        if eccentricity >= 1.0 {
            return Err(OrbitError::Unbound(eccentricity));
        }
        Ok(Self {
            radius,
            eccentricity,
            inclination: inclination.rem_euclid(TAU),
        })
    }

    pub fn circular(radius: Length) -> Result<Self, OrbitError> {
        Self::new(radius, 0.0, 0.0)
    }

    /// Semi-major axis.
    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Inclination in radians.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn pericenter(&self) -> Length {
        self.radius * (1.0 - self.eccentricity)
    }

    pub fn apocenter(&self) -> Length {
        self.radius * (1.0 + self.eccentricity)
    }

    pub fn zone(&self, star: &Star) -> OrbitalZone {
        OrbitalZone::at(star, self.radius)
    }

    pub fn blackbody_temperature(&self, star: &Star) -> Temperature {
        star.blackbody_temperature_at(self.radius)
    }
}

/// A circular orbit of zero radius, used before a body is placed.
impl Default for Orbit {
    fn default() -> Self {
        Self {
            radius: Length::zero(),
            eccentricity: 0.0,
            inclination: 0.0,
        }
    }
}

impl TryFrom<OrbitElements> for Orbit {
    type Error = OrbitError;

    fn try_from(elements: OrbitElements) -> Result<Self, Self::Error> {
        Orbit::new(elements.radius, elements.eccentricity, elements.inclination)
    }
}
