//! The generated star system and its orbit bookkeeping.

use std::cmp::Ordering;

use planetary::physical::{exclusion_zone, stern_levison_parameter};
use planetary::{Planet, PhysicalProperties};
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};
use uuid::Uuid;

use crate::metadata::{catalog_name, system_id};

/// Strong mean-motion resonances (2:1, 3:1) as period ratios.
const STRONG_RESONANCES: [f64; 2] = [2.0, 3.0];

/// Weaker resonances (4:1, 5:2, 7:3).
const WEAK_RESONANCES: [f64; 3] = [4.0, 5.0 / 2.0, 7.0 / 3.0];

/// Fraction of the resonant planet's radius that counts as inside a strong gap.
const STRONG_GAP_WIDTH: f64 = 1.0 / 1000.0;
const WEAK_GAP_WIDTH: f64 = 1.0 / 5000.0;

/// A star with everything that orbits it.
///
/// Planets are kept sorted by semi-major axis once assembly finishes;
/// planetoids follow in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub id: Uuid,
    pub star: Star,
    pub planets: Vec<Planet>,
    pub planetoids: Vec<Planet>,
    /// Mass available for planet formation.
    pub dust_budget: Mass,
    /// Dust left after planets and planetoids took their share.
    pub remaining_dust: Mass,
}

impl StarSystem {
    /// An empty system around `star`, identified by the star's seed.
    pub fn new(star: Star) -> Self {
        Self {
            id: system_id(star.seed),
            star,
            planets: Vec::new(),
            planetoids: Vec::new(),
            dust_budget: Mass::zero(),
            remaining_dust: Mass::zero(),
        }
    }

    pub fn with_dust(mut self, budget: Mass) -> Self {
        self.dust_budget = budget;
        self.remaining_dust = budget;
        self
    }

    pub fn catalog_name(&self) -> String {
        catalog_name(&self.id)
    }

    /// Whether a new body may orbit at `radius` with `eccentricity`.
    ///
    /// The candidate's band `[peri − exclusion, apo + exclusion]` must miss
    /// every placed planet's band, padded by that planet's exclusion zone
    /// times `multiplier`, and must avoid the 2:1, 3:1, 4:1, 5:2 and 7:3
    /// resonances of each planet. The pericenter must clear both the star
    /// and the boiling line, and the semi-major axis must lie within the
    /// star's planet limits.
    pub fn orbit_free(
        &self,
        radius: Length,
        eccentricity: f64,
        exclusion: Length,
        multiplier: f64,
    ) -> bool {
        let peri = radius * (1.0 - eccentricity);
        let apo = radius * (1.0 + eccentricity);

        if peri < self.star.diameter || peri < self.star.boiling_line() {
            return false;
        }
        if radius < self.star.inner_planet_limit() || radius > self.star.outer_planet_limit() {
            return false;
        }

        let low = peri - exclusion;
        let high = apo + exclusion;
        self.planets.iter().all(|planet| {
            let orbit = &planet.body.orbit;
            let padding = self.exclusion_zone(planet) * multiplier;
            let overlaps =
                high >= orbit.pericenter() - padding && low <= orbit.apocenter() + padding;
            !overlaps && !in_resonance_gap(orbit.radius(), radius)
        })
    }

    /// Exclusion zone of a planet around this system's star.
    pub fn exclusion_zone(&self, planet: &Planet) -> Length {
        exclusion_zone(planet.body.orbit.radius(), planet.body.mass, self.star.mass)
    }

    /// Stern–Levison Λ of a body of `mass` at `radius` around the star.
    pub fn stern_levison(&self, mass: Mass, radius: Length) -> f64 {
        stern_levison_parameter(mass, radius, self.star.mass)
    }

    /// Whether a body would clear its orbit (Λ ≥ `threshold`).
    pub fn clears_orbit(&self, mass: Mass, radius: Length, threshold: f64) -> bool {
        self.stern_levison(mass, radius) >= threshold
    }

    /// Whether a body would stay among the debris (Λ ≤ `threshold`).
    pub fn among_debris(&self, mass: Mass, radius: Length, threshold: f64) -> bool {
        self.stern_levison(mass, radius) <= threshold
    }

    pub fn properties(&self, planet: &Planet) -> PhysicalProperties {
        planet.properties(&self.star)
    }

    pub fn habitable_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets
            .iter()
            .filter(|planet| planet.is_habitable(&self.star))
    }

    pub fn has_habitable_planet(&self) -> bool {
        self.habitable_planets().next().is_some()
    }

    pub fn smallest_planet_mass(&self) -> Option<Mass> {
        self.planets
            .iter()
            .map(|planet| planet.body.mass)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Combined mass of planets and planetoids, moons excluded.
    pub fn body_mass(&self) -> Mass {
        self.planets
            .iter()
            .chain(&self.planetoids)
            .map(|planet| planet.body.mass)
            .sum()
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|planet| planet.moons.len()).sum()
    }

    /// Sorts planets by semi-major axis.
    pub fn sort_planets(&mut self) {
        self.planets.sort_by(|a, b| {
            a.body
                .orbit
                .radius()
                .partial_cmp(&b.body.orbit.radius())
                .unwrap_or(Ordering::Equal)
        });
    }
}

/// Whether `radius` sits in a Kirkwood-style gap inside the orbit of a
/// planet at `planet_radius`.
pub fn in_resonance_gap(planet_radius: Length, radius: Length) -> bool {
    let near = |ratio: f64, width: f64| {
        let resonant = planet_radius * ratio.powf(-2.0 / 3.0);
        (resonant - radius).abs() < planet_radius * width
    };
    STRONG_RESONANCES
        .iter()
        .any(|&ratio| near(ratio, STRONG_GAP_WIDTH))
        || WEAK_RESONANCES
            .iter()
            .any(|&ratio| near(ratio, WEAK_GAP_WIDTH))
}
