//! Derived physical quantities of satellites.
//!
//! Every function here is pure. [`PhysicalProperties::derive`] evaluates them
//! all for one body against its parent chain; nothing is cached on the body,
//! so a mutated satellite never carries stale derived values.
//!
//! # References
//! - Stern & Levison (2002), "Regarding the criteria for planethood"
//! - Hill sphere: r_H = a (1 − e) (m / 3M)^⅓
//! - Molecular retention: Jeans escape scaled so that Earth keeps N₂ but not He

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use stellar::Star;
use units::constants::{
    AU_M, EARTH_MASS_KG, EARTH_SURFACE_GRAVITY, G, MOLAR_GAS, SOLAR_LUMINOSITY_W, SOLAR_MASS_KG,
    STERN_LEVISON_CONSTANT, TWO_PI_SQRT_INV_G,
};
use units::{Length, Mass, Temperature, Time, Velocity};

use crate::orbit::{Orbit, OrbitalZone};
use crate::satellite::Satellite;

/// Molecular limits above this keep water vapour.
pub const HABITABLE_MOLECULAR_LIMIT_MIN: f64 = 4.0;
pub const HABITABLE_MOLECULAR_LIMIT_MAX: f64 = 18.0;
pub const HABITABLE_TEMPERATURE_MIN_K: f64 = 220.0;
pub const HABITABLE_TEMPERATURE_MAX_K: f64 = 330.0;
pub const HABITABLE_GRAVITY_MIN: f64 = 0.5 * EARTH_SURFACE_GRAVITY;
pub const HABITABLE_GRAVITY_MAX: f64 = 1.5 * EARTH_SURFACE_GRAVITY;

/// Exclusion zone as a multiple of the circular Hill radius.
pub const EXCLUSION_HILL_RADII: f64 = 5.0;

// ============================================================================
// Orbital quantities
// ============================================================================

/// Kepler's third law: `2π sqrt(r³ / (G M))`.
pub fn sidereal_period(radius: Length, parent_mass: Mass) -> Time {
    let r = radius.to_meters();
    Time::from_seconds(TWO_PI_SQRT_INV_G * (r * r * r / parent_mass.to_kg()).sqrt())
}

/// Solar day from the rotation period and the orbital period it is measured
/// against. Negative for retrograde or slower-than-orbit rotation.
pub fn day_length(rotation_period: Time, orbital_period: Time) -> Time {
    rotation_period / (1.0 - rotation_period / orbital_period)
}

/// Hill radius of a circular orbit at `radius`.
pub fn circular_hill_radius(radius: Length, mass: Mass, parent_mass: Mass) -> Length {
    radius * (mass / (parent_mass * 3.0)).cbrt()
}

/// Hill radius at pericenter.
pub fn hill_radius(orbit: &Orbit, mass: Mass, parent_mass: Mass) -> Length {
    circular_hill_radius(orbit.radius(), mass, parent_mass) * (1.0 - orbit.eccentricity())
}

/// Band around the orbit that the body keeps clear of other planets.
pub fn exclusion_zone(radius: Length, mass: Mass, parent_mass: Mass) -> Length {
    circular_hill_radius(radius, mass, parent_mass) * EXCLUSION_HILL_RADII
}

/// Stern–Levison parameter Λ = k m² / P, written in terms of the semi-major
/// axis: `C m² sqrt(M) / a^1.5`.
///
/// Λ ≥ 100 marks a body that has cleared its neighbourhood, Λ ≤ 0.01 one
/// that has not.
pub fn stern_levison_parameter(mass: Mass, radius: Length, parent_mass: Mass) -> f64 {
    let m = mass.to_kg();
    STERN_LEVISON_CONSTANT * m * m * parent_mass.sqrt() / radius.powf(1.5)
}

// ============================================================================
// Bulk quantities
// ============================================================================

/// Surface gravity `4 G m / d²` (m/s²).
pub fn surface_gravity(mass: Mass, diameter: Length) -> f64 {
    let d = diameter.to_meters();
    4.0 * G * mass.to_kg() / (d * d)
}

/// `sqrt(g d)`, which equals `sqrt(2 G m / r)`.
pub fn escape_velocity(surface_gravity: f64, diameter: Length) -> Velocity {
    Velocity::from_meters_per_sec((surface_gravity * diameter.to_meters()).sqrt())
}

pub fn equatorial_speed(diameter: Length, rotation_period: Time) -> Velocity {
    Velocity::from_meters_per_sec(PI * diameter.to_meters() / rotation_period.abs().to_seconds())
}

/// Mean density of a sphere (kg/m³).
pub fn bulk_density(mass: Mass, diameter: Length) -> f64 {
    mass.to_kg() / (PI * diameter.powi(3) / 6.0)
}

/// Diameter of a sphere of `mass` at `density`.
pub fn diameter_for_density(mass: Mass, density: f64) -> Length {
    Length::from_meters((6.0 * mass.to_kg() / (PI * density)).cbrt())
}

/// Regression estimate of the density the body would have without
/// self-compression.
pub fn uncompressed_density(mass: Mass, density: f64) -> f64 {
    let m = mass.to_kg() / EARTH_MASS_KG;
    let sqrt_density = density.sqrt();
    let root = -1.522468415 * m * m + 0.6550424608 * m * sqrt_density
        - 4.301092033e-4 * density
        - 58.14803175 * m
        + 1.087590418 * sqrt_density
        - 3.748494515;
    root * root
}

/// Central pressure of a uniform-density sphere (Pa).
pub fn core_pressure(density: f64, diameter: Length) -> f64 {
    let d = diameter.to_meters();
    PI * G * density * density * d * d / 6.0
}

/// Mass above which a protoplanet accretes gas, for a body whose pericenter
/// around its star is `pericenter`.
pub fn critical_mass(pericenter: Length, original_luminosity: f64) -> Mass {
    let distance = pericenter.to_meters() / AU_M;
    let luminosity = original_luminosity / SOLAR_LUMINOSITY_W;
    Mass::from_kg(1.2e-5 * SOLAR_MASS_KG * (distance * luminosity.sqrt()).powf(-0.75))
}

/// Smallest molar mass (g/mol) the body retains over geological time.
pub fn molecular_limit(temperature: Temperature, escape_velocity: Velocity) -> f64 {
    let v = escape_velocity.to_meters_per_sec() / 9.15;
    1000.0 * 3.0 * MOLAR_GAS * temperature.to_kelvin() / (v * v)
}

/// Keeps water vapour but not helium, sits in the liquid-water band and has
/// a comfortable surface gravity.
pub fn is_habitable(molecular_limit: f64, temperature: Temperature, surface_gravity: f64) -> bool {
    let t = temperature.to_kelvin();
    molecular_limit > HABITABLE_MOLECULAR_LIMIT_MIN
        && molecular_limit <= HABITABLE_MOLECULAR_LIMIT_MAX
        && (HABITABLE_TEMPERATURE_MIN_K..=HABITABLE_TEMPERATURE_MAX_K).contains(&t)
        && (HABITABLE_GRAVITY_MIN..=HABITABLE_GRAVITY_MAX).contains(&surface_gravity)
}

/// Roche limit of a moon around a planet: the larger of the rigid-body
/// estimate and a floor of 0.55 planet diameters.
pub fn roche_limit(
    planet_mass: Mass,
    planet_diameter: Length,
    moon_mass: Mass,
    moon_diameter: Length,
    rigid_coefficient: f64,
) -> Length {
    let rigid = moon_diameter * (0.5 * rigid_coefficient * (planet_mass / moon_mass).cbrt());
    (planet_diameter * 0.55).max(rigid)
}

// ============================================================================
// Aggregate
// ============================================================================

/// What a satellite orbits.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    Star(&'a Star),
    Planet {
        planet: &'a Satellite,
        star: &'a Star,
    },
}

impl<'a> Parent<'a> {
    pub fn mass(&self) -> Mass {
        match self {
            Parent::Star(star) => star.mass,
            Parent::Planet { planet, .. } => planet.mass,
        }
    }

    pub fn star(&self) -> &'a Star {
        match self {
            Parent::Star(star) => star,
            Parent::Planet { star, .. } => star,
        }
    }
}

/// Every derived quantity of one satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperties {
    pub mass: Mass,
    pub diameter: Length,
    pub sidereal_period: Time,
    pub day_length: Time,
    pub hill_radius: Length,
    pub exclusion_zone: Length,
    /// m/s²
    pub surface_gravity: f64,
    pub escape_velocity: Velocity,
    pub equatorial_speed: Velocity,
    /// kg/m³
    pub density: f64,
    pub uncompressed_density: f64,
    pub blackbody_temperature: Temperature,
    pub zone: OrbitalZone,
    pub critical_mass: Mass,
    /// g/mol
    pub molecular_limit: f64,
    /// Pa
    pub core_pressure: f64,
}

impl PhysicalProperties {
    pub fn derive(body: &Satellite, parent: Parent<'_>) -> Self {
        let star = parent.star();
        let parent_mass = parent.mass();

        let sidereal = sidereal_period(body.orbit.radius(), parent_mass);
        // Moons measure their day against the planet's year
        let (main_orbit, reference_period) = match parent {
            Parent::Star(_) => (body.orbit, sidereal),
            Parent::Planet { planet, star } => (
                planet.orbit,
                sidereal_period(planet.orbit.radius(), star.mass),
            ),
        };

        let gravity = surface_gravity(body.mass, body.diameter);
        let escape = escape_velocity(gravity, body.diameter);
        let density = bulk_density(body.mass, body.diameter);
        let temperature = main_orbit.blackbody_temperature(star);

        Self {
            mass: body.mass,
            diameter: body.diameter,
            sidereal_period: sidereal,
            day_length: day_length(body.rotation_period, reference_period),
            hill_radius: hill_radius(&body.orbit, body.mass, parent_mass),
            exclusion_zone: exclusion_zone(body.orbit.radius(), body.mass, parent_mass),
            surface_gravity: gravity,
            escape_velocity: escape,
            equatorial_speed: equatorial_speed(body.diameter, body.rotation_period),
            density,
            uncompressed_density: uncompressed_density(body.mass, density),
            blackbody_temperature: temperature,
            zone: main_orbit.zone(star),
            critical_mass: critical_mass(main_orbit.pericenter(), star.original_luminosity),
            molecular_limit: molecular_limit(temperature, escape),
            core_pressure: core_pressure(density, body.diameter),
        }
    }

    pub fn is_habitable(&self) -> bool {
        is_habitable(
            self.molecular_limit,
            self.blackbody_temperature,
            self.surface_gravity,
        )
    }
}
