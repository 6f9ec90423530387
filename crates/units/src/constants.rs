//! Physical and astronomical constants shared by the generators.
//!
//! Everything is SI: kilograms, metres, seconds, kelvin, watts.

use std::f64::consts::PI;

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.673848e-11;

/// 2π·sqrt(1/G), the period prefactor in Kepler's third law
pub const TWO_PI_SQRT_INV_G: f64 = 769_115.763_843_049_4;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.67036713e-8;

/// σ·π, the denominator used by every blackbody-distance formula
pub const STEFAN_BOLTZMANN_PI: f64 = STEFAN_BOLTZMANN * PI;

pub const SOLAR_DIAMETER_M: f64 = 1.391e9;
pub const SOLAR_LUMINOSITY_W: f64 = 3.846e26;
pub const SOLAR_MASS_KG: f64 = 1.98855e30;
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

pub const AU_M: f64 = 149_597_870_700.0;

/// Cosmic background temperature. No blackbody temperature goes below this.
pub const UNIVERSE_TEMPERATURE_K: f64 = 2.73;

pub const EARTH_SURFACE_GRAVITY: f64 = 9.807;
pub const EARTH_DIAMETER_M: f64 = 12_750_196.0;
pub const EARTH_MASS_KG: f64 = 5.97219e24;

/// Molar gas constant (J mol⁻¹ K⁻¹)
pub const MOLAR_GAS: f64 = 8.314459848;

pub const YOTTAGRAM_KG: f64 = 1e21;

/// Heaviest body still treated as rocky.
pub const MAX_TERRESTRIAL_MASS_KG: f64 = 5e25;

/// Lightest body that counts as a terrestrial world rather than a planetoid.
pub const MIN_TERRESTRIAL_MASS_KG: f64 = 1e23;

pub const MIN_MOON_MASS_KG: f64 = 1e19;

/// Coefficient of the Stern–Levison parameter in SI units.
///
/// Chosen so that an Earth-mass body at 1 AU around a solar-mass star yields
/// Λ = 1.53 × 10⁵.
pub const STERN_LEVISON_CONSTANT: f64 = 1.760_127_220_05e-43;

/// Rigid-body Roche coefficient applied to the planet/moon density ratio.
pub const ROCHE_LIMIT_RIGID: f64 = 1.26;
