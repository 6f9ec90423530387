//! Randomised orbit placement around a star.

use planetary::Orbit;
use stellar::sampling::{lerp, min_of_two};
use stellar::{SeedStream, Star};
use units::constants::AU_M;
use units::{Length, Temperature};

use crate::sampling::rayleigh_inclination;

/// Blackbody temperature of the innermost possible draw (the boiling line).
const HOTTEST_DRAW_K: f64 = 3200.0;

/// Draws orbits for one body until a validator accepts one.
///
/// Each attempt draws a blackbody temperature skewed toward cold orbits,
/// passes it through the caller's filter, converts it to a distance and
/// draws an eccentricity that flattens for close orbits. The validator sees
/// the candidate `(radius, eccentricity)`; the inclination is only drawn for
/// an accepted orbit.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPlacer<'a> {
    star: &'a Star,
    attempts: u32,
    inclination_multiplier: f64,
}

impl<'a> OrbitPlacer<'a> {
    pub fn new(star: &'a Star, attempts: u32, inclination_multiplier: f64) -> Self {
        Self {
            star,
            attempts,
            inclination_multiplier,
        }
    }

    /// Runs up to `attempts` draws on the body's stream.
    pub fn place<F, V>(&self, stream: &mut SeedStream, mut filter: F, validator: V) -> Option<Orbit>
    where
        F: FnMut(f64, &mut SeedStream) -> f64,
        V: Fn(Length, f64) -> bool,
    {
        for _ in 0..self.attempts {
            let temperature = lerp(HOTTEST_DRAW_K, 0.0, min_of_two(stream).powf(0.25));
            let temperature = filter(temperature, stream);
            let radius = self
                .star
                .distance_for_temperature(Temperature::from_kelvin(temperature));
            let eccentricity = self.eccentricity(stream, radius);

            if !validator(radius, eccentricity) {
                continue;
            }

            let inclination = rayleigh_inclination(stream, self.inclination_multiplier);
            match Orbit::new(radius, eccentricity, inclination) {
                Ok(orbit) => return Some(orbit),
                Err(err) => log::debug!("discarding drawn orbit: {}", err),
            }
        }
        None
    }

    /// `U⁴ · 0.8`, scaled down by `(r/AU) / (M/10³⁰ kg)` inside `M/10³⁰` AU.
    fn eccentricity(&self, stream: &mut SeedStream, radius: Length) -> f64 {
        let eccentricity = stream.next_f64().powi(4) * 0.8;
        let distance = radius.to_meters() / AU_M;
        let mass_scale = self.star.mass.to_kg() / 1e30;
        if distance < mass_scale {
            eccentricity * distance / mass_scale
        } else {
            eccentricity
        }
    }
}
