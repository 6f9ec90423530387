//! Moons of planets and planetoids.
//!
//! Moons draw their orbit parameters from the parent planet's stream and
//! their own physical parameters from a stream seeded off the planet's.

use planetary::physical::{hill_radius, roche_limit};
use planetary::{ClassRegistry, Moon, Orbit, Parent, PhysicalProperties, Planet, Satellite};
use stellar::sampling::lerp;
use stellar::seeds::MOON_RESEED_STEP;
use stellar::{SeedStream, Star};
use units::constants::{AU_M, MIN_MOON_MASS_KG, MIN_TERRESTRIAL_MASS_KG, YOTTAGRAM_KG};
use units::{Length, Mass, Time};

use crate::config::GeneratorConfig;
use crate::naming::moon_name;
use crate::sampling::{beta_3_9_inverse, moon_mass, rotation_period};

/// Hill radii below this (in AU) make moons less likely.
const SMALL_HILL_RADIUS_AU: f64 = 0.01;

pub struct MoonGenerator<'a> {
    config: &'a GeneratorConfig,
    registry: &'a ClassRegistry,
}

impl<'a> MoonGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, registry: &'a ClassRegistry) -> Self {
        Self { config, registry }
    }

    /// Number of major moons to attempt for `planet`.
    ///
    /// Zero unless a twenty-fifth of the planet's mass exceeds the minimum
    /// moon mass. Draws one Gaussian from the planet's stream otherwise.
    pub fn moon_count(&self, star: &Star, planet: &mut Planet) -> usize {
        let mass = planet.body.mass;
        if mass.to_kg() / 25.0 <= MIN_MOON_MASS_KG {
            return 0;
        }

        let hill = hill_radius(&planet.body.orbit, mass, star.mass).to_meters() / AU_M;
        let yottagrams = mass.to_yottagrams();
        let mut estimate = 8.5 * (-65_000.0 / yottagrams).exp()
            + planet.body.stream.next_gaussian() * 0.5 * yottagrams.powf(0.135);
        if hill < SMALL_HILL_RADIUS_AU {
            estimate *= (hill * 100.0).powf(0.4);
        }

        let count = estimate.min(hill * 1000.0).round();
        if count > 0.0 { count as usize } else { 0 }
    }

    /// Fills `planet.moons`. Moons that cannot be placed are skipped.
    pub fn generate_moons(&self, star: &Star, planet: &mut Planet) {
        let count = self.moon_count(star, planet);
        let planet_mass = planet.body.mass;
        let mass_generator = |stream: &mut SeedStream| moon_mass(stream, planet_mass);

        for _ in 0..count {
            if let Some(moon) = self.generate_moon(star, planet, &mass_generator, None) {
                planet.moons.push(moon);
            }
        }
        log::trace!(
            "{}: {} of {} moons placed",
            planet.body.name,
            planet.moons.len(),
            count
        );
    }

    /// Generates one moon of `planet`; the caller decides whether to keep it.
    ///
    /// Returns `None` when no class fits the planet's temperature within the
    /// retry budget or when the Roche limit reaches the planet's Hill radius.
    pub fn generate_moon<M>(
        &self,
        star: &Star,
        planet: &mut Planet,
        mass_generator: &M,
        name: Option<&str>,
    ) -> Option<Moon>
    where
        M: Fn(&mut SeedStream) -> Mass,
    {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| moon_name(&planet.body.name, planet.moons.len()));
        let seed = planet.body.child_seed();
        let mut body = Satellite::new(name, seed, Mass::zero(), Orbit::default());
        let planet_temperature = planet.body.orbit.blackbody_temperature(star);

        // Class draws are redone on a shifted seed until one fits the orbit
        let mut retries = 0;
        let class = loop {
            body.mass = mass_generator(&mut body.stream);
            let class = if body.mass.to_kg() < MIN_TERRESTRIAL_MASS_KG {
                self.registry.pick_planetoid(&mut body.stream)
            } else {
                self.registry.pick_terrestrial(&mut body.stream)
            };
            if class.valid_temperature(planet_temperature) {
                break class;
            }
            retries += 1;
            if retries > self.config.moon_retries {
                log::debug!(
                    "{}: no moon class fits {:.1} K after {} retries",
                    body.name,
                    planet_temperature.to_kelvin(),
                    self.config.moon_retries
                );
                return None;
            }
            body.advance_seed(MOON_RESEED_STEP);
        };

        body.material = class.material.new_material(&mut body.stream);
        body.diameter = body.material.compressed_diameter(body.mass);

        let roche = roche_limit(
            planet.body.mass,
            planet.body.diameter,
            body.mass,
            body.diameter,
            self.config.roche_rigid,
        );
        let hill = hill_radius(&planet.body.orbit, planet.body.mass, star.mass);
        if roche >= hill {
            log::debug!(
                "{}: Roche limit {:.0} km reaches the Hill radius {:.0} km",
                body.name,
                roche.to_km(),
                hill.to_km()
            );
            return None;
        }

        let radius = lerp(
            roche.to_meters(),
            hill.to_meters(),
            beta_3_9_inverse(planet.body.stream.next_f64()),
        );
        body.rotation_period = Time::from_seconds(rotation_period(&mut body.stream));

        let mut eccentricity = planet.body.stream.next_f64().powi(6) / 1.01;
        eccentricity = eccentricity.min(1.0 - roche.to_meters() / radius);
        let flattening = planet.body.mass.to_kg() / (10_000.0 * YOTTAGRAM_KG);
        if radius < flattening {
            eccentricity *= radius / flattening;
        }
        let eccentricity = clear_roche_limit(Length::from_meters(radius), eccentricity, roche);
        let inclination =
            (planet.body.stream.next_gaussian() / 6.0 / std::f64::consts::PI).abs();

        body.orbit = match Orbit::new(Length::from_meters(radius), eccentricity, inclination) {
            Ok(orbit) => orbit,
            Err(err) => {
                log::debug!("{}: discarding moon orbit: {}", body.name, err);
                return None;
            }
        };
        body.class = class.id;

        let properties = PhysicalProperties::derive(
            &body,
            Parent::Planet {
                planet: &planet.body,
                star,
            },
        );
        body.class = self
            .registry
            .revalidate(body.class, &properties, &mut body.stream);

        Some(Moon { body })
    }
}

/// Lowers `eccentricity` until the pericenter, computed the way
/// [`Orbit::pericenter`] does, no longer dips below `roche`.
pub(crate) fn clear_roche_limit(radius: Length, mut eccentricity: f64, roche: Length) -> f64 {
    while eccentricity > 0.0 && radius * (1.0 - eccentricity) < roche {
        eccentricity = (eccentricity - f64::EPSILON).max(0.0);
    }
    eccentricity
}
