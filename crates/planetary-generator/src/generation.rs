//! Planet and planetoid generators.
//!
//! Each generator seeds a body from the star's stream and then retries with
//! shifted seeds until the body finds a free orbit and a class valid at that
//! orbit, or its retry budget runs out. Every placement attempt walks
//! [`BodyStage`]s, logged at trace level.

use std::fmt;
use std::ops::RangeInclusive;

use planetary::physical::exclusion_zone;
use planetary::{ClassRegistry, Orbit, PlanetaryClass, Planet, Satellite};
use star_system::StarSystem;
use stellar::sampling::{lerp, min_of_two};
use stellar::seeds::{PLANETOID_RESEED_STEP, PLANET_RESEED_STEP, PLANET_SEED_MULTIPLIER};
use stellar::{SeedStream, Star};
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_TERRESTRIAL_MASS_KG};
use units::{Length, Mass, Time};

use crate::config::GeneratorConfig;
use crate::moon_generation::MoonGenerator;
use crate::naming::planetoid_name;
use crate::orbit_placement::OrbitPlacer;
use crate::sampling::{planet_mass, planetoid_mass, rotation_period};

/// Frost-line blackbody temperature used by the placement filters.
const FROST_TEMPERATURE_K: f64 = 150.0;

/// Where a body is in its generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStage {
    Seeded,
    OrbitPending,
    OrbitPlaced,
    Classified,
    MoonsGenerated,
    Final,
    Failed,
}

impl fmt::Display for BodyStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodyStage::Seeded => "seeded",
            BodyStage::OrbitPending => "orbit pending",
            BodyStage::OrbitPlaced => "orbit placed",
            BodyStage::Classified => "classified",
            BodyStage::MoonsGenerated => "moons generated",
            BodyStage::Final => "final",
            BodyStage::Failed => "failed",
        };
        write!(f, "{}", str)
    }
}

fn enter(body: &Satellite, stage: BodyStage) {
    log::trace!("{} [seed {}]: {}", body.name, body.seed, stage);
}

/// Which family a placement attempt draws for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Terrestrial,
    GasGiant,
    Planetoid,
}

/// Builds planets and planetoids for one star system.
pub struct BodyGenerator<'a> {
    config: &'a GeneratorConfig,
    registry: &'a ClassRegistry,
}

impl<'a> BodyGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, registry: &'a ClassRegistry) -> Self {
        Self { config, registry }
    }

    pub fn moons(&self) -> MoonGenerator<'a> {
        MoonGenerator::new(self.config, self.registry)
    }

    /// A terrestrial planet with a mass in `mass_range`, clipped to the
    /// terrestrial mass bounds.
    pub fn terrestrial_planet(
        &self,
        system: &mut StarSystem,
        mass_range: RangeInclusive<Mass>,
        name: &str,
    ) -> Option<Planet> {
        let min = (*mass_range.start()).max(Mass::from_kg(MIN_TERRESTRIAL_MASS_KG));
        let max = (*mass_range.end()).min(Mass::from_kg(MAX_TERRESTRIAL_MASS_KG));
        if min > max {
            log::debug!(
                "{}: mass range {:?} misses the terrestrial band",
                name,
                mass_range
            );
            return None;
        }
        self.place_planet(
            system,
            Kind::Terrestrial,
            min..=max,
            name,
            self.config.terrestrial_retries,
        )
    }

    pub fn gas_giant(
        &self,
        system: &mut StarSystem,
        mass_range: RangeInclusive<Mass>,
        name: &str,
    ) -> Option<Planet> {
        self.place_planet(
            system,
            Kind::GasGiant,
            mass_range,
            name,
            self.config.gas_giant_retries,
        )
    }

    /// A minor body no heavier than `max_mass`. Without a name it gets a
    /// provisional designation.
    pub fn planetoid(
        &self,
        system: &mut StarSystem,
        max_mass: Mass,
        name: Option<&str>,
    ) -> Option<Planet> {
        let seed = system.star.stream.child_seed(PLANET_SEED_MULTIPLIER);
        let mut body = Satellite::new(name.unwrap_or_default(), seed, Mass::zero(), Orbit::default());

        for _ in 0..self.config.planetoid_retries {
            body.advance_seed(PLANETOID_RESEED_STEP);
            body.name = match name {
                Some(name) => name.to_string(),
                None => planetoid_name(&mut body.stream),
            };
            body.rotation_period = Time::from_seconds(rotation_period(&mut body.stream));
            body.mass = planetoid_mass(&mut body.stream);
            enter(&body, BodyStage::Seeded);
            if body.mass > max_mass {
                continue;
            }

            enter(&body, BodyStage::OrbitPending);
            let Some((orbit, class)) = self.attempt_orbit(system, &mut body, Kind::Planetoid) else {
                continue;
            };
            return Some(self.finish(&system.star, body, orbit, class, Kind::Planetoid));
        }

        enter(&body, BodyStage::Failed);
        log::debug!(
            "no planetoid below {:.3e} kg placed after {} retries",
            max_mass.to_kg(),
            self.config.planetoid_retries
        );
        None
    }

    fn place_planet(
        &self,
        system: &mut StarSystem,
        kind: Kind,
        mass_range: RangeInclusive<Mass>,
        name: &str,
        retries: u32,
    ) -> Option<Planet> {
        let seed = system.star.stream.child_seed(PLANET_SEED_MULTIPLIER);
        let mut body = Satellite::new(name, seed, Mass::zero(), Orbit::default());

        for _ in 0..retries {
            body.advance_seed(PLANET_RESEED_STEP);
            body.rotation_period = Time::from_seconds(rotation_period(&mut body.stream));
            body.mass = planet_mass(&mut body.stream, *mass_range.start(), *mass_range.end());
            enter(&body, BodyStage::Seeded);

            enter(&body, BodyStage::OrbitPending);
            let Some((orbit, class)) = self.attempt_orbit(system, &mut body, kind) else {
                continue;
            };
            return Some(self.finish(&system.star, body, orbit, class, kind));
        }

        enter(&body, BodyStage::Failed);
        log::debug!("{}: no orbit found after {} retries", name, retries);
        None
    }

    /// One placement attempt: an orbit from the placer, then a class drawn
    /// from the family's pick table that must be valid at that orbit.
    fn attempt_orbit(
        &self,
        system: &StarSystem,
        body: &mut Satellite,
        kind: Kind,
    ) -> Option<(Orbit, &'a PlanetaryClass)> {
        let star = &system.star;
        let mass = body.mass;

        let orbit = match kind {
            Kind::Terrestrial => {
                let placer = OrbitPlacer::new(star, self.config.orbit_attempts, 1.0);
                placer.place(
                    &mut body.stream,
                    |t, stream| terrestrial_filter(t, mass, stream),
                    |radius, e| self.planet_orbit_free(system, mass, radius, e),
                )
            }
            Kind::GasGiant => {
                let placer = OrbitPlacer::new(star, self.config.orbit_attempts, 1.0);
                placer.place(
                    &mut body.stream,
                    |t, stream| gas_giant_filter(t, mass, stream),
                    |radius, e| self.planet_orbit_free(system, mass, radius, e),
                )
            }
            Kind::Planetoid => {
                let placer = OrbitPlacer::new(
                    star,
                    self.config.orbit_attempts,
                    self.config.planetoid_inclination_multiplier,
                );
                placer.place(
                    &mut body.stream,
                    |t, _| t / 2.5,
                    |radius, e| {
                        system.orbit_free(
                            radius,
                            e,
                            Length::zero(),
                            self.config.planetoid_exclusion_multiplier,
                        ) && system.among_debris(mass, radius, self.config.planetoid_stern_levison)
                    },
                )
            }
        }?;

        let class = match kind {
            Kind::Terrestrial => self.registry.pick_terrestrial(&mut body.stream),
            Kind::GasGiant => self.registry.pick_gas_giant(&mut body.stream),
            Kind::Planetoid => self.registry.pick_planetoid(&mut body.stream),
        };
        if class.valid_temperature(orbit.blackbody_temperature(star)) {
            Some((orbit, class))
        } else {
            log::trace!(
                "{}: {} is not valid at {:.1} AU",
                body.name,
                class.name(),
                orbit.radius().to_au()
            );
            None
        }
    }

    fn planet_orbit_free(&self, system: &StarSystem, mass: Mass, radius: Length, e: f64) -> bool {
        let exclusion = exclusion_zone(radius, mass, system.star.mass);
        system.orbit_free(radius, e, exclusion, 1.0)
            && system.clears_orbit(mass, radius, self.config.planet_stern_levison)
    }

    /// Material, diameter, moons and the final class check for a placed body.
    fn finish(
        &self,
        star: &Star,
        mut body: Satellite,
        orbit: Orbit,
        class: &PlanetaryClass,
        kind: Kind,
    ) -> Planet {
        body.orbit = orbit;
        enter(&body, BodyStage::OrbitPlaced);

        body.material = class.material.new_material(&mut body.stream);
        body.diameter = match kind {
            // Gas giants are not modelled as self-compressing
            Kind::GasGiant => body.material.uncompressed_diameter(body.mass),
            Kind::Terrestrial | Kind::Planetoid => body.material.compressed_diameter(body.mass),
        };
        body.class = class.id;
        enter(&body, BodyStage::Classified);

        let mut planet = Planet::new(body, kind == Kind::Planetoid);
        self.moons().generate_moons(star, &mut planet);
        enter(&planet.body, BodyStage::MoonsGenerated);

        let properties = planet.properties(star);
        let current = planet.body.class;
        planet.body.class = self
            .registry
            .revalidate(current, &properties, &mut planet.body.stream);
        enter(&planet.body, BodyStage::Final);
        log::trace!(
            "{}: {} at {:.3} AU, {:.3} Earth masses, {} moons",
            planet.body.name,
            planet.body.class,
            planet.body.orbit.radius().to_au(),
            planet.body.mass.to_earth_masses(),
            planet.moons.len()
        );
        planet
    }
}

/// Small cold terrestrial planets are pulled inward: below the frost line a
/// body lighter than `U · MAX_TERR` redraws a warmer temperature.
fn terrestrial_filter(temperature: f64, mass: Mass, stream: &mut SeedStream) -> f64 {
    if temperature < FROST_TEMPERATURE_K
        && mass.to_kg() < stream.next_f64() * MAX_TERRESTRIAL_MASS_KG
    {
        temperature.max(lerp(3200.0, 0.0, stream.next_f64().powf(0.25)))
    } else {
        temperature
    }
}

/// Heavy gas giants inside the frost line are pushed outward to a cold
/// temperature in `[0, 150]` K.
fn gas_giant_filter(temperature: f64, mass: Mass, stream: &mut SeedStream) -> f64 {
    if temperature > FROST_TEMPERATURE_K
        && mass.to_kg() * stream.next_f64() > MAX_TERRESTRIAL_MASS_KG
    {
        lerp(FROST_TEMPERATURE_K, 0.0, min_of_two(stream).powf(0.2))
    } else {
        temperature
    }
}
