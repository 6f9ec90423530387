//! Star system generation pipeline
//!
//! A system is generated in one pass from a seed:
//! 1. Star: spectral class drawn from the universe stream (or given), then
//!    built on its own stream
//! 2. Dust budget and planet count from the star's class data
//! 3. Planet masses carved out of the dust, heaviest placed first
//! 4. Planetoids from whatever dust is left
//!
//! Every step after the star draws from the star's stream, so
//! [`SystemGenerator::generate_star_with_class`] with the same star seed
//! replays the same system.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use planetary::{ClassRegistry, Moon, Planet};
use planetary_generator::naming::planet_name;
use planetary_generator::{BodyGenerator, GenerationError, GeneratorConfig, MoonGenerator};
use star_system::StarSystem;
use stellar::sampling::min_of_two;
use stellar::{
    NameTables, SeedStream, SpectralDistribution, Star, StarClass, StarClassTable, StellarSampler,
    sample_position,
};
use units::Mass;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_MOON_MASS_KG};

use crate::mass_budget::{allocate, dust_budget};

pub type Result<T> = std::result::Result<T, GenerationError>;

// =============================================================================
// Planetoid belt parameters
// =============================================================================

/// Planetoids per `Yg^0.3` of leftover dust.
const PLANETOIDS_PER_DUST: f64 = 30.0;

/// Baseline planetoid count before the Gaussian spread.
const PLANETOID_BASELINE: f64 = 40.0;
const PLANETOID_SPREAD: f64 = 20.0;

/// Planetoid mass caps start here and grow toward a tenth of the smallest
/// planet.
const PLANETOID_MIN_CAP_KG: f64 = MIN_MOON_MASS_KG;

// =============================================================================
// Generator
// =============================================================================

/// Generates star systems from seeds.
///
/// Holds the tuning configuration and every lookup table; all of them are
/// immutable once built, so one generator can serve many threads.
///
/// # Example
/// ```
/// use system_generator::SystemGenerator;
///
/// let generator = SystemGenerator::default();
/// let first = generator.generate_star(42).unwrap();
/// let second = generator.generate_star(42).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct SystemGenerator {
    config: GeneratorConfig,
    registry: ClassRegistry,
    star_classes: StarClassTable,
    names: NameTables,
    distribution: SpectralDistribution,
}

impl SystemGenerator {
    /// A generator with `config` and the built-in tables.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            registry: ClassRegistry::standard(),
            star_classes: StarClassTable::standard(),
            names: NameTables::standard(),
            distribution: SpectralDistribution::standard(),
        }
    }

    /// A generator configured from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(GeneratorConfig::from_json(json)?))
    }

    pub fn with_registry(mut self, registry: ClassRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_star_classes(mut self, star_classes: StarClassTable) -> Self {
        self.star_classes = star_classes;
        self
    }

    pub fn with_names(mut self, names: NameTables) -> Self {
        self.names = names;
        self
    }

    pub fn with_distribution(mut self, distribution: SpectralDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    fn sampler(&self) -> StellarSampler<'_> {
        StellarSampler::new(&self.star_classes, &self.names, &self.distribution)
    }

    fn bodies(&self) -> BodyGenerator<'_> {
        BodyGenerator::new(&self.config, &self.registry)
    }

    // -------------------------------------------------------------------------
    // Entry points
    // -------------------------------------------------------------------------

    /// Generates a complete system for `universe_seed`.
    ///
    /// The universe stream yields the star seed, the spectral class and the
    /// star's position, in that order. Fails only when the star-class table
    /// has no entry for a class the distribution can draw.
    pub fn generate_star(&self, universe_seed: u64) -> Result<StarSystem> {
        let mut universe = SeedStream::new(universe_seed);
        let star_seed = universe.child_seed(1);
        let class = self.sampler().sample_class(&mut universe);
        let position = sample_position(&mut universe, self.config.universe_extent);
        let star = self.sampler().build_star(class, star_seed, position)?;
        self.populate(star)
    }

    /// Generates a system around a star of the given class, e.g. `"G2V"` or
    /// `"DA5"`, built from `star_seed`.
    ///
    /// Only the position is drawn from the universe stream.
    pub fn generate_star_with_class(
        &self,
        universe_seed: u64,
        class: &str,
        star_seed: u64,
    ) -> Result<StarSystem> {
        let class: StarClass = class.parse()?;
        let mut universe = SeedStream::new(universe_seed);
        let position = sample_position(&mut universe, self.config.universe_extent);
        let star = self.sampler().build_star(class, star_seed, position)?;
        self.populate(star)
    }

    /// Places one terrestrial planet; the caller decides whether to keep it.
    pub fn generate_terrestrial_planet(
        &self,
        system: &mut StarSystem,
        mass_range: RangeInclusive<Mass>,
        name: &str,
    ) -> Option<Planet> {
        self.bodies().terrestrial_planet(system, mass_range, name)
    }

    pub fn generate_gas_giant(
        &self,
        system: &mut StarSystem,
        mass_range: RangeInclusive<Mass>,
        name: &str,
    ) -> Option<Planet> {
        self.bodies().gas_giant(system, mass_range, name)
    }

    pub fn generate_planetoid(
        &self,
        system: &mut StarSystem,
        max_mass: Mass,
        name: Option<&str>,
    ) -> Option<Planet> {
        self.bodies().planetoid(system, max_mass, name)
    }

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
        MoonGenerator::new(&self.config, &self.registry).generate_moon(
            star,
            planet,
            mass_generator,
            name,
        )
    }

    // -------------------------------------------------------------------------
    // Assembly
    // -------------------------------------------------------------------------

    /// Fills an empty system around `star` with planets and planetoids.
    fn populate(&self, mut star: Star) -> Result<StarSystem> {
        let data = self.star_classes.lookup(&star.class)?;

        let budget = dust_budget(&mut star.stream, star.mass, data.gas_giant_modifier);
        let count = data.planet_count(&mut star.stream);
        let mut allocation = allocate(
            &mut star.stream,
            star.mass,
            budget,
            count,
            self.config.max_planets,
        );

        let mut system = StarSystem::new(star).with_dust(budget);
        system.remaining_dust = allocation.remaining;

        allocation
            .masses
            .sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        self.place_planets(&mut system, &allocation.masses);
        system.sort_planets();
        self.place_planetoids(&mut system);

        log::info!(
            "{} ({}, {}): {} planets, {} moons, {} planetoids, {:.1}% of dust unused",
            system.star.name,
            system.star.class,
            system.catalog_name(),
            system.planets.len(),
            system.moon_count(),
            system.planetoids.len(),
            100.0 * (system.remaining_dust / system.dust_budget.max(Mass::from_kg(1.0)))
        );
        Ok(system)
    }

    /// Places planets heaviest first. Planets that find no orbit are dropped
    /// and their mass is not returned to the dust.
    fn place_planets(&self, system: &mut StarSystem, masses: &[Mass]) {
        let bodies = self.bodies();
        let max_terrestrial = Mass::from_kg(MAX_TERRESTRIAL_MASS_KG);
        let mut habitable = false;

        for &mass in masses {
            let name = planet_name(&system.star.name, system.planets.len());
            let planet = if mass >= max_terrestrial {
                bodies.gas_giant(system, mass..=mass, &name)
            } else if habitable {
                bodies.terrestrial_planet(system, mass..=mass, &name)
            } else {
                self.seek_habitable(system, mass, &name)
            };

            let Some(planet) = planet else {
                log::debug!("{}: dropped {:.3e} kg planet", system.star.name, mass.to_kg());
                continue;
            };
            habitable = habitable || planet.is_habitable(&system.star);
            system.planets.push(planet);
        }
    }

    /// Tries up to `habitable_attempts` terrestrial candidates and keeps the
    /// first habitable one, or else the first that was placed at all.
    fn seek_habitable(&self, system: &mut StarSystem, mass: Mass, name: &str) -> Option<Planet> {
        let bodies = self.bodies();
        if self.config.habitable_attempts == 0 {
            return bodies.terrestrial_planet(system, mass..=mass, name);
        }

        let mut fallback = None;
        for _ in 0..self.config.habitable_attempts {
            let Some(candidate) = bodies.terrestrial_planet(system, mass..=mass, name) else {
                continue;
            };
            if candidate.is_habitable(&system.star) {
                log::debug!("{}: habitable at {:.3} AU", name, candidate.body.orbit.radius().to_au());
                return Some(candidate);
            }
            if fallback.is_none() {
                fallback = Some(candidate);
            }
        }
        fallback
    }

    /// Fills the leftover dust with planetoids no heavier than a tenth of the
    /// smallest planet.
    fn place_planetoids(&self, system: &mut StarSystem) {
        let bodies = self.bodies();
        let max_terrestrial = Mass::from_kg(MAX_TERRESTRIAL_MASS_KG);
        let smallest = system
            .smallest_planet_mass()
            .map_or(max_terrestrial, |mass| mass.min(max_terrestrial));

        let dust = system.remaining_dust.to_yottagrams().max(0.0);
        let spread = (system.star.stream.next_gaussian() * PLANETOID_SPREAD).abs();
        let estimate = (dust.powf(0.3) * PLANETOIDS_PER_DUST).min(PLANETOID_BASELINE + spread);
        let count = estimate.round().max(0.0) as usize;

        let cap_range = smallest.to_kg() / 10.0 - PLANETOID_MIN_CAP_KG;
        for _ in 0..count {
            let cap = min_of_two(&mut system.star.stream).powi(6) * cap_range + PLANETOID_MIN_CAP_KG;
            let max_mass = Mass::from_kg(cap).min(system.remaining_dust);
            if let Some(planetoid) = bodies.planetoid(system, max_mass, None) {
                system.remaining_dust -= planetoid.body.mass;
                system.planetoids.push(planetoid);
            }
        }
        log::debug!(
            "{}: {} of {} planetoids placed",
            system.star.name,
            system.planetoids.len(),
            count
        );
    }
}

impl Default for SystemGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
