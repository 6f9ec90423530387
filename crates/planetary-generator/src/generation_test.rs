use planetary::ClassRegistry;
use units::Mass;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_TERRESTRIAL_MASS_KG};

use crate::config::GeneratorConfig;
use crate::fixtures::solar_system;
use crate::generation::{BodyGenerator, BodyStage};

fn earth_masses(min: f64, max: f64) -> std::ops::RangeInclusive<Mass> {
    Mass::from_earth_masses(min)..=Mass::from_earth_masses(max)
}

#[test]
fn terrestrial_planet_in_range() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(42);

    let planet = generator
        .terrestrial_planet(&mut system, earth_masses(0.5, 2.0), "Sol b")
        .unwrap();

    assert_eq!(planet.body.name, "Sol b");
    assert!(!planet.minor);
    assert!(planet.body.mass >= Mass::from_earth_masses(0.5));
    assert!(planet.body.mass <= Mass::from_earth_masses(2.0));
    assert!(planet.body.diameter.to_km() > 1000.0);
    assert!(system.clears_orbit(planet.body.mass, planet.body.orbit.radius(), 100.0));
    assert!(planet.body.orbit.radius() >= system.star.inner_planet_limit());
    assert!(planet.body.orbit.radius() <= system.star.outer_planet_limit());
}

#[test]
fn terrestrial_range_is_clipped() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(7);

    let heavy =
        Mass::from_kg(2.0 * MAX_TERRESTRIAL_MASS_KG)..=Mass::from_kg(3.0 * MAX_TERRESTRIAL_MASS_KG);
    assert!(generator.terrestrial_planet(&mut system, heavy, "x").is_none());

    let wide = Mass::zero()..=Mass::from_kg(1e30);
    let planet = generator.terrestrial_planet(&mut system, wide, "y").unwrap();
    let mass = planet.body.mass.to_kg();
    assert!((MIN_TERRESTRIAL_MASS_KG..=MAX_TERRESTRIAL_MASS_KG).contains(&mass));
}

#[test]
fn gas_giant_with_exact_mass() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(42);

    let mass = Mass::from_kg(1.9e27);
    let giant = generator.gas_giant(&mut system, mass..=mass, "Sol c").unwrap();
    assert_eq!(giant.body.mass, mass);
    // Gas giants keep their zero-pressure density
    let density = planetary::physical::bulk_density(giant.body.mass, giant.body.diameter);
    assert!((density - giant.body.material.uncompressed_density).abs() < 1e-6 * density);
}

#[test]
fn planets_do_not_overlap() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(2024);

    for index in 0..6 {
        let name = format!("Sol {}", index);
        if let Some(planet) = generator.terrestrial_planet(&mut system, earth_masses(0.1, 3.0), &name) {
            system.planets.push(planet);
        }
    }
    assert!(system.planets.len() >= 2);

    system.sort_planets();
    for pair in system.planets.windows(2) {
        let inner = &pair[0];
        let outer = &pair[1];
        let inner_edge = inner.body.orbit.apocenter() + system.exclusion_zone(inner);
        assert!(
            inner_edge < outer.body.orbit.pericenter(),
            "{} overlaps {}",
            inner.body.name,
            outer.body.name
        );
    }
}

#[test]
fn planetoid_stays_small_and_minor() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(5);
    let max_mass = Mass::from_kg(1e23);

    let planetoid = generator.planetoid(&mut system, max_mass, None).unwrap();
    assert!(planetoid.minor);
    assert!(planetoid.body.mass <= max_mass);
    assert!(system.among_debris(planetoid.body.mass, planetoid.body.orbit.radius(), 0.01));
    assert!(!planetoid.body.name.is_empty());

    let named = generator
        .planetoid(&mut system, max_mass, Some("Vesta"))
        .unwrap();
    assert_eq!(named.body.name, "Vesta");
}

#[test]
fn planetoid_mass_cap_can_fail() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);
    let mut system = solar_system(5);

    // Below the smallest planetoid the mass draw can produce
    assert!(generator.planetoid(&mut system, Mass::from_kg(1e19), None).is_none());
}

#[test]
fn generation_replays() {
    let config = GeneratorConfig::default();
    let registry = ClassRegistry::standard();
    let generator = BodyGenerator::new(&config, &registry);

    let mut first = solar_system(99);
    let mut second = solar_system(99);
    let a = generator.terrestrial_planet(&mut first, earth_masses(0.5, 1.5), "p");
    let b = generator.terrestrial_planet(&mut second, earth_masses(0.5, 1.5), "p");
    assert_eq!(a, b);
    assert_eq!(first.star.stream, second.star.stream);
}

#[test]
fn stage_names() {
    assert_eq!(BodyStage::OrbitPending.to_string(), "orbit pending");
    assert_eq!(BodyStage::Failed.to_string(), "failed");
}
