use planetary::physical::roche_limit;
use star_system::metadata::system_id;

use crate::generation::SystemGenerator;
use crate::{GenerationError, GeneratorConfig, StarSystem};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn systems(generator: &SystemGenerator, seeds: std::ops::Range<u64>) -> Vec<StarSystem> {
    seeds
        .map(|seed| generator.generate_star(seed).unwrap())
        .collect()
}

#[test]
fn same_seed_same_system() {
    init_logging();
    let generator = SystemGenerator::default();
    let first = generator.generate_star(42).unwrap();
    let second = generator.generate_star(42).unwrap();
    assert_eq!(first, second);

    let other = generator.generate_star(43).unwrap();
    assert_ne!(first.id, other.id);
}

#[test]
fn class_and_star_seed_replay() {
    init_logging();
    let generator = SystemGenerator::default();
    let first = generator.generate_star_with_class(42, "G2V", 1234).unwrap();
    let second = generator.generate_star_with_class(42, "G2V", 1234).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.star.class.to_string(), "G2V");
    assert_eq!(first.star.seed, 1234);
    assert_eq!(first.id, system_id(1234));
}

#[test]
fn unknown_class_is_an_error() {
    let generator = SystemGenerator::default();
    let err = generator
        .generate_star_with_class(42, "not a class", 1)
        .unwrap_err();
    assert!(matches!(err, GenerationError::Stellar(_)), "{:?}", err);
}

#[test]
fn bodies_never_exceed_the_dust_budget() {
    init_logging();
    let generator = SystemGenerator::default();
    for system in systems(&generator, 0..8) {
        let used = system.body_mass() + system.remaining_dust;
        assert!(
            used.to_kg() <= system.dust_budget.to_kg() * (1.0 + 1e-9),
            "{}: {:.3e} of {:.3e} kg",
            system.star.name,
            used.to_kg(),
            system.dust_budget.to_kg()
        );
        assert!(system.remaining_dust.to_kg() >= 0.0);
        assert!(system.planets.len() <= 26);
    }
}

#[test]
fn planet_orbits_do_not_overlap() {
    init_logging();
    let generator = SystemGenerator::default();
    for system in systems(&generator, 10..18) {
        for pair in system.planets.windows(2) {
            let (inner, outer) = (&pair[0], &pair[1]);
            assert!(inner.body.orbit.radius() <= outer.body.orbit.radius());
            let inner_edge = inner.body.orbit.apocenter() + system.exclusion_zone(inner);
            assert!(
                inner_edge < outer.body.orbit.pericenter(),
                "{} overlaps {}",
                inner.body.name,
                outer.body.name
            );
        }
    }
}

#[test]
fn planets_clear_their_orbits_and_planetoids_do_not() {
    init_logging();
    let generator = SystemGenerator::default();
    let config = generator.config();
    for system in systems(&generator, 20..26) {
        for planet in &system.planets {
            assert!(!planet.minor);
            assert!(planet.body.name.starts_with(&system.star.name));
            let lambda = system.stern_levison(planet.body.mass, planet.body.orbit.radius());
            assert!(lambda >= config.planet_stern_levison, "{}: Λ = {}", planet.body.name, lambda);
        }
        for planetoid in &system.planetoids {
            assert!(planetoid.minor);
            let lambda = system.stern_levison(planetoid.body.mass, planetoid.body.orbit.radius());
            assert!(lambda <= config.planetoid_stern_levison, "{}: Λ = {}", planetoid.body.name, lambda);
        }
    }
}

#[test]
fn moons_stay_outside_the_roche_limit() {
    init_logging();
    let generator = SystemGenerator::default();
    for system in systems(&generator, 30..36) {
        for planet in system.planets.iter().chain(&system.planetoids) {
            for moon in &planet.moons {
                let roche = roche_limit(
                    planet.body.mass,
                    planet.body.diameter,
                    moon.body.mass,
                    moon.body.diameter,
                    generator.config().roche_rigid,
                );
                assert!(
                    moon.body.orbit.pericenter() >= roche,
                    "{} inside the Roche limit of {}",
                    moon.body.name,
                    planet.body.name
                );
            }
        }
    }
}

#[test]
fn config_limits_planet_count() {
    init_logging();
    let generator = SystemGenerator::from_json(r#"{ "maxPlanets": 2 }"#).unwrap();
    for system in systems(&generator, 40..46) {
        assert!(system.planets.len() <= 2);
    }
}

#[test]
fn bad_config_is_rejected() {
    let err = SystemGenerator::from_json(r#"{ "orbitAttempts": 0 }"#).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidConfig(_)));
}

#[test]
fn single_bodies_through_the_generator() {
    init_logging();
    let generator = SystemGenerator::new(GeneratorConfig::default());
    let mut system = generator.generate_star_with_class(7, "K4V", 99).unwrap();
    system.planets.clear();
    system.planetoids.clear();

    let mass = units::Mass::from_earth_masses(1.0);
    if let Some(planet) = generator.generate_terrestrial_planet(&mut system, mass..=mass, "K b") {
        assert_eq!(planet.body.mass, mass);
        system.planets.push(planet);
    }
    let planetoid = generator.generate_planetoid(&mut system, units::Mass::from_kg(1e22), Some("Ceres"));
    if let Some(planetoid) = planetoid {
        assert_eq!(planetoid.body.name, "Ceres");
        assert!(planetoid.minor);
    }
}

#[test]
fn systems_serialize() {
    let generator = SystemGenerator::default();
    let system = generator.generate_star_with_class(1, "M3V", 5).unwrap();
    let json = serde_json::to_value(&system).unwrap();
    assert!(json["planets"].is_array());
    assert!(json["dustBudget"].as_f64().unwrap() > 0.0);
    assert_eq!(json["star"]["name"], system.star.name.as_str());
}

#[test]
fn generator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SystemGenerator>();
}
