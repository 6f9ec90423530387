use stellar::SeedStream;

use crate::fixtures::{earth, properties, sun};
use crate::orbit::OrbitalZone;
use crate::physical::{Parent, PhysicalProperties};
use crate::planet_class::{ClassFamily, PlanetaryClassId};
use crate::registry::{ClassRegistry, gas_giant_table, planetoid_table, terrestrial_table};

#[test]
fn earth_is_earth_like() {
    let registry = ClassRegistry::standard();
    let star = sun();
    let props = PhysicalProperties::derive(&earth(), Parent::Star(&star));

    let possible = registry.possible_classes(&props);
    assert_eq!(possible.len(), 1, "{:?}", possible);

    let mut stream = SeedStream::new(1);
    assert_eq!(registry.classify(&props, &mut stream), PlanetaryClassId::EarthLike);
    // A single match consumes nothing from the stream
    assert_eq!(stream, SeedStream::new(1));
}

#[test]
fn nothing_matches_gives_unknown() {
    let registry = ClassRegistry::standard();
    // Between the planetoid ceiling and the gas giant floor, lighter than water
    let odd = properties(1.0e24, 500.0, 500.0, 10.0, 150.0, OrbitalZone::Cold);
    assert!(registry.possible_classes(&odd).is_empty());
    assert_eq!(
        registry.classify(&odd, &mut SeedStream::new(2)),
        PlanetaryClassId::Unknown
    );
}

#[test]
fn ties_are_broken_by_the_body_stream() {
    let registry = ClassRegistry::standard();
    // Small icy rock in the frozen zone: several ice and rock classes apply
    let props = properties(5.0e23, 2400.0, 2300.0, 60.0, 75.0, OrbitalZone::Frozen);
    let possible = registry.possible_classes(&props);
    assert!(possible.len() > 1, "{:?}", possible);

    let first = registry.classify(&props, &mut SeedStream::new(10));
    let again = registry.classify(&props, &mut SeedStream::new(10));
    assert_eq!(first, again);
    assert!(possible.iter().any(|class| class.id == first));
}

#[test]
fn revalidate_keeps_a_valid_class() {
    let registry = ClassRegistry::standard();
    let props = properties(5.0e23, 2400.0, 2300.0, 60.0, 75.0, OrbitalZone::Frozen);
    let mut stream = SeedStream::new(4);

    let kept = registry.revalidate(PlanetaryClassId::MethaneIce, &props, &mut stream);
    assert_eq!(kept, PlanetaryClassId::MethaneIce);
    assert_eq!(stream, SeedStream::new(4));

    // Lava is only possible in the hot zone
    let replaced = registry.revalidate(PlanetaryClassId::Lava, &props, &mut stream);
    assert_ne!(replaced, PlanetaryClassId::Lava);
    assert_ne!(replaced, PlanetaryClassId::Unknown);
}

#[test]
fn get_falls_back_to_unknown() {
    let registry = ClassRegistry::standard();
    assert_eq!(registry.get(PlanetaryClassId::Ocean).id, PlanetaryClassId::Ocean);
    assert_eq!(registry.get(PlanetaryClassId::Unknown).id, PlanetaryClassId::Unknown);
    assert_eq!(registry.family(ClassFamily::Planetoid).count(), 5);
}

#[test]
fn pick_table_weights() {
    assert_eq!(gas_giant_table().total(), 264);
    assert_eq!(terrestrial_table().total(), 164);
    assert_eq!(planetoid_table().total(), 267);
}

#[test]
fn picks_come_from_the_right_family() {
    let registry = ClassRegistry::standard();
    let mut stream = SeedStream::new(99);
    for _ in 0..200 {
        assert_eq!(registry.pick_gas_giant(&mut stream).family, ClassFamily::GasGiant);
        assert_eq!(
            registry.pick_terrestrial(&mut stream).family,
            ClassFamily::Terrestrial
        );
        assert_eq!(registry.pick_planetoid(&mut stream).family, ClassFamily::Planetoid);
    }
}
