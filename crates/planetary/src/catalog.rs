//! The stock set of planetary classes.

use units::constants::MAX_TERRESTRIAL_MASS_KG;

use crate::material::MaterialParams;
use crate::orbit::OrbitalZone::{self, Cold, Frozen, Habitable, Hot};
use crate::physical::PhysicalProperties;
use crate::planet_class::{ClassFamily, PlanetaryClass, PlanetaryClassId as Id};

/// Open upper temperature bound for the hottest classes.
const HOTTEST: f64 = 9999.0;

fn kelvin(p: &PhysicalProperties) -> f64 {
    p.blackbody_temperature.to_kelvin()
}

fn mass(p: &PhysicalProperties) -> f64 {
    p.mass.to_kg()
}

/// Hydrogen-poor giants lose hydrogen but keep helium.
fn hydrogen_poor(p: &PhysicalProperties) -> bool {
    p.molecular_limit > 1.0 || kelvin(p) <= 20.0 || p.density > 1500.0
}

fn icy(p: &PhysicalProperties) -> bool {
    kelvin(p) <= 80.0 + p.density / 120.0
}

fn standalone_gas(
    id: Id,
    albedo: f64,
    min_density: f64,
    max_density: f64,
    predicate: impl Fn(&PhysicalProperties) -> bool + Send + Sync + 'static,
) -> PlanetaryClass {
    let mean = 0.5 * (min_density + max_density);
    let sigma = 0.25 * (max_density - min_density);
    PlanetaryClass::new(id, ClassFamily::GasGiant, albedo, predicate)
        .with_density(mean, sigma, min_density, max_density)
}

pub fn gas_giants() -> Vec<PlanetaryClass> {
    vec![
        PlanetaryClass::gas_giant(Id::AmmoniaGiant, 0.57, 1.0, 20.0, 170.0, 300.0, 1550.0, |_| true),
        PlanetaryClass::gas_giant(Id::WaterCloudGiant, 0.81, 1.0, 150.0, 400.0, 300.0, 1650.0, |_| true),
        PlanetaryClass::gas_giant(Id::CloudlessGiant, 0.12, 1.0, 300.0, 900.0, 300.0, 1850.0, |_| true),
        PlanetaryClass::gas_giant(Id::AlkaliGiant, 0.03, 1.0, 900.0, 1500.0, 300.0, 2100.0, |_| true),
        PlanetaryClass::gas_giant(Id::SilicateCloudGiant, 0.55, 1.0, 1500.0, HOTTEST, 300.0, 2500.0, |_| true),
        PlanetaryClass::gas_giant(Id::HeliumAmmoniaGiant, 0.57, 4.0, 0.0, 170.0, 400.0, 1650.0, hydrogen_poor),
        PlanetaryClass::gas_giant(Id::HeliumWaterCloudGiant, 0.81, 4.0, 150.0, 400.0, 400.0, 1750.0, hydrogen_poor),
        PlanetaryClass::gas_giant(Id::HeliumCloudlessGiant, 0.12, 4.0, 300.0, 900.0, 400.0, 1950.0, hydrogen_poor),
        PlanetaryClass::gas_giant(Id::HeliumAlkaliGiant, 0.03, 4.0, 900.0, 1500.0, 400.0, 2200.0, hydrogen_poor),
        PlanetaryClass::gas_giant(Id::HeliumSilicateCloudGiant, 0.55, 4.0, 1500.0, HOTTEST, 400.0, 2600.0, hydrogen_poor),
        PlanetaryClass::gas_giant(Id::IceGiant, 0.3, 1.0, 20.0, HOTTEST, 1200.0, 3000.0, icy),
        PlanetaryClass::gas_giant(Id::HeliumIceGiant, 0.3, 4.0, 0.0, HOTTEST, 1200.0, 3000.0, |p| {
            icy(p) && (p.molecular_limit > 1.0 || kelvin(p) <= 20.0)
        }),
        // Stripped core of a giant that lost its envelope
        PlanetaryClass::new(Id::Cthonian, ClassFamily::GasGiant, 0.3, |p| {
            (p.molecular_limit > 4.0 || p.density + kelvin(p) / 10.0 > 2500.0)
                && mass(p) >= 0.9 * MAX_TERRESTRIAL_MASS_KG
                && p.density > 2000.0
        })
        .with_zones(&[Hot, Habitable])
        .with_temperature(300.0, 5000.0)
        .with_density(5000.0, 1500.0, 2000.0, 8000.0),
        standalone_gas(Id::HotPuffyGiant, 0.55, 300.0, 1000.0, |p| {
            p.molecular_limit > (p.density / 2000.0).min(1.0)
                && mass(p) >= MAX_TERRESTRIAL_MASS_KG
                && p.density < 1000.0
                && kelvin(p) >= 1000.0
        })
        .with_temperature(1000.0, HOTTEST),
        standalone_gas(Id::ColdPuffyGiant, 0.55, 200.0, 500.0, |p| {
            p.molecular_limit <= 1.0
                && mass(p) >= MAX_TERRESTRIAL_MASS_KG
                && p.density < 500.0
                && kelvin(p) > 20.0
                && kelvin(p) < 1000.0
        })
        .with_temperature(20.0, 1000.0),
        standalone_gas(Id::HeliumColdPuffyGiant, 0.55, 300.0, 700.0, |p| {
            ((p.molecular_limit > 1.0 && p.molecular_limit <= 4.0) || kelvin(p) <= 20.0)
                && mass(p) >= MAX_TERRESTRIAL_MASS_KG
                && p.density < 700.0
                && kelvin(p) < 1000.0
        })
        .with_temperature(0.0, 1000.0),
        standalone_gas(Id::GasDwarf, 0.3, 1500.0, 3700.0, |p| {
            p.molecular_limit <= 1.0
                && mass(p) >= 0.5 * MAX_TERRESTRIAL_MASS_KG
                && p.density > 1500.0
                && p.density < 3700.0 + kelvin(p)
                && kelvin(p) > 80.0
                && kelvin(p) < 1700.0
        })
        .with_temperature(80.0, 1700.0),
        standalone_gas(Id::HeliumGasDwarf, 0.3, 1500.0, 4000.0, |p| {
            p.molecular_limit > 1.0
                && p.molecular_limit <= 4.0
                && mass(p) >= 0.5 * MAX_TERRESTRIAL_MASS_KG
                && p.density > 1500.0
                && p.density < 4000.0 + kelvin(p)
                && kelvin(p) > 80.0
                && kelvin(p) < 1700.0
        })
        .with_temperature(80.0, 1700.0),
        standalone_gas(Id::FrozenGasDwarf, 0.55, 2500.0, 4000.0, |p| {
            p.molecular_limit <= 4.0
                && mass(p) >= MAX_TERRESTRIAL_MASS_KG
                && p.density >= 2500.0
                && p.density < 4000.0
                && kelvin(p) <= 80.0
        })
        .with_temperature(0.0, 80.0),
        standalone_gas(Id::BoilingGiant, 0.3, 500.0, 2200.0, |p| {
            p.molecular_limit > 4.0
                && mass(p) >= 0.9 * MAX_TERRESTRIAL_MASS_KG
                && p.density < 2200.0
                && kelvin(p) > 200.0
        })
        .with_temperature(200.0, HOTTEST),
    ]
}

/// Silicate-rich rock shared by the habitable-zone worlds.
fn rock(mean: f64, sigma: f64, min: f64, max: f64, min_c: f64) -> MaterialParams {
    MaterialParams::default()
        .with_density(mean, sigma, min, max)
        .with_compressibility(min_c, 2500e-12, 2.0)
}

fn ice(min_density: f64) -> MaterialParams {
    MaterialParams::default()
        .with_density(2000.0, 700.0, min_density, 3000.0)
        .with_compressibility(1000e-12, 5000e-12, 1.5)
}

pub fn terrestrials() -> Vec<PlanetaryClass> {
    let habitable: &[OrbitalZone] = &[Habitable];
    let inner: &[OrbitalZone] = &[Hot, Habitable];

    vec![
        PlanetaryClass::terrestrial(Id::Desert, 0.27, |p| {
            (3500.0..=5000.0).contains(&p.uncompressed_density) && p.molecular_limit > 18.0
        })
        .with_zones(inner)
        .with_temperature(250.0, 700.0)
        .with_material(rock(4200.0, 1000.0, 3500.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::EarthLike, 0.29, |p| {
            (3500.0..=5000.0).contains(&p.uncompressed_density)
                && p.molecular_limit > 4.0
                && p.molecular_limit <= 18.0
        })
        .with_zones(habitable)
        .with_temperature(250.0, 330.0)
        .with_material(rock(4200.0, 1000.0, 3500.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::Greenhouse, 0.65, |p| {
            p.uncompressed_density <= 5000.0 && p.molecular_limit > 4.0 && p.molecular_limit <= 18.0
        })
        .with_zones(inner)
        .with_temperature(330.0, 500.0)
        .with_material(rock(4000.0, 1000.0, 1200.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::Hell, 0.4, |p| {
            p.uncompressed_density < 5000.0
                && (kelvin(p) >= 500.0 || p.molecular_limit > 18.0)
                && p.molecular_limit <= 44.0
        })
        .with_zones(inner)
        .with_temperature(330.0, 5000.0)
        .with_material(rock(4000.0, 1000.0, 1200.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::FrozenRock, 0.4, |p| {
            (3000.0..5000.0).contains(&p.uncompressed_density) && p.molecular_limit <= 44.0
        })
        .with_zones(&[Habitable, Cold, Frozen])
        .with_temperature(0.0, 260.0)
        .with_material(rock(3900.0, 1000.0, 3000.0, 5000.0, 1000e-12)),
        PlanetaryClass::terrestrial(Id::Airless, 0.4, |p| {
            p.uncompressed_density < 5000.0
                && (p.uncompressed_density >= 2600.0 || kelvin(p) >= 260.0)
                && p.molecular_limit > 44.0
        })
        .with_material(rock(3600.0, 1000.0, 2600.0, 5000.0, 1000e-12)),
        PlanetaryClass::terrestrial(Id::DryRock, 0.2, |p| {
            (2600.0..=3500.0).contains(&p.uncompressed_density)
                && p.molecular_limit > 18.0
                && p.molecular_limit <= 44.0
        })
        .with_zones(habitable)
        .with_temperature(250.0, 330.0)
        .with_material(rock(3000.0, 500.0, 2600.0, 3500.0, 1000e-12)),
        PlanetaryClass::terrestrial(Id::Rocky, 0.2, |p| {
            (2600.0..=3500.0).contains(&p.uncompressed_density) && p.molecular_limit <= 18.0
        })
        .with_zones(habitable)
        .with_temperature(250.0, 330.0)
        .with_material(rock(3000.0, 500.0, 2600.0, 3500.0, 1000e-12)),
        PlanetaryClass::terrestrial(Id::HighPressure, 0.29, |p| {
            (3500.0..=5000.0).contains(&p.uncompressed_density) && p.molecular_limit <= 4.0
        })
        .with_zones(habitable)
        .with_temperature(250.0, 330.0)
        .with_material(rock(4200.0, 1000.0, 3500.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::ExtremeGreenhouse, 0.65, |p| {
            p.uncompressed_density <= 5000.0 && p.molecular_limit <= 4.0
        })
        .with_zones(inner)
        .with_temperature(330.0, 500.0)
        .with_material(rock(4000.0, 1000.0, 1200.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::WaterIce, 0.65, |p| p.uncompressed_density < 3000.0)
            .with_zones(&[Habitable, Cold])
            .with_temperature(170.0, 260.0)
            .with_material(ice(800.0)),
        PlanetaryClass::terrestrial(Id::AmmoniaIce, 0.65, |p| p.uncompressed_density < 3000.0)
            .with_zones(&[Cold, Frozen])
            .with_temperature(70.0, 180.0)
            .with_material(ice(1000.0)),
        PlanetaryClass::terrestrial(Id::MethaneIce, 0.65, |p| p.uncompressed_density < 3000.0)
            .with_zones(&[Frozen])
            .with_temperature(0.0, 80.0)
            .with_material(ice(800.0)),
        PlanetaryClass::terrestrial(Id::Iron, 0.07, |p| p.uncompressed_density >= 5000.0)
            .with_density(5500.0, 1000.0, 5000.0, f64::MAX)
            .with_compressibility(100e-12, 1000e-12, 2.0),
        PlanetaryClass::terrestrial(Id::Lava, 0.07, |p| p.uncompressed_density <= 5000.0)
            .with_zones(&[Hot])
            .with_temperature(700.0, 5000.0)
            .with_material(rock(4000.0, 1000.0, 2600.0, 5000.0, 250e-12)),
        PlanetaryClass::terrestrial(Id::Ocean, 0.2, |p| {
            p.uncompressed_density <= 3800.0 && p.molecular_limit <= 18.0
        })
        .with_zones(habitable)
        .with_temperature(260.0, 350.0)
        .with_material(
            MaterialParams::default()
                .with_density(2800.0, 1000.0, 1200.0, 3800.0)
                .with_compressibility(500e-12, 10000e-12, 2.0),
        ),
    ]
}

pub fn planetoids() -> Vec<PlanetaryClass> {
    vec![
        PlanetaryClass::planetoid(Id::Carbonaceous, 0.1, |p| (2000.0..4000.0).contains(&p.density))
            .with_zones(&[Hot, Habitable, Cold])
            .with_temperature(200.0, 5000.0)
            .with_density(2800.0, 1500.0, 2000.0, 4000.0),
        PlanetaryClass::planetoid(Id::IcePlanetoid, 0.6, |p| p.density < 3500.0)
            .with_zones(&[Habitable, Cold, Frozen])
            .with_temperature(0.0, 260.0)
            .with_density(1400.0, 800.0, 700.0, 3500.0),
        PlanetaryClass::planetoid(Id::Silicate, 0.35, |p| (3000.0..=5000.0).contains(&p.density))
            .with_density(3800.0, 1500.0, 3000.0, 5000.0),
        PlanetaryClass::planetoid(Id::Metallic, 0.2, |p| p.density >= 4000.0)
            .with_density(5000.0, 1500.0, 4000.0, 15000.0),
        PlanetaryClass::planetoid(Id::Gravel, 0.2, |p| p.density < 2000.0)
            .with_zones(&[Hot, Habitable, Cold])
            .with_temperature(250.0, 5000.0)
            .with_density(1200.0, 1000.0, 600.0, 2000.0),
    ]
}

/// All classes in registry scan order.
pub fn standard_classes() -> Vec<PlanetaryClass> {
    let mut classes = gas_giants();
    classes.extend(terrestrials());
    classes.extend(planetoids());
    classes
}
