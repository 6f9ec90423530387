use nalgebra::Vector3;
use stellar::{SeedStream, SpectralType, Star, StarClass};
use units::constants::{EARTH_DIAMETER_M, EARTH_MASS_KG, SOLAR_LUMINOSITY_W, SOLAR_MASS_KG};
use units::{Length, Mass, Temperature, Time};

use crate::orbit::{Orbit, OrbitalZone};
use crate::physical::PhysicalProperties;
use crate::satellite::Satellite;

pub fn sun() -> Star {
    Star {
        name: "Sol".to_string(),
        class: StarClass::main_sequence(SpectralType::G, 2),
        seed: 0,
        mass: Mass::from_kg(SOLAR_MASS_KG),
        diameter: Length::from_solar_diameters(1.0),
        temperature: Temperature::from_kelvin(5778.0),
        luminosity: SOLAR_LUMINOSITY_W,
        original_luminosity: SOLAR_LUMINOSITY_W,
        position: Vector3::zeros(),
        stream: SeedStream::new(0),
    }
}

pub fn earth() -> Satellite {
    let orbit = Orbit::new(Length::from_au(1.0), 0.0167, 0.0).unwrap();
    let mut body = Satellite::new("Earth", 3, Mass::from_kg(EARTH_MASS_KG), orbit);
    body.diameter = Length::from_meters(EARTH_DIAMETER_M);
    body.rotation_period = Time::from_hours(23.934);
    body
}

/// Hand-built properties for exercising class predicates.
pub fn properties(
    mass_kg: f64,
    density: f64,
    uncompressed_density: f64,
    molecular_limit: f64,
    kelvin: f64,
    zone: OrbitalZone,
) -> PhysicalProperties {
    PhysicalProperties {
        mass: Mass::from_kg(mass_kg),
        diameter: Length::from_meters(1.0e7),
        sidereal_period: Time::from_years(1.0),
        day_length: Time::from_hours(24.0),
        hill_radius: Length::from_au(0.01),
        exclusion_zone: Length::from_au(0.05),
        surface_gravity: 9.8,
        escape_velocity: units::Velocity::from_km_per_sec(11.0),
        equatorial_speed: units::Velocity::from_meters_per_sec(465.0),
        density,
        uncompressed_density,
        blackbody_temperature: Temperature::from_kelvin(kelvin),
        zone,
        critical_mass: Mass::from_earth_masses(10.0),
        molecular_limit,
        core_pressure: 1.0e11,
    }
}
