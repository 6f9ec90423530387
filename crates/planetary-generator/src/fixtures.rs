use nalgebra::Vector3;
use planetary::{Orbit, Planet, Satellite};
use star_system::StarSystem;
use stellar::{SeedStream, SpectralType, Star, StarClass};
use units::constants::{SOLAR_LUMINOSITY_W, SOLAR_MASS_KG};
use units::{Length, Mass, Temperature, Time};

pub fn sun(seed: u64) -> Star {
    Star {
        name: "Sol".to_string(),
        class: StarClass::main_sequence(SpectralType::G, 2),
        seed,
        mass: Mass::from_kg(SOLAR_MASS_KG),
        diameter: Length::from_solar_diameters(1.0),
        temperature: Temperature::from_kelvin(5778.0),
        luminosity: SOLAR_LUMINOSITY_W,
        original_luminosity: SOLAR_LUMINOSITY_W,
        position: Vector3::zeros(),
        stream: SeedStream::new(seed),
    }
}

pub fn solar_system(seed: u64) -> StarSystem {
    StarSystem::new(sun(seed)).with_dust(Mass::from_earth_masses(500.0))
}

/// A Jupiter analogue on a circular orbit.
pub fn jupiter(seed: u64) -> Planet {
    let orbit = Orbit::circular(Length::from_au(5.2)).unwrap();
    let mut body = Satellite::new("Jupiter", seed, Mass::from_kg(1.898e27), orbit);
    body.diameter = Length::from_km(139_820.0);
    body.rotation_period = Time::from_hours(9.925);
    Planet::new(body, false)
}
