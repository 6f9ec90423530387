use approx::assert_relative_eq;
use nalgebra::Vector3;
use units::constants::{SOLAR_LUMINOSITY_W, SOLAR_MASS_KG};
use units::{Length, Mass, Temperature};

use crate::seeds::SeedStream;
use crate::spectral::{SpectralType, StarClass};
use crate::star::{Star, blackbody_temperature, distance_for_temperature};

fn sun() -> Star {
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

#[test]
fn solar_landmarks() {
    let star = sun();

    assert_relative_eq!(star.frost_line().to_au(), 3.451, epsilon = 1e-3);
    assert!(star.boiling_line() < star.habitable_zone_min());
    assert!(star.habitable_zone_min() < Length::from_au(1.0));
    assert!(star.habitable_zone_max() > Length::from_au(1.0));
    assert!(star.habitable_zone_max() < star.frost_line());
    assert_relative_eq!(star.inner_planet_limit().to_au(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(star.outer_planet_limit().to_au(), 40.0, epsilon = 1e-12);
    assert_relative_eq!(star.absolute_magnitude(), 4.83, epsilon = 1e-12);
}

#[test]
fn earth_blackbody_temperature() {
    let star = sun();
    let t = star.blackbody_temperature_at(Length::from_au(1.0));
    assert_relative_eq!(t.to_kelvin(), 278.66, epsilon = 0.01);
}

#[test]
fn distance_and_temperature_are_inverse() {
    let luminosity = 12.0 * SOLAR_LUMINOSITY_W;
    for kelvin in [40.0, 150.0, 288.0, 1500.0] {
        let distance = distance_for_temperature(luminosity, Temperature::from_kelvin(kelvin));
        let back = blackbody_temperature(luminosity, distance);
        assert_relative_eq!(back.to_kelvin(), kelvin, max_relative = 1e-12);
    }
}

#[test]
fn blackbody_temperature_floor() {
    let star = sun();
    let deep_space = star.blackbody_temperature_at(Length::from_au(1e7));
    assert_relative_eq!(deep_space.to_kelvin(), 2.73);
}

#[test]
fn evolved_star_keeps_frost_line() {
    let mut giant = sun();
    giant.luminosity *= 100.0;

    let reference = sun();
    assert_eq!(giant.frost_line(), reference.frost_line());
    assert!(giant.boiling_line() > reference.boiling_line());
    assert_relative_eq!(giant.absolute_magnitude(), 4.83 - 5.0, epsilon = 1e-12);
}
