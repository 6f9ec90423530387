use std::f64::consts::TAU;

use approx::assert_relative_eq;
use units::Length;

use crate::error::OrbitError;
use crate::fixtures::sun;
use crate::orbit::{Orbit, OrbitalZone};

#[test]
fn rejects_invalid_elements() {
    let au = Length::from_au(1.0);

    assert_eq!(
        Orbit::new(Length::from_meters(-1.0), 0.1, 0.0),
        Err(OrbitError::NegativeRadius(-1.0))
    );
    assert_eq!(
        Orbit::new(au, -0.1, 0.0),
        Err(OrbitError::NegativeEccentricity(-0.1))
    );
    assert_eq!(Orbit::new(au, 1.0, 0.0), Err(OrbitError::Unbound(1.0)));
    assert_eq!(Orbit::new(au, f64::NAN, 0.0), Err(OrbitError::NotFinite));
    assert_eq!(
        Orbit::new(Length::from_meters(f64::INFINITY), 0.0, 0.0),
        Err(OrbitError::NotFinite)
    );
}

#[test]
fn zero_radius_is_valid() {
    let orbit = Orbit::circular(Length::zero()).unwrap();
    assert_eq!(orbit, Orbit::default());
}

#[test]
fn inclination_is_normalised() {
    let au = Length::from_au(1.0);

    let negative = Orbit::new(au, 0.0, -0.5).unwrap();
    assert_relative_eq!(negative.inclination(), TAU - 0.5, epsilon = 1e-12);

    let wrapped = Orbit::new(au, 0.0, TAU + 0.25).unwrap();
    assert_relative_eq!(wrapped.inclination(), 0.25, epsilon = 1e-12);
}

#[test]
fn apsides() {
    let orbit = Orbit::new(Length::from_au(2.0), 0.25, 0.0).unwrap();
    assert_relative_eq!(orbit.pericenter().to_au(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(orbit.apocenter().to_au(), 2.5, epsilon = 1e-12);
}

#[test]
fn zones_follow_solar_landmarks() {
    let star = sun();
    let zone_at = |au: f64| Orbit::circular(Length::from_au(au)).unwrap().zone(&star);

    assert_eq!(zone_at(0.3), OrbitalZone::Hot);
    assert_eq!(zone_at(1.0), OrbitalZone::Habitable);
    assert_eq!(zone_at(2.5), OrbitalZone::Cold);
    assert_eq!(zone_at(30.0), OrbitalZone::Frozen);
}

#[test]
fn deserialising_validates() {
    let good = r#"{"radius": 1.0e11, "eccentricity": 0.5, "inclination": -1.0}"#;
    let orbit: Orbit = serde_json::from_str(good).unwrap();
    assert_relative_eq!(orbit.inclination(), TAU - 1.0, epsilon = 1e-12);

    let bad = r#"{"radius": 1.0e11, "eccentricity": 1.5, "inclination": 0.0}"#;
    assert!(serde_json::from_str::<Orbit>(bad).is_err());
}
