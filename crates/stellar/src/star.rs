use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use units::constants::{SOLAR_LUMINOSITY_W, STEFAN_BOLTZMANN_PI, UNIVERSE_TEMPERATURE_K};
use units::{Length, Mass, Temperature};

use crate::seeds::SeedStream;
use crate::spectral::StarClass;

/// Blackbody temperature at which rock vaporises; closer orbits are forbidden.
pub const BOILING_TEMPERATURE_K: f64 = 3200.0;

/// Water-ice condensation temperature.
pub const FROST_TEMPERATURE_K: f64 = 150.0;

const HABITABLE_ZONE_INNER_K: f64 = 330.0;
const HABITABLE_ZONE_OUTER_K: f64 = 220.0;

/// A generated star.
///
/// Stored fields are the sampled properties; orbital landmarks (boiling line,
/// frost line, habitable zone, planet limits) are pure functions of mass and
/// luminosity and are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    pub class: StarClass,
    pub seed: u64,
    pub mass: Mass,
    pub diameter: Length,
    pub temperature: Temperature,
    /// Luminosity in watts.
    pub luminosity: f64,
    /// Luminosity before leaving the main sequence, in watts.
    pub original_luminosity: f64,
    pub position: Vector3<f64>,
    #[serde(skip)]
    pub stream: SeedStream,
}

impl Star {
    pub fn luminosity_solar(&self) -> f64 {
        self.luminosity / SOLAR_LUMINOSITY_W
    }

    pub fn original_luminosity_solar(&self) -> f64 {
        self.original_luminosity / SOLAR_LUMINOSITY_W
    }

    /// Distance at which the zero-albedo equilibrium temperature equals
    /// `temperature`.
    pub fn distance_for_temperature(&self, temperature: Temperature) -> Length {
        distance_for_temperature(self.luminosity, temperature)
    }

    /// Blackbody temperature at `distance`, never below the cosmic background.
    pub fn blackbody_temperature_at(&self, distance: Length) -> Temperature {
        blackbody_temperature(self.luminosity, distance)
    }

    pub fn boiling_line(&self) -> Length {
        self.distance_for_temperature(Temperature::from_kelvin(BOILING_TEMPERATURE_K))
    }

    /// Uses the original luminosity so the line does not move when the star
    /// leaves the main sequence.
    pub fn frost_line(&self) -> Length {
        distance_for_temperature(
            self.original_luminosity,
            Temperature::from_kelvin(FROST_TEMPERATURE_K),
        )
    }

    pub fn habitable_zone_min(&self) -> Length {
        distance_for_temperature(
            0.6 * self.luminosity,
            Temperature::from_kelvin(HABITABLE_ZONE_INNER_K),
        )
    }

    pub fn habitable_zone_max(&self) -> Length {
        distance_for_temperature(
            0.9 * self.luminosity,
            Temperature::from_kelvin(HABITABLE_ZONE_OUTER_K),
        )
    }

    /// Innermost orbit that can host a planet.
    pub fn inner_planet_limit(&self) -> Length {
        let by_mass = self.mass.to_solar_masses() * 0.1;
        let by_luminosity = self.original_luminosity_solar() * 0.01;
        Length::from_au(by_mass.max(by_luminosity))
    }

    /// Outermost orbit that can host a planet.
    pub fn outer_planet_limit(&self) -> Length {
        Length::from_au(self.mass.to_solar_masses() * 40.0)
    }

    pub fn absolute_magnitude(&self) -> f64 {
        4.83 - 2.5 * self.luminosity_solar().log10()
    }

    /// Draws the next child seed from this star's stream.
    pub fn child_seed(&mut self, multiplier: i64) -> u64 {
        self.stream.child_seed(multiplier)
    }
}

/// `sqrt(L / σπ) / (4 T²)`, with T floored at the cosmic background.
pub fn distance_for_temperature(luminosity: f64, temperature: Temperature) -> Length {
    let t = temperature.to_kelvin().max(UNIVERSE_TEMPERATURE_K);
    Length::from_meters((luminosity / STEFAN_BOLTZMANN_PI).sqrt() / (4.0 * t * t))
}

/// `(L / (16 σπ r²))^¼`, floored at the cosmic background.
pub fn blackbody_temperature(luminosity: f64, distance: Length) -> Temperature {
    let r = distance.to_meters();
    let t = (luminosity / (16.0 * STEFAN_BOLTZMANN_PI * r * r)).powf(0.25);
    Temperature::from_kelvin(t).at_least_background()
}
