//! Star construction from a spectral class and a seed.

use nalgebra::Vector3;
use units::constants::{SOLAR_DIAMETER_M, SOLAR_LUMINOSITY_W, SOLAR_TEMPERATURE_K};
use units::{Length, Mass, Temperature};

use crate::error::Result;
use crate::naming::{NameTables, star_name};
use crate::sampling::{SpectralDistribution, lerp};
use crate::seeds::SeedStream;
use crate::spectral::StarClass;
use crate::spectral_table::{StarClassData, StarClassTable, stefan_boltzmann_luminosity};
use crate::star::Star;

/// Draws spectral classes and builds stars from the class tables.
#[derive(Debug, Clone, Copy)]
pub struct StellarSampler<'a> {
    table: &'a StarClassTable,
    names: &'a NameTables,
    distribution: &'a SpectralDistribution,
}

impl<'a> StellarSampler<'a> {
    pub fn new(
        table: &'a StarClassTable,
        names: &'a NameTables,
        distribution: &'a SpectralDistribution,
    ) -> Self {
        Self {
            table,
            names,
            distribution,
        }
    }

    /// Draws a main-sequence class from the universe stream.
    pub fn sample_class(&self, universe: &mut SeedStream) -> StarClass {
        self.distribution.sample(universe)
    }

    /// Builds a star of `class` whose own stream starts at `star_seed`.
    ///
    /// Draw order on the star stream: name, temperature, luminosity jitter,
    /// mass.
    pub fn build_star(
        &self,
        class: StarClass,
        star_seed: u64,
        position: Vector3<f64>,
    ) -> Result<Star> {
        let data = self.table.lookup(&class)?;
        let mut stream = SeedStream::new(star_seed);

        let name = star_name(&class, self.names, &mut stream);

        let temperature = lerp(
            data.min_temperature.to_kelvin(),
            data.max_temperature.to_kelvin(),
            stream.next_f64(),
        );
        let radius = data.radius * class.luminosity_class.radius_factor();
        let luminosity_solar =
            stefan_boltzmann_luminosity(radius, temperature) * (0.9 + 0.2 * stream.next_f64());
        let diameter = luminosity_solar.sqrt() / (temperature * temperature)
            * SOLAR_TEMPERATURE_K
            * SOLAR_TEMPERATURE_K
            * SOLAR_DIAMETER_M;

        let mass = lerp(
            data.min_mass.to_kg(),
            data.max_mass.to_kg(),
            stream.next_f64(),
        );
        let original_solar =
            original_luminosity(&class, data, mass, temperature, luminosity_solar);

        log::trace!("built star {} ({}) from seed {}", name, class, star_seed);

        Ok(Star {
            name,
            class,
            seed: star_seed,
            mass: Mass::from_kg(mass),
            diameter: Length::from_meters(diameter),
            temperature: Temperature::from_kelvin(temperature),
            luminosity: luminosity_solar * SOLAR_LUMINOSITY_W,
            original_luminosity: original_solar * SOLAR_LUMINOSITY_W,
            position,
            stream,
        })
    }
}

/// Luminosity (L☉) the star had on the main sequence.
///
/// Evolved stars fall back to the main-sequence radius of their class; white
/// dwarfs use the progenitor mass from a linear initial–final mass relation.
fn original_luminosity(
    class: &StarClass,
    data: &StarClassData,
    mass_kg: f64,
    temperature: f64,
    luminosity_solar: f64,
) -> f64 {
    if class.is_white_dwarf() {
        let remnant = Mass::from_kg(mass_kg).to_solar_masses();
        let progenitor = ((remnant - 0.394) / 0.109).clamp(0.8, 8.0);
        progenitor.powf(3.5)
    } else if class.luminosity_class.is_evolved() {
        stefan_boltzmann_luminosity(data.radius, temperature)
    } else {
        luminosity_solar
    }
}

/// Uniform position inside a cube of side `extent` centred on the origin.
pub fn sample_position(universe: &mut SeedStream, extent: f64) -> Vector3<f64> {
    let x = (universe.next_f64() - 0.5) * extent;
    let y = (universe.next_f64() - 0.5) * extent;
    let z = (universe.next_f64() - 0.5) * extent;
    Vector3::new(x, y, z)
}
