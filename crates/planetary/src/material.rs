use serde::{Deserialize, Serialize};
use stellar::SeedStream;
use stellar::sampling::lerp;
use units::{Length, Mass};

use crate::physical::{core_pressure, diameter_for_density};

/// Draws before a truncated-Gaussian density gives up and clamps.
const MAX_DENSITY_DRAWS: usize = 1000;

/// Fixed-point rounds used when estimating self-compression.
const COMPRESSION_ROUNDS: usize = 3;

/// Compressed density never exceeds this multiple of the uncompressed one.
const MAX_COMPRESSION: f64 = 3.0;

/// Class-specific recipe for drawing a [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialParams {
    pub mean_density: f64,
    pub density_sigma: f64,
    pub min_density: f64,
    pub max_density: f64,
    pub min_compressibility: f64,
    pub max_compressibility: f64,
    /// Exponent applied to the uniform draw between the compressibility bounds.
    pub compressibility_scale: f64,
    /// Exponent applied to the density when scaling compressibility.
    pub compressibility_density_scale: f64,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            mean_density: 3000.0,
            density_sigma: 2000.0,
            min_density: f64::MIN_POSITIVE,
            max_density: f64::MAX,
            min_compressibility: 100e-12,
            max_compressibility: 25000e-12,
            compressibility_scale: 1.5,
            compressibility_density_scale: -0.5,
        }
    }
}

impl MaterialParams {
    pub fn with_density(mut self, mean: f64, sigma: f64, min: f64, max: f64) -> Self {
        self.mean_density = mean;
        self.density_sigma = sigma;
        self.min_density = min;
        self.max_density = max;
        self
    }

    pub fn with_compressibility(mut self, min: f64, max: f64, scale: f64) -> Self {
        self.min_compressibility = min;
        self.max_compressibility = max;
        self.compressibility_scale = scale;
        self
    }

    /// Draws a material from the body's own stream.
    ///
    /// Density comes from a Gaussian truncated to `[min, max]` by redrawing;
    /// compressibility from `lerp(min, max, U^scale) · density^density_scale`.
    pub fn new_material(&self, stream: &mut SeedStream) -> Material {
        let mut density = self.truncated_density(stream);
        if !(self.min_density..=self.max_density).contains(&density) {
            density = density.clamp(self.min_density, self.max_density);
        }

        let shape = stream.next_f64().powf(self.compressibility_scale);
        let compressibility = lerp(self.min_compressibility, self.max_compressibility, shape)
            * density.powf(self.compressibility_density_scale);

        Material {
            uncompressed_density: density,
            compressibility,
        }
    }

    fn truncated_density(&self, stream: &mut SeedStream) -> f64 {
        let mut density = self.mean_density;
        for _ in 0..MAX_DENSITY_DRAWS {
            density = stream.next_gaussian() * self.density_sigma + self.mean_density;
            if (self.min_density..=self.max_density).contains(&density) {
                return density;
            }
        }
        log::debug!(
            "density draw around {} kg/m³ exhausted, clamping",
            self.mean_density
        );
        density
    }
}

/// What a body is made of: zero-pressure density (kg/m³) and
/// compressibility (1/Pa).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub uncompressed_density: f64,
    pub compressibility: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            uncompressed_density: 3000.0,
            compressibility: 0.0,
        }
    }
}

impl Material {
    /// `ρ₀ · exp(c P)`
    pub fn density_at_pressure(&self, pressure: f64) -> f64 {
        self.uncompressed_density * (self.compressibility * pressure).exp()
    }

    /// Mean density of a self-gravitating body of `mass` made of this
    /// material.
    ///
    /// Iterates density → diameter → mean pressure (a tenth of the uniform
    /// core pressure) → density.
    pub fn estimate_compressed_density(&self, mass: Mass) -> f64 {
        let ceiling = self.uncompressed_density * MAX_COMPRESSION;
        let mut density = self.uncompressed_density;
        for _ in 0..COMPRESSION_ROUNDS {
            let diameter = diameter_for_density(mass, density);
            let pressure = core_pressure(density, diameter) / 10.0;
            density = self.density_at_pressure(pressure).min(ceiling);
        }
        density
    }

    /// Diameter of a self-compressed body.
    pub fn compressed_diameter(&self, mass: Mass) -> Length {
        diameter_for_density(mass, self.estimate_compressed_density(mass))
    }

    /// Diameter ignoring compression, as used for gas giants.
    pub fn uncompressed_diameter(&self, mass: Mass) -> Length {
        diameter_for_density(mass, self.uncompressed_density)
    }
}
