use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::seeds::SeedStream;
use crate::spectral::{SpectralType, StarClass};

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Minimum of two uniform draws, skewing toward zero.
pub fn min_of_two(stream: &mut SeedStream) -> f64 {
    let a = stream.next_f64();
    let b = stream.next_f64();
    a.min(b)
}

/// Cumulative weight table with integer weights.
///
/// A draw `d` in `[1, total]` selects the last entry whose cumulative start is
/// strictly below `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    entries: Vec<(u32, T)>,
    total: u32,
}

impl<T: Clone> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
        }
    }

    /// Appends an entry. Zero weights are ignored.
    pub fn add(&mut self, item: T, weight: u32) {
        if weight == 0 {
            return;
        }
        self.entries.push((self.total, item));
        self.total += weight;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for a draw in `[1, total]`.
    pub fn select(&self, draw: u32) -> Option<&T> {
        let index = self.entries.partition_point(|(start, _)| *start < draw);
        index.checked_sub(1).map(|i| &self.entries[i].1)
    }

    pub fn pick(&self, stream: &mut SeedStream) -> Option<T> {
        let draw = stream.next_below(self.total) + 1;
        self.select(draw).cloned()
    }
}

impl<T: Clone> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted distribution of main-sequence spectral classes, skewed toward
/// G, K and M dwarfs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDistribution {
    table: WeightedTable<StarClass>,
}

impl SpectralDistribution {
    /// The stock O0–L9 distribution.
    ///
    /// Subtype weights are interpolated linearly from subtype 0 to 9 and
    /// rounded.
    pub fn standard() -> Self {
        let mut distribution = Self {
            table: WeightedTable::new(),
        };
        distribution.add_type(SpectralType::O, 1.0, 12.0);
        distribution.add_type(SpectralType::B, 13.0, 20.0);
        distribution.add_type(SpectralType::A, 25.0, 40.0);
        distribution.add_type(SpectralType::F, 45.0, 80.0);
        distribution.add_type(SpectralType::G, 100.0, 150.0);
        distribution.add_type(SpectralType::K, 160.0, 250.0);
        distribution.add_type(SpectralType::M, 260.0, 400.0);
        distribution.add_type(SpectralType::L, 200.0, 20.0);
        distribution
    }

    fn add_type(&mut self, spectral_type: SpectralType, first: f64, last: f64) {
        for subtype in 0..10u8 {
            let weight = lerp(first, last, f64::from(subtype) / 9.0).round() as u32;
            self.table
                .add(StarClass::main_sequence(spectral_type, subtype), weight);
        }
    }

    pub fn total_weight(&self) -> u32 {
        self.table.total()
    }

    /// Draws a class from the universe stream.
    pub fn sample(&self, stream: &mut SeedStream) -> StarClass {
        self.table
            .pick(stream)
            .unwrap_or_else(|| StarClass::main_sequence(SpectralType::G, 2))
    }
}

impl Default for SpectralDistribution {
    fn default() -> Self {
        Self::standard()
    }
}
