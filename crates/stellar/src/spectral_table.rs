//! Per-class stellar parameters keyed by class string (`"G2"`, `"D5"`).
//!
//! The default table is derived from the effective-temperature sequence of
//! main-sequence dwarfs, per-type mass anchors, and the white-dwarf
//! temperature index (T = 50 400 K / n).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use units::constants::SOLAR_TEMPERATURE_K;
use units::{Mass, Temperature};

use crate::error::{Result, StellarError};
use crate::sampling::lerp;
use crate::seeds::SeedStream;
use crate::spectral::{SpectralType, StarClass};

// ============================================================================
// Source data
// ============================================================================

/// Effective temperature (K) of subtypes 0–9 for O through T dwarfs.
const EFFECTIVE_TEMPERATURES: [[f64; 10]; 9] = [
    [60000.0, 55000.0, 52000.0, 48000.0, 45000.0, 42000.0, 39000.0, 36000.0, 33000.0, 30000.0],
    [27000.0, 24000.0, 20000.0, 17000.0, 14500.0, 12500.0, 11700.0, 11100.0, 10600.0, 10200.0],
    [9800.0, 9500.0, 9200.0, 8900.0, 8700.0, 8500.0, 8300.0, 8100.0, 7900.0, 7700.0],
    [7500.0, 7300.0, 7100.0, 6900.0, 6700.0, 6500.0, 6400.0, 6300.0, 6200.0, 6100.0],
    [6000.0, 5900.0, 5800.0, 5700.0, 5600.0, 5500.0, 5400.0, 5350.0, 5300.0, 5250.0],
    [5200.0, 5100.0, 5000.0, 4900.0, 4800.0, 4650.0, 4500.0, 4300.0, 4100.0, 3900.0],
    [3700.0, 3550.0, 3400.0, 3250.0, 3100.0, 2950.0, 2800.0, 2650.0, 2500.0, 2400.0],
    [2300.0, 2200.0, 2100.0, 2000.0, 1900.0, 1800.0, 1700.0, 1600.0, 1500.0, 1400.0],
    [1300.0, 1200.0, 1100.0, 1000.0, 900.0, 800.0, 700.0, 650.0, 600.0, 550.0],
];

/// Per-type parameters: mass at subtype 0 and 9 (M☉), gas-giant modifier,
/// planet-count mean and σ.
struct TypeProfile {
    spectral_type: SpectralType,
    mass_first: f64,
    mass_last: f64,
    gas_giant_modifier: f64,
    planet_count_mean: f64,
    planet_count_sigma: f64,
}

const MAIN_SEQUENCE_PROFILES: [TypeProfile; 8] = [
    TypeProfile { spectral_type: SpectralType::O, mass_first: 90.0, mass_last: 18.0, gas_giant_modifier: 0.2, planet_count_mean: 2.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::B, mass_first: 17.5, mass_last: 2.9, gas_giant_modifier: 0.5, planet_count_mean: 3.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::A, mass_first: 2.8, mass_last: 1.65, gas_giant_modifier: 0.9, planet_count_mean: 4.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::F, mass_first: 1.6, mass_last: 1.08, gas_giant_modifier: 1.1, planet_count_mean: 6.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::G, mass_first: 1.06, mass_last: 0.82, gas_giant_modifier: 1.0, planet_count_mean: 7.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::K, mass_first: 0.80, mass_last: 0.52, gas_giant_modifier: 0.8, planet_count_mean: 6.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::M, mass_first: 0.50, mass_last: 0.08, gas_giant_modifier: 0.5, planet_count_mean: 5.0, planet_count_sigma: 3.0 },
    TypeProfile { spectral_type: SpectralType::L, mass_first: 0.079, mass_last: 0.06, gas_giant_modifier: 0.2, planet_count_mean: 2.0, planet_count_sigma: 2.0 },
];

/// White-dwarf temperature index numerator (K).
const WHITE_DWARF_INDEX: f64 = 50_400.0;
const WHITE_DWARF_RADIUS: f64 = 0.012;

/// Mass spread around a subtype's mean mass.
const MASS_SPREAD: f64 = 0.05;

// ============================================================================
// Table
// ============================================================================

/// Tabulated bounds for one spectral class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarClassData {
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub min_mass: Mass,
    pub max_mass: Mass,
    /// Mean radius in solar radii.
    pub radius: f64,
    pub gas_giant_modifier: f64,
    pub planet_count_mean: f64,
    pub planet_count_sigma: f64,
}

impl StarClassData {
    /// Luminosity in solar units of a star with the mean radius and the
    /// mid-range temperature.
    pub fn average_luminosity(&self) -> f64 {
        let temperature = 0.5 * (self.min_temperature.to_kelvin() + self.max_temperature.to_kelvin());
        stefan_boltzmann_luminosity(self.radius, temperature)
    }

    /// Draws a planet count from the class distribution. Negative draws mean
    /// no planets.
    pub fn planet_count(&self, stream: &mut SeedStream) -> u32 {
        let count = (stream.next_gaussian() * self.planet_count_sigma + self.planet_count_mean).round();
        count.max(0.0) as u32
    }
}

/// Luminosity in solar units from a radius in solar radii and a temperature.
pub fn stefan_boltzmann_luminosity(radius: f64, temperature_k: f64) -> f64 {
    radius * radius * (temperature_k / SOLAR_TEMPERATURE_K).powi(4)
}

/// Main-sequence radius (R☉) for a mass in solar masses.
pub fn main_sequence_radius(mass: f64) -> f64 {
    if mass < 1.0 {
        mass.powf(0.8)
    } else {
        mass.powf(0.57)
    }
}

/// Immutable lookup of class parameters by key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarClassTable {
    rows: BTreeMap<String, StarClassData>,
}

impl StarClassTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// O0–L9 dwarfs and D0–D9 white dwarfs.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        let sequence: Vec<f64> = EFFECTIVE_TEMPERATURES.iter().flatten().copied().collect();

        for (type_index, profile) in MAIN_SEQUENCE_PROFILES.iter().enumerate() {
            for subtype in 0..10usize {
                let index = type_index * 10 + subtype;
                let temperature = sequence[index];
                let hotter = if index == 0 {
                    temperature + (temperature - sequence[1]) / 2.0
                } else {
                    (sequence[index - 1] + temperature) / 2.0
                };
                let cooler = (temperature + sequence[index + 1]) / 2.0;

                let t = subtype as f64 / 9.0;
                let mass = profile.mass_first * (profile.mass_last / profile.mass_first).powf(t);

                table.insert(
                    StarClass::main_sequence(profile.spectral_type, subtype as u8).key(),
                    StarClassData {
                        min_temperature: Temperature::from_kelvin(cooler),
                        max_temperature: Temperature::from_kelvin(hotter),
                        min_mass: Mass::from_solar_masses(mass * (1.0 - MASS_SPREAD)),
                        max_mass: Mass::from_solar_masses(mass * (1.0 + MASS_SPREAD)),
                        radius: main_sequence_radius(mass),
                        gas_giant_modifier: profile.gas_giant_modifier,
                        planet_count_mean: profile.planet_count_mean,
                        planet_count_sigma: profile.planet_count_sigma,
                    },
                );
            }
        }

        for subtype in 0..10u8 {
            let n = f64::from(subtype);
            let hottest = if subtype == 0 {
                2.0 * WHITE_DWARF_INDEX
            } else {
                WHITE_DWARF_INDEX / n
            };
            let mass = lerp(0.75, 0.55, n / 9.0);
            table.insert(
                StarClass::white_dwarf("", subtype).key(),
                StarClassData {
                    min_temperature: Temperature::from_kelvin(WHITE_DWARF_INDEX / (n + 1.0)),
                    max_temperature: Temperature::from_kelvin(hottest),
                    min_mass: Mass::from_solar_masses(mass * 0.9),
                    max_mass: Mass::from_solar_masses(mass * 1.1),
                    radius: WHITE_DWARF_RADIUS,
                    gas_giant_modifier: 0.1,
                    planet_count_mean: 1.0,
                    planet_count_sigma: 2.0,
                },
            );
        }

        table
    }

    pub fn insert(&mut self, key: impl Into<String>, data: StarClassData) {
        self.rows.insert(key.into(), data);
    }

    pub fn get(&self, key: &str) -> Option<&StarClassData> {
        self.rows.get(key)
    }

    /// Looks up the row for a parsed class.
    pub fn lookup(&self, class: &StarClass) -> Result<&StarClassData> {
        let key = class.key();
        self.rows
            .get(&key)
            .ok_or(StellarError::UnknownClass(key))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
