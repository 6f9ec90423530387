//! Stellar classification, star tables and star construction.
//!
//! Also home to the seeded [`SeedStream`] every generated body owns.

pub mod error;
pub mod generation;
pub mod naming;
pub mod sampling;
pub mod seeds;
pub mod spectral;
pub mod spectral_table;
pub mod star;

#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod spectral_test;
#[cfg(test)]
mod star_test;

pub use error::StellarError;
pub use generation::{StellarSampler, sample_position};
pub use naming::NameTables;
pub use sampling::{SpectralDistribution, WeightedTable};
pub use seeds::SeedStream;
pub use spectral::{LuminosityClass, SpectralType, StarClass};
pub use spectral_table::{StarClassData, StarClassTable};
pub use star::Star;
