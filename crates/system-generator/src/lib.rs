//! Whole-system generation: a star, its planets with their moons, and a
//! planetoid belt, all reproducible from one seed.

pub mod generation;
pub mod mass_budget;

pub use generation::SystemGenerator;
pub use mass_budget::MassBudget;
pub use planetary_generator::{GenerationError, GeneratorConfig};
pub use star_system::StarSystem;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod mass_budget_test;
