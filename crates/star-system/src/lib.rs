//! Output graph of the generator.
//!
//! A [`StarSystem`] owns its star, planets (each owning its moons) and
//! planetoids, and answers the orbit-placement questions generators ask
//! while filling it.

pub mod metadata;
pub mod system;

pub use system::{StarSystem, in_resonance_gap};

// Re-export the body types systems are built from
pub use planetary::{Moon, Planet, Satellite};
pub use stellar::Star;
