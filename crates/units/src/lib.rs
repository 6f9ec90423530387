//! SI quantity newtypes and the physical constants the generators share.

pub mod constants;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod constants_test;
#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod time_test;

pub use length::Length;
pub use mass::Mass;
pub use temperature::Temperature;
pub use time::Time;
pub use velocity::Velocity;
