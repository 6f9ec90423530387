use thiserror::Error;

/// Orbital elements that cannot describe a bound orbit.
///
/// Reaching one of these from the generators is a logic error upstream, not
/// a sampling failure.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OrbitError {
    #[error("orbit radius {0} m is negative")]
    NegativeRadius(f64),

    #[error("eccentricity {0} is negative")]
    NegativeEccentricity(f64),

    #[error("eccentricity {0} does not describe a bound orbit")]
    Unbound(f64),

    #[error("orbital element is not finite")]
    NotFinite,
}
