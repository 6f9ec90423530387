//! Generator tuning knobs.

use serde::{Deserialize, Serialize};
use units::constants::ROCHE_LIMIT_RIGID;

use crate::error::{GenerationError, Result};

/// Retry budgets and thresholds for one generator instance.
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides:
///
/// ```
/// use planetary_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{ "maxPlanets": 8 }"#).unwrap();
/// assert_eq!(config.max_planets, 8);
/// assert_eq!(config.terrestrial_retries, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Placement attempts for one terrestrial planet, each with a fresh seed.
    pub terrestrial_retries: u32,
    pub gas_giant_retries: u32,
    pub planetoid_retries: u32,
    /// Radius draws per placement attempt.
    pub orbit_attempts: u32,
    /// Reseeds allowed while a moon's class does not fit its planet's orbit.
    pub moon_retries: u32,
    pub max_planets: u32,
    /// Edge length of the cube star positions are drawn from.
    pub universe_extent: f64,
    /// Coefficient of the rigid-body Roche limit.
    pub roche_rigid: f64,
    /// Minimum Stern–Levison Λ for a planet.
    pub planet_stern_levison: f64,
    /// Maximum Stern–Levison Λ for a planetoid.
    pub planetoid_stern_levison: f64,
    /// Padding applied to planets' exclusion zones when placing planetoids.
    pub planetoid_exclusion_multiplier: f64,
    pub planetoid_inclination_multiplier: f64,
    /// Candidates tried per terrestrial slot while no planet is habitable;
    /// zero places every terrestrial planet on the first success.
    pub habitable_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            terrestrial_retries: 1000,
            gas_giant_retries: 100,
            planetoid_retries: 100,
            orbit_attempts: 20,
            moon_retries: 20,
            max_planets: 26,
            universe_extent: 256_000.0,
            roche_rigid: ROCHE_LIMIT_RIGID,
            planet_stern_levison: 100.0,
            planetoid_stern_levison: 0.01,
            planetoid_exclusion_multiplier: 2.0,
            planetoid_inclination_multiplier: 5.0,
            habitable_attempts: 5,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.orbit_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "orbitAttempts must be at least 1".to_string(),
            ));
        }
        if !self.universe_extent.is_finite() || self.universe_extent <= 0.0 {
            return Err(GenerationError::InvalidConfig(format!(
                "universeExtent must be positive, got {}",
                self.universe_extent
            )));
        }
        if self.roche_rigid.is_nan() || self.roche_rigid <= 0.0 {
            return Err(GenerationError::InvalidConfig(format!(
                "rocheRigid must be positive, got {}",
                self.roche_rigid
            )));
        }
        if self.planetoid_stern_levison >= self.planet_stern_levison {
            return Err(GenerationError::InvalidConfig(format!(
                "planetoidSternLevison ({}) must be below planetSternLevison ({})",
                self.planetoid_stern_levison, self.planet_stern_levison
            )));
        }
        if self.planetoid_exclusion_multiplier < 0.0 {
            return Err(GenerationError::InvalidConfig(format!(
                "planetoidExclusionMultiplier must not be negative, got {}",
                self.planetoid_exclusion_multiplier
            )));
        }
        Ok(())
    }
}
