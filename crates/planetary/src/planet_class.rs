//! Planetary classes as predicate-carrying values.
//!
//! A class is a rule over [`PhysicalProperties`] plus the recipe for the
//! material of bodies that carry it. Families (gas giant, terrestrial,
//! planetoid) only differ in the base predicate their constructors wrap
//! around the class-specific one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use units::Temperature;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_TERRESTRIAL_MASS_KG};

use crate::material::MaterialParams;
use crate::orbit::OrbitalZone;
use crate::physical::PhysicalProperties;

/// Stable identifier stored on bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetaryClassId {
    // Gas giants
    AmmoniaGiant,
    WaterCloudGiant,
    CloudlessGiant,
    AlkaliGiant,
    SilicateCloudGiant,
    HeliumAmmoniaGiant,
    HeliumWaterCloudGiant,
    HeliumCloudlessGiant,
    HeliumAlkaliGiant,
    HeliumSilicateCloudGiant,
    IceGiant,
    HeliumIceGiant,
    Cthonian,
    HotPuffyGiant,
    ColdPuffyGiant,
    HeliumColdPuffyGiant,
    GasDwarf,
    HeliumGasDwarf,
    FrozenGasDwarf,
    BoilingGiant,
    // Terrestrial
    Desert,
    EarthLike,
    Greenhouse,
    Hell,
    FrozenRock,
    Airless,
    DryRock,
    Rocky,
    HighPressure,
    ExtremeGreenhouse,
    WaterIce,
    AmmoniaIce,
    MethaneIce,
    Iron,
    Lava,
    Ocean,
    // Planetoids
    Carbonaceous,
    IcePlanetoid,
    Silicate,
    Metallic,
    Gravel,

    Unknown,
}

impl PlanetaryClassId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AmmoniaGiant => "Ammonia-clouded gas giant",
            Self::WaterCloudGiant => "Water-clouded gas giant",
            Self::CloudlessGiant => "Cloudless gas giant",
            Self::AlkaliGiant => "Alkali gas giant",
            Self::SilicateCloudGiant => "Silicate-clouded gas giant",
            Self::HeliumAmmoniaGiant => "Ammonia-clouded gas giant (hydrogen-poor)",
            Self::HeliumWaterCloudGiant => "Water-clouded gas giant (hydrogen-poor)",
            Self::HeliumCloudlessGiant => "Cloudless gas giant (hydrogen-poor)",
            Self::HeliumAlkaliGiant => "Alkali gas giant (hydrogen-poor)",
            Self::HeliumSilicateCloudGiant => "Silicate-clouded gas giant (hydrogen-poor)",
            Self::IceGiant => "Ice giant",
            Self::HeliumIceGiant => "Ice giant (hydrogen-poor)",
            Self::Cthonian => "Cthonian planet",
            Self::HotPuffyGiant => "Hot puffy gas giant",
            Self::ColdPuffyGiant => "Cold puffy gas giant",
            Self::HeliumColdPuffyGiant => "Cold puffy gas giant (hydrogen-poor)",
            Self::GasDwarf => "Gas dwarf",
            Self::HeliumGasDwarf => "Gas dwarf (hydrogen-poor)",
            Self::FrozenGasDwarf => "Frozen gas dwarf",
            Self::BoilingGiant => "Boiling gas giant",
            Self::Desert => "Desert planet",
            Self::EarthLike => "Earth-like planet",
            Self::Greenhouse => "Greenhouse planet",
            Self::Hell => "Hell planet",
            Self::FrozenRock => "Frozen rock planet",
            Self::Airless => "Airless planet",
            Self::DryRock => "Dry rock planet",
            Self::Rocky => "Rocky planet",
            Self::HighPressure => "High-pressure planet",
            Self::ExtremeGreenhouse => "Extreme greenhouse planet",
            Self::WaterIce => "Water ice planet",
            Self::AmmoniaIce => "Ammonia ice planet",
            Self::MethaneIce => "Methane ice planet",
            Self::Iron => "Iron planet",
            Self::Lava => "Lava planet",
            Self::Ocean => "Ocean planet",
            Self::Carbonaceous => "Carbonaceous planetoid",
            Self::IcePlanetoid => "Ice planetoid",
            Self::Silicate => "Silicate planetoid",
            Self::Metallic => "Metallic planetoid",
            Self::Gravel => "Gravel planetoid",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlanetaryClassId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassFamily {
    GasGiant,
    Terrestrial,
    Planetoid,
    Unknown,
}

pub type ClassPredicate = Arc<dyn Fn(&PhysicalProperties) -> bool + Send + Sync>;

/// A named classification rule.
#[derive(Clone)]
pub struct PlanetaryClass {
    pub id: PlanetaryClassId,
    pub family: ClassFamily,
    pub albedo: f64,
    pub zones: Vec<OrbitalZone>,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub material: MaterialParams,
    predicate: ClassPredicate,
}

impl PlanetaryClass {
    /// A class with no family base predicate, valid in every zone and at any
    /// temperature.
    pub fn new(
        id: PlanetaryClassId,
        family: ClassFamily,
        albedo: f64,
        predicate: impl Fn(&PhysicalProperties) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            family,
            albedo,
            zones: OrbitalZone::ALL.to_vec(),
            min_temperature: 0.0,
            max_temperature: f64::MAX,
            material: MaterialParams::default(),
            predicate: Arc::new(predicate),
        }
    }

    /// Gas giant: molecular limit at most `molecular_limit`, density in
    /// `(min_density, max_density]`, at least the terrestrial mass ceiling,
    /// blackbody temperature in `[min_temperature, max_temperature]`.
    ///
    /// Material density is drawn across the same density band.
    #[allow(clippy::too_many_arguments)]
    pub fn gas_giant(
        id: PlanetaryClassId,
        albedo: f64,
        molecular_limit: f64,
        min_temperature: f64,
        max_temperature: f64,
        min_density: f64,
        max_density: f64,
        extra: impl Fn(&PhysicalProperties) -> bool + Send + Sync + 'static,
    ) -> Self {
        let base = move |p: &PhysicalProperties| {
            p.molecular_limit <= molecular_limit
                && p.density > min_density
                && p.density <= max_density
                && p.mass.to_kg() >= MAX_TERRESTRIAL_MASS_KG
        };
        Self::new(id, ClassFamily::GasGiant, albedo, move |p| base(p) && extra(p))
            .with_temperature(min_temperature, max_temperature)
            .with_material(MaterialParams::default().with_density(
                0.5 * (min_density + max_density),
                0.25 * (max_density - min_density),
                min_density,
                max_density,
            ))
    }

    /// Terrestrial: between the terrestrial mass bounds and denser than water.
    pub fn terrestrial(
        id: PlanetaryClassId,
        albedo: f64,
        extra: impl Fn(&PhysicalProperties) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, ClassFamily::Terrestrial, albedo, move |p| {
            let m = p.mass.to_kg();
            (MIN_TERRESTRIAL_MASS_KG..=MAX_TERRESTRIAL_MASS_KG).contains(&m)
                && p.density > 1000.0
                && extra(p)
        })
    }

    /// Planetoid: no heavier than the terrestrial floor.
    pub fn planetoid(
        id: PlanetaryClassId,
        albedo: f64,
        extra: impl Fn(&PhysicalProperties) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, ClassFamily::Planetoid, albedo, move |p| {
            p.mass.to_kg() <= MIN_TERRESTRIAL_MASS_KG && extra(p)
        })
        .with_material(
            MaterialParams::default().with_compressibility(100e-12, 25000e-12, 1.0),
        )
    }

    /// The fallback class for bodies no rule accepts.
    pub fn unknown() -> Self {
        Self::new(PlanetaryClassId::Unknown, ClassFamily::Unknown, 0.0, |_| false)
    }

    pub fn with_zones(mut self, zones: &[OrbitalZone]) -> Self {
        self.zones = zones.to_vec();
        self
    }

    pub fn with_temperature(mut self, min: f64, max: f64) -> Self {
        self.min_temperature = min;
        self.max_temperature = max;
        self
    }

    pub fn with_material(mut self, material: MaterialParams) -> Self {
        self.material = material;
        self
    }

    pub fn with_density(mut self, mean: f64, sigma: f64, min: f64, max: f64) -> Self {
        self.material = self.material.with_density(mean, sigma, min, max);
        self
    }

    pub fn with_compressibility(mut self, min: f64, max: f64, scale: f64) -> Self {
        self.material = self.material.with_compressibility(min, max, scale);
        self
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Family base predicate and class predicate.
    pub fn matches(&self, properties: &PhysicalProperties) -> bool {
        (self.predicate)(properties)
    }

    pub fn valid_temperature(&self, temperature: Temperature) -> bool {
        let t = temperature.to_kelvin();
        t >= self.min_temperature && t <= self.max_temperature
    }

    pub fn valid_zone(&self, zone: OrbitalZone) -> bool {
        self.zones.contains(&zone)
    }

    /// Whether a body with these properties may carry this class.
    pub fn is_possible(&self, properties: &PhysicalProperties) -> bool {
        self.matches(properties)
            && self.valid_temperature(properties.blackbody_temperature)
            && self.valid_zone(properties.zone)
    }
}

impl fmt::Debug for PlanetaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanetaryClass")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("albedo", &self.albedo)
            .field("zones", &self.zones)
            .field("min_temperature", &self.min_temperature)
            .field("max_temperature", &self.max_temperature)
            .field("material", &self.material)
            .finish_non_exhaustive()
    }
}
