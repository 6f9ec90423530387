//! The class registry and the weighted tables body generators draw from.

use stellar::{SeedStream, WeightedTable};

use crate::catalog::standard_classes;
use crate::physical::PhysicalProperties;
use crate::planet_class::{ClassFamily, PlanetaryClass, PlanetaryClassId as Id};

/// Immutable, ordered set of planetary classes.
///
/// Built once and shared by every generator; scan order is the order classes
/// were registered in.
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    classes: Vec<PlanetaryClass>,
    unknown: PlanetaryClass,
    gas_giants: WeightedTable<Id>,
    terrestrials: WeightedTable<Id>,
    planetoids: WeightedTable<Id>,
}

impl ClassRegistry {
    pub fn new(
        classes: Vec<PlanetaryClass>,
        gas_giants: WeightedTable<Id>,
        terrestrials: WeightedTable<Id>,
        planetoids: WeightedTable<Id>,
    ) -> Self {
        Self {
            classes,
            unknown: PlanetaryClass::unknown(),
            gas_giants,
            terrestrials,
            planetoids,
        }
    }

    /// All 41 stock classes with the stock pick weights.
    pub fn standard() -> Self {
        Self::new(
            standard_classes(),
            gas_giant_table(),
            terrestrial_table(),
            planetoid_table(),
        )
    }

    /// Looks up a class, falling back to `Unknown`.
    pub fn get(&self, id: Id) -> &PlanetaryClass {
        self.classes
            .iter()
            .find(|class| class.id == id)
            .unwrap_or(&self.unknown)
    }

    pub fn classes(&self) -> &[PlanetaryClass] {
        &self.classes
    }

    pub fn family(&self, family: ClassFamily) -> impl Iterator<Item = &PlanetaryClass> {
        self.classes.iter().filter(move |class| class.family == family)
    }

    /// Every class the body may carry, in registry order.
    pub fn possible_classes(&self, properties: &PhysicalProperties) -> Vec<&PlanetaryClass> {
        self.classes
            .iter()
            .filter(|class| class.is_possible(properties))
            .collect()
    }

    /// Picks one of the possible classes uniformly with the body's stream.
    ///
    /// Returns `Unknown` when nothing matches; the stream is untouched then.
    pub fn classify(&self, properties: &PhysicalProperties, stream: &mut SeedStream) -> Id {
        let possible = self.possible_classes(properties);
        match possible.len() {
            0 => Id::Unknown,
            1 => possible[0].id,
            n => {
                log::trace!(
                    "{} classes possible ({}), picking one",
                    n,
                    possible
                        .iter()
                        .map(|class| class.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                possible[stream.next_below(n as u32) as usize].id
            }
        }
    }

    /// Keeps `current` while it is still possible, otherwise reclassifies.
    pub fn revalidate(
        &self,
        current: Id,
        properties: &PhysicalProperties,
        stream: &mut SeedStream,
    ) -> Id {
        if current != Id::Unknown && self.get(current).is_possible(properties) {
            current
        } else {
            self.classify(properties, stream)
        }
    }

    pub fn pick_gas_giant(&self, stream: &mut SeedStream) -> &PlanetaryClass {
        self.pick(&self.gas_giants, stream)
    }

    pub fn pick_terrestrial(&self, stream: &mut SeedStream) -> &PlanetaryClass {
        self.pick(&self.terrestrials, stream)
    }

    pub fn pick_planetoid(&self, stream: &mut SeedStream) -> &PlanetaryClass {
        self.pick(&self.planetoids, stream)
    }

    fn pick(&self, table: &WeightedTable<Id>, stream: &mut SeedStream) -> &PlanetaryClass {
        match table.pick(stream) {
            Some(id) => self.get(id),
            None => &self.unknown,
        }
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn table(entries: &[(Id, u32)]) -> WeightedTable<Id> {
    let mut table = WeightedTable::new();
    for &(id, weight) in entries {
        table.add(id, weight);
    }
    table
}

pub fn gas_giant_table() -> WeightedTable<Id> {
    table(&[
        (Id::AmmoniaGiant, 30),
        (Id::WaterCloudGiant, 20),
        (Id::CloudlessGiant, 10),
        (Id::AlkaliGiant, 5),
        (Id::SilicateCloudGiant, 2),
        (Id::HeliumAmmoniaGiant, 20),
        (Id::HeliumWaterCloudGiant, 10),
        (Id::HeliumCloudlessGiant, 5),
        (Id::HeliumAlkaliGiant, 2),
        (Id::HeliumSilicateCloudGiant, 1),
        (Id::IceGiant, 40),
        (Id::HeliumIceGiant, 20),
        (Id::HotPuffyGiant, 7),
        (Id::ColdPuffyGiant, 4),
        (Id::HeliumColdPuffyGiant, 2),
        (Id::GasDwarf, 50),
        (Id::HeliumGasDwarf, 20),
        (Id::FrozenGasDwarf, 15),
        (Id::BoilingGiant, 1),
    ])
}

pub fn terrestrial_table() -> WeightedTable<Id> {
    table(&[
        (Id::Desert, 10),
        (Id::EarthLike, 10),
        (Id::Greenhouse, 10),
        (Id::Hell, 5),
        (Id::Airless, 25),
        (Id::DryRock, 20),
        (Id::Rocky, 10),
        (Id::HighPressure, 5),
        (Id::ExtremeGreenhouse, 2),
        (Id::WaterIce, 10),
        (Id::AmmoniaIce, 20),
        (Id::MethaneIce, 25),
        (Id::Iron, 5),
        (Id::Lava, 2),
        (Id::Ocean, 5),
    ])
}

pub fn planetoid_table() -> WeightedTable<Id> {
    table(&[
        (Id::Silicate, 200),
        (Id::Metallic, 10),
        (Id::IcePlanetoid, 50),
        (Id::Gravel, 5),
        (Id::Carbonaceous, 2),
    ])
}
