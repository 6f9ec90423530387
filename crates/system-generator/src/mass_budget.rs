//! Splitting a star's dust budget into planet masses.

use planetary_generator::sampling::planet_mass;
use stellar::SeedStream;
use units::Mass;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_TERRESTRIAL_MASS_KG};

/// Dust scale: `2.4e17 · M^(1/3)` kg for a star of `M` kg.
const DUST_SCALE: f64 = 2.4e17;

/// Upper bound on any single planet, before the star-mass cap.
const PLANET_MASS_CEILING_KG: f64 = 25e28;

/// Allocation stops once less than this much dust (1000 Yg) is left.
const DUST_FLOOR_KG: f64 = 1e24;

/// Gas giants are drawn while more than this share of the budget is left.
const GAS_GIANT_DUST_SHARE: f64 = 0.01;

/// Draws per requested planet before allocation gives up.
const DRAWS_PER_PLANET: usize = 100;

/// Planet masses carved out of a dust budget.
#[derive(Debug, Clone, PartialEq)]
pub struct MassBudget {
    pub budget: Mass,
    /// In allocation order: gas giants first while dust is plentiful.
    pub masses: Vec<Mass>,
    pub remaining: Mass,
}

impl MassBudget {
    pub fn allocated(&self) -> Mass {
        self.masses.iter().copied().sum()
    }
}

/// Heaviest planet a star of `star_mass` can carry.
pub fn max_planet_mass(star_mass: Mass) -> Mass {
    Mass::from_kg(PLANET_MASS_CEILING_KG).min(star_mass / 25.0)
}

/// Dust available for planet formation, with a 10% Gaussian jitter.
///
/// Draws one Gaussian from `stream`.
pub fn dust_budget(stream: &mut SeedStream, star_mass: Mass, gas_giant_modifier: f64) -> Mass {
    let jitter = 1.0 + 0.1 * stream.next_gaussian();
    let kg = DUST_SCALE * star_mass.to_kg().cbrt() * gas_giant_modifier * jitter;
    Mass::from_kg(kg.max(0.0))
}

/// Splits `budget` into at most `count` planets plus one remainder planet.
///
/// While more than 1% of the budget is left and the dust exceeds the
/// terrestrial maximum, each draw is a gas giant of at least half the
/// remaining dust. After that, terrestrial masses are drawn with an upper
/// bound that shrinks as slots fill up. Leftover dust above 1.1 minimum
/// terrestrial masses becomes one last planet, unless `max_planets` slots
/// are already taken. A `count` of zero leaves the whole budget as dust.
pub fn allocate(
    stream: &mut SeedStream,
    star_mass: Mass,
    budget: Mass,
    count: u32,
    max_planets: u32,
) -> MassBudget {
    let count = count.min(max_planets) as usize;
    let mut allocation = MassBudget {
        budget,
        masses: Vec::with_capacity(count + 1),
        remaining: budget,
    };
    if count == 0 {
        return allocation;
    }

    let max_mass = max_planet_mass(star_mass);
    let max_terrestrial = Mass::from_kg(MAX_TERRESTRIAL_MASS_KG);
    let min_terrestrial = Mass::from_kg(MIN_TERRESTRIAL_MASS_KG);
    let floor = Mass::from_kg(DUST_FLOOR_KG);

    let mut draws = 0;
    while allocation.remaining > floor
        && allocation.masses.len() < count
        && draws < count * DRAWS_PER_PLANET
    {
        draws += 1;
        let dust = allocation.remaining;
        let mass = if dust > budget * GAS_GIANT_DUST_SHARE && dust > max_terrestrial {
            planet_mass(stream, max_terrestrial.max(dust / 2.0), max_mass.min(dust))
        } else {
            let open = (count - allocation.masses.len()) as f64;
            let share = 0.5 + open / (2.0 * count as f64);
            planet_mass(stream, min_terrestrial, max_mass.min(dust * share))
        };
        if mass <= dust {
            allocation.masses.push(mass);
            allocation.remaining = dust - mass;
        }
    }

    let base = allocation.remaining.min(max_mass);
    if base > min_terrestrial * 1.1 && allocation.masses.len() < max_planets as usize {
        let mut last = base * (1.0 - stream.next_gaussian().abs() * 0.001);
        while last < min_terrestrial {
            last = base * (1.0 - stream.next_gaussian().abs() * 0.001);
        }
        if last <= allocation.remaining {
            allocation.remaining = allocation.remaining - last;
            allocation.masses.push(last);
        }
    }

    log::debug!(
        "allocated {} planets from {:.3e} kg of dust, {:.3e} kg left",
        allocation.masses.len(),
        budget.to_kg(),
        allocation.remaining.to_kg()
    );
    allocation
}
