use approx::assert_relative_eq;
use stellar::SeedStream;
use units::Mass;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_TERRESTRIAL_MASS_KG, SOLAR_MASS_KG};

use crate::mass_budget::{allocate, dust_budget, max_planet_mass};

fn sun_mass() -> Mass {
    Mass::from_kg(SOLAR_MASS_KG)
}

#[test]
fn planet_mass_cap() {
    assert_relative_eq!(max_planet_mass(sun_mass()).to_kg(), SOLAR_MASS_KG / 25.0);
    assert_relative_eq!(
        max_planet_mass(Mass::from_solar_masses(10.0)).to_kg(),
        25e28
    );
}

#[test]
fn dust_scales_with_cube_root_of_star_mass() {
    let mut stream = SeedStream::new(7);
    let gauss = stream.clone().next_gaussian();
    let dust = dust_budget(&mut stream, sun_mass(), 1.5);

    let expected = 2.4e17 * SOLAR_MASS_KG.cbrt() * 1.5 * (1.0 + 0.1 * gauss);
    assert_relative_eq!(dust.to_kg(), expected, max_relative = 1e-12);
    // Roughly 750 Earth masses for a sun-like star
    assert!(dust.to_earth_masses() > 400.0 && dust.to_earth_masses() < 1100.0);
}

#[test]
fn no_planets_keeps_all_dust() {
    let mut stream = SeedStream::new(1);
    let budget = Mass::from_kg(3e27);
    let allocation = allocate(&mut stream, sun_mass(), budget, 0, 26);
    assert!(allocation.masses.is_empty());
    assert_eq!(allocation.remaining, budget);
    assert_eq!(stream, SeedStream::new(1));
}

#[test]
fn allocation_conserves_mass() {
    for seed in 0..20 {
        let mut stream = SeedStream::new(seed);
        let budget = dust_budget(&mut stream, sun_mass(), 1.0);
        let allocation = allocate(&mut stream, sun_mass(), budget, 8, 26);

        assert!(allocation.masses.len() <= 9, "seed {}: {} planets", seed, allocation.masses.len());
        assert!(allocation.remaining >= Mass::zero());
        assert_relative_eq!(
            (allocation.allocated() + allocation.remaining).to_kg(),
            budget.to_kg(),
            max_relative = 1e-9
        );
        for mass in &allocation.masses {
            assert!(mass.to_kg() >= MIN_TERRESTRIAL_MASS_KG, "seed {}: {:?}", seed, mass);
            assert!(*mass <= max_planet_mass(sun_mass()));
        }
    }
}

#[test]
fn gas_giants_come_first() {
    let mut stream = SeedStream::new(3);
    let budget = Mass::from_kg(3e27);
    let allocation = allocate(&mut stream, sun_mass(), budget, 6, 26);

    assert!(!allocation.masses.is_empty());
    assert!(allocation.masses[0] >= budget / 2.0);
    assert!(allocation.masses[0].to_kg() >= MAX_TERRESTRIAL_MASS_KG);
}

#[test]
fn small_budgets_make_terrestrial_planets() {
    for seed in 0..10 {
        let mut stream = SeedStream::new(seed);
        let budget = Mass::from_kg(2e25);
        let allocation = allocate(&mut stream, sun_mass(), budget, 3, 26);
        for mass in &allocation.masses {
            assert!(mass.to_kg() < MAX_TERRESTRIAL_MASS_KG);
        }
        assert!(allocation.allocated() <= budget);
    }
}

#[test]
fn planet_count_is_capped() {
    for seed in 0..10 {
        let mut stream = SeedStream::new(seed);
        let budget = Mass::from_kg(3e27);
        let allocation = allocate(&mut stream, sun_mass(), budget, 40, 26);
        assert!(allocation.masses.len() <= 26);

        let mut stream = SeedStream::new(seed);
        let allocation = allocate(&mut stream, sun_mass(), budget, 4, 4);
        assert!(allocation.masses.len() <= 4);
    }
}

#[test]
fn allocation_replays() {
    let budget = Mass::from_kg(3e27);
    let first = allocate(&mut SeedStream::new(11), sun_mass(), budget, 8, 26);
    let second = allocate(&mut SeedStream::new(11), sun_mass(), budget, 8, 26);
    assert_eq!(first, second);
}
