mod tests {
    use approx::assert_relative_eq;

    use crate::constants::{EARTH_MASS_KG, SOLAR_MASS_KG};
    use crate::mass::Mass;

    #[test]
    fn test_mass_conversions() {
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

        let earth = Mass::from_kg(EARTH_MASS_KG);
        assert_relative_eq!(earth.to_earth_masses(), 1.0);

        let moon = Mass::from_yottagrams(73.42);
        assert_relative_eq!(moon.to_kg(), 7.342e22, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_earth_masses(2.0);
        let mass2 = Mass::from_earth_masses(1.5);

        assert_relative_eq!((mass1 + mass2).to_earth_masses(), 3.5);
        assert_relative_eq!((mass1 - mass2).to_earth_masses(), 0.5);
        assert_relative_eq!((mass1 * 3.0).to_earth_masses(), 6.0);
        assert_relative_eq!((mass1 / 4.0).to_earth_masses(), 0.5);
        assert_relative_eq!(mass1 / mass2, 2.0 / 1.5);
        assert_relative_eq!((2.5 * mass2).to_earth_masses(), 3.75);

        let mut budget = Mass::from_kg(10.0);
        budget -= Mass::from_kg(4.0);
        budget += Mass::from_kg(1.0);
        assert_relative_eq!(budget.to_kg(), 7.0);
    }

    #[test]
    fn test_mass_sum() {
        let total: Mass = [1.0, 2.0, 3.5]
            .iter()
            .map(|&m| Mass::from_earth_masses(m))
            .sum();
        assert_relative_eq!(total.to_earth_masses(), 6.5);
    }
}
