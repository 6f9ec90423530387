mod tests {
    use approx::assert_relative_eq;

    use crate::constants::*;

    #[test]
    fn test_kepler_prefactor_matches_gravitational_constant() {
        let expected = 2.0 * std::f64::consts::PI * (1.0 / G).sqrt();
        assert_relative_eq!(TWO_PI_SQRT_INV_G, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_stern_levison_constant_normalised_to_earth() {
        let lambda = STERN_LEVISON_CONSTANT * EARTH_MASS_KG * EARTH_MASS_KG * SOLAR_MASS_KG.sqrt()
            / AU_M.powf(1.5);
        assert_relative_eq!(lambda, 1.53e5, max_relative = 1e-9);
    }
}
