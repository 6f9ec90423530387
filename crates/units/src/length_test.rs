mod tests {
    use approx::assert_relative_eq;

    use crate::constants::AU_M;
    use crate::length::Length;

    #[test]
    fn test_length_conversions() {
        let orbit = Length::from_au(1.0);
        assert_relative_eq!(orbit.to_meters(), AU_M);
        assert_relative_eq!(orbit.to_km(), AU_M / 1000.0);

        let sun = Length::from_solar_diameters(1.0);
        assert_relative_eq!(sun.to_meters(), 1.391e9);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_au(5.0);
        let length2 = Length::from_au(3.0);

        assert_relative_eq!((length1 + length2).to_au(), 8.0);
        assert_relative_eq!((length1 - length2).to_au(), 2.0);
        assert_relative_eq!((length1 * 2.0).to_au(), 10.0);
        assert_relative_eq!((length1 / 2.0).to_au(), 2.5);
        assert_relative_eq!(length1 / length2, 5.0 / 3.0);
        assert_relative_eq!((1.5 * length1).to_au(), 7.5);
    }

    #[test]
    fn test_length_min_max() {
        let near = Length::from_au(3.0);
        let far = Length::from_au(7.0);

        assert_eq!(near.min(far), near);
        assert_eq!(near.max(far), far);
        assert_eq!((near - far).abs(), Length::from_au(4.0));
    }
}
