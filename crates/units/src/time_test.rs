mod tests {
    use approx::assert_relative_eq;

    use crate::time::{SECONDS_PER_YEAR, Time};

    #[test]
    fn test_time_conversions() {
        assert_relative_eq!(Time::from_years(1.0).to_seconds(), SECONDS_PER_YEAR);
        assert_relative_eq!(Time::from_days(2.0).to_hours(), 48.0);
        assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_days(), 365.25);
    }

    #[test]
    fn test_retrograde_rotation() {
        let spin = Time::from_hours(-20.0);
        assert!(spin.is_retrograde());
        assert!(!spin.abs().is_retrograde());
        assert_relative_eq!((-spin).to_hours(), 20.0);
    }
}
