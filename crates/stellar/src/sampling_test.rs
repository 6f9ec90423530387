use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::{SpectralDistribution, WeightedTable, lerp, sample_gaussian};
use crate::seeds::SeedStream;
use crate::spectral::SpectralType;

#[test]
fn sample_gaussian_produces_reasonable_values() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let samples: Vec<f64> = (0..1000)
        .map(|_| sample_gaussian(&mut rng, 5.0, 1.0))
        .collect();
    let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;

    assert!(
        (mean - 5.0).abs() < 0.2,
        "Mean {} should be close to 5.0",
        mean
    );

    let variance: f64 =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    let std_dev = variance.sqrt();
    assert!(
        (std_dev - 1.0).abs() < 0.2,
        "Std dev {} should be close to 1.0",
        std_dev
    );
    assert!(samples.iter().all(|x| x.is_finite()));
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(3200.0, 0.0, 0.0), 3200.0);
    assert_eq!(lerp(3200.0, 0.0, 1.0), 0.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}

#[test]
fn weighted_table_selects_entry_below_draw() {
    let mut table = WeightedTable::new();
    table.add("a", 1);
    table.add("skipped", 0);
    table.add("b", 2);
    table.add("c", 3);

    assert_eq!(table.total(), 6);
    assert_eq!(table.len(), 3);
    assert_eq!(table.select(1), Some(&"a"));
    assert_eq!(table.select(2), Some(&"b"));
    assert_eq!(table.select(3), Some(&"b"));
    assert_eq!(table.select(4), Some(&"c"));
    assert_eq!(table.select(6), Some(&"c"));
    assert_eq!(table.select(0), None);
}

#[test]
fn spectral_distribution_weights() {
    let distribution = SpectralDistribution::standard();
    assert_eq!(distribution.total_weight(), 8880);
}

#[test]
fn spectral_distribution_favours_cool_dwarfs() {
    let distribution = SpectralDistribution::standard();
    let mut stream = SeedStream::new(7);

    let draws = 5000;
    let mut cool = 0;
    let mut o_type = 0;
    for _ in 0..draws {
        let class = distribution.sample(&mut stream);
        match class.spectral_type {
            SpectralType::G | SpectralType::K | SpectralType::M => cool += 1,
            SpectralType::O => o_type += 1,
            _ => {}
        }
    }

    // G+K+M carry 6600 of the 8880 weight
    let fraction = cool as f64 / draws as f64;
    assert!(
        (0.70..0.78).contains(&fraction),
        "G/K/M fraction {} should be near 0.74",
        fraction
    );
    assert!(o_type < 100, "O stars should be rare, got {}", o_type);
}
