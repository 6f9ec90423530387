use approx::assert_relative_eq;
use stellar::SeedStream;
use units::Mass;

use crate::material::{Material, MaterialParams};
use crate::physical::bulk_density;

#[test]
fn drawn_density_stays_in_bounds() {
    let params = MaterialParams::default()
        .with_density(4200.0, 1000.0, 3500.0, 5000.0)
        .with_compressibility(250e-12, 2500e-12, 2.0);

    for seed in 0..200 {
        let mut stream = SeedStream::new(seed);
        let material = params.new_material(&mut stream);
        assert!(
            (3500.0..=5000.0).contains(&material.uncompressed_density),
            "seed {} drew {}",
            seed,
            material.uncompressed_density
        );
        assert!(material.compressibility > 0.0);
    }
}

#[test]
fn impossible_band_is_clamped() {
    // Mean far outside a narrow band never lands inside it
    let params = MaterialParams::default().with_density(100_000.0, 1.0, 1000.0, 1001.0);
    let material = params.new_material(&mut SeedStream::new(5));
    assert_relative_eq!(material.uncompressed_density, 1001.0);
}

#[test]
fn drawing_is_deterministic() {
    let params = MaterialParams::default();
    let a = params.new_material(&mut SeedStream::new(77));
    let b = params.new_material(&mut SeedStream::new(77));
    assert_eq!(a, b);
}

#[test]
fn incompressible_material_keeps_its_density() {
    let material = Material {
        uncompressed_density: 4000.0,
        compressibility: 0.0,
    };
    let mass = Mass::from_earth_masses(1.0);
    assert_relative_eq!(material.estimate_compressed_density(mass), 4000.0);
    assert_eq!(
        material.compressed_diameter(mass),
        material.uncompressed_diameter(mass)
    );
}

#[test]
fn compression_is_bounded() {
    let mass = Mass::from_earth_masses(1.0);
    let rock = Material {
        uncompressed_density: 4000.0,
        compressibility: 1000e-12,
    };
    let compressed = rock.estimate_compressed_density(mass);
    assert!(compressed > 4000.0);
    assert!(compressed <= 12_000.0);
    assert_relative_eq!(
        bulk_density(mass, rock.compressed_diameter(mass)),
        compressed,
        max_relative = 1e-9
    );

    let squishy = Material {
        uncompressed_density: 4000.0,
        compressibility: 1.0,
    };
    assert_relative_eq!(squishy.estimate_compressed_density(mass), 12_000.0);
}
