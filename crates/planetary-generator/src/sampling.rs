//! Distributions and numbering helpers shared by the body generators.

use stellar::SeedStream;
use stellar::sampling::{lerp, min_of_two};
use units::Mass;
use units::constants::{MAX_TERRESTRIAL_MASS_KG, MIN_MOON_MASS_KG, MIN_TERRESTRIAL_MASS_KG};

/// `m(u) = A·exp(B·u) + C·u` in yottagrams, monotone on `[0, 1]`.
const MASS_CURVE_SCALE: f64 = 1.814813990910743e-4;
const MASS_CURVE_RATE: f64 = 25.647952850461436;
const MASS_CURVE_LINEAR: f64 = 19765.338232060116;

const BISECTION_STEPS: usize = 64;

/// Planet mass for a uniform draw `u` in `[0, 1]`.
pub fn mass_curve(u: f64) -> Mass {
    Mass::from_yottagrams(
        MASS_CURVE_SCALE * (MASS_CURVE_RATE * u).exp() + MASS_CURVE_LINEAR * u,
    )
}

/// The `u` in `[0, 1]` whose curve mass is closest to `mass`.
pub fn inverse_mass_curve(mass: Mass) -> f64 {
    bisect(|u| mass_curve(u) < mass)
}

/// Draws a planet mass from the mass curve restricted to `[min, max]`.
///
/// Inverse-transform sampling on the monotone curve, equivalent to drawing
/// from the whole curve and rejecting masses outside the range. The result
/// is clamped into the range, so a degenerate range `[m, m]` yields `m` and a
/// range beyond the curve's image yields its nearer bound.
pub fn planet_mass(stream: &mut SeedStream, min: Mass, max: Mass) -> Mass {
    let low = inverse_mass_curve(min);
    let high = inverse_mass_curve(max);
    let u = lerp(low, high, stream.next_f64());
    mass_curve(u).max(min).min(max)
}

/// Mass generator for moons of a planet of `planet_mass`:
/// `lerp(MIN_MOON, min(m/25, 2·MAX_TERR), U⁹)`.
pub fn moon_mass(stream: &mut SeedStream, planet_mass: Mass) -> Mass {
    let ceiling = (planet_mass.to_kg() / 25.0).min(2.0 * MAX_TERRESTRIAL_MASS_KG);
    Mass::from_kg(lerp(
        MIN_MOON_MASS_KG,
        ceiling,
        stream.next_f64().powi(9),
    ))
}

/// Default planetoid mass: `lerp(MIN_TERR/1000, 10·MIN_TERR, min(U, U)⁶)`.
pub fn planetoid_mass(stream: &mut SeedStream) -> Mass {
    Mass::from_kg(lerp(
        MIN_TERRESTRIAL_MASS_KG / 1000.0,
        MIN_TERRESTRIAL_MASS_KG * 10.0,
        min_of_two(stream).powi(6),
    ))
}

/// Rotation period in seconds: Gaussian around 20 hours, signed.
pub fn rotation_period(stream: &mut SeedStream) -> f64 {
    stream.next_gaussian() * 60_000.0 + 72_000.0
}

/// Rayleigh-distributed inclination in radians with mode `multiplier` degrees.
pub fn rayleigh_inclination(stream: &mut SeedStream, multiplier: f64) -> f64 {
    let u = stream.next_f64();
    (multiplier * (-2.0 * (1.0 - u).ln()).sqrt()).to_radians()
}

/// Regularised incomplete beta function `I_x(3, 9)`.
///
/// For integer shape parameters this is the binomial tail
/// `Σ_{j=3}^{11} C(11, j) xʲ (1 − x)^(11−j)`.
pub fn beta_3_9_cdf(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let mut binomial = 165.0; // C(11, 3)
    let mut sum = 0.0;
    for j in 3..=11 {
        sum += binomial * x.powi(j) * (1.0 - x).powi(11 - j);
        binomial *= f64::from(11 - j) / f64::from(j + 1);
    }
    sum
}

/// Inverse CDF of Beta(3, 9), by bisection.
pub fn beta_3_9_inverse(p: f64) -> f64 {
    bisect(|x| beta_3_9_cdf(x) < p)
}

/// Largest `x` in `[0, 1]` (to bisection precision) for which `below(x)` holds,
/// for a predicate that is true on a prefix of the interval.
fn bisect(below: impl Fn(f64) -> bool) -> f64 {
    let (mut low, mut high) = (0.0_f64, 1.0_f64);
    if !below(low) {
        return low;
    }
    if below(high) {
        return high;
    }
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (low + high);
        if below(mid) {
            low = mid;
        } else {
            high = mid;
        }
    }
    0.5 * (low + high)
}

/// Roman numeral for `n ≥ 1`; zero yields an empty string.
pub fn roman_numeral(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for &(value, numeral) in NUMERALS.iter() {
        while n >= value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

/// Decimal digits as Unicode subscripts, e.g. `42` → `₄₂`.
pub fn subscript_number(n: u32) -> String {
    n.to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .filter_map(|digit| char::from_u32(0x2080 + digit))
        .collect()
}
