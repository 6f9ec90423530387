//! Designations for planets, planetoids and moons.

use stellar::SeedStream;

use crate::sampling::{roman_numeral, subscript_number};

/// Half-month letters, skipping I.
const FIRST_LETTERS: &[u8; 24] = b"ABCDEFGHJKLMNOPQRSTUVWXY";
/// Order letters, skipping I.
const SECOND_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

const FIRST_DISCOVERY_YEAR: u32 = 2009;

/// Provisional minor-planet designation, e.g. `2013 QF₁₂`.
///
/// The year skews early (minimum of two draws); the cycle count is omitted
/// when it is zero.
pub fn planetoid_name(stream: &mut SeedStream) -> String {
    let year = stream.next_below(990).min(stream.next_below(990)) + FIRST_DISCOVERY_YEAR;
    let first = FIRST_LETTERS[stream.next_below(24) as usize] as char;
    let second = SECOND_LETTERS[stream.next_below(25) as usize] as char;

    let mut name = format!("{} {}{}", year, first, second);
    let cycle = stream.next_below(1000);
    if cycle > 0 {
        name.push_str(&subscript_number(cycle));
    }
    name
}

/// `<star> b`, `<star> c`, … for the planet at `index` (zero-based).
///
/// Past `z` the letters continue as `aa`, `ab`, …
pub fn planet_name(star_name: &str, index: usize) -> String {
    format!("{} {}", star_name, planet_letters(index))
}

fn planet_letters(index: usize) -> String {
    // Bijective base 26 where 1 is 'a'; planets start at 'b'
    let mut n = index + 2;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// `<planet> I`, `<planet> II`, … for the moon at `index` (zero-based).
pub fn moon_name(planet_name: &str, index: usize) -> String {
    format!("{} {}", planet_name, roman_numeral(index as u32 + 1))
}
