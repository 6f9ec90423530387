//! Deterministic identifiers for generated systems.

use uuid::Uuid;

/// Namespace for system ids derived from star seeds.
pub const SYSTEM_NAMESPACE: Uuid = Uuid::from_u128(0x6d61_6772_6174_4a68_8000_0000_7374_6172);

/// UUID v5 of the star seed, so one seed always names one system.
///
/// # Example
/// ```
/// use star_system::metadata::system_id;
///
/// assert_eq!(system_id(42), system_id(42));
/// assert_ne!(system_id(42), system_id(43));
/// ```
pub fn system_id(star_seed: u64) -> Uuid {
    Uuid::new_v5(&SYSTEM_NAMESPACE, &star_seed.to_le_bytes())
}

/// Short catalogue designation from an id: two letters and four digits,
/// e.g. "KV-4729".
pub fn catalog_name(id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let prefix1 = (bytes[0] % 26 + b'A') as char;
    let prefix2 = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}{}-{:04}", prefix1, prefix2, number)
}
