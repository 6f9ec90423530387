use crate::error::StellarError;
use crate::spectral::{LuminosityClass, SpectralType, StarClass};

#[test]
fn parses_yerkes_main_sequence_class() {
    let class: StarClass = "G2V".parse().unwrap();
    assert_eq!(class.spectral_type, SpectralType::G);
    assert_eq!(class.subtype, 2);
    assert_eq!(class.luminosity_class, LuminosityClass::V);
    assert_eq!(class.key(), "G2");
    assert_eq!(class.to_string(), "G2V");
}

#[test]
fn parses_giants_and_defaults() {
    let giant: StarClass = "M4III".parse().unwrap();
    assert_eq!(giant.luminosity_class, LuminosityClass::III);
    assert!(giant.luminosity_class.is_evolved());

    let supergiant: StarClass = "B0Ia".parse().unwrap();
    assert_eq!(supergiant.luminosity_class, LuminosityClass::I);

    // Missing subtype and luminosity class fall back to 5 and V
    let bare: StarClass = "K".parse().unwrap();
    assert_eq!(bare.subtype, 5);
    assert_eq!(bare.luminosity_class, LuminosityClass::V);
}

#[test]
fn luminosity_suffixes_are_ignored() {
    for (text, expected) in [
        ("K0IIIa", LuminosityClass::III),
        ("G2Vb", LuminosityClass::V),
        ("G8IV-V", LuminosityClass::IV),
        ("B1Iab", LuminosityClass::I),
        ("B9Ia+", LuminosityClass::Zero),
        ("M2VIIx", LuminosityClass::VII),
    ] {
        let class: StarClass = text.parse().unwrap();
        assert_eq!(class.luminosity_class, expected, "{}", text);
    }
}

#[test]
fn parses_subdwarfs() {
    let class: StarClass = "sdK3".parse().unwrap();
    assert_eq!(class.spectral_type, SpectralType::K);
    assert_eq!(class.luminosity_class, LuminosityClass::VI);
    assert!(class.is_subdwarf());
    assert_eq!(class.to_string(), "sdK3");
}

#[test]
fn parses_white_dwarfs() {
    let class: StarClass = "DA5".parse().unwrap();
    assert!(class.is_white_dwarf());
    assert_eq!(class.variant.as_deref(), Some("A"));
    assert_eq!(class.subtype, 5);
    assert_eq!(class.key(), "D5");
    assert_eq!(class.to_string(), "DA5");

    let pulsating: StarClass = "DAB2V".parse().unwrap();
    assert_eq!(pulsating.variant.as_deref(), Some("AB"));
    assert_eq!(pulsating.subtype, 2);
}

#[test]
fn rejects_garbage() {
    for text in ["", "X9", "G2XII", "sdQ1", "DA5Z"] {
        let result = text.parse::<StarClass>();
        assert_eq!(
            result,
            Err(StellarError::InvalidClass(text.to_string())),
            "{:?} should not parse",
            text
        );
    }
}
