use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StellarError;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    D, // White dwarf
}

impl SpectralType {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'O' => Some(SpectralType::O),
            'B' => Some(SpectralType::B),
            'A' => Some(SpectralType::A),
            'F' => Some(SpectralType::F),
            'G' => Some(SpectralType::G),
            'K' => Some(SpectralType::K),
            'M' => Some(SpectralType::M),
            'L' => Some(SpectralType::L),
            _ => None,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::D => "D",
        };
        write!(f, "{}", str)
    }
}

/// Yerkes luminosity class.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    #[serde(rename = "0")]
    Zero, // Hypergiants
    I,   // Supergiants
    II,  // Bright giants
    III, // Giants
    IV,  // Subgiants
    V,   // Main sequence
    VI,  // Subdwarfs
    VII, // White dwarfs
}

impl LuminosityClass {
    /// Radius relative to a main-sequence star of the same spectral class.
    pub fn radius_factor(&self) -> f64 {
        match self {
            LuminosityClass::Zero => 300.0,
            LuminosityClass::I => 100.0,
            LuminosityClass::II => 30.0,
            LuminosityClass::III => 10.0,
            LuminosityClass::IV => 2.0,
            LuminosityClass::V => 1.0,
            LuminosityClass::VI => 0.8,
            LuminosityClass::VII => 1.0,
        }
    }

    /// Whether the star has left the main sequence and swollen.
    pub fn is_evolved(&self) -> bool {
        matches!(
            self,
            LuminosityClass::Zero
                | LuminosityClass::I
                | LuminosityClass::II
                | LuminosityClass::III
                | LuminosityClass::IV
        )
    }

    /// Longest-prefix match, so catalogue suffixes such as the `a` of
    /// `IIIa` or the `-V` of `IV-V` are ignored.
    fn parse(text: &str) -> Option<Self> {
        LUMINOSITY_PREFIXES
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map(|&(_, class)| class)
    }
}

/// Luminosity-class prefixes, each listed before any shorter prefix of it.
const LUMINOSITY_PREFIXES: [(&str, LuminosityClass); 10] = [
    ("0", LuminosityClass::Zero),
    ("Ia0", LuminosityClass::Zero),
    ("Ia+", LuminosityClass::Zero),
    ("III", LuminosityClass::III),
    ("II", LuminosityClass::II),
    ("IV", LuminosityClass::IV),
    ("I", LuminosityClass::I),
    ("VII", LuminosityClass::VII),
    ("VI", LuminosityClass::VI),
    ("V", LuminosityClass::V),
];

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::Zero => "0",
            LuminosityClass::I => "I",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::VII => "VII",
        };
        write!(f, "{}", str)
    }
}

/// Letters allowed after the `D` of a white-dwarf class.
const WHITE_DWARF_VARIANTS: &str = "ABOQZCX";

/// Subtype assumed when a class string omits the digit.
const DEFAULT_SUBTYPE: u8 = 5;

/// A full stellar classification such as `G2V`, `sdK3` or `DA5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarClass {
    pub spectral_type: SpectralType,
    pub subtype: u8,
    pub luminosity_class: LuminosityClass,
    /// White-dwarf spectral letters, e.g. `A` in `DA5`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl StarClass {
    pub fn main_sequence(spectral_type: SpectralType, subtype: u8) -> Self {
        Self {
            spectral_type,
            subtype,
            luminosity_class: LuminosityClass::V,
            variant: None,
        }
    }

    pub fn white_dwarf(variant: impl Into<String>, subtype: u8) -> Self {
        Self {
            spectral_type: SpectralType::D,
            subtype,
            luminosity_class: LuminosityClass::VII,
            variant: Some(variant.into()),
        }
    }

    pub fn is_white_dwarf(&self) -> bool {
        self.spectral_type == SpectralType::D
    }

    pub fn is_subdwarf(&self) -> bool {
        self.luminosity_class == LuminosityClass::VI
    }

    /// Lookup key into the star-class table, e.g. `"G2"` or `"D5"`.
    pub fn key(&self) -> String {
        format!("{}{}", self.spectral_type, self.subtype)
    }

    fn parse_subdwarf(text: &str) -> Option<Self> {
        let rest = text.strip_prefix("sd")?;
        let (spectral_type, subtype, tail) = Self::parse_type_and_subtype(rest)?;
        tail.is_empty().then_some(Self {
            spectral_type,
            subtype,
            luminosity_class: LuminosityClass::VI,
            variant: None,
        })
    }

    fn parse_white_dwarf(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('D')?;
        let letters: String = rest
            .chars()
            .take_while(|c| WHITE_DWARF_VARIANTS.contains(*c))
            .collect();
        let rest = &rest[letters.len()..];
        let (subtype, rest) = Self::parse_subtype(rest);
        // A trailing V marks a pulsating white dwarf
        if !(rest.is_empty() || rest == "V") {
            return None;
        }
        Some(Self::white_dwarf(letters, subtype))
    }

    fn parse_main(text: &str) -> Option<Self> {
        let (spectral_type, subtype, tail) = Self::parse_type_and_subtype(text)?;
        let luminosity_class = if tail.is_empty() {
            LuminosityClass::V
        } else {
            LuminosityClass::parse(tail)?
        };
        Some(Self {
            spectral_type,
            subtype,
            luminosity_class,
            variant: None,
        })
    }

    fn parse_type_and_subtype(text: &str) -> Option<(SpectralType, u8, &str)> {
        let letter = text.chars().next()?;
        let spectral_type = SpectralType::from_letter(letter)?;
        let (subtype, rest) = Self::parse_subtype(&text[letter.len_utf8()..]);
        Some((spectral_type, subtype, rest))
    }

    fn parse_subtype(text: &str) -> (u8, &str) {
        match text.chars().next().and_then(|c| c.to_digit(10)) {
            Some(digit) => (digit as u8, &text[1..]),
            None => (DEFAULT_SUBTYPE, text),
        }
    }
}

impl FromStr for StarClass {
    type Err = StellarError;

    /// Parses subdwarf, white-dwarf and Yerkes notations, in that order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        Self::parse_subdwarf(text)
            .or_else(|| Self::parse_white_dwarf(text))
            .or_else(|| Self::parse_main(text))
            .ok_or_else(|| StellarError::InvalidClass(s.to_string()))
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_white_dwarf() {
            let variant = self.variant.as_deref().unwrap_or_default();
            write!(f, "D{}{}", variant, self.subtype)
        } else if self.is_subdwarf() {
            write!(f, "sd{}{}", self.spectral_type, self.subtype)
        } else {
            write!(
                f,
                "{}{}{}",
                self.spectral_type, self.subtype, self.luminosity_class
            )
        }
    }
}
