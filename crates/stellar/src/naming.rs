//! Star designations.
//!
//! Bright stars get Bayer-style names (`Beta Lyra`), middling ones
//! Flamsteed-style numbers (`61 Cygnus`) and the faint majority a
//! durchmusterung-style catalogue entry such as `BD+12°3456`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError};
use crate::seeds::SeedStream;
use crate::spectral::{SpectralType, StarClass};

const GREEK_LETTERS: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

const CONSTELLATIONS: &str = "\
Andromeda\nAntlia\nApus\nAquarius\nAquila\nAra\nAries\nAuriga\nBootes\nCaelum\n\
Camelopardalis\nCancer\nCanes Venatici\nCanis Major\nCanis Minor\nCapricornus\nCarina\n\
Cassiopeia\nCentaurus\nCepheus\nCetus\nChamaeleon\nCircinus\nColumba\nComa Berenices\n\
Corona Australis\nCorona Borealis\nCorvus\nCrater\nCrux\nCygnus\nDelphinus\nDorado\nDraco\n\
Equuleus\nEridanus\nFornax\nGemini\nGrus\nHercules\nHorologium\nHydra\nHydrus\nIndus\n\
Lacerta\nLeo\nLeo Minor\nLepus\nLibra\nLupus\nLynx\nLyra\nMensa\nMicroscopium\nMonoceros\n\
Musca\nNorma\nOctans\nOphiuchus\nOrion\nPavo\nPegasus\nPerseus\nPhoenix\nPictor\nPisces\n\
Piscis Austrinus\nPuppis\nPyxis\nReticulum\nSagitta\nSagittarius\nScorpius\nSculptor\n\
Scutum\nSerpens\nSextans\nTaurus\nTelescopium\nTriangulum\nTriangulum Australe\nTucana\n\
Ursa Major\nUrsa Minor\nVela\nVirgo\nVolans\nVulpecula";

const CATALOGUE_PREFIXES: &str = "BD\nCD\nCPD";

/// Constellation and catalogue-prefix gazetteers used by [`star_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTables {
    constellations: Vec<String>,
    catalogue_prefixes: Vec<String>,
}

impl NameTables {
    pub fn new(constellations: Vec<String>, catalogue_prefixes: Vec<String>) -> Result<Self> {
        if constellations.is_empty() {
            return Err(StellarError::EmptyNameTable("constellations"));
        }
        if catalogue_prefixes.is_empty() {
            return Err(StellarError::EmptyNameTable("catalogue prefixes"));
        }
        Ok(Self {
            constellations,
            catalogue_prefixes,
        })
    }

    /// Builds the tables from line-delimited lists. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_lines(constellations: &str, catalogue_prefixes: &str) -> Result<Self> {
        Self::new(parse_lines(constellations), parse_lines(catalogue_prefixes))
    }

    /// The 88 modern constellations and the BD/CD/CPD durchmusterung prefixes.
    pub fn standard() -> Self {
        Self {
            constellations: parse_lines(CONSTELLATIONS),
            catalogue_prefixes: parse_lines(CATALOGUE_PREFIXES),
        }
    }

    pub fn constellations(&self) -> &[String] {
        &self.constellations
    }

    pub fn catalogue_prefixes(&self) -> &[String] {
        &self.catalogue_prefixes
    }

    fn constellation(&self, stream: &mut SeedStream) -> &str {
        let index = stream.next_below(self.constellations.len() as u32) as usize;
        &self.constellations[index]
    }
}

impl Default for NameTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Bayer prefix for an index: Greek letters first, then Latin capitals.
fn bayer_prefix(index: usize) -> String {
    match GREEK_LETTERS.get(index) {
        Some(letter) => (*letter).to_string(),
        None => char::from(b'A' + (index - GREEK_LETTERS.len()) as u8).to_string(),
    }
}

fn bayer_name(class: &StarClass, tables: &NameTables, stream: &mut SeedStream) -> String {
    let letters = (GREEK_LETTERS.len() + 26) as u32;
    // Hotter stars are brighter and take earlier letters
    let extra_draws = match class.spectral_type {
        SpectralType::O => 3,
        SpectralType::B => 2,
        SpectralType::A => 1,
        _ => 0,
    };
    let mut index = stream.next_below(letters);
    for _ in 0..extra_draws {
        index = index.min(stream.next_below(letters));
    }
    format!("{} {}", bayer_prefix(index as usize), tables.constellation(stream))
}

fn flamsteed_name(tables: &NameTables, stream: &mut SeedStream) -> String {
    let number = stream.next_below(99).max(stream.next_below(99)) + 1;
    format!("{} {}", number, tables.constellation(stream))
}

fn catalogue_name(tables: &NameTables, stream: &mut SeedStream) -> String {
    let prefixes = tables.catalogue_prefixes.len() as u32;
    let index = stream.next_below(prefixes).min(stream.next_below(prefixes)) as usize;
    let sign = if stream.next_bool() { '+' } else { '-' };
    let declination = stream.next_below(90);
    let number = stream.next_below(19_900) + 100;
    format!(
        "{}{}{:02}°{}",
        tables.catalogue_prefixes[index], sign, declination, number
    )
}

/// Names a star from its own stream.
pub fn star_name(class: &StarClass, tables: &NameTables, stream: &mut SeedStream) -> String {
    match class.spectral_type {
        SpectralType::O | SpectralType::B | SpectralType::A | SpectralType::F => {
            bayer_name(class, tables, stream)
        }
        SpectralType::G if stream.next_bool() => bayer_name(class, tables, stream),
        SpectralType::G => flamsteed_name(tables, stream),
        SpectralType::K if stream.next_below(4) < 3 => flamsteed_name(tables, stream),
        SpectralType::M if stream.next_below(5) == 0 => flamsteed_name(tables, stream),
        _ => catalogue_name(tables, stream),
    }
}
