//! PlantUML text encoding: raw DEFLATE followed by base64 over the PlantUML
//! alphabet (`0-9A-Za-z-_`).

use std::io::Write;

use base64::alphabet::Alphabet;
use base64::engine::general_purpose::PAD;
use base64::engine::GeneralPurpose;
use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;

const PLANTUML_ALPHABET: Alphabet =
    match Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid PlantUML alphabet"),
    };

pub(crate) const PLANTUML_ENGINE: GeneralPurpose = GeneralPurpose::new(&PLANTUML_ALPHABET, PAD);

/// Encode diagram source for use in a PlantUML server URL path.
pub fn encode(source: &str) -> std::io::Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(source.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(PLANTUML_ENGINE.encode(compressed))
}
