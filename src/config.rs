//! Custom alphabets as data.
//!
//! Callers can describe alphabets in TOML (or any serde format), keep
//! named collections of them, and build lookup tables from the
//! definitions. The library itself reads no files; content comes in as
//! strings.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::CodecError;

/// A single alphabet definition: a 64-byte symbol string and an optional
/// padding character (defaults to `=`).
#[derive(Debug, Clone, Deserialize)]
pub struct AlphabetConfig {
    pub symbols: String,
    #[serde(default)]
    pub padding: Option<char>,
}

impl AlphabetConfig {
    /// Builds the lookup tables this definition describes.
    ///
    /// # Errors
    ///
    /// `InvalidAlphabet` when the symbol string is not exactly 64 bytes,
    /// the padding character does not fit in one byte, or the symbols
    /// themselves fail table construction.
    pub fn build(&self) -> Result<Alphabet, CodecError> {
        let padding = match self.padding {
            None => b'=',
            Some(c) => u8::try_from(u32::from(c)).map_err(|_| {
                CodecError::InvalidAlphabet("padding must be a single-byte character")
            })?,
        };
        debug!(symbols = %self.symbols, padding, "building alphabet from config");
        Alphabet::from_symbols(self.symbols.as_bytes(), padding)
    }
}

/// A named collection of alphabet definitions.
#[derive(Debug, Deserialize)]
pub struct AlphabetsConfig {
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn get(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Merges another collection into this one, overriding same-named
    /// entries.
    pub fn merge(&mut self, other: AlphabetsConfig) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
    }
}
