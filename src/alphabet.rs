use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::CodecError;

/// Marks reverse-table slots no symbol maps to. Safe as a sentinel because
/// real indices stay below 64.
pub(crate) const NO_INDEX: u8 = 0xFF;

/// A 64-symbol encoding alphabet with forward and reverse lookup tables.
///
/// Symbol order is the encoding: index `i` encodes as the `i`-th symbol.
/// The padding byte must stay distinct from every symbol so that it can
/// serve as an end-of-data marker during decoding. Construction validates
/// both invariants; a table can never exist in an invalid state, and once
/// built it is read-only and freely shared across threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    forward: [u8; 64],
    reverse: [u8; 256],
    padding: u8,
}

impl Alphabet {
    /// Creates an alphabet from 64 symbols and a padding byte.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlphabet` if a symbol repeats or equals the padding
    /// byte. Repeats are caught by the target reverse slot already being
    /// occupied, never silently overwritten.
    pub fn new(symbols: [u8; 64], padding: u8) -> Result<Self, CodecError> {
        let mut reverse = [NO_INDEX; 256];
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbol == padding {
                return Err(CodecError::InvalidAlphabet(
                    "padding byte is also an alphabet symbol",
                ));
            }
            let slot = &mut reverse[symbol as usize];
            if *slot != NO_INDEX {
                return Err(CodecError::InvalidAlphabet("alphabet repeats a symbol"));
            }
            *slot = i as u8;
        }

        trace!(padding, "alphabet constructed");
        Ok(Alphabet {
            forward: symbols,
            reverse,
            padding,
        })
    }

    /// Creates an alphabet from a symbol slice, checking its length.
    pub fn from_symbols(symbols: &[u8], padding: u8) -> Result<Self, CodecError> {
        let forward: [u8; 64] = symbols
            .try_into()
            .map_err(|_| CodecError::InvalidAlphabet("alphabet must contain exactly 64 symbols"))?;
        Self::new(forward, padding)
    }

    /// Returns the symbol encoding the 6-bit `index`.
    pub fn symbol(&self, index: u8) -> Result<u8, CodecError> {
        if index >= 64 {
            return Err(CodecError::IndexOutOfRange(index));
        }
        Ok(self.forward[index as usize])
    }

    /// Returns the 6-bit index a `symbol` decodes to.
    pub fn index_of(&self, symbol: u8) -> Result<u8, CodecError> {
        match self.reverse[symbol as usize] {
            NO_INDEX => Err(CodecError::SymbolNotFound(symbol)),
            index => Ok(index),
        }
    }

    /// Returns the padding byte.
    pub fn padding(&self) -> u8 {
        self.padding
    }

    // Raw table access for the codec inner loops.
    pub(crate) fn forward_table(&self) -> &[u8; 64] {
        &self.forward
    }

    pub(crate) fn reverse_table(&self) -> &[u8; 256] {
        &self.reverse
    }
}

/// The standard alphabet (`A-Z a-z 0-9 + /`), `=` padding.
pub static STANDARD: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new(
        *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        b'=',
    )
    .expect("standard alphabet is well-formed")
});

/// The URL-safe alphabet: `-` and `_` replace `+` and `/`.
pub static URL_SAFE: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new(
        *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        b'=',
    )
    .expect("url-safe alphabet is well-formed")
});
