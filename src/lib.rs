//! Chunked base64 with configurable 64-symbol alphabets.
//!
//! The codec operates on caller-owned byte buffers: [`encode_mem`] and
//! [`decode_mem`] write into pre-sized destinations, the length functions
//! predict sizes and validate input shapes without decoding, and
//! [`encode_to`]/[`decode_to`] wrap the same loops for owned containers.
//! Two standard tables ship as process-wide statics; custom tables come
//! from [`Alphabet::new`] or a serde [`AlphabetConfig`].
//!
//! ```
//! use chunk64::{decode, encode, STANDARD};
//!
//! let encoded = encode(b"def", &STANDARD, true).unwrap();
//! assert_eq!(encoded, b"ZGVm");
//! assert_eq!(decode(&encoded, &STANDARD, true).unwrap(), b"def");
//! ```

mod alphabet;
mod codec;
mod config;
mod container;
mod error;
mod length;

pub use alphabet::{Alphabet, STANDARD, URL_SAFE};
pub use codec::{decode_mem, encode_mem};
pub use config::{AlphabetConfig, AlphabetsConfig};
pub use container::{ByteContainer, decode_to, encode_to, trailing_padding};
pub use error::CodecError;
pub use length::{decoded_len, encoded_len, is_valid_padded_len, is_valid_unpadded_len};

pub fn encode(data: &[u8], alphabet: &Alphabet, padded: bool) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; encoded_len(data.len(), padded)];
    encode_mem(&mut buf, data, alphabet, padded)?;
    Ok(buf)
}

pub fn decode(data: &[u8], alphabet: &Alphabet, padded: bool) -> Result<Vec<u8>, CodecError> {
    let padding_num = if padded {
        trailing_padding(data, alphabet.padding())
    } else {
        0
    };
    let mut buf = vec![0u8; decoded_len(data.len(), padded, padding_num)?];
    decode_mem(&mut buf, data, alphabet, padded)?;
    Ok(buf)
}

#[cfg(test)]
mod tests;
