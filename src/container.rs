//! Generic adapter between the buffer codec and owned byte containers.
//!
//! The codec itself never allocates; these functions do the sizing through
//! the length arithmetic, run the buffer codec, and hand the result back
//! in the caller's container kind.

use crate::alphabet::Alphabet;
use crate::codec::{decode_mem, encode_mem};
use crate::error::CodecError;
use crate::length::{decoded_len, encoded_len};

/// An owned contiguous byte container the codec can fill.
///
/// Implemented for `Vec<u8>` and `String`. The `String` impl re-checks
/// UTF-8 on construction, since decoded base64 is arbitrary binary and an
/// alphabet's symbols need not be ASCII.
pub trait ByteContainer: Sized {
    /// A view of the container's bytes.
    fn as_bytes(&self) -> &[u8];

    /// Builds the container from a filled byte buffer.
    fn from_vec(bytes: Vec<u8>) -> Result<Self, CodecError>;
}

impl ByteContainer for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn from_vec(bytes: Vec<u8>) -> Result<Self, CodecError> {
        Ok(bytes)
    }
}

impl ByteContainer for String {
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    fn from_vec(bytes: Vec<u8>) -> Result<Self, CodecError> {
        Ok(String::from_utf8(bytes)?)
    }
}

/// Count of padding symbols (0, 1 or 2) among the last two bytes of `src`.
///
/// This is the `padding_num` that [`decoded_len`] expects for padded data.
pub fn trailing_padding(src: &[u8], padding: u8) -> u8 {
    src.iter().rev().take(2).map(|&b| u8::from(b == padding)).sum()
}

/// Encodes `input` into a freshly allocated container of the same kind.
pub fn encode_to<C: ByteContainer>(
    input: &C,
    alphabet: &Alphabet,
    padded: bool,
) -> Result<C, CodecError> {
    let src = input.as_bytes();
    let mut buf = vec![0u8; encoded_len(src.len(), padded)];
    encode_mem(&mut buf, src, alphabet, padded)?;
    C::from_vec(buf)
}

/// Decodes `input` into a freshly allocated container of the same kind.
///
/// In padded mode the explicit padding count is read off the last two
/// input bytes before the length arithmetic sizes the output.
pub fn decode_to<C: ByteContainer>(
    input: &C,
    alphabet: &Alphabet,
    padded: bool,
) -> Result<C, CodecError> {
    let src = input.as_bytes();
    let padding_num = if padded {
        trailing_padding(src, alphabet.padding())
    } else {
        0
    };
    let mut buf = vec![0u8; decoded_len(src.len(), padded, padding_num)?];
    decode_mem(&mut buf, src, alphabet, padded)?;
    C::from_vec(buf)
}
