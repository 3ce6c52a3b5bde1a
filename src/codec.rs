//! The chunked encode/decode inner loops.
//!
//! Both functions are pure over their buffer arguments: no allocation, no
//! shared state, no locks. Concurrent calls writing to disjoint
//! destination slices are safe, which is what lets a caller split a large
//! buffer at group boundaries and code the pieces in parallel.

use tracing::trace;

use crate::alphabet::{Alphabet, NO_INDEX};
use crate::error::CodecError;
use crate::length::{is_valid_padded_len, is_valid_unpadded_len};

/// Encodes `src` into `dest`, mapping 3-byte groups to 4 symbols.
///
/// A 1-byte remainder emits 2 symbols, a 2-byte remainder 3 symbols; in
/// padded mode the final group is then filled up with padding symbols.
/// `dest` must hold at least `encoded_len(src.len(), padded)` bytes;
/// sizing it is the caller's job, the codec never grows a buffer.
///
/// # Errors
///
/// `EmptyInput` when `src` is empty.
///
/// # Panics
///
/// Panics if `dest` is smaller than the encoded length.
pub fn encode_mem(
    dest: &mut [u8],
    src: &[u8],
    alphabet: &Alphabet,
    padded: bool,
) -> Result<(), CodecError> {
    if src.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    trace!(src_len = src.len(), padded, "encoding buffer");

    let forward = alphabet.forward_table();
    let padding = alphabet.padding();

    let groups = src.chunks_exact(3);
    let rest = groups.remainder();
    let mut out = 0;

    for group in groups {
        let (b0, b1, b2) = (group[0], group[1], group[2]);
        dest[out] = forward[(b0 >> 2) as usize];
        dest[out + 1] = forward[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
        dest[out + 2] = forward[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize];
        dest[out + 3] = forward[(b2 & 0x3F) as usize];
        out += 4;
    }

    match *rest {
        [b0] => {
            dest[out] = forward[(b0 >> 2) as usize];
            dest[out + 1] = forward[((b0 & 0x03) << 4) as usize];
            if padded {
                dest[out + 2] = padding;
                dest[out + 3] = padding;
            }
        }
        [b0, b1] => {
            dest[out] = forward[(b0 >> 2) as usize];
            dest[out + 1] = forward[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
            dest[out + 2] = forward[((b1 & 0x0F) << 2) as usize];
            if padded {
                dest[out + 3] = padding;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Decodes `src` into `dest`, reading 4-symbol groups back to 3 bytes.
///
/// In padded mode up to two trailing padding symbols shrink what the
/// final group writes; in unpadded mode a short final group of 3 or 2
/// symbols does the same. `dest` must hold at least
/// `decoded_len(src.len(), padded, padding_num)` bytes for the padding
/// actually present; sizing it is the caller's job.
///
/// # Errors
///
/// `MalformedLength` when the input length fails the mode's validity
/// predicate (or a single symbol would be left over after grouping);
/// `MalformedPadding` when padding starts at the second-to-last symbol
/// but does not run to the end; `SymbolNotFound` when a byte of `src` is
/// not part of the alphabet (corrupt data, reported distinctly from the
/// structural errors above).
///
/// # Panics
///
/// Panics if `dest` is smaller than the decoded length.
pub fn decode_mem(
    dest: &mut [u8],
    src: &[u8],
    alphabet: &Alphabet,
    padded: bool,
) -> Result<(), CodecError> {
    let valid = if padded {
        is_valid_padded_len(src.len())
    } else {
        is_valid_unpadded_len(src.len())
    };
    if !valid {
        return Err(CodecError::MalformedLength {
            length: src.len(),
            padded,
        });
    }
    trace!(src_len = src.len(), padded, "decoding buffer");

    let padding = alphabet.padding();
    // Both validity predicates guarantee at least two symbols.
    if src[src.len() - 2] == padding && src[src.len() - 1] != padding {
        return Err(CodecError::MalformedPadding);
    }

    let mut len = src.len();
    if padded {
        if src[len - 1] == padding {
            len -= 1;
        }
        if src[len - 1] == padding {
            len -= 1;
        }
    }

    let reverse = alphabet.reverse_table();
    let index = |symbol: u8| match reverse[symbol as usize] {
        NO_INDEX => Err(CodecError::SymbolNotFound(symbol)),
        i => Ok(i),
    };

    let mut out = 0;
    for group in src[..len].chunks(4) {
        match *group {
            [s0, s1, s2, s3] => {
                let (i0, i1) = (index(s0)?, index(s1)?);
                let (i2, i3) = (index(s2)?, index(s3)?);
                dest[out] = (i0 << 2) | (i1 >> 4);
                dest[out + 1] = ((i1 & 0x0F) << 4) | (i2 >> 2);
                dest[out + 2] = ((i2 & 0x03) << 6) | i3;
                out += 3;
            }
            [s0, s1, s2] => {
                let (i0, i1, i2) = (index(s0)?, index(s1)?, index(s2)?);
                dest[out] = (i0 << 2) | (i1 >> 4);
                dest[out + 1] = ((i1 & 0x0F) << 4) | (i2 >> 2);
                out += 2;
            }
            [s0, s1] => {
                let (i0, i1) = (index(s0)?, index(s1)?);
                dest[out] = (i0 << 2) | (i1 >> 4);
                out += 1;
            }
            // A single leftover symbol cannot carry a whole byte.
            _ => {
                return Err(CodecError::MalformedLength {
                    length: src.len(),
                    padded,
                });
            }
        }
    }

    Ok(())
}
