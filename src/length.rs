//! Length arithmetic for chunked base64.
//!
//! Pure functions relating encoded and decoded lengths without touching
//! the data itself. Callers use them to size destination buffers before
//! invoking the codec and to reject structurally impossible inputs.

use crate::error::CodecError;

/// True iff `n` is a possible length of padded base64 data.
pub fn is_valid_padded_len(n: usize) -> bool {
    n > 0 && n % 4 == 0
}

/// True iff `n` is a possible length of unpadded base64 data.
///
/// A remainder of 1 is impossible: the final group never encodes fewer
/// than two bits' worth of data with a single output symbol.
pub fn is_valid_unpadded_len(n: usize) -> bool {
    n > 0 && n % 4 != 1
}

/// Length of the encoding of `decoded_len` bytes.
pub fn encoded_len(decoded_len: usize, padded: bool) -> usize {
    if padded {
        decoded_len.div_ceil(3) * 4
    } else {
        (decoded_len * 4).div_ceil(3)
    }
}

/// Length of the decoding of `encoded_len` symbols.
///
/// The decoded length is not knowable from the encoded length alone: the
/// caller must say how many of the trailing symbols are padding. For
/// padded data that is `padding_num` (0, 1 or 2, typically read off the
/// input with [`trailing_padding`]); unpadded data needs no count because
/// `encoded_len % 4` fully determines how much padding the final group is
/// conceptually missing.
///
/// [`trailing_padding`]: crate::trailing_padding
///
/// # Errors
///
/// `InvalidArgument` when `padding_num` is set in unpadded mode or exceeds
/// 2 in padded mode; `MalformedLength` when the length fails the mode's
/// validity predicate.
pub fn decoded_len(encoded_len: usize, padded: bool, padding_num: u8) -> Result<usize, CodecError> {
    if !padded && padding_num > 0 {
        return Err(CodecError::InvalidArgument(
            "padding_num is set while padding is not being used",
        ));
    }
    if padded && padding_num > 2 {
        return Err(CodecError::InvalidArgument("padding_num cannot exceed 2"));
    }

    let valid = if padded {
        is_valid_padded_len(encoded_len)
    } else {
        is_valid_unpadded_len(encoded_len)
    };
    if !valid {
        return Err(CodecError::MalformedLength {
            length: encoded_len,
            padded,
        });
    }

    // How much padding the data would need to reach a whole group. Stays
    // 0 for padded input, whose length is already a multiple of 4.
    let phantom = (4 - encoded_len % 4) % 4;
    let effective = if padded { padding_num as usize } else { phantom };

    Ok(3 * ((encoded_len + phantom) / 4) - effective)
}
