use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced by alphabet construction, length arithmetic and the
/// chunked codec.
///
/// Every failure is fatal to the operation that raised it: nothing is
/// retried and no partial result is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The 64-symbol list repeats a symbol, collides with the padding byte,
    /// or has the wrong length
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(&'static str),

    /// Forward lookup with an index outside the 6-bit range
    #[error("symbol index {0} is not below 64")]
    IndexOutOfRange(u8),

    /// Reverse lookup of a byte that is not a symbol of the alphabet
    #[error("byte {0:#04x} is not a symbol of the alphabet")]
    SymbolNotFound(u8),

    /// Encoding was requested for a zero-length buffer
    #[error("cannot encode an empty buffer")]
    EmptyInput,

    /// The input length fails the validity predicate for the requested mode
    #[error("{length} is not a valid base64 length for the requested padding mode")]
    MalformedLength { length: usize, padded: bool },

    /// Padding started before the final symbol but did not run to the end
    #[error("padding must run to the end of the input once started")]
    MalformedPadding,

    /// Contradictory parameters
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A `String` container was requested but the bytes are not UTF-8
    #[error("container bytes are not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}
