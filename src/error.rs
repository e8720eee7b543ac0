// Error types shared by the encoder, decoder and fixed-width helpers.

use thiserror::Error;

/// Failure to encode a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input is so long that sizing the output buffer would overflow `usize`.
    #[error("input of {len} bytes exceeds encodable capacity")]
    CapacityExceeded { len: usize },
}

/// Failure to decode a Base58 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside the 58-symbol alphabet, reported at its first
    /// occurrence. `position` is a zero-based character index.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A fixed-width decode produced the wrong number of bytes.
    #[error("decoded {actual} bytes, expected exactly {expected}")]
    WrongLength { expected: usize, actual: usize },
}
