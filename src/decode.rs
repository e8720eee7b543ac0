// Base58 decoding: string -> bytes.
//
// Mirror of the encoder. Characters are mapped to digits up front, so an
// invalid character fails the call before any arithmetic happens. The digit
// numeral is then divided by 2^16 in place, each remainder yielding two
// output bytes written from the end backwards.

use crate::alphabet::digit_of;
use crate::divmod::divmod_58_256;
use crate::error::DecodeError;

/// Upper bound on the bytes produced by dividing out `digit_count` base-58
/// digits two bytes at a time: `3/4` is just over `log(58) / log(256)`
/// (~0.7322), rounded up to a whole number of byte pairs.
#[inline]
fn scratch_len(digit_count: usize) -> usize {
    (digit_count - digit_count / 4).next_multiple_of(2)
}

/// Decode a Base58 string into bytes.
///
/// The empty string decodes to an empty vector. Each leading `1` becomes one
/// leading zero byte.
///
/// # Errors
/// - [`DecodeError::InvalidCharacter`] for the first character outside the
///   alphabet. No partial output is produced.
///
/// ```
/// assert_eq!(oxbase58::decode("72k1xXWG59wUsYv7h2").unwrap(), b"Hello, world!");
/// assert!(oxbase58::decode("0OIl").is_err());
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    // Every character before a rejected one is ASCII, so the byte offset
    // from `char_indices` is also the character index.
    let mut digits = Vec::with_capacity(input.len());
    for (position, character) in input.char_indices() {
        match digit_of(character) {
            Some(d) => digits.push(d),
            None => {
                log::debug!("base58 decode rejected {character:?} at position {position}");
                return Err(DecodeError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    log::trace!(
        "base58 decode: {} digits, {zeros} leading zeros",
        digits.len()
    );

    let capacity = zeros + scratch_len(digits.len() - zeros);
    let mut out = vec![0u8; capacity];
    let mut cursor = capacity;
    let mut start = zeros;

    while start < digits.len() {
        let remainder = divmod_58_256(&mut digits, start);
        cursor -= 2;
        out[cursor..cursor + 2].copy_from_slice(&remainder.to_be_bytes());
        while start < digits.len() && digits[start] == 0 {
            start += 1;
        }
    }

    // The last pair may carry a zero high byte, and the estimate may leave
    // unwritten slack: trim both, then keep exactly one zero per leading `1`.
    while cursor < capacity && out[cursor] == 0 {
        cursor += 1;
    }
    cursor -= zeros;
    out.drain(..cursor);
    Ok(out)
}
