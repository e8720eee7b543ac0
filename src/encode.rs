// Base58 encoding: bytes -> string.
//
// Leading zero bytes map one-to-one onto leading zero glyphs. The rest of
// the input is a big-endian base-256 numeral, repeatedly divided by 58 in a
// private working copy; each remainder is one output glyph, written from the
// end of the output buffer backwards.

use crate::alphabet::{ZERO_GLYPH, glyph};
use crate::divmod::divmod_256_58;
use crate::error::EncodeError;

/// `138 / 100` is just over `log(256) / log(58)` (~1.3657).
const CAPACITY_NUM: usize = 138;
const CAPACITY_DEN: usize = 100;

/// Upper bound on the encoded length of `len` input bytes, or `None` if the
/// computation would overflow `usize`.
#[inline]
pub const fn encoded_capacity(len: usize) -> Option<usize> {
    match len.checked_mul(CAPACITY_NUM) {
        Some(scaled) => Some(scaled / CAPACITY_DEN + 1),
        None => None,
    }
}

/// Encode `input` as a Base58 string.
///
/// The empty input encodes to the empty string. The caller's slice is never
/// modified.
///
/// # Errors
/// - [`EncodeError::CapacityExceeded`] if sizing the output would overflow.
///
/// ```
/// assert_eq!(oxbase58::encode(b"Hello, world!").unwrap(), "72k1xXWG59wUsYv7h2");
/// assert_eq!(oxbase58::encode(&[0, 0, 0x61]).unwrap(), "112g");
/// ```
pub fn encode(input: &[u8]) -> Result<String, EncodeError> {
    let capacity =
        encoded_capacity(input.len()).ok_or(EncodeError::CapacityExceeded { len: input.len() })?;
    Ok(encode_bounded(input, capacity))
}

/// Encode a buffer of at most a few dozen bytes, where sizing cannot overflow.
pub(crate) fn encode_small(input: &[u8]) -> String {
    encode_bounded(input, input.len() * CAPACITY_NUM / CAPACITY_DEN + 1)
}

/// `capacity` must be at least the encoded length of `input`.
fn encode_bounded(input: &[u8], capacity: usize) -> String {
    if input.is_empty() {
        return String::new();
    }

    let zeros = input.iter().take_while(|&&b| b == 0).count();
    log::trace!(
        "base58 encode: {} bytes, {zeros} leading zeros",
        input.len()
    );

    let mut number = input.to_vec();
    let mut out = vec![0u8; capacity];
    let mut cursor = capacity;
    let mut start = zeros;

    while start < number.len() {
        let remainder = divmod_256_58(&mut number, start);
        cursor -= 1;
        out[cursor] = glyph(remainder);
        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }

    // Skip any zero glyphs left in the slack; the prefix below is the only
    // source of leading ones.
    while cursor < capacity && out[cursor] == ZERO_GLYPH {
        cursor += 1;
    }
    cursor -= zeros;
    out[cursor..cursor + zeros].fill(ZERO_GLYPH);

    out[cursor..].iter().map(|&b| char::from(b)).collect()
}
