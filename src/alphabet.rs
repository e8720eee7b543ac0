// The Bitcoin Base58 alphabet and its reverse lookup table.
//
// Both tables are `const` and computed at compile time, so they are shared
// read-only by every caller without synchronization.

/// The 58 symbols in digit order. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The glyph for digit zero; one per leading zero byte.
pub const ZERO_GLYPH: u8 = ALPHABET[0];

/// Sentinel in [`DIGITS`] for codes that are not Base58 digits.
pub const INVALID_DIGIT: u8 = 0xFF;

/// Maps every 7-bit character code to its digit value, or [`INVALID_DIGIT`].
pub const DIGITS: [u8; 128] = {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Digit value of `ch`, or `None` if it is outside the alphabet
/// (including every non-ASCII character).
#[inline]
pub fn digit_of(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DIGITS[ch as usize] {
        INVALID_DIGIT => None,
        d => Some(d),
    }
}

/// Glyph for a digit value in `0..58`.
#[inline]
pub(crate) fn glyph(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_inverts_alphabet() {
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(DIGITS[ch as usize], i as u8);
            assert_eq!(digit_of(ch as char), Some(i as u8));
            assert_eq!(glyph(i as u8), ch);
        }
    }

    #[test]
    fn ambiguous_glyphs_excluded() {
        for ch in ['0', 'O', 'I', 'l'] {
            assert_eq!(digit_of(ch), None, "{ch:?} must not be a digit");
        }
    }

    #[test]
    fn sentinel_count() {
        let valid = DIGITS.iter().filter(|&&d| d != INVALID_DIGIT).count();
        assert_eq!(valid, 58);
    }

    #[test]
    fn non_ascii_rejected() {
        assert_eq!(digit_of('é'), None);
        assert_eq!(digit_of('\u{7f}'), None);
        assert_eq!(digit_of('\0'), None);
        assert_eq!(digit_of('１'), None); // fullwidth digit one
    }
}
