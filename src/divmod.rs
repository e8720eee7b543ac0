// In-place long division between the two radices.
//
// A byte buffer is read as a big-endian base-256 numeral, a digit buffer as
// a big-endian base-58 numeral. Each call divides the whole numeral by the
// other radix, overwrites it with the quotient and returns the remainder.
// Positions before `start` are already-consumed leading zeros and are left
// untouched.
//
// The batched routines handle four positions per step and fall back to the
// single-position recurrence for the 0..=3 leftover positions. The plain
// single-position loops are kept as the reference for tests and benches.

/// Positions handled per batched step.
const BATCH: usize = 4;

const RADIX_58: u64 = 58;

/// 58^4, the weight of one batch of four base-58 digits.
const RADIX_58_POW4: u64 = 58 * 58 * 58 * 58;

/// Positional weights of the four digits in a batch, most significant first.
const BATCH_WEIGHTS: [u64; BATCH] = [58 * 58 * 58, 58 * 58, 58, 1];

/// Divide the base-256 numeral `number[start..]` by 58 in place.
/// Returns the remainder, in `0..58`.
///
/// Four bytes and the carried remainder form one 64-bit intermediate per
/// step; the quotient always fits back into the four bytes because the
/// carry is below 58.
pub fn divmod_256_58(number: &mut [u8], start: usize) -> u8 {
    let mut remainder: u64 = 0;
    let mut chunks = number[start..].chunks_exact_mut(BATCH);

    for chunk in &mut chunks {
        let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let temp = (remainder << 32) | u64::from(word);
        let quotient = temp / RADIX_58;
        remainder = temp - quotient * RADIX_58;
        chunk.copy_from_slice(&(quotient as u32).to_be_bytes());
    }

    for byte in chunks.into_remainder() {
        let temp = (remainder << 8) | u64::from(*byte);
        let quotient = temp / RADIX_58;
        remainder = temp - quotient * RADIX_58;
        *byte = quotient as u8;
    }

    remainder as u8
}

/// Divide the base-58 numeral `digits[start..]` by 2^16 in place.
/// Returns the remainder, i.e. the next two output bytes (low byte is the
/// less significant one).
///
/// A batch of four digits is weighted by 58^3..58^0 and combined with the
/// carried remainder; the high bits above 16 are the batch quotient, which
/// is split back into four base-58 digits.
pub fn divmod_58_256(digits: &mut [u8], start: usize) -> u16 {
    let mut remainder: u64 = 0;
    let mut chunks = digits[start..].chunks_exact_mut(BATCH);

    for chunk in &mut chunks {
        let batch: u64 = chunk
            .iter()
            .zip(BATCH_WEIGHTS)
            .map(|(&d, w)| u64::from(d) * w)
            .sum();
        let temp = remainder * RADIX_58_POW4 + batch;
        let mut quotient = temp >> 16;
        remainder = temp & 0xFFFF;
        for (d, w) in chunk.iter_mut().zip(BATCH_WEIGHTS) {
            *d = (quotient / w) as u8;
            quotient %= w;
        }
    }

    for d in chunks.into_remainder() {
        let temp = remainder * RADIX_58 + u64::from(*d);
        *d = (temp >> 16) as u8;
        remainder = temp & 0xFFFF;
    }

    remainder as u16
}

/// One-byte-at-a-time form of [`divmod_256_58`].
pub fn divmod_256_58_single(number: &mut [u8], start: usize) -> u8 {
    let mut remainder: u32 = 0;
    for byte in &mut number[start..] {
        let temp = (remainder << 8) + u32::from(*byte);
        let quotient = temp / 58;
        remainder = temp - quotient * 58;
        *byte = quotient as u8;
    }
    remainder as u8
}

/// One-digit-at-a-time form of [`divmod_58_256`].
pub fn divmod_58_256_single(digits: &mut [u8], start: usize) -> u16 {
    let mut remainder: u32 = 0;
    for d in &mut digits[start..] {
        let temp = remainder * 58 + u32::from(*d);
        *d = (temp >> 16) as u8;
        remainder = temp & 0xFFFF;
    }
    remainder as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg_bytes(len: usize, seed: u64, modulus: u8) -> Vec<u8> {
        let mut s = seed;
        (0..len)
            .map(|_| {
                s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((s >> 33) % u64::from(modulus)) as u8
            })
            .collect()
    }

    #[test]
    fn small_byte_numerals() {
        // 0x01_00 = 256 = 4 * 58 + 24
        let mut n = [0x01, 0x00];
        assert_eq!(divmod_256_58(&mut n, 0), 24);
        assert_eq!(n, [0x00, 0x04]);

        let mut n = [57];
        assert_eq!(divmod_256_58(&mut n, 0), 57);
        assert_eq!(n, [0]);
    }

    #[test]
    fn start_prefix_is_untouched() {
        let mut n = [0xAA, 0xBB, 0x01, 0x00];
        assert_eq!(divmod_256_58(&mut n, 2), 24);
        assert_eq!(n, [0xAA, 0xBB, 0x00, 0x04]);

        let mut d = [9, 9, 1, 0];
        // "10" in base 58 is 58 < 65536
        assert_eq!(divmod_58_256(&mut d, 2), 58);
        assert_eq!(d, [9, 9, 0, 0]);
    }

    #[test]
    fn batch_of_four_bytes() {
        // 0xFFFFFFFF / 58 = 74051160 rem 15
        let mut n = [0xFF; 4];
        assert_eq!(divmod_256_58(&mut n, 0), 15);
        assert_eq!(u32::from_be_bytes(n), 74_051_160);
    }

    #[test]
    fn batch_of_four_digits() {
        // 58^4 - 1 = 11316495 = 172 * 65536 + 44303
        let mut d = [57; 4];
        assert_eq!(divmod_58_256(&mut d, 0), 44_303);
        // 172 = 2 * 58 + 56
        assert_eq!(d, [0, 0, 2, 56]);
    }

    #[test]
    fn batched_matches_single_on_all_tail_lengths() {
        for len in 0..=41 {
            for start in 0..=len.min(5) {
                let mut a = lcg_bytes(len, len as u64 * 31 + 7, 255);
                let mut b = a.clone();
                assert_eq!(
                    divmod_256_58(&mut a, start),
                    divmod_256_58_single(&mut b, start),
                    "bytes len={len} start={start}"
                );
                assert_eq!(a, b);

                let mut a = lcg_bytes(len, len as u64 * 17 + 3, 58);
                let mut b = a.clone();
                assert_eq!(
                    divmod_58_256(&mut a, start),
                    divmod_58_256_single(&mut b, start),
                    "digits len={len} start={start}"
                );
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn empty_range_yields_zero() {
        let mut n = [1, 2, 3];
        assert_eq!(divmod_256_58(&mut n, 3), 0);
        assert_eq!(divmod_58_256(&mut n, 3), 0);
        assert_eq!(n, [1, 2, 3]);
    }
}
