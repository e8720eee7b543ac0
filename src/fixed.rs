// Fixed-width helpers: integers and 128-bit identifiers.
//
// A value is packed into its natural-width big-endian byte buffer and run
// through the general codec. Decoding must yield exactly that width; any
// buffer of the right length is accepted, including all zeros.

use crate::decode::decode;
use crate::encode::encode_small;
use crate::error::DecodeError;

mod sealed {
    pub trait Sealed {}
}

/// A value with a fixed-size big-endian byte representation.
///
/// Implemented for the 16/32/64/128-bit integers (signed values use their
/// two's-complement bytes) and, with the `uuid` feature, for [`uuid::Uuid`].
pub trait FixedWidth: sealed::Sealed + Sized {
    /// Width of the packed form in bytes.
    const WIDTH: usize;

    /// The packed byte buffer.
    type Bytes: AsRef<[u8]>;

    /// Pack into big-endian bytes.
    fn pack(self) -> Self::Bytes;

    /// Unpack from big-endian bytes; `None` unless `bytes.len() == WIDTH`.
    fn unpack(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FixedWidth for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();
            type Bytes = [u8; std::mem::size_of::<$ty>()];

            #[inline]
            fn pack(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            #[inline]
            fn unpack(bytes: &[u8]) -> Option<Self> {
                bytes.try_into().ok().map(<$ty>::from_be_bytes)
            }
        }
    )*};
}

impl_fixed_width!(u16, i16, u32, i32, u64, i64, u128, i128);

// Two big-endian 64-bit halves, most significant first.
#[cfg(feature = "uuid")]
impl sealed::Sealed for uuid::Uuid {}

#[cfg(feature = "uuid")]
impl FixedWidth for uuid::Uuid {
    const WIDTH: usize = 16;
    type Bytes = [u8; 16];

    fn pack(self) -> Self::Bytes {
        let (high, low) = self.as_u64_pair();
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&high.to_be_bytes());
        bytes[8..].copy_from_slice(&low.to_be_bytes());
        bytes
    }

    fn unpack(bytes: &[u8]) -> Option<Self> {
        let (high, low) = bytes.split_at_checked(8)?;
        Some(Self::from_u64_pair(u64::unpack(high)?, u64::unpack(low)?))
    }
}

/// Encode a fixed-width value. Never fails.
///
/// ```
/// assert_eq!(oxbase58::encode_fixed(0x61u32), "1112g");
/// ```
pub fn encode_fixed<T: FixedWidth>(value: T) -> String {
    encode_small(value.pack().as_ref())
}

/// Decode a fixed-width value.
///
/// # Errors
/// - [`DecodeError::InvalidCharacter`] from the general decoder.
/// - [`DecodeError::WrongLength`] if the decoded byte count is not `T::WIDTH`.
pub fn decode_fixed<T: FixedWidth>(input: &str) -> Result<T, DecodeError> {
    let bytes = decode(input)?;
    T::unpack(&bytes).ok_or_else(|| {
        log::debug!(
            "fixed-width decode: got {} bytes, want {}",
            bytes.len(),
            T::WIDTH
        );
        DecodeError::WrongLength {
            expected: T::WIDTH,
            actual: bytes.len(),
        }
    })
}

pub fn encode_u16(value: u16) -> String {
    encode_fixed(value)
}

pub fn encode_u32(value: u32) -> String {
    encode_fixed(value)
}

pub fn encode_u64(value: u64) -> String {
    encode_fixed(value)
}

pub fn encode_u128(value: u128) -> String {
    encode_fixed(value)
}

pub fn decode_u16(input: &str) -> Result<u16, DecodeError> {
    decode_fixed(input)
}

pub fn decode_u32(input: &str) -> Result<u32, DecodeError> {
    decode_fixed(input)
}

pub fn decode_u64(input: &str) -> Result<u64, DecodeError> {
    decode_fixed(input)
}

pub fn decode_u128(input: &str) -> Result<u128, DecodeError> {
    decode_fixed(input)
}

/// Encode a UUID as its 16 bytes.
#[cfg(feature = "uuid")]
pub fn encode_uuid(value: uuid::Uuid) -> String {
    encode_fixed(value)
}

#[cfg(feature = "uuid")]
pub fn decode_uuid(input: &str) -> Result<uuid::Uuid, DecodeError> {
    decode_fixed(input)
}
