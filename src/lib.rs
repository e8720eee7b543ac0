//! Oxbase58: Base58 encoding/decoding in Rust, using the Bitcoin alphabet.
//!
//! The crate provides:
//! - General byte-sequence codec ([`encode`], [`decode`])
//! - Fixed-width helpers for 16/32/64/128-bit integers and UUIDs (`fixed`)
//! - The in-place radix division kernels (`divmod`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! let s = oxbase58::encode(b"Hello, world!").unwrap();
//! assert_eq!(s, "72k1xXWG59wUsYv7h2");
//! assert_eq!(oxbase58::decode(&s).unwrap(), b"Hello, world!");
//!
//! let id = oxbase58::encode_u64(1_234_567_890);
//! assert_eq!(oxbase58::decode_u64(&id).unwrap(), 1_234_567_890);
//! ```
//!
//! Leading zero bytes are carried as leading `1` characters, so every byte
//! sequence round-trips exactly, length included.

pub mod alphabet;
pub mod decode;
pub mod divmod;
pub mod encode;
pub mod error;
pub mod fixed;

#[cfg(feature = "cli")]
pub mod cli;

pub use alphabet::ALPHABET;
pub use decode::decode;
pub use encode::{encode, encoded_capacity};
pub use error::{DecodeError, EncodeError};
pub use fixed::{
    FixedWidth, decode_fixed, decode_u16, decode_u32, decode_u64, decode_u128, encode_fixed,
    encode_u16, encode_u32, encode_u64, encode_u128,
};
#[cfg(feature = "uuid")]
pub use fixed::{decode_uuid, encode_uuid};
