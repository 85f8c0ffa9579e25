//! Non-cryptographic hash functions behind the same [`HashFunction`]
//! interface as the cryptographic ones.
//!
//! - [`Crc32`]: the CRC-32 of ISO 3309 / ITU-T V.42 (as used by zlib),
//!   output as 4 big-endian bytes.
//! - [`Xor8`]: the XOR of all message bytes.
//! - [`Zero`]: always a single zero byte.
//!
//! None of them buffers input, so updates of any size cost the same per
//! byte.
//!
//! # Usage
//!
//! ```rust
//! use checksum::{Crc32, HashFunction};
//!
//! assert_eq!(Crc32.hash(b"abc").unwrap().to_string(), "352441C2");
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use framework::{self, HashFunction, Hasher};

mod crc32;
mod xor8;
mod zero;

pub use crate::crc32::{Crc32, Crc32Hasher};
pub use crate::xor8::{Xor8, Xor8Hasher};
pub use crate::zero::{Zero, ZeroHasher};
