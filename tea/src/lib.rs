//! Implementations of the [TEA][1] (Tiny Encryption Algorithm) block
//! cipher and its revision [XTEA][2].
//!
//! Both take a 128-bit key and a 64-bit block, read as big-endian 32-bit
//! words, and run 32 Feistel cycles driven by the constant `0x9E3779B9`.
//!
//! # Usage
//!
//! ```rust
//! use tea::{Cipher, Cipherer, Xtea};
//! use hex_literal::hex;
//!
//! let mut cipherer = Xtea
//!     .new_cipherer(&hex!("000102030405060708090a0b0c0d0e0f"))
//!     .unwrap();
//! let mut block = hex!("4142434445464748");
//! cipherer.encrypt(&mut block).unwrap();
//! assert_eq!(block, hex!("497df3d072612cb5"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Tiny_Encryption_Algorithm
//! [2]: https://en.wikipedia.org/wiki/XTEA

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use framework::{self, Cipher, Cipherer};

use alloc::borrow::Cow;
use framework::{check_key_len, BlockCipherer, Result};

mod tea;
mod xtea;

pub use crate::tea::TeaCore;
pub use crate::xtea::XteaCore;

const DELTA: u32 = 0x9E37_79B9;
const CYCLES: u32 = 32;

fn read_key(key: &[u8]) -> [u32; 4] {
    let mut k = [0u32; 4];
    for (w, c) in k.iter_mut().zip(key.chunks_exact(4)) {
        *w = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
    }
    k
}

fn read_block(block: &[u8]) -> (u32, u32) {
    (
        u32::from_be_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_be_bytes([block[4], block[5], block[6], block[7]]),
    )
}

fn write_block(block: &mut [u8], v0: u32, v1: u32) {
    block[..4].copy_from_slice(&v0.to_be_bytes());
    block[4..].copy_from_slice(&v1.to_be_bytes());
}

/// The TEA block cipher: 128-bit key, 64-bit block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tea;

impl Cipher for Tea {
    type Cipherer = BlockCipherer<TeaCore>;

    fn name(&self) -> Cow<'static, str> {
        "TEA".into()
    }

    fn key_len(&self) -> usize {
        16
    }

    fn block_len(&self) -> usize {
        8
    }

    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer> {
        check_key_len(16, key)?;
        Ok(BlockCipherer::new(TeaCore::new(read_key(key))))
    }
}

/// The XTEA block cipher, a revision of [`Tea`] with a key schedule that
/// resists related-key attacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xtea;

impl Cipher for Xtea {
    type Cipherer = BlockCipherer<XteaCore>;

    fn name(&self) -> Cow<'static, str> {
        "XTEA".into()
    }

    fn key_len(&self) -> usize {
        16
    }

    fn block_len(&self) -> usize {
        8
    }

    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer> {
        check_key_len(16, key)?;
        Ok(BlockCipherer::new(XteaCore::new(read_key(key))))
    }
}
