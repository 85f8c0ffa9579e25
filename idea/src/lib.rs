//! An implementation of the [IDEA][1] (International Data Encryption
//! Algorithm) block cipher.
//!
//! IDEA encrypts 64-bit blocks under a 128-bit key in eight rounds plus an
//! output transformation, mixing three incompatible group operations on
//! 16-bit words: XOR, addition modulo 2^16 and multiplication modulo
//! 2^16 + 1.
//!
//! # Usage
//!
//! ```rust
//! use idea::{Cipher, Cipherer, Idea};
//! use hex_literal::hex;
//!
//! let mut cipherer = Idea
//!     .new_cipherer(&hex!("00010002000300040005000600070008"))
//!     .unwrap();
//! let mut block = hex!("0000000100020003");
//! cipherer.encrypt(&mut block).unwrap();
//! assert_eq!(block, hex!("11fbed2b01986de5"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/International_Data_Encryption_Algorithm

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
use framework::{check_key_len, BlockCipherCore, BlockCipherer};
use zeroize::Zeroize;

const SUBKEYS: usize = 52;

/// Multiplication modulo 2^16 + 1, where the word 0 stands for 2^16.
#[inline]
fn mul(a: u16, b: u16) -> u16 {
    let a = if a == 0 { 0x1_0000 } else { a as u64 };
    let b = if b == 0 { 0x1_0000 } else { b as u64 };
    (a * b % 0x1_0001) as u16
}

/// Multiplicative inverse modulo 2^16 + 1, by Fermat's little theorem.
fn mul_inv(x: u16) -> u16 {
    if x <= 1 {
        return x;
    }
    let mut base = x as u64;
    let mut exp = 0x1_0001 - 2;
    let mut acc = 1u64;
    while exp != 0 {
        if exp & 1 != 0 {
            acc = acc * base % 0x1_0001;
        }
        base = base * base % 0x1_0001;
        exp >>= 1;
    }
    acc as u16
}

fn encryption_keys(key: &[u8]) -> [u16; SUBKEYS] {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(key);
    let mut k = u128::from_be_bytes(buf);
    buf.zeroize();

    let mut e = [0u16; SUBKEYS];
    for (i, sub) in e.iter_mut().enumerate() {
        if i != 0 && i % 8 == 0 {
            k = k.rotate_left(25);
        }
        *sub = (k >> (112 - 16 * (i % 8))) as u16;
    }
    k.zeroize();
    e
}

fn decryption_keys(e: &[u16; SUBKEYS]) -> [u16; SUBKEYS] {
    let mut d = [0u16; SUBKEYS];
    d[0] = mul_inv(e[48]);
    d[1] = e[49].wrapping_neg();
    d[2] = e[50].wrapping_neg();
    d[3] = mul_inv(e[51]);
    // The middle two additive keys swap places in every inner round.
    for r in 1..8 {
        let b = 48 - 6 * r;
        d[6 * r - 2] = e[b + 4];
        d[6 * r - 1] = e[b + 5];
        d[6 * r] = mul_inv(e[b]);
        d[6 * r + 1] = e[b + 2].wrapping_neg();
        d[6 * r + 2] = e[b + 1].wrapping_neg();
        d[6 * r + 3] = mul_inv(e[b + 3]);
    }
    d[46] = e[4];
    d[47] = e[5];
    d[48] = mul_inv(e[0]);
    d[49] = e[1].wrapping_neg();
    d[50] = e[2].wrapping_neg();
    d[51] = mul_inv(e[3]);
    d
}

fn crypt(block: &mut [u8], k: &[u16; SUBKEYS]) {
    let mut x = [0u16; 4];
    for (w, b) in x.iter_mut().zip(block.chunks_exact(2)) {
        *w = u16::from_be_bytes([b[0], b[1]]);
    }

    for r in k[..48].chunks_exact(6) {
        let a = mul(x[0], r[0]);
        let b = x[1].wrapping_add(r[1]);
        let c = x[2].wrapping_add(r[2]);
        let d = mul(x[3], r[3]);
        let e = mul(a ^ c, r[4]);
        let f = mul((b ^ d).wrapping_add(e), r[5]);
        let e = e.wrapping_add(f);
        x = [a ^ f, c ^ f, b ^ e, d ^ e];
    }

    let out = [
        mul(x[0], k[48]),
        x[2].wrapping_add(k[49]),
        x[1].wrapping_add(k[50]),
        mul(x[3], k[51]),
    ];
    for (b, w) in block.chunks_exact_mut(2).zip(out.iter()) {
        b.copy_from_slice(&w.to_be_bytes());
    }
}

/// IDEA key schedules for both directions.
#[derive(Clone)]
pub struct IdeaCore {
    enc: [u16; SUBKEYS],
    dec: [u16; SUBKEYS],
}

impl IdeaCore {
    /// Expands a 16-byte key.
    fn new(key: &[u8]) -> Self {
        let enc = encryption_keys(key);
        let dec = decryption_keys(&enc);
        Self { enc, dec }
    }
}

impl BlockCipherCore for IdeaCore {
    const BLOCK_LEN: usize = 8;

    fn encrypt_block(&self, block: &mut [u8]) {
        crypt(block, &self.enc)
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        crypt(block, &self.dec)
    }

    fn wipe(&mut self) {
        self.enc.zeroize();
        self.dec.zeroize();
    }
}

opaque_debug::implement!(IdeaCore);

/// The IDEA block cipher: 128-bit key, 64-bit block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Idea;

impl Cipher for Idea {
    type Cipherer = BlockCipherer<IdeaCore>;

    fn name(&self) -> Cow<'static, str> {
        "IDEA".into()
    }

    fn key_len(&self) -> usize {
        16
    }

    fn block_len(&self) -> usize {
        8
    }

    fn new_cipherer(&self, key: &[u8]) -> framework::Result<Self::Cipherer> {
        check_key_len(16, key)?;
        Ok(BlockCipherer::new(IdeaCore::new(key)))
    }
}
