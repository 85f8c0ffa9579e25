//! An implementation of the [RC2][1] block cipher, as described in
//! RFC 2268.
//!
//! RC2 takes a variable-length key of 1 to 128 bytes together with an
//! "effective key length" in bits that caps the strength of the expanded
//! key. Both are parameters of the [`Rc2`] descriptor.
//!
//! # Usage
//!
//! ```rust
//! use rc2::{Cipher, Cipherer, Rc2};
//! use hex_literal::hex;
//!
//! let rc2 = Rc2::new(64, 8).unwrap();
//! let mut cipherer = rc2.new_cipherer(&hex!("ffffffffffffffff")).unwrap();
//! let mut block = hex!("ffffffffffffffff");
//! cipherer.encrypt(&mut block).unwrap();
//! assert_eq!(block, hex!("278b27e42e2f0d49"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RC2

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
use framework::{check_key_len, BlockCipherCore, BlockCipherer, Error};
use zeroize::Zeroize;

mod consts;

use crate::consts::{PITABLE, SHIFTS};

/// The RC2 block cipher with a fixed key length and effective key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rc2 {
    effective_bits: usize,
    key_len: usize,
}

impl Rc2 {
    /// Describes RC2 with an effective key length of `effective_bits`
    /// (1 to 1024) and keys of `key_len` bytes (1 to 128).
    pub fn new(effective_bits: usize, key_len: usize) -> framework::Result<Self> {
        if !(1..=128).contains(&key_len) {
            return Err(Error::InvalidConfiguration(
                "RC2 key length must be between 1 and 128 bytes",
            ));
        }
        if !(1..=1024).contains(&effective_bits) {
            return Err(Error::InvalidConfiguration(
                "RC2 effective key length must be between 1 and 1024 bits",
            ));
        }
        Ok(Self {
            effective_bits,
            key_len,
        })
    }

    /// Effective key length in bits.
    pub fn effective_key_bits(&self) -> usize {
        self.effective_bits
    }
}

impl Cipher for Rc2 {
    type Cipherer = BlockCipherer<Rc2Core>;

    fn name(&self) -> Cow<'static, str> {
        alloc::format!(
            "RC2 ({}-bit effective key length, {}-bit key)",
            self.effective_bits,
            self.key_len * 8
        )
        .into()
    }

    fn key_len(&self) -> usize {
        self.key_len
    }

    fn block_len(&self) -> usize {
        8
    }

    fn new_cipherer(&self, key: &[u8]) -> framework::Result<Self::Cipherer> {
        check_key_len(self.key_len, key)?;
        Ok(BlockCipherer::new(Rc2Core::new(key, self.effective_bits)))
    }
}

/// Expanded RC2 key: 64 words of 16 bits.
#[derive(Clone)]
pub struct Rc2Core {
    k: [u16; 64],
}

impl Rc2Core {
    fn new(key: &[u8], effective_bits: usize) -> Self {
        let t8 = (effective_bits + 7) / 8;
        let tm = 0xFFu8 >> (8 * t8 - effective_bits);

        let mut l = [0u8; 128];
        l[..key.len()].copy_from_slice(key);
        for i in key.len()..128 {
            l[i] = PITABLE[l[i - 1].wrapping_add(l[i - key.len()]) as usize];
        }
        l[128 - t8] = PITABLE[(l[128 - t8] & tm) as usize];
        for i in (0..128 - t8).rev() {
            l[i] = PITABLE[(l[i + 1] ^ l[i + t8]) as usize];
        }

        let mut k = [0u16; 64];
        for (w, pair) in k.iter_mut().zip(l.chunks_exact(2)) {
            *w = u16::from_le_bytes([pair[0], pair[1]]);
        }
        l.zeroize();
        Self { k }
    }

    #[inline]
    fn mix(&self, r: &mut [u16; 4], j: usize) {
        for i in 0..4 {
            r[i] = r[i]
                .wrapping_add(self.k[j + i])
                .wrapping_add(r[(i + 3) & 3] & r[(i + 2) & 3])
                .wrapping_add(!r[(i + 3) & 3] & r[(i + 1) & 3])
                .rotate_left(SHIFTS[i]);
        }
    }

    #[inline]
    fn mix_inv(&self, r: &mut [u16; 4], j: usize) {
        for i in (0..4).rev() {
            r[i] = r[i]
                .rotate_right(SHIFTS[i])
                .wrapping_sub(self.k[j + i])
                .wrapping_sub(r[(i + 3) & 3] & r[(i + 2) & 3])
                .wrapping_sub(!r[(i + 3) & 3] & r[(i + 1) & 3]);
        }
    }

    #[inline]
    fn mash(&self, r: &mut [u16; 4]) {
        for i in 0..4 {
            r[i] = r[i].wrapping_add(self.k[(r[(i + 3) & 3] & 63) as usize]);
        }
    }

    #[inline]
    fn mash_inv(&self, r: &mut [u16; 4]) {
        for i in (0..4).rev() {
            r[i] = r[i].wrapping_sub(self.k[(r[(i + 3) & 3] & 63) as usize]);
        }
    }
}

fn load(block: &[u8]) -> [u16; 4] {
    let mut r = [0u16; 4];
    for (w, pair) in r.iter_mut().zip(block.chunks_exact(2)) {
        *w = u16::from_le_bytes([pair[0], pair[1]]);
    }
    r
}

fn store(r: &[u16; 4], block: &mut [u8]) {
    for (pair, w) in block.chunks_exact_mut(2).zip(r.iter()) {
        pair.copy_from_slice(&w.to_le_bytes());
    }
}

impl BlockCipherCore for Rc2Core {
    const BLOCK_LEN: usize = 8;

    fn encrypt_block(&self, block: &mut [u8]) {
        let mut r = load(block);
        // 16 mixing rounds, mashing after the 5th and the 11th
        for round in 0..16 {
            self.mix(&mut r, 4 * round);
            if round == 4 || round == 10 {
                self.mash(&mut r);
            }
        }
        store(&r, block);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let mut r = load(block);
        for round in (0..16).rev() {
            self.mix_inv(&mut r, 4 * round);
            if round == 11 || round == 5 {
                self.mash_inv(&mut r);
            }
        }
        store(&r, block);
    }

    fn wipe(&mut self) {
        self.k.zeroize();
    }
}

opaque_debug::implement!(Rc2Core);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitable_is_a_permutation() {
        let mut seen = [false; 256];
        for &b in PITABLE.iter() {
            assert!(!seen[b as usize]);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn effective_length_mask() {
        // L[120] = 0xB8 for this key: 63 effective bits drop its top bit.
        let a = Rc2Core::new(&[0xFF; 8], 63);
        let b = Rc2Core::new(&[0xFF; 8], 64);
        assert_eq!(a.k[0], 0xCB14);
        assert_eq!(b.k[0], 0x8E77);
        assert_ne!(a.k[60], b.k[60]);
        assert_eq!(a.k[61..], b.k[61..]);
    }

    #[test]
    fn debug_is_opaque() {
        let core = Rc2Core::new(&[0xFF; 8], 64);
        assert_eq!(alloc::format!("{:?}", core), "Rc2Core { ... }");
    }

    #[test]
    fn wipe_clears_key_schedule() {
        let mut core = Rc2Core::new(b"secret", 64);
        core.wipe();
        assert_eq!(core.k, [0; 64]);
    }
}
