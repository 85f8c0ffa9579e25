//! An implementation of the [RC4][1] stream cipher.
//!
//! RC4 is broken and should only be used for compatibility with existing
//! data. Encryption and decryption are the same operation: XOR with a
//! keystream that advances across calls.
//!
//! # Usage
//!
//! ```rust
//! use rc4::{Cipher, Cipherer, Rc4};
//! use hex_literal::hex;
//!
//! let rc4 = Rc4::new(3).unwrap();
//! let mut cipherer = rc4.new_cipherer(b"Key").unwrap();
//! let mut data = *b"Plaintext";
//! cipherer.encrypt(&mut data).unwrap();
//! assert_eq!(data, hex!("bbf316e8d940af0ad3"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RC4

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
use framework::{check_key_len, Error, StreamCipherCore, StreamCipherer};
use zeroize::Zeroize;

/// The RC4 stream cipher with a fixed key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rc4 {
    key_len: usize,
}

impl Rc4 {
    /// Describes RC4 with keys of `key_len` bytes (1 to 256).
    pub fn new(key_len: usize) -> framework::Result<Self> {
        if !(1..=256).contains(&key_len) {
            return Err(Error::InvalidConfiguration(
                "RC4 key length must be between 1 and 256 bytes",
            ));
        }
        Ok(Self { key_len })
    }
}

impl Cipher for Rc4 {
    type Cipherer = StreamCipherer<Rc4Core>;

    fn name(&self) -> Cow<'static, str> {
        alloc::format!("RC4 ({}-bit key)", self.key_len * 8).into()
    }

    fn key_len(&self) -> usize {
        self.key_len
    }

    fn block_len(&self) -> usize {
        1
    }

    fn new_cipherer(&self, key: &[u8]) -> framework::Result<Self::Cipherer> {
        check_key_len(self.key_len, key)?;
        Ok(StreamCipherer::new(Rc4Core::new(key)))
    }
}

/// RC4 permutation and stream indices.
#[derive(Clone)]
pub struct Rc4Core {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4Core {
    fn new(key: &[u8]) -> Self {
        let mut s = [0u8; 256];
        for (i, b) in s.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }
        Self { s, i: 0, j: 0 }
    }
}

impl StreamCipherCore for Rc4Core {
    fn apply_keystream(&mut self, buf: &mut [u8]) {
        let s = &mut self.s;
        for b in buf.iter_mut() {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(s[self.i as usize]);
            s.swap(self.i as usize, self.j as usize);
            *b ^= s[s[self.i as usize].wrapping_add(s[self.j as usize]) as usize];
        }
    }

    fn wipe(&mut self) {
        self.s.zeroize();
        self.i = 0;
        self.j = 0;
    }
}

opaque_debug::implement!(Rc4Core);
