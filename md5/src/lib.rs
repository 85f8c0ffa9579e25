//! An implementation of the [MD5][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use md5::{HashFunction, Hasher, Md5};
//!
//! // create a Md5 hasher instance
//! let mut hasher = Md5.new_hasher().unwrap();
//!
//! // process input message
//! hasher.update(b"hello world").unwrap();
//!
//! // acquire hash digest, which consumes the hasher
//! let result = hasher.finalize().unwrap();
//! assert_eq!(result.to_string(), "5EB63BBBE01EEED093CB22BB8F5ACDC3");
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD5

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use framework::{self, BlockHashFunction, HashFunction, Hasher};

use alloc::borrow::Cow;
use digest::{
    consts::{U16, U64},
    generic_array::GenericArray,
};
use framework::{Block, BlockHashCore, BlockHasher};
use zeroize::Zeroize;

mod compress;
mod consts;

use crate::compress::compress;

/// Core MD5 hasher state.
#[derive(Clone)]
pub struct Md5Core {
    state: [u32; 4],
}

impl BlockHashCore for Md5Core {
    type BlockSize = U64;
    type OutputSize = U16;
    const LENGTH_FIELD_LEN: usize = 8;

    #[inline]
    fn compress(&mut self, block: &Block<Self>) {
        compress(&mut self.state, block)
    }

    /// RFC 1321 appends the bit length modulo 2^64, little-endian.
    fn write_length(bit_len: u128, field: &mut [u8]) {
        field.copy_from_slice(&(bit_len as u64).to_le_bytes());
    }

    fn output(&self, out: &mut GenericArray<u8, U16>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Self { state: consts::S0 }
    }
}

opaque_debug::implement!(Md5Core);

/// MD5 hasher state.
pub type Md5Hasher = BlockHasher<Md5Core>;

/// The MD5 hash function (RFC 1321).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Md5;

impl HashFunction for Md5 {
    type Hasher = Md5Hasher;

    fn name(&self) -> Cow<'static, str> {
        "MD5".into()
    }

    fn hash_len(&self) -> usize {
        16
    }

    fn new_hasher(&self) -> framework::Result<Md5Hasher> {
        Ok(Md5Hasher::default())
    }
}

impl BlockHashFunction for Md5 {
    fn block_len(&self) -> usize {
        64
    }
}
