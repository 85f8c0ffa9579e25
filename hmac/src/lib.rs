//! Generic implementation of the [HMAC][1] keyed message authentication
//! code (RFC 2104) over any [`BlockHashFunction`].
//!
//! The key is padded once, at construction, into two template hashers that
//! have already absorbed the inner and outer pads. Every MAC computation
//! clones the templates, so an [`Hmac`] can be used any number of times.
//!
//! # Usage
//!
//! ```rust
//! use hmac::{HashFunction, Hasher, Hmac};
//! use md5::Md5;
//!
//! let hmac = Hmac::new(Md5, b"Jefe").unwrap();
//! assert_eq!(hmac.name(), "HMAC-MD5");
//!
//! let mut hasher = hmac.new_hasher().unwrap();
//! hasher.update(b"what do ya want ").unwrap();
//! hasher.update(b"for nothing?").unwrap();
//! assert_eq!(
//!     hasher.finalize().unwrap().to_string(),
//!     "750C783E6AB0B503EAA86E310A5DB738"
//! );
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/HMAC

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use framework::{self, BlockHashFunction, HashFunction, Hasher};

use alloc::{borrow::Cow, vec, vec::Vec};
use core::fmt;
use framework::{Error, HashValue, Result, Zeroizable};
use zeroize::Zeroizing;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// HMAC over the block hash function `H`, keyed at construction.
pub struct Hmac<H>
where
    H: BlockHashFunction,
    H::Hasher: Clone,
{
    hash_fn: H,
    /// Inner and outer templates; `None` once zeroized.
    templates: Option<(H::Hasher, H::Hasher)>,
}

impl<H> Hmac<H>
where
    H: BlockHashFunction,
    H::Hasher: Clone,
{
    /// Keys HMAC over `hash_fn` with `key`, which may have any length.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if the block length of
    /// `hash_fn` is smaller than its digest length.
    pub fn new(hash_fn: H, key: &[u8]) -> Result<Self> {
        let mut pad = Self::effective_key(&hash_fn, key)?;
        let mut inner = hash_fn.new_hasher()?;
        let mut outer = hash_fn.new_hasher()?;
        pad.iter_mut().for_each(|b| *b ^= IPAD);
        inner.update(&pad)?;
        pad.iter_mut().for_each(|b| *b ^= IPAD ^ OPAD);
        outer.update(&pad)?;
        log::trace!("HMAC-{}: keyed", hash_fn.name());

        Ok(Self {
            hash_fn,
            templates: Some((inner, outer)),
        })
    }

    /// Returns the key as HMAC uses it: hashed first if longer than the
    /// block length, then zero-extended to exactly the block length.
    pub fn effective_key(hash_fn: &H, key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let block_len = hash_fn.block_len();
        if block_len < hash_fn.hash_len() {
            return Err(Error::InvalidConfiguration(
                "HMAC needs a block length of at least the digest length",
            ));
        }
        let mut k = Zeroizing::new(vec![0u8; block_len]);
        if key.len() > block_len {
            log::debug!(
                "HMAC-{}: {}-byte key exceeds the block length, hashing it",
                hash_fn.name(),
                key.len()
            );
            let digest = hash_fn.hash(key)?;
            k[..digest.len()].copy_from_slice(digest.as_bytes());
        } else {
            k[..key.len()].copy_from_slice(key);
        }
        Ok(k)
    }

    /// The underlying hash function.
    pub fn hash_function(&self) -> &H {
        &self.hash_fn
    }

    /// Computes the MAC of `data` in one call.
    pub fn mac(&self, data: &[u8]) -> Result<HashValue> {
        self.hash(data)
    }
}

impl<H> HashFunction for Hmac<H>
where
    H: BlockHashFunction,
    H::Hasher: Clone,
{
    type Hasher = HmacHasher<H::Hasher>;

    fn name(&self) -> Cow<'static, str> {
        alloc::format!("HMAC-{}", self.hash_fn.name()).into()
    }

    fn hash_len(&self) -> usize {
        self.hash_fn.hash_len()
    }

    fn new_hasher(&self) -> Result<Self::Hasher> {
        let (inner, outer) = self.templates.as_ref().ok_or(Error::AlreadyZeroized)?;
        Ok(HmacHasher {
            inner: inner.clone(),
            outer: outer.clone(),
        })
    }
}

impl<H> Zeroizable for Hmac<H>
where
    H: BlockHashFunction,
    H::Hasher: Clone,
{
    fn zeroize(&mut self) -> Result<()> {
        let (mut inner, mut outer) = self.templates.take().ok_or(Error::AlreadyZeroized)?;
        inner.zeroize()?;
        outer.zeroize()?;
        log::trace!("HMAC-{}: zeroized", self.hash_fn.name());
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.templates.is_none()
    }
}

impl<H> Clone for Hmac<H>
where
    H: BlockHashFunction + Clone,
    H::Hasher: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hash_fn: self.hash_fn.clone(),
            templates: self.templates.clone(),
        }
    }
}

impl<H> fmt::Debug for Hmac<H>
where
    H: BlockHashFunction,
    H::Hasher: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("hash", &self.hash_fn.name())
            .field("zeroized", &self.is_zeroized())
            .finish_non_exhaustive()
    }
}

/// One MAC computation in progress.
#[derive(Clone)]
pub struct HmacHasher<T: Hasher> {
    inner: T,
    outer: T,
}

impl<T: Hasher> Hasher for HmacHasher<T> {
    fn hash_len(&self) -> usize {
        self.outer.hash_len()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn finalize(self) -> Result<HashValue> {
        let Self { inner, mut outer } = self;
        let inner_digest = inner.finalize()?;
        outer.update(inner_digest.as_bytes())?;
        outer.finalize()
    }
}

impl<T: Hasher> Zeroizable for HmacHasher<T> {
    fn zeroize(&mut self) -> Result<()> {
        self.inner.zeroize()?;
        self.outer.zeroize()
    }

    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<T: Hasher> fmt::Debug for HmacHasher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacHasher { ... }")
    }
}
