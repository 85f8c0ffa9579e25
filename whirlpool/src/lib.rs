//! An implementation of the [Whirlpool][1] cryptographic hash algorithm and
//! of its internal 512-bit block cipher `W`.
//!
//! This is the algorithm recommended by NESSIE (New European Schemes for
//! Signatures, Integrity and Encryption; an European research project).
//!
//! The constants used by Whirlpool were changed twice (2001 and 2003). All
//! three versions are available through [`Version`]: Whirlpool-0 (pre 2001),
//! Whirlpool-T (pre 2003) and the final Whirlpool, which is the default.
//!
//! Two compression cores produce identical digests: [`ReferenceCore`]
//! follows the byte-oriented description of the cipher round, and
//! [`FastCore`] folds the round into 64-bit lookup tables. [`Whirlpool`]
//! uses the fast core unless the `reference` feature is enabled.
//!
//! For details see <http://www.larc.usp.br/~pbarreto/WhirlpoolPage.html>.
//!
//! # Usage
//!
//! ```rust
//! use whirlpool::{HashFunction, Hasher, Whirlpool};
//! use hex_literal::hex;
//!
//! let mut hasher = Whirlpool::default().new_hasher().unwrap();
//! hasher.update(b"Hello Whirlpool").unwrap();
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize().unwrap();
//!
//! assert_eq!(result.as_bytes(), &hex!("
//!     8eaccdc136903c458ea0b1376be2a5fc9dc5b8ce8892a3b4f43366e2610c206c
//!     a373816495e63db0fff2ff25f75aa7162f332c9f518c3036456502a8414d300a
//! ")[..]);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Whirlpool_(hash_function)

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use framework::{self, BlockHashFunction, Cipher, Cipherer, HashFunction, Hasher};

use alloc::borrow::Cow;
use framework::{check_key_len, BlockCipherer, BlockHasher, Result};

mod cipher;
mod compress;
mod consts;
mod tables;

pub use crate::cipher::WhirlpoolCipherCore;
pub use crate::compress::{FastCore, ReferenceCore};

use crate::tables::Tables;

cfg_if::cfg_if! {
    if #[cfg(feature = "reference")] {
        /// Compression core used by [`Whirlpool::new_hasher`].
        pub type DefaultCore = ReferenceCore;
    } else {
        /// Compression core used by [`Whirlpool::new_hasher`].
        pub type DefaultCore = FastCore;
    }
}

/// Whirlpool hasher state.
pub type WhirlpoolHasher = BlockHasher<DefaultCore>;

/// Published revisions of the Whirlpool constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Version {
    /// The original submission, with a randomly generated S-box.
    Whirlpool0,
    /// The 2001 tweak: the S-box is built from 4-bit mini-boxes.
    WhirlpoolT,
    /// The 2003 revision, with a new diffusion matrix. This is the version
    /// adopted by NESSIE and ISO/IEC 10118-3.
    #[default]
    Whirlpool,
}

impl Version {
    /// Name of the hash function of this version.
    pub fn name(self) -> &'static str {
        match self {
            Version::Whirlpool0 => "Whirlpool-0",
            Version::WhirlpoolT => "Whirlpool-T",
            Version::Whirlpool => "Whirlpool",
        }
    }

    pub(crate) fn tables(self) -> &'static Tables {
        match self {
            Version::Whirlpool0 => &tables::WHIRLPOOL_0,
            Version::WhirlpoolT => &tables::WHIRLPOOL_T,
            Version::Whirlpool => &tables::WHIRLPOOL,
        }
    }
}

/// The Whirlpool hash function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Whirlpool {
    version: Version,
}

impl Whirlpool {
    /// Hash function of the given version.
    pub const fn new(version: Version) -> Self {
        Self { version }
    }

    /// Version of the constants in use.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Hasher built on the byte-oriented compression core.
    pub fn new_reference_hasher(&self) -> BlockHasher<ReferenceCore> {
        BlockHasher::new(ReferenceCore::new(self.version))
    }

    /// Hasher built on the table-driven compression core.
    pub fn new_fast_hasher(&self) -> BlockHasher<FastCore> {
        BlockHasher::new(FastCore::new(self.version))
    }
}

impl HashFunction for Whirlpool {
    type Hasher = WhirlpoolHasher;

    fn name(&self) -> Cow<'static, str> {
        self.version.name().into()
    }

    fn hash_len(&self) -> usize {
        64
    }

    fn new_hasher(&self) -> Result<WhirlpoolHasher> {
        Ok(BlockHasher::new(DefaultCore::new(self.version)))
    }
}

impl BlockHashFunction for Whirlpool {
    fn block_len(&self) -> usize {
        64
    }
}

/// The block cipher `W` inside Whirlpool, with a 512-bit key and block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WhirlpoolCipher {
    version: Version,
}

impl WhirlpoolCipher {
    /// Cipher of the given version.
    pub const fn new(version: Version) -> Self {
        Self { version }
    }

    /// Version of the constants in use.
    pub fn version(&self) -> Version {
        self.version
    }
}

impl Cipher for WhirlpoolCipher {
    type Cipherer = BlockCipherer<WhirlpoolCipherCore>;

    fn name(&self) -> Cow<'static, str> {
        alloc::format!("{} cipher", self.version.name()).into()
    }

    fn key_len(&self) -> usize {
        64
    }

    fn block_len(&self) -> usize {
        64
    }

    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer> {
        check_key_len(64, key)?;
        let mut k = [0u8; 64];
        k.copy_from_slice(key);
        let core = WhirlpoolCipherCore::new(self.version, &k);
        zeroize::Zeroize::zeroize(&mut k);
        Ok(BlockCipherer::new(core))
    }
}
