//! Traits and shared machinery for symmetric ciphers and hash functions.
//!
//! Every algorithm crate in this workspace plugs into the same two families:
//!
//! - [`Cipher`] descriptors bind a key to a fresh [`Cipherer`]. Block
//!   algorithms implement [`BlockCipherCore`] and are wrapped by
//!   [`BlockCipherer`], stream algorithms implement [`StreamCipherCore`]
//!   and are wrapped by [`StreamCipherer`].
//! - [`HashFunction`] descriptors produce incremental [`Hasher`]s. Block
//!   hash algorithms implement [`BlockHashCore`] and get buffering, padding
//!   and length encoding from [`BlockHasher`].
//!
//! Anything holding key material implements [`Zeroizable`]. Once zeroized,
//! an instance refuses every further operation with
//! [`Error::AlreadyZeroized`].
//!
//! # Usage
//!
//! ```rust
//! use framework::{Cipher, Cipherer, NullCipher};
//!
//! let mut cipherer = NullCipher.new_cipherer(&[]).unwrap();
//! let mut buf = *b"unchanged";
//! cipherer.encrypt(&mut buf).unwrap();
//! assert_eq!(&buf, b"unchanged");
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, generic_array};

mod block;
pub mod bounds;
mod cipher;
mod erase;
mod error;
mod hash;
mod identity;
pub mod sync;
mod value;

pub use crate::block::{Block, BlockHashCore, BlockHasher};
pub use crate::cipher::{
    check_key_len, BlockCipherCore, BlockCipherer, Cipher, Cipherer, StreamCipherCore,
    StreamCipherer,
};
pub use crate::erase::Zeroizable;
pub use crate::error::{Error, Result};
pub use crate::hash::{BlockHashFunction, HashFunction, Hasher};
pub use crate::identity::{IdentityStreamCipher, NullCipher, NullCore, ZeroKeystream};
pub use crate::value::HashValue;
