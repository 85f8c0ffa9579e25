use alloc::borrow::Cow;
use core::{any::type_name, fmt};

use crate::{bounds, Error, Result, Zeroizable};

/// A cipher algorithm: name, key length and block length, plus a factory
/// that binds a key to a fresh [`Cipherer`].
pub trait Cipher {
    /// Instance type produced by [`new_cipherer`](Cipher::new_cipherer).
    type Cipherer: Cipherer;

    /// Human-readable algorithm name.
    fn name(&self) -> Cow<'static, str>;

    /// Required key length in bytes.
    fn key_len(&self) -> usize;

    /// Block length in bytes. Stream ciphers report 1.
    fn block_len(&self) -> usize;

    /// Creates a cipherer holding a private copy of `key`.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless
    /// `key.len() == self.key_len()`.
    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer>;
}

/// A keyed cipher instance transforming caller buffers in place.
pub trait Cipherer: Zeroizable {
    /// Block length in bytes; data lengths must be a multiple of it.
    fn block_len(&self) -> usize;

    /// Encrypts `buf` in place.
    fn encrypt(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Decrypts `buf` in place.
    fn decrypt(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Encrypts `buf[off..off + len]` in place.
    fn encrypt_range(&mut self, buf: &mut [u8], off: usize, len: usize) -> Result<()> {
        if self.is_zeroized() {
            return Err(Error::AlreadyZeroized);
        }
        self.encrypt(bounds::slice_mut(buf, off, len)?)
    }

    /// Decrypts `buf[off..off + len]` in place.
    fn decrypt_range(&mut self, buf: &mut [u8], off: usize, len: usize) -> Result<()> {
        if self.is_zeroized() {
            return Err(Error::AlreadyZeroized);
        }
        self.decrypt(bounds::slice_mut(buf, off, len)?)
    }
}

/// Fails with [`Error::InvalidKeyLength`] unless `key` is exactly
/// `expected` bytes long.
pub fn check_key_len(expected: usize, key: &[u8]) -> Result<()> {
    if key.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidKeyLength {
            expected,
            actual: key.len(),
        })
    }
}

/// Key schedule and block transform of a block cipher.
///
/// `encrypt_block` and `decrypt_block` are only ever called with slices of
/// exactly `BLOCK_LEN` bytes.
pub trait BlockCipherCore: Clone {
    /// Block length in bytes.
    const BLOCK_LEN: usize;

    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u8]);

    /// Overwrites the key and every derived schedule with zeros.
    fn wipe(&mut self);
}

/// Generic block cipherer: length checks, block iteration and zeroization
/// around a [`BlockCipherCore`].
#[derive(Clone)]
pub struct BlockCipherer<C: BlockCipherCore> {
    core: Option<C>,
}

impl<C: BlockCipherCore> BlockCipherer<C> {
    /// Wraps a freshly keyed core.
    pub fn new(core: C) -> Self {
        log::trace!("{}: cipherer created", type_name::<C>());
        Self { core: Some(core) }
    }

    fn core_for(&self, len: usize) -> Result<&C> {
        let core = self.core.as_ref().ok_or(Error::AlreadyZeroized)?;
        if len % C::BLOCK_LEN != 0 {
            return Err(Error::InvalidBlockLength {
                block_len: C::BLOCK_LEN,
                len,
            });
        }
        Ok(core)
    }
}

impl<C: BlockCipherCore> Cipherer for BlockCipherer<C> {
    fn block_len(&self) -> usize {
        C::BLOCK_LEN
    }

    fn encrypt(&mut self, buf: &mut [u8]) -> Result<()> {
        let core = self.core_for(buf.len())?;
        for block in buf.chunks_exact_mut(C::BLOCK_LEN) {
            core.encrypt_block(block);
        }
        Ok(())
    }

    fn decrypt(&mut self, buf: &mut [u8]) -> Result<()> {
        let core = self.core_for(buf.len())?;
        for block in buf.chunks_exact_mut(C::BLOCK_LEN) {
            core.decrypt_block(block);
        }
        Ok(())
    }
}

impl<C: BlockCipherCore> Zeroizable for BlockCipherer<C> {
    fn zeroize(&mut self) -> Result<()> {
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        core.wipe();
        self.core = None;
        log::trace!("{}: cipherer zeroized", type_name::<C>());
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.core.is_none()
    }
}

impl<C: BlockCipherCore> Drop for BlockCipherer<C> {
    fn drop(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.wipe();
        }
    }
}

impl<C: BlockCipherCore> fmt::Debug for BlockCipherer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockCipherer")
            .field("zeroized", &self.core.is_none())
            .finish_non_exhaustive()
    }
}

/// Keystream generator of a stream cipher.
pub trait StreamCipherCore: Clone {
    /// XORs the next `buf.len()` keystream bytes into `buf`.
    fn apply_keystream(&mut self, buf: &mut [u8]);

    /// Overwrites the key and generator state with zeros.
    fn wipe(&mut self);
}

/// Generic stream cipherer. Encryption and decryption are the same
/// operation and accept any length.
#[derive(Clone)]
pub struct StreamCipherer<C: StreamCipherCore> {
    core: Option<C>,
}

impl<C: StreamCipherCore> StreamCipherer<C> {
    /// Wraps a freshly keyed core.
    pub fn new(core: C) -> Self {
        log::trace!("{}: cipherer created", type_name::<C>());
        Self { core: Some(core) }
    }

    fn apply(&mut self, buf: &mut [u8]) -> Result<()> {
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        core.apply_keystream(buf);
        Ok(())
    }
}

impl<C: StreamCipherCore> Cipherer for StreamCipherer<C> {
    fn block_len(&self) -> usize {
        1
    }

    fn encrypt(&mut self, buf: &mut [u8]) -> Result<()> {
        self.apply(buf)
    }

    fn decrypt(&mut self, buf: &mut [u8]) -> Result<()> {
        self.apply(buf)
    }
}

impl<C: StreamCipherCore> Zeroizable for StreamCipherer<C> {
    fn zeroize(&mut self) -> Result<()> {
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        core.wipe();
        self.core = None;
        log::trace!("{}: cipherer zeroized", type_name::<C>());
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.core.is_none()
    }
}

impl<C: StreamCipherCore> Drop for StreamCipherer<C> {
    fn drop(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.wipe();
        }
    }
}

impl<C: StreamCipherCore> fmt::Debug for StreamCipherer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCipherer")
            .field("zeroized", &self.core.is_none())
            .finish_non_exhaustive()
    }
}
