use alloc::borrow::Cow;

use crate::{bounds, Error, HashValue, Result, Zeroizable};

/// A hash function: name and digest length, plus a factory for
/// incremental [`Hasher`]s.
pub trait HashFunction {
    /// Hasher type produced by [`new_hasher`](HashFunction::new_hasher).
    type Hasher: Hasher;

    /// Human-readable algorithm name.
    fn name(&self) -> Cow<'static, str>;

    /// Digest length in bytes.
    fn hash_len(&self) -> usize;

    /// Creates a hasher in its initial state.
    ///
    /// Only keyed functions can fail here, with
    /// [`Error::AlreadyZeroized`] once their key has been wiped.
    fn new_hasher(&self) -> Result<Self::Hasher>;

    /// Hashes `data` in one call.
    fn hash(&self, data: &[u8]) -> Result<HashValue> {
        let mut hasher = self.new_hasher()?;
        hasher.update(data)?;
        hasher.finalize()
    }
}

/// A hash function built on a fixed-size compression block.
pub trait BlockHashFunction: HashFunction {
    /// Compression block length in bytes.
    fn block_len(&self) -> usize;
}

/// Incremental hasher state.
///
/// Splitting the input across any number of `update` calls gives the same
/// digest as a single call. [`finalize`](Hasher::finalize) consumes the
/// hasher, since producing the digest destroys the buffered state.
pub trait Hasher: Zeroizable {
    /// Digest length in bytes.
    fn hash_len(&self) -> usize;

    /// Appends `data` to the message.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Appends one byte to the message.
    fn update_byte(&mut self, b: u8) -> Result<()> {
        self.update(&[b])
    }

    /// Appends `data[off..off + len]` to the message.
    fn update_range(&mut self, data: &[u8], off: usize, len: usize) -> Result<()> {
        if self.is_zeroized() {
            return Err(Error::AlreadyZeroized);
        }
        self.update(bounds::slice(data, off, len)?)
    }

    /// Pads the message, runs the final compression and returns the digest.
    fn finalize(self) -> Result<HashValue>
    where
        Self: Sized;
}
