use core::{any::type_name, fmt};

use digest::generic_array::{typenum::Unsigned, ArrayLength, GenericArray};
use zeroize::Zeroize;

use crate::{Error, HashValue, Hasher, Result, Zeroizable};

/// Compression block of a [`BlockHashCore`].
pub type Block<C> = GenericArray<u8, <C as BlockHashCore>::BlockSize>;

/// Compression function and output of a Merkle-Damgård style hash.
///
/// Buffering, `0x80` padding and length encoding are done by
/// [`BlockHasher`]; a core only has to absorb whole blocks.
pub trait BlockHashCore: Clone {
    /// Compression block length.
    type BlockSize: ArrayLength<u8>;
    /// Digest length.
    type OutputSize: ArrayLength<u8>;

    /// Number of bytes reserved at the end of the last block for the
    /// message bit length.
    const LENGTH_FIELD_LEN: usize;

    /// Absorbs one full block into the state.
    fn compress(&mut self, block: &Block<Self>);

    /// Writes the total message length in bits into `field`, which is
    /// exactly `LENGTH_FIELD_LEN` bytes long.
    fn write_length(bit_len: u128, field: &mut [u8]);

    /// Extracts the digest from the state.
    fn output(&self, out: &mut GenericArray<u8, Self::OutputSize>);

    /// Overwrites the state with zeros.
    fn wipe(&mut self);
}

/// Incremental hasher over a [`BlockHashCore`].
pub struct BlockHasher<C: BlockHashCore> {
    core: Option<C>,
    buffer: Block<C>,
    pos: usize,
    len: u128,
}

impl<C: BlockHashCore> BlockHasher<C> {
    /// Starts hashing from the given initial core state.
    pub fn new(core: C) -> Self {
        Self {
            core: Some(core),
            buffer: Default::default(),
            pos: 0,
            len: 0,
        }
    }

    /// Total number of message bytes absorbed so far.
    pub fn message_len(&self) -> u128 {
        self.len
    }
}

impl<C: BlockHashCore + Default> Default for BlockHasher<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: BlockHashCore> Clone for BlockHasher<C> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            buffer: self.buffer.clone(),
            pos: self.pos,
            len: self.len,
        }
    }
}

impl<C: BlockHashCore> Hasher for BlockHasher<C> {
    fn hash_len(&self) -> usize {
        C::OutputSize::USIZE
    }

    fn update(&mut self, mut data: &[u8]) -> Result<()> {
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        let block_len = C::BlockSize::USIZE;
        self.len = self.len.wrapping_add(data.len() as u128);

        if self.pos != 0 {
            let n = core::cmp::min(block_len - self.pos, data.len());
            self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];
            if self.pos < block_len {
                return Ok(());
            }
            core.compress(&self.buffer);
            self.pos = 0;
        }

        let mut blocks = data.chunks_exact(block_len);
        for block in &mut blocks {
            core.compress(GenericArray::from_slice(block));
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
        Ok(())
    }

    fn finalize(mut self) -> Result<HashValue> {
        let block_len = C::BlockSize::USIZE;
        let field_start = block_len - C::LENGTH_FIELD_LEN;
        let bit_len = self.len.wrapping_mul(8);
        let pos = self.pos;
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        let buffer = &mut self.buffer;

        buffer[pos] = 0x80;
        buffer[pos + 1..].iter_mut().for_each(|b| *b = 0);
        if pos + 1 > field_start {
            core.compress(buffer);
            buffer.iter_mut().for_each(|b| *b = 0);
        }
        C::write_length(bit_len, &mut buffer[field_start..]);
        core.compress(buffer);

        let mut out = GenericArray::default();
        core.output(&mut out);
        let digest = HashValue::new(&out);
        out.as_mut_slice().zeroize();
        Ok(digest)
    }
}

impl<C: BlockHashCore> Zeroizable for BlockHasher<C> {
    fn zeroize(&mut self) -> Result<()> {
        let core = self.core.as_mut().ok_or(Error::AlreadyZeroized)?;
        core.wipe();
        self.core = None;
        self.buffer.as_mut_slice().zeroize();
        self.pos = 0;
        self.len = 0;
        log::trace!("{}: hasher zeroized", type_name::<C>());
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.core.is_none()
    }
}

impl<C: BlockHashCore> Drop for BlockHasher<C> {
    fn drop(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.wipe();
        }
        self.buffer.as_mut_slice().zeroize();
    }
}

impl<C: BlockHashCore> fmt::Debug for BlockHasher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockHasher { ... }")
    }
}
