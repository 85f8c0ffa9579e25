use alloc::borrow::Cow;

use framework::{Error, HashFunction, HashValue, Hasher, Result, Zeroizable};

/// The zero function: every message hashes to a single `0x00` byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zero;

impl HashFunction for Zero {
    type Hasher = ZeroHasher;

    fn name(&self) -> Cow<'static, str> {
        "Zero".into()
    }

    fn hash_len(&self) -> usize {
        1
    }

    fn new_hasher(&self) -> Result<ZeroHasher> {
        Ok(ZeroHasher { zeroized: false })
    }
}

/// Hasher of [`Zero`]. It ignores its input but still tracks zeroization.
#[derive(Clone, Debug)]
pub struct ZeroHasher {
    zeroized: bool,
}

impl Hasher for ZeroHasher {
    fn hash_len(&self) -> usize {
        1
    }

    fn update(&mut self, _data: &[u8]) -> Result<()> {
        if self.zeroized {
            return Err(Error::AlreadyZeroized);
        }
        Ok(())
    }

    fn finalize(self) -> Result<HashValue> {
        if self.zeroized {
            return Err(Error::AlreadyZeroized);
        }
        Ok(HashValue::new(&[0]))
    }
}

impl Zeroizable for ZeroHasher {
    fn zeroize(&mut self) -> Result<()> {
        if self.zeroized {
            return Err(Error::AlreadyZeroized);
        }
        self.zeroized = true;
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.zeroized
    }
}
