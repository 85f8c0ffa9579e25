use alloc::borrow::Cow;

use framework::{Error, HashFunction, HashValue, Hasher, Zeroizable};
use zeroize::Zeroize;

/// XOR of all message bytes, as a 1-byte digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xor8;

impl HashFunction for Xor8 {
    type Hasher = Xor8Hasher;

    fn name(&self) -> Cow<'static, str> {
        "XOR-8".into()
    }

    fn hash_len(&self) -> usize {
        1
    }

    fn new_hasher(&self) -> framework::Result<Xor8Hasher> {
        Ok(Xor8Hasher { xor: Some(0) })
    }
}

/// Running XOR.
#[derive(Clone)]
pub struct Xor8Hasher {
    xor: Option<u8>,
}

impl Hasher for Xor8Hasher {
    fn hash_len(&self) -> usize {
        1
    }

    fn update(&mut self, data: &[u8]) -> framework::Result<()> {
        let xor = self.xor.as_mut().ok_or(Error::AlreadyZeroized)?;
        *xor = data.iter().fold(*xor, |acc, &b| acc ^ b);
        Ok(())
    }

    fn finalize(self) -> framework::Result<HashValue> {
        let xor = self.xor.ok_or(Error::AlreadyZeroized)?;
        Ok(HashValue::new(&[xor]))
    }
}

impl Zeroizable for Xor8Hasher {
    fn zeroize(&mut self) -> framework::Result<()> {
        let xor = self.xor.as_mut().ok_or(Error::AlreadyZeroized)?;
        xor.zeroize();
        self.xor = None;
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.xor.is_none()
    }
}

opaque_debug::implement!(Xor8Hasher);
