use alloc::borrow::Cow;

use framework::{Error, HashFunction, HashValue, Hasher, Zeroizable};
use zeroize::Zeroize;

/// Reflected form of the polynomial `0x04C11DB7`.
const POLY: u32 = 0xEDB8_8320;

static TABLE: [u32; 256] = table();

const fn table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLY ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

/// The CRC-32 checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Crc32;

impl HashFunction for Crc32 {
    type Hasher = Crc32Hasher;

    fn name(&self) -> Cow<'static, str> {
        "CRC-32".into()
    }

    fn hash_len(&self) -> usize {
        4
    }

    fn new_hasher(&self) -> framework::Result<Crc32Hasher> {
        Ok(Crc32Hasher {
            crc: Some(0xFFFF_FFFF),
        })
    }
}

/// Running CRC-32 register.
#[derive(Clone)]
pub struct Crc32Hasher {
    crc: Option<u32>,
}

impl Hasher for Crc32Hasher {
    fn hash_len(&self) -> usize {
        4
    }

    fn update(&mut self, data: &[u8]) -> framework::Result<()> {
        let crc = self.crc.as_mut().ok_or(Error::AlreadyZeroized)?;
        for &b in data {
            *crc = TABLE[((*crc ^ b as u32) & 0xFF) as usize] ^ (*crc >> 8);
        }
        Ok(())
    }

    fn finalize(self) -> framework::Result<HashValue> {
        let crc = self.crc.ok_or(Error::AlreadyZeroized)?;
        Ok(HashValue::new(&(!crc).to_be_bytes()))
    }
}

impl Zeroizable for Crc32Hasher {
    fn zeroize(&mut self) -> framework::Result<()> {
        let crc = self.crc.as_mut().ok_or(Error::AlreadyZeroized)?;
        crc.zeroize();
        self.crc = None;
        Ok(())
    }

    fn is_zeroized(&self) -> bool {
        self.crc.is_none()
    }
}

opaque_debug::implement!(Crc32Hasher);
