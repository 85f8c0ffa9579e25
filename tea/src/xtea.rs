use framework::BlockCipherCore;
use zeroize::Zeroize;

use crate::{read_block, write_block, CYCLES, DELTA};

/// XTEA key.
#[derive(Clone)]
pub struct XteaCore {
    k: [u32; 4],
}

impl XteaCore {
    pub(crate) fn new(k: [u32; 4]) -> Self {
        Self { k }
    }

    #[inline]
    fn f(v: u32) -> u32 {
        ((v << 4) ^ (v >> 5)).wrapping_add(v)
    }
}

impl BlockCipherCore for XteaCore {
    const BLOCK_LEN: usize = 8;

    fn encrypt_block(&self, block: &mut [u8]) {
        let k = &self.k;
        let (mut v0, mut v1) = read_block(block);
        let mut sum = 0u32;
        for _ in 0..CYCLES {
            v0 = v0.wrapping_add(Self::f(v1) ^ sum.wrapping_add(k[(sum & 3) as usize]));
            sum = sum.wrapping_add(DELTA);
            v1 = v1.wrapping_add(Self::f(v0) ^ sum.wrapping_add(k[(sum >> 11 & 3) as usize]));
        }
        write_block(block, v0, v1);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let k = &self.k;
        let (mut v0, mut v1) = read_block(block);
        let mut sum = DELTA.wrapping_mul(CYCLES);
        for _ in 0..CYCLES {
            v1 = v1.wrapping_sub(Self::f(v0) ^ sum.wrapping_add(k[(sum >> 11 & 3) as usize]));
            sum = sum.wrapping_sub(DELTA);
            v0 = v0.wrapping_sub(Self::f(v1) ^ sum.wrapping_add(k[(sum & 3) as usize]));
        }
        write_block(block, v0, v1);
    }

    fn wipe(&mut self) {
        self.k.zeroize();
    }
}

opaque_debug::implement!(XteaCore);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_clears_key() {
        let mut core = XteaCore::new([1, 2, 3, 4]);
        core.wipe();
        assert_eq!(core.k, [0; 4]);
    }
}
