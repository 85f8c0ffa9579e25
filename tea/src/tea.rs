use framework::BlockCipherCore;
use zeroize::Zeroize;

use crate::{read_block, write_block, CYCLES, DELTA};

/// TEA key.
#[derive(Clone)]
pub struct TeaCore {
    k: [u32; 4],
}

impl TeaCore {
    pub(crate) fn new(k: [u32; 4]) -> Self {
        Self { k }
    }
}

impl BlockCipherCore for TeaCore {
    const BLOCK_LEN: usize = 8;

    fn encrypt_block(&self, block: &mut [u8]) {
        let k = &self.k;
        let (mut v0, mut v1) = read_block(block);
        let mut sum = 0u32;
        for _ in 0..CYCLES {
            sum = sum.wrapping_add(DELTA);
            v0 = v0.wrapping_add(
                (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
            );
            v1 = v1.wrapping_add(
                (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
            );
        }
        write_block(block, v0, v1);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let k = &self.k;
        let (mut v0, mut v1) = read_block(block);
        let mut sum = DELTA.wrapping_mul(CYCLES);
        for _ in 0..CYCLES {
            v1 = v1.wrapping_sub(
                (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
            );
            v0 = v0.wrapping_sub(
                (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
            );
            sum = sum.wrapping_sub(DELTA);
        }
        write_block(block, v0, v1);
    }

    fn wipe(&mut self) {
        self.k.zeroize();
    }
}

opaque_debug::implement!(TeaCore);
