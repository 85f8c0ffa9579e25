//! Whirlpool compression, Miyaguchi-Preneel style:
//! `state' = W[state](block) ^ state ^ block`.

use digest::{consts::U64, generic_array::GenericArray};
use framework::{Block, BlockHashCore};
use zeroize::Zeroize;

use crate::{
    cipher::{self, State},
    tables::Tables,
    Version,
};

/// The 256-bit message length is stored big-endian in the last 32 bytes.
fn write_length(bit_len: u128, field: &mut [u8]) {
    let (high, low) = field.split_at_mut(16);
    high.iter_mut().for_each(|b| *b = 0);
    low.copy_from_slice(&bit_len.to_be_bytes());
}

/// Byte-oriented compression built on the Whirlpool cipher round.
#[derive(Clone)]
pub struct ReferenceCore {
    tables: &'static Tables,
    state: State,
}

impl ReferenceCore {
    /// Initial state for the given Whirlpool version.
    pub fn new(version: Version) -> Self {
        Self {
            tables: version.tables(),
            state: [0; 64],
        }
    }
}

impl BlockHashCore for ReferenceCore {
    type BlockSize = U64;
    type OutputSize = U64;
    const LENGTH_FIELD_LEN: usize = 32;

    fn compress(&mut self, block: &Block<Self>) {
        let mut msg = [0u8; 64];
        msg.copy_from_slice(block);
        let mut key = self.state;
        cipher::encrypt(&mut msg, &mut key, self.tables);
        for ((s, m), b) in self.state.iter_mut().zip(msg.iter()).zip(block.iter()) {
            *s ^= m ^ b;
        }
        key.zeroize();
    }

    fn write_length(bit_len: u128, field: &mut [u8]) {
        write_length(bit_len, field)
    }

    fn output(&self, out: &mut GenericArray<u8, U64>) {
        out.copy_from_slice(&self.state);
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

opaque_debug::implement!(ReferenceCore);

/// Word-oriented compression using the combined 64-bit lookup tables.
#[derive(Clone)]
pub struct FastCore {
    tables: &'static Tables,
    state: [u64; 8],
}

impl FastCore {
    /// Initial state for the given Whirlpool version.
    pub fn new(version: Version) -> Self {
        Self {
            tables: version.tables(),
            state: [0; 8],
        }
    }

    /// Substitution, permutation and diffusion through the lane tables,
    /// then key addition.
    fn rho(&self, block: &mut [u64; 8], key: &[u64; 8]) {
        let lanes = &self.tables.lanes;
        let mut tmp = [0u64; 8];
        for (i, &row) in block.iter().enumerate() {
            for (j, lane) in lanes.iter().enumerate() {
                tmp[(i + j) & 7] ^= lane[(row >> (8 * (7 - j))) as u8 as usize];
            }
        }
        for ((b, t), k) in block.iter_mut().zip(tmp.iter()).zip(key.iter()) {
            *b = t ^ k;
        }
    }
}

impl BlockHashCore for FastCore {
    type BlockSize = U64;
    type OutputSize = U64;
    const LENGTH_FIELD_LEN: usize = 32;

    fn compress(&mut self, block: &Block<Self>) {
        let mut msg = [0u64; 8];
        for (w, chunk) in msg.iter_mut().zip(block.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *w = u64::from_be_bytes(buf);
        }

        let mut key = self.state;
        let mut data = msg;
        for (d, k) in data.iter_mut().zip(key.iter()) {
            *d ^= k;
        }
        for &rc in self.tables.lane_rcon.iter() {
            let mut round_key = [0u64; 8];
            round_key[0] = rc;
            self.rho(&mut key, &round_key);
            self.rho(&mut data, &key);
        }

        for ((s, d), m) in self.state.iter_mut().zip(data.iter()).zip(msg.iter()) {
            *s ^= d ^ m;
        }
        key.zeroize();
    }

    fn write_length(bit_len: u128, field: &mut [u8]) {
        write_length(bit_len, field)
    }

    fn output(&self, out: &mut GenericArray<u8, U64>) {
        for (chunk, v) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

opaque_debug::implement!(FastCore);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_field_is_big_endian_256_bit() {
        let mut field = [0xAAu8; 32];
        write_length(0x0102, &mut field);
        assert!(field[..30].iter().all(|&b| b == 0));
        assert_eq!(field[30..], [0x01, 0x02]);
    }

    #[test]
    fn cores_agree_on_a_single_block() {
        let block = GenericArray::clone_from_slice(&[0x61u8; 64]);
        for version in [Version::Whirlpool0, Version::WhirlpoolT, Version::Whirlpool] {
            let mut r = ReferenceCore::new(version);
            let mut f = FastCore::new(version);
            r.compress(&block);
            f.compress(&block);
            let mut a = GenericArray::default();
            let mut b = GenericArray::default();
            r.output(&mut a);
            f.output(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn wipe_clears_state() {
        let block = GenericArray::clone_from_slice(&[1u8; 64]);
        let mut r = ReferenceCore::new(Version::Whirlpool);
        let mut f = FastCore::new(Version::Whirlpool);
        r.compress(&block);
        f.compress(&block);
        r.wipe();
        f.wipe();
        assert_eq!(r.state, [0; 64]);
        assert_eq!(f.state, [0; 8]);
    }
}
