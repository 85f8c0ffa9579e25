//! Lookup tables, computed at compile time from the S-box and the
//! diffusion matrix of each Whirlpool version.

use crate::consts::{
    DIFFUSION, DIFFUSION_0, DIFFUSION_0_INV, DIFFUSION_INV, MINI_E, MINI_R, ROUNDS, SBOX_0,
};

pub(crate) struct Tables {
    pub(crate) sub: [u8; 256],
    pub(crate) sub_inv: [u8; 256],
    /// `mul[k][x]` multiplies `x` by the coefficient applied to the byte `k`
    /// columns to the right, so a row is diffused as
    /// `out[j] = xor over k of mul[k][in[(j + k) % 8]]`.
    pub(crate) mul: [[u8; 256]; 8],
    pub(crate) mul_inv: [[u8; 256]; 8],
    /// Round keys of the key schedule, one 64-byte block per round.
    pub(crate) rcon: [[u8; 64]; ROUNDS],
    /// Substitution and diffusion folded together: `lanes[j][x]` is the
    /// contribution of byte `x` in column `j` to a row rotated by `j` bytes.
    pub(crate) lanes: [[u64; 256]; 8],
    /// First row of each round constant. The other seven rows are zero.
    pub(crate) lane_rcon: [u64; ROUNDS],
}

pub(crate) static WHIRLPOOL_0: Tables = Tables::new(SBOX_0, DIFFUSION_0, DIFFUSION_0_INV);
pub(crate) static WHIRLPOOL_T: Tables =
    Tables::new(structured_sbox(), DIFFUSION_0, DIFFUSION_0_INV);
pub(crate) static WHIRLPOOL: Tables = Tables::new(structured_sbox(), DIFFUSION, DIFFUSION_INV);

impl Tables {
    const fn new(sub: [u8; 256], row: [u8; 8], row_inv: [u8; 8]) -> Self {
        let mut sub_inv = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            sub_inv[sub[i] as usize] = i as u8;
            i += 1;
        }

        let mut rcon = [[0u8; 64]; ROUNDS];
        let mut lane_rcon = [0u64; ROUNDS];
        let mut r = 0;
        while r < ROUNDS {
            let mut j = 0;
            while j < 8 {
                rcon[r][j] = sub[8 * r + j];
                lane_rcon[r] |= (sub[8 * r + j] as u64) << (8 * (7 - j));
                j += 1;
            }
            r += 1;
        }

        let mut lanes = [[0u64; 256]; 8];
        let mut x = 0;
        while x < 256 {
            let mut v = 0u64;
            let mut j = 0;
            while j < 8 {
                v |= (gf_mul(sub[x], row[j]) as u64) << (8 * (7 - j));
                j += 1;
            }
            let mut j = 0;
            while j < 8 {
                lanes[j][x] = v.rotate_right(8 * j as u32);
                j += 1;
            }
            x += 1;
        }

        Self {
            sub,
            sub_inv,
            mul: mul_table(row),
            mul_inv: mul_table(row_inv),
            rcon,
            lanes,
            lane_rcon,
        }
    }
}

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x^2 + 1.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    p
}

/// Expands the first row of a circulant matrix into per-offset tables.
const fn mul_table(row: [u8; 8]) -> [[u8; 256]; 8] {
    let mut table = [[0u8; 256]; 8];
    let mut k = 0;
    while k < 8 {
        let c = row[(8 - k) & 7];
        let mut x = 0;
        while x < 256 {
            table[k][x] = gf_mul(x as u8, c);
            x += 1;
        }
        k += 1;
    }
    table
}

/// The S-box of Whirlpool-T and Whirlpool, built from the `E`, `E^-1` and
/// `R` mini-boxes.
const fn structured_sbox() -> [u8; 256] {
    let mut e_inv = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        e_inv[MINI_E[i] as usize] = i as u8;
        i += 1;
    }

    let mut sbox = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let u = MINI_E[x >> 4];
        let l = e_inv[x & 0xF];
        let r = MINI_R[(u ^ l) as usize];
        sbox[x] = MINI_E[(u ^ r) as usize] << 4 | e_inv[(l ^ r) as usize];
        x += 1;
    }
    sbox
}
