//! The Whirlpool block cipher `W`, byte-oriented.
//!
//! The 64-byte state is an 8x8 matrix stored row by row: byte `8 * i + j`
//! is row `i`, column `j`.

use framework::BlockCipherCore;
use zeroize::Zeroize;

use crate::{consts::ROUNDS, tables::Tables, Version};

pub(crate) type State = [u8; 64];

/// Non-linear layer.
fn gamma(block: &mut State, sub: &[u8; 256]) {
    for b in block.iter_mut() {
        *b = sub[*b as usize];
    }
}

/// Cyclical permutation: column `j` moves down by `j` rows.
fn pi(input: &State, out: &mut State) {
    for i in 0..8 {
        for j in 0..8 {
            out[((i + j) & 7) << 3 | j] = input[i << 3 | j];
        }
    }
}

fn pi_inv(input: &State, out: &mut State) {
    for i in 0..8 {
        for j in 0..8 {
            out[i << 3 | j] = input[((i + j) & 7) << 3 | j];
        }
    }
}

/// Linear diffusion layer, one row at a time.
fn theta(input: &State, out: &mut State, mul: &[[u8; 256]; 8]) {
    for i in 0..8 {
        for j in 0..8 {
            let mut sum = 0;
            for (k, m) in mul.iter().enumerate() {
                sum ^= m[input[i << 3 | ((j + k) & 7)] as usize];
            }
            out[i << 3 | j] = sum;
        }
    }
}

/// Key addition.
fn sigma(block: &mut State, key: &State) {
    for (b, k) in block.iter_mut().zip(key.iter()) {
        *b ^= k;
    }
}

/// One round: substitute, permute, diffuse, add the round key.
pub(crate) fn rho(block: &mut State, key: &State, t: &Tables) {
    let mut tmp = [0u8; 64];
    gamma(block, &t.sub);
    pi(block, &mut tmp);
    theta(&tmp, block, &t.mul);
    sigma(block, key);
}

fn rho_inv(block: &mut State, key: &State, t: &Tables) {
    let mut tmp = [0u8; 64];
    sigma(block, key);
    theta(block, &mut tmp, &t.mul_inv);
    pi_inv(&tmp, block);
    gamma(block, &t.sub_inv);
}

/// Encrypts `block` under `key`, evolving the key schedule in lockstep with
/// the data. `key` ends up holding the last round key.
pub(crate) fn encrypt(block: &mut State, key: &mut State, t: &Tables) {
    sigma(block, key);
    for rc in t.rcon.iter() {
        rho(key, rc, t);
        rho(block, key, t);
    }
}

/// Key schedule and tables of the Whirlpool cipher.
#[derive(Clone)]
pub struct WhirlpoolCipherCore {
    tables: &'static Tables,
    round_keys: [State; ROUNDS + 1],
}

impl WhirlpoolCipherCore {
    pub(crate) fn new(version: Version, key: &State) -> Self {
        let tables = version.tables();
        let mut round_keys = [[0u8; 64]; ROUNDS + 1];
        round_keys[0] = *key;
        for r in 0..ROUNDS {
            let mut k = round_keys[r];
            rho(&mut k, &tables.rcon[r], tables);
            round_keys[r + 1] = k;
        }
        Self { tables, round_keys }
    }
}

impl BlockCipherCore for WhirlpoolCipherCore {
    const BLOCK_LEN: usize = 64;

    fn encrypt_block(&self, block: &mut [u8]) {
        let mut state = [0u8; 64];
        state.copy_from_slice(block);
        sigma(&mut state, &self.round_keys[0]);
        for k in self.round_keys[1..].iter() {
            rho(&mut state, k, self.tables);
        }
        block.copy_from_slice(&state);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let mut state = [0u8; 64];
        state.copy_from_slice(block);
        for k in self.round_keys[1..].iter().rev() {
            rho_inv(&mut state, k, self.tables);
        }
        sigma(&mut state, &self.round_keys[0]);
        block.copy_from_slice(&state);
    }

    fn wipe(&mut self) {
        self.round_keys.zeroize();
    }
}

opaque_debug::implement!(WhirlpoolCipherCore);
