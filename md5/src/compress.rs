use crate::consts::{RC, SHIFTS};

#[inline(always)]
fn round_fn(round: usize, b: u32, c: u32, d: u32) -> u32 {
    match round {
        0 => (b & c) | (!b & d),
        1 => (d & b) | (!d & c),
        2 => b ^ c ^ d,
        _ => c ^ (b | !d),
    }
}

#[inline(always)]
fn word_index(round: usize, i: usize) -> usize {
    match round {
        0 => i,
        1 => (5 * i + 1) & 15,
        2 => (3 * i + 5) & 15,
        _ => (7 * i) & 15,
    }
}

/// MD5 compression function.
pub(crate) fn compress(state: &mut [u32; 4], input: &[u8]) {
    let mut m = [0u32; 16];
    for (w, chunk) in m.iter_mut().zip(input.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for i in 0..64 {
        let round = i / 16;
        let f = round_fn(round, b, c, d)
            .wrapping_add(a)
            .wrapping_add(RC[i])
            .wrapping_add(m[word_index(round, i)]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(SHIFTS[round][i & 3]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
