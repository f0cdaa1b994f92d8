//! AES round transformations.

use crate::block::{column, set_column, Block, NB};
use crate::gf::{MUL11, MUL13, MUL14, MUL2, MUL3, MUL9};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..NB {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % NB) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r` columns.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..NB {
        for row in 1..4 {
            state[((col + row) % NB) * 4 + row] = src[col * 4 + row];
        }
    }
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = MUL2[a0 as usize] ^ MUL3[a1 as usize] ^ a2 ^ a3;
    col[1] = a0 ^ MUL2[a1 as usize] ^ MUL3[a2 as usize] ^ a3;
    col[2] = a0 ^ a1 ^ MUL2[a2 as usize] ^ MUL3[a3 as usize];
    col[3] = MUL3[a0 as usize] ^ a1 ^ a2 ^ MUL2[a3 as usize];
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]].map(usize::from);
    col[0] = MUL14[a0] ^ MUL11[a1] ^ MUL13[a2] ^ MUL9[a3];
    col[1] = MUL9[a0] ^ MUL14[a1] ^ MUL11[a2] ^ MUL13[a3];
    col[2] = MUL13[a0] ^ MUL9[a1] ^ MUL14[a2] ^ MUL11[a3];
    col[3] = MUL11[a0] ^ MUL13[a1] ^ MUL9[a2] ^ MUL14[a3];
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        mix_single_column(col);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        inv_mix_single_column(col);
    }
}

/// Adds (XORs) a round key, given as four big-endian words, into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &[u32; NB]) {
    for (col, word) in round_key.iter().enumerate() {
        set_column(state, col, column(state, col) ^ word);
    }
}
