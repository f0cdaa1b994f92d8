//! Key schedule and block encryption/decryption for all three key sizes.

use crate::block::Block;
use crate::key::{AesKey, KeySchedule, MAX_SCHEDULE_WORDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Round constants `[x^(i-1), 0, 0, 0]` as big-endian words; index 0 is unused.
const RCON: [u32; 11] = [
    0x0000_0000,
    0x0100_0000,
    0x0200_0000,
    0x0400_0000,
    0x0800_0000,
    0x1000_0000,
    0x2000_0000,
    0x4000_0000,
    0x8000_0000,
    0x1b00_0000,
    0x3600_0000,
];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a key into its round-key schedule (FIPS-197 §5.2).
pub fn expand_key(key: &AesKey) -> KeySchedule {
    let size = key.size();
    let nk = size.nk();
    let total = size.schedule_words();
    let mut w = [0u32; MAX_SCHEDULE_WORDS];

    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    log::trace!("expanded {size} key into {total} schedule words");
    KeySchedule::from_words(w, size)
}

/// Encrypts one block in place (FIPS-197 §5.1).
pub fn cipher(state: &mut Block, schedule: &KeySchedule) {
    let nr = schedule.rounds();

    add_round_key(state, &schedule.round_words(0));

    for round in 1..nr {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &schedule.round_words(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &schedule.round_words(nr));
}

/// Decrypts one block in place (FIPS-197 §5.3).
///
/// Round keys are consumed last to first; the step order is the exact
/// reverse of [`cipher`].
pub fn inv_cipher(state: &mut Block, schedule: &KeySchedule) {
    let nr = schedule.rounds();

    add_round_key(state, &schedule.round_words(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &schedule.round_words(round));
        inv_mix_columns(state);
    }
    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, &schedule.round_words(0));
}

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    cipher(&mut state, schedule);
    state
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    inv_cipher(&mut state, schedule);
    state
}
