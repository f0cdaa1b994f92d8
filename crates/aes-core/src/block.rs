//! Block representation helpers.
//!
//! The state is kept as 16 bytes in FIPS-197 input order: byte `4c + r`
//! holds row `r` of column `c`, so each column is one big-endian word.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the state (`Nb`).
pub const NB: usize = 4;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Reads column `col` as a big-endian word.
#[inline]
pub fn column(state: &Block, col: usize) -> u32 {
    let i = col * 4;
    u32::from_be_bytes([state[i], state[i + 1], state[i + 2], state[i + 3]])
}

/// Overwrites column `col` with the big-endian bytes of `word`.
#[inline]
pub fn set_column(state: &mut Block, col: usize, word: u32) {
    let i = col * 4;
    state[i..i + 4].copy_from_slice(&word.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_big_endian_words() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        assert_eq!(column(&state, 0), 0x0001_0203);
        assert_eq!(column(&state, 3), 0x0c0d_0e0f);

        set_column(&mut state, 1, 0xdead_beef);
        assert_eq!(&state[4..8], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(column(&state, 1), 0xdead_beef);
    }

    #[test]
    fn xor_is_an_involution() {
        let original: Block = core::array::from_fn(|i| (i * 17) as u8);
        let mask = [0xa5u8; BLOCK_SIZE];
        let mut state = original;
        xor_in_place(&mut state, &mask);
        assert_ne!(state, original);
        xor_in_place(&mut state, &mask);
        assert_eq!(state, original);
    }
}
