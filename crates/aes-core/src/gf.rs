//! GF(2^8) arithmetic modulo `x^8 + x^4 + x^3 + x + 1`.
//!
//! MixColumns and its inverse only ever multiply by the constants
//! {02, 03} and {09, 0b, 0d, 0e}, so products for those are tabulated at
//! compile time. The tables are plain `const` data and need no runtime
//! initialisation.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (i.e. `{02}`) with reduction.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements directly (shift-and-add).
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

const fn mul_table(factor: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gmul(factor, i as u8);
        i += 1;
    }
    table
}

/// Products `{02} · x`.
pub const MUL2: [u8; 256] = mul_table(0x02);
/// Products `{03} · x`.
pub const MUL3: [u8; 256] = mul_table(0x03);
/// Products `{09} · x`.
pub const MUL9: [u8; 256] = mul_table(0x09);
/// Products `{0b} · x`.
pub const MUL11: [u8; 256] = mul_table(0x0b);
/// Products `{0d} · x`.
pub const MUL13: [u8; 256] = mul_table(0x0d);
/// Products `{0e} · x`.
pub const MUL14: [u8; 256] = mul_table(0x0e);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips197_multiplication_examples() {
        // FIPS-197 §4.2: {57} • {83} = {c1}, {57} • {13} = {fe}.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn tables_match_direct_multiplication() {
        let tables: [(u8, &[u8; 256]); 6] = [
            (0x02, &MUL2),
            (0x03, &MUL3),
            (0x09, &MUL9),
            (0x0b, &MUL11),
            (0x0d, &MUL13),
            (0x0e, &MUL14),
        ];
        for (factor, table) in tables {
            for x in 0u8..=255 {
                assert_eq!(table[x as usize], gmul(factor, x), "factor {factor:#04x}, x {x:#04x}");
                assert_eq!(gmul(x, factor), gmul(factor, x));
            }
        }
    }

    #[test]
    fn multiplication_distributes_over_xor() {
        for a in [0x01u8, 0x57, 0x80, 0xff] {
            for b in 0u8..=255 {
                assert_eq!(gmul(a, b ^ 0x1d), gmul(a, b) ^ gmul(a, 0x1d));
            }
        }
    }
}
