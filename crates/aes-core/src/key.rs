//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::NB;
use crate::error::{Error, Result};

/// Longest supported key in bytes.
pub(crate) const MAX_KEY_BYTES: usize = 32;

/// Word count of the largest (AES-256) key schedule.
pub(crate) const MAX_SCHEDULE_WORDS: usize = NB * (14 + 1);

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Selects the key size for a key of `len` bytes.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => {
                log::debug!("rejecting {len}-byte AES key");
                Err(Error::InvalidKeyLength { len })
            }
        }
    }

    /// Key length in bytes.
    pub const fn key_bytes(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn rounds(self) -> usize {
        self.nk() + 6
    }

    /// Length of the expanded schedule in words (`Nb * (Nr + 1)`).
    pub const fn schedule_words(self) -> usize {
        NB * (self.rounds() + 1)
    }

    /// Key size in bits, as used in algorithm names.
    pub const fn bits(self) -> usize {
        self.key_bytes() * 8
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Secret AES key. The bytes are wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    bytes: [u8; MAX_KEY_BYTES],
    #[zeroize(skip)]
    size: KeySize,
}

impl AesKey {
    /// Copies a key from a slice, validating its length.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(key.len())?;
        let mut bytes = [0u8; MAX_KEY_BYTES];
        bytes[..key.len()].copy_from_slice(key);
        Ok(Self { bytes, size })
    }

    /// Size class of this key.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_bytes()]
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

macro_rules! impl_from_array {
    ($($len:literal => $size:ident),*) => {
        $(
            impl From<[u8; $len]> for AesKey {
                fn from(value: [u8; $len]) -> Self {
                    let mut bytes = [0u8; MAX_KEY_BYTES];
                    bytes[..$len].copy_from_slice(&value);
                    Self {
                        bytes,
                        size: KeySize::$size,
                    }
                }
            }
        )*
    };
}

impl_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded key schedule: `Nb * (Nr + 1)` words, each holding four key
/// bytes in big-endian order.
///
/// A schedule is immutable once derived and can be shared by reference
/// across threads running independent block operations.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; MAX_SCHEDULE_WORDS],
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    /// Validates `key` and expands it.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = AesKey::from_slice(key)?;
        Ok(crate::cipher::expand_key(&key))
    }

    pub(crate) fn from_words(words: [u32; MAX_SCHEDULE_WORDS], size: KeySize) -> Self {
        Self { words, size }
    }

    /// Key size the schedule was derived from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// All schedule words.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.schedule_words()]
    }

    /// Returns the round key at the requested index, or `None` past `Nr`.
    pub fn round_key(&self, round: usize) -> Option<[u32; NB]> {
        let start = round.checked_mul(NB)?;
        let words = self.words().get(start..start.checked_add(NB)?)?;
        Some([words[0], words[1], words[2], words[3]])
    }

    /// Round key for `round`, which the cipher keeps within `0..=Nr`.
    #[inline]
    pub(crate) fn round_words(&self, round: usize) -> [u32; NB] {
        let i = round * NB;
        [
            self.words[i],
            self.words[i + 1],
            self.words[i + 2],
            self.words[i + 3],
        ]
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_size_parameters() {
        assert_eq!(KeySize::Aes128.rounds(), 10);
        assert_eq!(KeySize::Aes192.rounds(), 12);
        assert_eq!(KeySize::Aes256.rounds(), 14);
        assert_eq!(KeySize::Aes128.schedule_words(), 44);
        assert_eq!(KeySize::Aes192.schedule_words(), 52);
        assert_eq!(KeySize::Aes256.schedule_words(), 60);
        assert_eq!(KeySize::Aes192.to_string(), "AES-192");
    }

    #[test]
    fn rejects_unsupported_lengths() {
        for len in [0usize, 1, 15, 17, 20, 31, 33, 64] {
            let key = vec![0u8; len];
            assert_eq!(
                AesKey::from_slice(&key),
                Err(Error::InvalidKeyLength { len })
            );
            assert_eq!(
                KeySchedule::new(&key).unwrap_err(),
                Error::InvalidKeyLength { len }
            );
        }
    }

    #[test]
    fn slice_and_array_constructors_agree() {
        let raw = [7u8; 24];
        let from_array = AesKey::from(raw);
        let from_slice = AesKey::try_from(&raw[..]).expect("valid length");
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array.size(), KeySize::Aes192);
        assert_eq!(from_array.as_bytes(), &raw);
    }

    #[test]
    fn round_key_past_last_round_is_none() {
        let aes128 = KeySchedule::new(&[0x11u8; 16]).expect("valid key");
        assert_eq!(aes128.round_key(10), Some(aes128.round_words(10)));
        for round in [11usize, 14, 15, 100, usize::MAX] {
            assert_eq!(aes128.round_key(round), None, "round {round}");
        }

        let aes256 = KeySchedule::new(&[0x22u8; 32]).expect("valid key");
        assert_eq!(aes256.round_key(14), Some(aes256.round_words(14)));
        assert_eq!(aes256.round_key(15), None);
    }

    #[test]
    fn backing_arrays_fit_the_largest_key() {
        assert_eq!(MAX_KEY_BYTES, KeySize::Aes256.key_bytes());
        assert_eq!(MAX_SCHEDULE_WORDS, KeySize::Aes256.schedule_words());
    }

    #[test]
    fn debug_does_not_print_key_material() {
        let key = AesKey::from([0xabu8; 16]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("171"));
        assert!(!rendered.to_lowercase().contains("ab, "));
        assert!(rendered.contains("Aes128"));
    }
}
