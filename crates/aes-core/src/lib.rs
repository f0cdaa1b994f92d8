//! AES block cipher (FIPS-197) for 128, 192 and 256-bit keys.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key expansion for all three key sizes.
//! - Single-block encryption and decryption, in place or by value.
//! - The individual round transformations and GF(2^8) tables they use.
//!
//! The state is a plain 16-byte array whose columns are big-endian words;
//! schedule words are converted with `to_be_bytes`/`from_be_bytes`, so the
//! output does not depend on host byte order.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE, NB};
pub use crate::cipher::{cipher, decrypt_block, encrypt_block, expand_key, inv_cipher};
pub use crate::error::{Error, Result};
pub use crate::key::{AesKey, KeySchedule, KeySize};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
