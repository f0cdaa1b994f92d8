//! AES in CBC mode with PKCS#7 padding.
//!
//! Builds on [`aes_core`] to encrypt arbitrary-length messages under a
//! shared key and a per-message IV:
//! - [`mode`]: raw CBC over block-aligned buffers, plus padded wrappers.
//! - [`padding`]: PKCS#7 pad/unpad, usable on their own.
//! - [`vectors`]: FIPS-197 and SP 800-38A known-answer vectors.
//!
//! This is confidentiality only. Nothing here authenticates a message, and
//! padding validity must not be read as evidence that a ciphertext is
//! genuine. Pair it with a MAC (encrypt-then-MAC) before exposing a
//! decryptor to untrusted input.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod mode;
pub mod padding;
pub mod vectors;

pub use aes_core::{AesKey, Block, KeySchedule, KeySize, BLOCK_SIZE};

pub use crate::error::{Error, Result};
pub use crate::mode::{
    decrypt, decrypt_in_place, decrypt_padded, decrypt_with_schedule, encrypt, encrypt_in_place,
    encrypt_padded, encrypt_with_schedule,
};
pub use crate::padding::{pad, pad_bytes_to_append, pad_length, unpad, MAX_PAD_BYTES};
pub use crate::vectors::self_test;
