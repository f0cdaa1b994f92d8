//! Cipher Block Chaining (NIST SP 800-38A §6.2).
//!
//! `C_i = E(P_i ^ C_{i-1})` and `P_i = D(C_i) ^ C_{i-1}` with `C_{-1} = IV`.
//! Inputs to the raw functions must already be block-aligned; use
//! [`encrypt_padded`]/[`decrypt_padded`] or the [`crate::padding`] helpers
//! for arbitrary-length messages.
//!
//! The IV must be unpredictable for every message encrypted under a key.
//! Generating it is the caller's job.

use aes_core::{cipher, inv_cipher, xor_in_place, Block, KeySchedule, BLOCK_SIZE};

use crate::error::{Error, Result};
use crate::padding::{pad, pad_length};

fn check_alignment(context: &'static str, len: usize) -> Result<()> {
    if len % BLOCK_SIZE != 0 {
        log::debug!("{context} of {len} bytes is not block-aligned");
        return Err(Error::InvalidBlockAlignment { context, len });
    }
    Ok(())
}

/// Encrypts a block-aligned buffer in place.
pub fn encrypt_in_place(buffer: &mut [u8], schedule: &KeySchedule, iv: &Block) -> Result<()> {
    check_alignment("plaintext", buffer.len())?;

    let mut prev = *iv;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &prev);
        cipher(&mut block, schedule);
        chunk.copy_from_slice(&block);
        prev = block;
    }
    Ok(())
}

/// Decrypts a block-aligned buffer in place.
pub fn decrypt_in_place(buffer: &mut [u8], schedule: &KeySchedule, iv: &Block) -> Result<()> {
    check_alignment("ciphertext", buffer.len())?;

    let mut prev = *iv;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        // Keep the ciphertext: the next block chains off it, not off our output.
        let current = block;
        inv_cipher(&mut block, schedule);
        xor_in_place(&mut block, &prev);
        chunk.copy_from_slice(&block);
        prev = current;
    }
    Ok(())
}

/// Encrypts `plaintext` under an already expanded schedule.
pub fn encrypt_with_schedule(
    plaintext: &[u8],
    schedule: &KeySchedule,
    iv: &Block,
) -> Result<Vec<u8>> {
    let mut output = plaintext.to_vec();
    encrypt_in_place(&mut output, schedule, iv)?;
    Ok(output)
}

/// Decrypts `ciphertext` under an already expanded schedule.
pub fn decrypt_with_schedule(
    ciphertext: &[u8],
    schedule: &KeySchedule,
    iv: &Block,
) -> Result<Vec<u8>> {
    let mut output = ciphertext.to_vec();
    decrypt_in_place(&mut output, schedule, iv)?;
    Ok(output)
}

/// Encrypts a block-aligned `plaintext` with a 16, 24 or 32-byte `key`.
///
/// The key schedule is derived for this call only.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &Block) -> Result<Vec<u8>> {
    check_alignment("plaintext", plaintext.len())?;
    let schedule = KeySchedule::new(key)?;
    encrypt_with_schedule(plaintext, &schedule, iv)
}

/// Decrypts a block-aligned `ciphertext` with a 16, 24 or 32-byte `key`.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &Block) -> Result<Vec<u8>> {
    check_alignment("ciphertext", ciphertext.len())?;
    let schedule = KeySchedule::new(key)?;
    decrypt_with_schedule(ciphertext, &schedule, iv)
}

/// Pads `plaintext` with PKCS#7 and encrypts it.
pub fn encrypt_padded(plaintext: &[u8], key: &[u8], iv: &Block) -> Result<Vec<u8>> {
    let schedule = KeySchedule::new(key)?;
    let mut output = pad(plaintext);
    encrypt_in_place(&mut output, &schedule, iv)?;
    Ok(output)
}

/// Decrypts `ciphertext` and strips its PKCS#7 padding.
///
/// Fails with [`Error::InvalidPadding`] when the last plaintext byte is not a
/// valid pad length. Success says nothing about authenticity: a tampered
/// ciphertext can still unpad cleanly.
pub fn decrypt_padded(ciphertext: &[u8], key: &[u8], iv: &Block) -> Result<Vec<u8>> {
    let mut output = decrypt(ciphertext, key, iv)?;
    let count = pad_length(&output);
    if count == 0 {
        log::warn!("decrypted {} bytes with invalid padding", ciphertext.len());
        return Err(Error::InvalidPadding);
    }
    output.truncate(output.len() - count);
    Ok(output)
}
