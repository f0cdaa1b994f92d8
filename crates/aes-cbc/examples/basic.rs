//! Encrypts a short message with AES-256-CBC and decrypts it again.

use aes_cbc::{decrypt_padded, encrypt_padded, pad_length, unpad};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);

    let message = b"attack at dawn, bring snacks";
    let ciphertext = encrypt_padded(message, &key, &iv).expect("valid key");
    assert_eq!(ciphertext.len(), 32);

    let plaintext = decrypt_padded(&ciphertext, &key, &iv).expect("valid padding");
    assert_eq!(plaintext, message);

    // Tampering with the last ciphertext block garbles the final plaintext block;
    // the padding check may or may not notice, which is why CBC needs a MAC.
    let mut tampered = ciphertext.clone();
    tampered[31] ^= 0x01;
    let raw = aes_cbc::decrypt(&tampered, &key, &iv).expect("aligned");
    println!(
        "tampered pad length: {} (unpadded {} bytes)",
        pad_length(&raw),
        unpad(&raw).len()
    );

    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("example succeeded; message round-tripped");
}
