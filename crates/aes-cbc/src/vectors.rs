//! Published known-answer vectors and a self-test over them.
//!
//! Block vectors come from FIPS-197 Appendix C; chained vectors from
//! SP 800-38A Appendix F.2.

use aes_core::{decrypt_block, encrypt_block, Block, KeySchedule};

use crate::error::{Error, Result};
use crate::mode::{decrypt, encrypt};

/// Single-block cipher vector, hex encoded.
#[derive(Clone, Copy, Debug)]
pub struct BlockVector {
    /// Human-readable source reference.
    pub name: &'static str,
    /// Key.
    pub key: &'static str,
    /// Plaintext block.
    pub plaintext: &'static str,
    /// Expected ciphertext block.
    pub ciphertext: &'static str,
}

/// Multi-block CBC vector, hex encoded.
#[derive(Clone, Copy, Debug)]
pub struct CbcVector {
    /// Human-readable source reference.
    pub name: &'static str,
    /// Key.
    pub key: &'static str,
    /// Initialization vector.
    pub iv: &'static str,
    /// Block-aligned plaintext.
    pub plaintext: &'static str,
    /// Expected ciphertext.
    pub ciphertext: &'static str,
}

const SP800_38A_PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

const SP800_38A_IV: &str = "000102030405060708090a0b0c0d0e0f";

/// FIPS-197 Appendix C example vectors.
pub const FIPS197_BLOCK_VECTORS: [BlockVector; 3] = [
    BlockVector {
        name: "FIPS-197 C.1 AES-128",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        name: "FIPS-197 C.2 AES-192",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        name: "FIPS-197 C.3 AES-256",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

/// SP 800-38A CBC example vectors.
pub const SP800_38A_CBC_VECTORS: [CbcVector; 3] = [
    CbcVector {
        name: "SP 800-38A F.2.1 CBC-AES128",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    },
    CbcVector {
        name: "SP 800-38A F.2.3 CBC-AES192",
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ),
    },
    CbcVector {
        name: "SP 800-38A F.2.5 CBC-AES256",
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ),
    },
];

fn unhex(name: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|_| Error::SelfTest {
        name: format!("{name} (malformed vector)"),
    })
}

fn unhex_block(name: &str, value: &str) -> Result<Block> {
    unhex(name, value)?.try_into().map_err(|_| Error::SelfTest {
        name: format!("{name} (vector is not one block)"),
    })
}

fn check(name: &str, ok: bool) -> Result<()> {
    if ok {
        log::debug!("{name}: ok");
        Ok(())
    } else {
        log::error!("{name}: mismatch");
        Err(Error::SelfTest {
            name: name.to_owned(),
        })
    }
}

/// Runs one block vector in both directions.
pub fn run_block_vector(vector: &BlockVector) -> Result<()> {
    let schedule = KeySchedule::new(&unhex(vector.name, vector.key)?)?;
    let plaintext = unhex_block(vector.name, vector.plaintext)?;
    let ciphertext = unhex_block(vector.name, vector.ciphertext)?;
    check(vector.name, encrypt_block(&plaintext, &schedule) == ciphertext)?;
    check(vector.name, decrypt_block(&ciphertext, &schedule) == plaintext)
}

/// Runs one CBC vector in both directions.
pub fn run_cbc_vector(vector: &CbcVector) -> Result<()> {
    let key = unhex(vector.name, vector.key)?;
    let iv = unhex_block(vector.name, vector.iv)?;
    let plaintext = unhex(vector.name, vector.plaintext)?;
    let ciphertext = unhex(vector.name, vector.ciphertext)?;
    check(vector.name, encrypt(&plaintext, &key, &iv)? == ciphertext)?;
    check(vector.name, decrypt(&ciphertext, &key, &iv)? == plaintext)
}

/// Runs every bundled vector, stopping at the first failure.
///
/// Returns the number of vectors checked.
pub fn self_test() -> Result<usize> {
    for vector in &FIPS197_BLOCK_VECTORS {
        run_block_vector(vector)?;
    }
    for vector in &SP800_38A_CBC_VECTORS {
        run_cbc_vector(vector)?;
    }
    Ok(FIPS197_BLOCK_VECTORS.len() + SP800_38A_CBC_VECTORS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vectors_pass() {
        assert_eq!(self_test(), Ok(6));
    }

    #[test]
    fn corrupted_vector_is_reported() {
        let mut vector = SP800_38A_CBC_VECTORS[0];
        vector.ciphertext = concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a6",
        );
        assert_eq!(
            run_cbc_vector(&vector),
            Err(Error::SelfTest {
                name: vector.name.to_owned()
            })
        );
    }

    #[test]
    fn each_cbc_block_depends_on_the_previous_one() {
        // Decrypting only the second half with C_1 as IV yields P_2..P_3.
        let vector = &SP800_38A_CBC_VECTORS[2];
        let key = hex::decode(vector.key).unwrap();
        let ciphertext = hex::decode(vector.ciphertext).unwrap();
        let plaintext = hex::decode(vector.plaintext).unwrap();
        let iv: Block = ciphertext[16..32].try_into().unwrap();
        let tail = decrypt(&ciphertext[32..], &key, &iv).unwrap();
        assert_eq!(tail, &plaintext[32..]);
    }
}
