//! Error type for the CBC layer.

use thiserror::Error;

/// Errors reported by CBC encryption, decryption and the padded helpers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key was rejected by the block cipher.
    #[error(transparent)]
    Key(#[from] aes_core::Error),

    /// Input to raw CBC was not a whole number of blocks.
    #[error("{context} length {len} is not a multiple of 16 bytes")]
    InvalidBlockAlignment {
        /// Which buffer was misaligned.
        context: &'static str,
        /// Offending length.
        len: usize,
    },

    /// The last decrypted byte is not a plausible PKCS#7 pad length.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// A known-answer vector produced the wrong output.
    #[error("known-answer test failed: {name}")]
    SelfTest {
        /// Name of the failing vector.
        name: String,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
