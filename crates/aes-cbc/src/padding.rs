//! PKCS#7 padding (RFC 2315 §10.3) for 16-byte blocks.
//!
//! Padding is independent of encryption so callers can pad or unpad on
//! their own. Validation is deliberately length-only: [`pad_length`] looks at
//! the final byte and nothing else. It does not check that every padding
//! byte carries the same value, and it is no substitute for authentication.
//! Never expose whether unpadding succeeded to a remote party; doing so turns
//! the decryptor into a padding oracle.

use aes_core::BLOCK_SIZE;

/// Largest number of padding bytes ever appended.
pub const MAX_PAD_BYTES: usize = BLOCK_SIZE;

/// Returns the padding suffix for a message of `len` bytes: `k` bytes of
/// value `k`, where `k = 16 - len % 16` (so always between 1 and 16).
pub fn pad_bytes_to_append(len: usize) -> Vec<u8> {
    let count = MAX_PAD_BYTES - (len % MAX_PAD_BYTES);
    vec![count as u8; count]
}

/// Returns a copy of `buffer` with PKCS#7 padding appended.
///
/// A block-aligned buffer still gains a full 16-byte padding block.
pub fn pad(buffer: &[u8]) -> Vec<u8> {
    let suffix = pad_bytes_to_append(buffer.len());
    let mut padded = Vec::with_capacity(buffer.len() + suffix.len());
    padded.extend_from_slice(buffer);
    padded.extend_from_slice(&suffix);
    padded
}

/// Number of trailing padding bytes claimed by the last byte of `buffer`.
///
/// Returns 0, meaning "invalid padding", when the buffer is empty or the
/// last byte is 0, greater than 16, or longer than the buffer itself.
pub fn pad_length(buffer: &[u8]) -> usize {
    let Some(&last) = buffer.last() else {
        return 0;
    };
    let count = usize::from(last);
    if count > MAX_PAD_BYTES || count > buffer.len() {
        return 0;
    }
    count
}

/// Strips the padding claimed by [`pad_length`].
///
/// When the padding is invalid nothing is removed and the whole buffer is
/// returned; callers should then treat the message as corrupt.
pub fn unpad(buffer: &[u8]) -> &[u8] {
    let count = pad_length(buffer);
    if count == 0 {
        log::debug!("invalid padding on {}-byte buffer, leaving it intact", buffer.len());
    }
    &buffer[..buffer.len() - count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_block_boundary() {
        for len in 0..=48usize {
            let message = vec![0xeeu8; len];
            let padded = pad(&message);
            let expected_pad = 16 - len % 16;
            assert_eq!(padded.len() % 16, 0);
            assert_eq!(padded.len(), len + expected_pad);
            assert!(padded[len..].iter().all(|&b| usize::from(b) == expected_pad));
            assert_eq!(pad_length(&padded), expected_pad);
            assert_eq!(unpad(&padded), &message[..]);
        }
    }

    #[test]
    fn aligned_input_gets_full_pad_block() {
        let padded = pad(&[1u8; 16]);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
        assert_eq!(pad(&[]), vec![16u8; 16]);
    }

    #[test]
    fn suffix_only() {
        assert_eq!(pad_bytes_to_append(13), vec![3, 3, 3]);
        assert_eq!(pad_bytes_to_append(15), vec![1]);
        assert_eq!(pad_bytes_to_append(32), vec![16u8; 16]);
    }

    #[test]
    fn out_of_range_last_byte_is_invalid() {
        let mut padded = pad(b"attack at dawn");
        for bad in [0u8, 17, 0xff] {
            *padded.last_mut().unwrap() = bad;
            assert_eq!(pad_length(&padded), 0);
            assert_eq!(unpad(&padded), &padded[..]);
        }
    }

    #[test]
    fn pad_longer_than_buffer_is_invalid() {
        assert_eq!(pad_length(&[5, 5, 5]), 0);
        assert_eq!(unpad(&[5, 5, 5]), &[5, 5, 5]);
        assert_eq!(pad_length(&[]), 0);
        assert_eq!(unpad(&[]), &[] as &[u8]);
    }

    #[test]
    fn only_the_last_byte_is_inspected() {
        // Length-only validation: mismatched earlier pad bytes go unnoticed.
        let buffer = [b'a', b'b', 9, 2];
        assert_eq!(pad_length(&buffer), 2);
        assert_eq!(unpad(&buffer), b"ab");
    }
}
