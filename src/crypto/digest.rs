//! The MD2 digest engine.
//!
//! This module computes the 128-bit MD2 digest (RFC 1319) of a complete message
//! held in memory. The computation runs in four stages over the whole message:
//! - Padding the message to a multiple of the block size
//! - Appending a 16-byte checksum of the padded message
//! - Zeroing the 48-byte working state
//! - Compressing every 16-byte block into the state
//!
//! The engine keeps no state between calls and never fails; it only borrows the
//! input for the duration of one call.
//!
//! # Examples
//!
//! ```
//! use md2::crypto::digest::md2_digest;
//!
//! let hash = md2_digest(b"abc");
//! assert_eq!(hex::encode(hash), "da853b0d3f88d99b30283a69e6ded6bb");
//! ```

use log::trace;

use super::consts::{BLOCK_LENGTH, DIGEST_LENGTH, PI_SUBST, ROUND_COUNT, STATE_LENGTH};

/// A finished MD2 digest.
pub type Digest = [u8; DIGEST_LENGTH];

/// Returns the number of padding bytes appended to a message of `length` bytes.
///
/// The result is always in `1..=16`: a message that already fills whole blocks
/// receives one extra block of padding.
///
/// # Examples
///
/// ```
/// use md2::crypto::digest::padding_length;
///
/// assert_eq!(padding_length(0), 16);
/// assert_eq!(padding_length(16), 16);
/// assert_eq!(padding_length(17), 15);
/// ```
pub fn padding_length(length: usize) -> usize {
    BLOCK_LENGTH - (length % BLOCK_LENGTH)
}

/// Copies `input` into a new buffer and appends the padding bytes.
///
/// Each padding byte holds the padding length. The buffer is allocated with room
/// for the checksum block so that [`append_checksum`] never reallocates.
pub fn pad_message(input: &[u8]) -> Vec<u8> {
    let padding = padding_length(input.len());
    let mut padded = Vec::with_capacity(input.len() + padding + BLOCK_LENGTH);
    padded.extend_from_slice(input);
    padded.resize(input.len() + padding, padding as u8);
    padded
}

/// Computes the checksum block of a padded message.
///
/// The carry byte chains through every position of every block; it is never
/// reset between blocks.
///
/// # Panics
///
/// Panics if `padded` is not a whole number of blocks.
pub fn compute_checksum(padded: &[u8]) -> [u8; BLOCK_LENGTH] {
    assert!(
        padded.len() % BLOCK_LENGTH == 0,
        "padded message length {} is not a multiple of {}",
        padded.len(),
        BLOCK_LENGTH
    );

    let mut checksum = [0u8; BLOCK_LENGTH];
    let mut carry = 0u8;
    for block in padded.chunks_exact(BLOCK_LENGTH) {
        for (j, &c) in block.iter().enumerate() {
            checksum[j] ^= PI_SUBST[(c ^ carry) as usize];
            carry = checksum[j];
        }
    }
    checksum
}

/// Appends the checksum of `padded` to itself.
pub fn append_checksum(padded: &mut Vec<u8>) {
    let checksum = compute_checksum(padded);
    padded.extend_from_slice(&checksum);
}

/// Mixes one 16-byte block into the 48-byte working state.
///
/// The running value `t` starts at zero for every block and carries over from
/// one round to the next.
pub fn compress_block(state: &mut [u8; STATE_LENGTH], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LENGTH);

    for j in 0..BLOCK_LENGTH {
        state[BLOCK_LENGTH + j] = block[j];
        state[2 * BLOCK_LENGTH + j] = state[BLOCK_LENGTH + j] ^ state[j];
    }

    let mut t = 0u8;
    for round in 0..ROUND_COUNT {
        for x in state.iter_mut() {
            *x ^= PI_SUBST[t as usize];
            t = *x;
        }
        t = t.wrapping_add(round as u8);
    }
}

/// Computes the MD2 digest of a complete message.
///
/// The empty slice is a valid message and yields the well-known empty-input
/// digest; padding is applied in every case.
///
/// # Arguments
///
/// * `input` - The message to hash
///
/// # Returns
///
/// Returns the 16-byte digest.
///
/// # Examples
///
/// ```
/// use md2::crypto::digest::md2_digest;
///
/// let hash = md2_digest(b"");
/// assert_eq!(hex::encode(hash), "8350e5a3e24c153df2275c9f80692773");
/// ```
pub fn md2_digest(input: &[u8]) -> Digest {
    let mut message = pad_message(input);
    append_checksum(&mut message);

    let mut state = [0u8; STATE_LENGTH];
    for block in message.chunks_exact(BLOCK_LENGTH) {
        compress_block(&mut state, block);
    }
    trace!(
        "md2: {} input bytes, {} blocks compressed",
        input.len(),
        message.len() / BLOCK_LENGTH
    );

    let mut digest = [0u8; DIGEST_LENGTH];
    digest.copy_from_slice(&state[..DIGEST_LENGTH]);
    digest
}

/// Computes the MD2 digest of `input` and returns it as lowercase hex.
pub fn md2_hex_digest(input: &[u8]) -> String {
    hex::encode(md2_digest(input))
}
