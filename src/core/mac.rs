#![forbid(unsafe_code)]
// Chaskey-12 MAC compression.
// Single-key CBC-MAC variant: the state starts as the key, absorbs each full
// message block through the permutation, and finishes the last block under a
// doubling-derived subkey XORed in both before and after the final permute.
// The double subkey XOR is what blocks length extension and final-block-type
// confusion for a single-key construction.

extern crate alloc;
use alloc::vec::Vec;

use crate::core::bytes::{words_from_le, words_to_le};
use crate::core::key_schedule::KeySchedule;
use crate::core::permutation::permute;

/// Message block length in bytes (the permutation's input granularity).
pub const BLOCK_LEN: usize = 16;

/// Maximum tag length in bytes.
pub const TAG_MAX_LEN: usize = 16;

/// Byte that starts the padding of a partial final block.
const PAD_BYTE: u8 = 0x01;

#[derive(Debug, PartialEq, Eq)]
pub enum MacError {
    /// Requested tag length exceeds [`TAG_MAX_LEN`].
    TagLengthInvalid,
    /// The expected tag handed to `verify` does not have `taglen` bytes.
    TagLengthMismatch,
}

/// Compute the Chaskey-12 tag of `message` under `schedule`.
///
/// Returns the first `taglen` bytes (`taglen <= 16`) of the final state,
/// serialized little-endian per 32-bit word. Rejects an out-of-range
/// `taglen` before touching the message; no partial tag is ever produced.
pub fn mac(taglen: usize, message: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>, MacError> {
    if taglen > TAG_MAX_LEN {
        return Err(MacError::TagLengthInvalid);
    }

    let mlen = message.len();
    let mut v = schedule.key;

    // Blocks strictly before the final one. A message that is an exact
    // multiple of 16 bytes keeps its trailing block out of this loop; that
    // block is absorbed exactly once, by the finalization below.
    let full = if mlen == 0 { 0 } else { (mlen - 1) / BLOCK_LEN };
    for chunk in message[..full * BLOCK_LEN].chunks_exact(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        absorb(&mut v, &block);
        permute(&mut v);
    }

    // Final block: raw with subkey1 when the message fills it exactly,
    // 0x01-then-zeros padded with subkey2 otherwise (the empty message is a
    // padding-only block).
    let mut last = [0u8; BLOCK_LEN];
    let subkey = if mlen > 0 && mlen % BLOCK_LEN == 0 {
        last.copy_from_slice(&message[mlen - BLOCK_LEN..]);
        &schedule.subkey1
    } else {
        let tail = &message[full * BLOCK_LEN..];
        last[..tail.len()].copy_from_slice(tail);
        last[tail.len()] = PAD_BYTE;
        &schedule.subkey2
    };

    absorb(&mut v, &last);
    for i in 0..4 {
        v[i] ^= subkey[i];
    }
    permute(&mut v);
    for i in 0..4 {
        v[i] ^= subkey[i];
    }

    Ok(words_to_le(&v)[..taglen].to_vec())
}

/// Recompute the tag and compare against `expected` in constant time.
///
/// `expected` must be exactly `taglen` bytes; a mismatched length is a
/// caller error, not a forgery verdict.
pub fn verify(
    taglen: usize,
    message: &[u8],
    schedule: &KeySchedule,
    expected: &[u8],
) -> Result<bool, MacError> {
    if expected.len() != taglen {
        return Err(MacError::TagLengthMismatch);
    }
    let computed = mac(taglen, message, schedule)?;
    Ok(ct_eq(&computed, expected))
}

/// XOR a block's four little-endian words into the state.
#[inline(always)]
fn absorb(v: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let w = words_from_le(block);
    for i in 0..4 {
        v[i] ^= w[i];
    }
}

/// Constant-time equality over equal-length byte slices.
#[inline(always)]
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
