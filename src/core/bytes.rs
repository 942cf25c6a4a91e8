#![forbid(unsafe_code)]
// Little-endian block codec.
// A 16-byte block maps to four u32 words, least-significant byte first within
// each word. Explicit per-byte conversion only; the layout never depends on
// host endianness or pointer casts.

use crate::core::mac::BLOCK_LEN;

/// Decode a 16-byte block into four little-endian u32 words.
#[inline(always)]
pub fn words_from_le(block: &[u8; BLOCK_LEN]) -> [u32; 4] {
    let mut w = [0u32; 4];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    w
}

/// Encode four u32 words into a 16-byte block, little-endian per word.
#[inline(always)]
pub fn words_to_le(w: &[u32; 4]) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(w.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
