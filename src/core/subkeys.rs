#![forbid(unsafe_code)]
// GF(2^128) doubling key schedule.
// The 128-bit key, read as four little-endian u32 words, is doubled twice in
// GF(2^128) mod x^128 + x^7 + x^2 + x + 1. The reduction is a conditional
// XOR of 0x87 into the low word, selected by table lookup on the shifted-out
// bit so there is no secret-dependent branch.

/// Reduction constants indexed by the bit shifted out of the top word.
const REDUCTION: [u32; 2] = [0x00, 0x87];

/// Multiply a 128-bit value by two in GF(2^128).
///
/// Pure and total: a plain one-bit left shift with carry propagation across
/// the four words, folding the carried-out bit back in as `0x87`.
#[inline(always)]
pub fn double(x: &[u32; 4]) -> [u32; 4] {
    [
        (x[0] << 1) ^ REDUCTION[(x[3] >> 31) as usize],
        (x[1] << 1) | (x[0] >> 31),
        (x[2] << 1) | (x[1] >> 31),
        (x[3] << 1) | (x[2] >> 31),
    ]
}

/// Derive the two finalization subkeys from the master key:
/// `subkey1 = 2·key`, `subkey2 = 4·key`.
#[inline(always)]
pub fn derive_subkeys(key: &[u32; 4]) -> ([u32; 4], [u32; 4]) {
    let k1 = double(key);
    let k2 = double(&k1);
    (k1, k2)
}
