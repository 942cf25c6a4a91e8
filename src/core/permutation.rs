#![forbid(unsafe_code)]
// Chaskey 128-bit ARX permutation.
// - Four 32-bit words mixed by two parallel add/rotate/xor pairs plus a
//   cross-mixing step; rotation amounts {5, 16, 8, 13, 7, 16} are fixed.
// - The round count is the variant parameter: 12 rounds is Chaskey-12, the
//   keyed-MAC variant implemented here. Callers go through `permute`, never
//   an inline round count.
// - No tables, no data-dependent branches or memory accesses.

/// Rounds per permutation call. 12 selects the Chaskey-12 variant (the
/// 8-round original is a different, incompatible primitive).
pub const ROUNDS: usize = 12;

/// One ARX round over the four-word state.
#[inline(always)]
fn round(v: &mut [u32; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(5);
    v[1] ^= v[0];
    v[0] = v[0].rotate_left(16);

    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(8);
    v[3] ^= v[2];

    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(13);
    v[3] ^= v[0];

    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(7);
    v[1] ^= v[2];
    v[2] = v[2].rotate_left(16);
}

/// Apply all `ROUNDS` rounds to `v` in place.
#[inline(always)]
pub fn permute(v: &mut [u32; 4]) {
    for _ in 0..ROUNDS {
        round(v);
    }
}
