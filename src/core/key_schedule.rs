#![forbid(unsafe_code)]
//! Key schedule for the Chaskey-12 MAC.
//!
//! Holds the 128-bit master key together with the two doubling-derived
//! finalization subkeys, computed once at construction and reused read-only
//! across any number of MAC computations under the same key.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe key material from
//!   memory when the schedule goes out of scope.
//! - `Debug` implementation redacts all three values.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::bytes::words_from_le;
use crate::core::subkeys::derive_subkeys;

/// Master key length in bytes.
pub const KEY_LEN: usize = 16;

/// A master key with its two precomputed subkeys.
///
/// Subkeys are a pure function of the key and must be rebuilt (by
/// constructing a new schedule) whenever the key changes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    pub(crate) key: [u32; 4],
    pub(crate) subkey1: [u32; 4],
    pub(crate) subkey2: [u32; 4],
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("key", &"***SENSITIVE***")
            .field("subkey1", &"***SENSITIVE***")
            .field("subkey2", &"***SENSITIVE***")
            .finish()
    }
}

impl KeySchedule {
    /// Build a schedule from 16 raw key bytes (little-endian per 32-bit word).
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        Self::from_words(words_from_le(key))
    }

    /// Build a schedule from the key's four little-endian words.
    pub fn from_words(key: [u32; 4]) -> Self {
        let (subkey1, subkey2) = derive_subkeys(&key);
        KeySchedule { key, subkey1, subkey2 }
    }
}
