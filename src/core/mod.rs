pub mod bytes;
pub mod key_schedule;
pub mod mac;
pub mod permutation;
pub mod subkeys;
