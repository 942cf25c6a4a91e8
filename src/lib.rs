#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(feature = "std"))]
use core::panic::PanicInfo;

#[cfg(not(feature = "std"))]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! { loop {} }

pub mod core;

pub use crate::core::key_schedule::KeySchedule;
pub use crate::core::mac::{mac, verify, MacError, BLOCK_LEN, TAG_MAX_LEN};
pub use crate::core::subkeys::derive_subkeys;
