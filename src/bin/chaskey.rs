#![forbid(unsafe_code)]
// Demonstration driver: tag a single 16-byte message under a 16-byte key,
// both given as 32 hex characters on the command line.
//
// Hex convention: within every 4-byte group the hex pairs are written
// most-significant byte first, i.e. bytes 3,2,1,0 of the group. The tag is
// printed back in the same order.

use std::env;
use std::process;

use chaskey_mac::{mac, KeySchedule, TAG_MAX_LEN};

const GROUP_LEN: usize = 4;
const HEX_LEN: usize = 32;

fn decode_grouped(hexstr: &str) -> Result<[u8; 16], hex::FromHexError> {
    debug_assert_eq!(hexstr.len(), HEX_LEN);
    let raw = hex::decode(hexstr)?;
    let mut out = [0u8; 16];
    for (group, chunk) in raw.chunks_exact(GROUP_LEN).enumerate() {
        for (j, &b) in chunk.iter().rev().enumerate() {
            out[group * GROUP_LEN + j] = b;
        }
    }
    Ok(out)
}

fn encode_grouped(tag: &[u8]) -> String {
    let mut s = String::with_capacity(tag.len() * 2);
    for chunk in tag.chunks_exact(GROUP_LEN) {
        for &b in chunk.iter().rev() {
            s.push_str(&hex::encode([b]));
        }
    }
    s
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Missing arguments");
        process::exit(-1);
    }

    if args[1].len() != HEX_LEN {
        println!("Invalid message length");
        process::exit(-1);
    }
    let message = match decode_grouped(&args[1]) {
        Ok(m) => m,
        Err(_) => {
            println!("Invalid message length");
            process::exit(-1);
        }
    };

    if args[2].len() != HEX_LEN {
        println!("Invalid key length");
        process::exit(-1);
    }
    let key = match decode_grouped(&args[2]) {
        Ok(k) => k,
        Err(_) => {
            println!("Invalid key length");
            process::exit(-1);
        }
    };

    log::debug!("decoded {} message bytes and {} key bytes", message.len(), key.len());

    let schedule = KeySchedule::new(&key);
    let tag = match mac(TAG_MAX_LEN, &message, &schedule) {
        Ok(t) => t,
        Err(e) => {
            println!("MAC failure: {:?}", e);
            process::exit(-1);
        }
    };

    println!("Tag: {}", encode_grouped(&tag));
}
