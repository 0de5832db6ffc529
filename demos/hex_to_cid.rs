/// Convert a sha2-256 hex digest into a CIDv1 string
use cid_hex_codec::{hex_to_cid, Result};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <hex_digest>", args[0]);
        eprintln!("  hex_digest: 64 hex characters, optionally 0x-prefixed");
        std::process::exit(1);
    }

    let cid = hex_to_cid(&args[1])?;
    println!("{}", cid);

    Ok(())
}
