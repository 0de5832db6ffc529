/// Extract the sha2-256 hex digest from a CIDv1 string
use cid_hex_codec::{cid_to_hex_with_config, CodecConfig, Result};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <cid> [--lower]", args[0]);
        std::process::exit(1);
    }

    let config = if args.iter().any(|a| a == "--lower") {
        CodecConfig::new().lowercase()
    } else {
        CodecConfig::new()
    };

    println!("{}", cid_to_hex_with_config(&args[1], &config)?);

    Ok(())
}
