/// Show every representation of a CID: v1 base32, v1 base58btc, v0 and the
/// on-chain multihash record
use cid_hex_codec::{LegacyMultihash, Result};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <cid>", args[0]);
        eprintln!("  cid: bafkrei..., zb2rh... or Qm...");
        std::process::exit(1);
    }

    let mh = LegacyMultihash::from_cid(&args[1])?;
    if mh.is_unset() {
        println!("(record is empty)");
        return Ok(());
    }
    let id = mh.content_id()?;

    println!("CIDv1 (base32):    {}", id);
    println!("CIDv1 (base58btc): {}", id.to_base58btc());
    println!("CIDv0:             {}", mh.to_cid_v0()?);
    println!("Digest:            {}", id.digest());
    println!(
        "Multihash record:  {}",
        String::from_utf8_lossy(&mh.to_json()?)
    );

    Ok(())
}
