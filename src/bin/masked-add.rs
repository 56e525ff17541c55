//! Verification harness for the masked adder.
//!
//! Runs one masked addition and compares it against plain arithmetic,
//! reporting pass/fail. With `--seed` the diffused-seed entropy policy is
//! used; otherwise every gate draws fresh OS randomness.

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use masked_rca::{
    entropy::{CryptoEntropy, DiffusingRegister},
    AdderConfig, Addition, MaskedAdder,
};

#[derive(Debug, Parser)]
#[command(name = "masked-add", about = "Masked ripple-carry adder harness")]
struct Args {
    /// First operand.
    #[arg(long)]
    a: u64,
    /// Second operand.
    #[arg(long)]
    b: u64,
    /// Carry-in bit.
    #[arg(long)]
    cin: bool,
    /// Operand width in bits.
    #[arg(long, default_value_t = 8)]
    width: usize,
    /// Number of Boolean shares per masked bit.
    #[arg(long, default_value_t = 3)]
    nshares: usize,
    /// Seed for the diffused-seed entropy policy. Must fit in
    /// `(nshares - 1) * 14` bits.
    #[arg(long)]
    seed: Option<u128>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = AdderConfig::builder()
        .width(args.width)
        .nshares(args.nshares)
        .build()?;
    let adder = MaskedAdder::new(config)?;

    let Addition { sum, cout } = match args.seed {
        Some(seed) => {
            let mut entropy = DiffusingRegister::new(seed, args.nshares)?;
            adder.add(args.a, args.b, args.cin, &mut entropy)?
        }
        None => {
            let mut entropy = CryptoEntropy::new(OsRng);
            adder.add(args.a, args.b, args.cin, &mut entropy)?
        }
    };

    let expected = args.a as u128 + args.b as u128 + args.cin as u128;
    let expected_sum = (expected & (u64::MAX as u128 >> (64 - args.width))) as u64;
    let expected_cout = (expected >> args.width) & 1 == 1;

    debug!(sum, cout, expected_sum, expected_cout, "masked addition done");

    if sum == expected_sum && cout == expected_cout {
        println!("PASS: {} + {} + {} = {sum} (cout = {cout})", args.a, args.b, args.cin as u8);
        Ok(())
    } else {
        println!(
            "FAIL: got sum = {sum}, cout = {cout}, expected sum = {expected_sum}, cout = {expected_cout}"
        );
        std::process::exit(1);
    }
}
