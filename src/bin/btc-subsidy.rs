use anyhow::{ensure, Result};
use clap::Parser;

use btc_monitor::subsidy::{block_subsidy, next_halving_height, SUBSIDY_HALVING_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "btc-subsidy", about = "Print the block subsidy at a given height")]
struct Args {
    /// Block height to evaluate.
    #[arg(long, default_value_t = 210_000)]
    height: u64,

    /// Blocks between subsidy halvings.
    #[arg(long, default_value_t = SUBSIDY_HALVING_INTERVAL)]
    interval: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.interval > 0, "--interval must be positive");

    let subsidy = block_subsidy(args.height, args.interval);
    println!("block subsidy at height {}: {} sats", args.height, subsidy);
    println!(
        "next halving at height {}",
        next_halving_height(args.height, args.interval)
    );
    Ok(())
}
