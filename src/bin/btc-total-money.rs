use anyhow::{ensure, Result};
use clap::Parser;

use btc_monitor::subsidy::{total_money, SUBSIDY_HALVING_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "btc-total-money", about = "Print the total coin supply over all halving epochs")]
struct Args {
    /// Blocks between subsidy halvings.
    #[arg(long, default_value_t = SUBSIDY_HALVING_INTERVAL)]
    interval: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.interval > 0, "--interval must be positive");

    let (total_sats, total_blocks) = total_money(args.interval);
    println!("total BTC ever to be created: {total_sats} sats");
    println!("total subsidised blocks: {total_blocks}");
    Ok(())
}
