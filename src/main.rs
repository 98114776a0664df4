use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::watch;

use btc_monitor::{poller::Poller, rpc::RpcClient};

#[derive(Parser, Debug)]
#[command(name = "btc-monitor", about = "Periodically poll a Bitcoin node and print its status")]
struct Args {
    /// Seconds to wait between poll cycles.
    #[arg(long, default_value_t = 7)]
    interval: u64,

    /// RPC endpoint; overrides RPC_URL.
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let rpc_url = match args.url {
        Some(url) => url,
        None => std::env::var("RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8332".to_string()),
    };
    let rpc_user = std::env::var("RPC_USER").context("missing RPC_USER")?;
    let rpc_pass = std::env::var("RPC_PASS").context("missing RPC_PASS")?;

    let poller = Poller::new(RpcClient::new(rpc_url, rpc_user, rpc_pass)?);

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = stop_tx.send(true);
        }
    });

    poller.run(Duration::from_secs(args.interval), stop_rx).await
}
