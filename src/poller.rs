//! Periodic node-status polling: one snapshot per cycle, printed to stdout.

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tokio::sync::watch;

use crate::rpc::RpcClient;

/// One poll cycle's worth of node status.
#[derive(Debug)]
pub struct NodeStatus {
    pub info: serde_json::Value,
    pub best_block: serde_json::Value,
    pub difficulty: f64,
    pub network_hashps: f64,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "info:\n{:#}", self.info)?;
        writeln!(f, "\nbest block:\n{:#}", self.best_block)?;
        writeln!(f, "\ndifficulty: {}", self.difficulty)?;
        write!(f, "networkhashps: {}", self.network_hashps)
    }
}

pub struct Poller {
    rpc: RpcClient,
}

impl Poller {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Fetch one full snapshot: node info, best block, difficulty and
    /// network hashrate, in that order. Any failure aborts the cycle.
    pub async fn cycle(&self) -> Result<NodeStatus> {
        let info: serde_json::Value = self.rpc.call("getinfo", json!([])).await?;
        let best_block = self.best_block_info().await?;
        let difficulty: f64 = self.rpc.call("getdifficulty", json!([])).await?;
        let network_hashps: f64 = self.rpc.call("getnetworkhashps", json!([])).await?;
        Ok(NodeStatus { info, best_block, difficulty, network_hashps })
    }

    /// `getbestblockhash` followed by `getblock` on the returned hash.
    /// A response without a best-block hash fails here, before `getblock`
    /// is ever issued.
    async fn best_block_info(&self) -> Result<serde_json::Value> {
        let hash: String = self.rpc.call("getbestblockhash", json!([])).await?;
        self.rpc.call("getblock", json!([hash])).await
    }

    /// Poll and print until `shutdown` fires.
    ///
    /// The shutdown signal is checked while sleeping between cycles, so a
    /// cycle in flight always completes before the loop returns. An RPC
    /// failure ends the loop with the error.
    pub async fn run(&self, interval: Duration, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        loop {
            let status = self.cycle().await?;
            println!(
                "---------------------------------------- {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("{status}");
            tokio::select! {
                _ = shutdown.changed() => return Ok(()),
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }
}
