//! Bitcoin node monitoring tools: halving-schedule arithmetic and a
//! periodic JSON-RPC status poller.

pub mod poller;
pub mod rpc;
pub mod subsidy;
