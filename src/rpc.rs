use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: &'static str,
    method: String,
    params: serde_json::Value,
}

#[derive(Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
    pub id: serde_json::Value,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC client for a Bitcoin node, authenticated with HTTP Basic auth.
#[derive(Clone)]
pub struct RpcClient {
    http: Client,
    url: String,
    user: String,
    pass: String,
}

impl RpcClient {
    pub fn new(url: String, user: String, pass: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build reqwest client")?;
        Ok(Self { http, url, user, pass })
    }

    /// Issue a single call and decode its `result` field.
    ///
    /// An `error` object in the response, or a missing/null `result`, is an
    /// error; there is no retry.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> anyhow::Result<T> {
        let req = RpcRequest {
            jsonrpc: "1.0",
            id: "btc-monitor",
            method: method.to_string(),
            params,
        };

        let res = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.pass))
            .json(&req)
            .send()
            .await
            .with_context(|| format!("rpc http send failed ({method})"))?;

        let status = res.status();
        let body = res
            .json::<RpcResponse<T>>()
            .await
            .with_context(|| format!("rpc parse failed for {method} (status {status})"))?;

        if let Some(err) = body.error {
            return Err(anyhow::anyhow!("rpc error {}: {}", err.code, err.message));
        }
        body.result
            .ok_or_else(|| anyhow::anyhow!("rpc response for {method} missing result"))
    }
}
