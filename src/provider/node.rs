use std::time::Duration;

use base64::engine::general_purpose;
use base64::Engine;
use reqwest::Client;
use serde_json::json;

use crate::{
    configuration::Config,
    error::{self, Error},
    helpers::decode_u64_le,
    types::AbciQueryBody,
};

/// ABCI-style query channel against the chain node. Paths are opaque to this
/// client; values come back base64 encoded.
#[derive(Debug)]
pub struct NodeApi {
    config: Config,
    pub http: Client,
}

impl NodeApi {
    pub fn new(config: Config) -> Result<NodeApi, Error> {
        let http = match Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                return Err(error::Error::REQWEST(e));
            },
        };

        Ok(NodeApi { config, http })
    }

    pub async fn current_epoch(&self) -> Result<u64, Error> {
        self.query_u64("/shell/epoch").await
    }

    pub async fn total_stake_at(&self, epoch: i32) -> Result<u64, Error> {
        self.query_u64(&format!("/vp/pos/total_stake/{}", epoch))
            .await
    }

    async fn query_u64(&self, path: &str) -> Result<u64, Error> {
        let value = self.abci_query(path).await?;
        decode_u64_le(&value)
    }

    async fn abci_query(&self, path: &str) -> Result<Vec<u8>, Error> {
        let res = self
            .http
            .post(self.config.get_abci_query_url())
            .json(&json!({
                "jsonrpc": "2.0",
                "id": -1,
                "method": "abci_query",
                "params": {
                    "path": path,
                    "data": "",
                    "prove": false,
                },
            }))
            .send()
            .await?
            .json::<AbciQueryBody>()
            .await?;

        let response = res.result.response;

        if response.code != 0 {
            return Err(Error::AbciQuery(format!(
                "{}: code {}, {}",
                path,
                response.code,
                response.log.unwrap_or_default()
            )));
        }

        let value = response.value.ok_or_else(|| {
            Error::AbciQuery(format!("{}: empty value", path))
        })?;

        Ok(general_purpose::STANDARD.decode(value)?)
    }
}
