//! Authorization gate client
//!
//! Single outbound GET with a bounded timeout against the configured
//! authorizer endpoint. The only approval shape is
//! `{"status": "success", "data": {"authorization": true}}`; anything
//! else the service actually answers with is a denial. Transport
//! failures (connect, DNS, timeout) are reported separately so callers
//! can tell "denied" from "could not ask". No retry here.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::transfer::{Authorizer, TransferError};

pub struct AuthorizationGate {
    client: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct GateReply {
    #[serde(default)]
    data: Option<GateData>,
}

#[derive(Deserialize)]
struct GateData {
    #[serde(default)]
    authorization: bool,
}

impl AuthorizationGate {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl Authorizer for AuthorizationGate {
    async fn authorize(&self) -> Result<(), TransferError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Authorization gate unreachable");
            TransferError::GateUnavailable
        })?;

        // A reachable gate that answers anything but the approval
        // payload is an explicit denial, including malformed bodies.
        let approved = response
            .json::<GateReply>()
            .await
            .map(|reply| reply.data.map(|d| d.authorization).unwrap_or(false))
            .unwrap_or(false);

        if approved {
            Ok(())
        } else {
            tracing::info!("Authorization gate denied the transfer");
            Err(TransferError::NotAuthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_payload_shape() {
        let reply: GateReply =
            serde_json::from_str(r#"{"status":"success","data":{"authorization":true}}"#).unwrap();
        assert!(reply.data.unwrap().authorization);
    }

    #[test]
    fn test_denial_and_malformed_payloads() {
        let denied: GateReply =
            serde_json::from_str(r#"{"status":"fail","data":{"authorization":false}}"#).unwrap();
        assert!(!denied.data.unwrap().authorization);

        let empty: GateReply = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.data.is_none());

        let missing_flag: GateReply = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(!missing_flag.data.unwrap().authorization);
    }
}
