use crate::{RpcError, RpcResult};

use dash_auth::SharedSecret;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    secret: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    fault: Option<RpcFault>,
}

#[derive(Deserialize)]
struct RpcFault {
    message: String,
}

/// JSON-over-HTTP call channel shared by the controller and directory clients.
///
/// Every call is `POST <base_url>/<method>` with `{"secret", "params"}`;
/// the answer is `{"result": ..}` or `{"fault": {"message": ..}}`. Calls are
/// made once; there is no retry.
pub struct RpcTransport {
    pub base_url: String,
    secret: SharedSecret,
    client: ReqwestClient,
}

impl RpcTransport {
    #[track_caller]
    pub fn new(base_url: &str, secret: SharedSecret, timeout: Duration) -> RpcResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::transport("connect", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret,
            client,
        })
    }

    pub async fn call<P, T>(&self, method: &str, params: P) -> RpcResult<T>
    where
        P: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let url = format!("{}/{}", self.base_url, method);
        debug!("RPC call {url}");

        let body = RpcRequest {
            secret: self.secret.expose(),
            params,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RpcError::transport(method, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RpcError::transport(method, e))?;

        let envelope = match serde_json::from_slice::<RpcEnvelope<T>>(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(RpcError::Status {
                    method: method.to_string(),
                    status: status.as_u16(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(RpcError::decode(method, e)),
        };

        match envelope {
            RpcEnvelope {
                fault: Some(fault), ..
            } => Err(RpcError::fault(method, fault.message)),
            RpcEnvelope {
                result: Some(result),
                ..
            } if status.is_success() => Ok(result),
            RpcEnvelope { .. } if !status.is_success() => Err(RpcError::Status {
                method: method.to_string(),
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            }),
            RpcEnvelope { .. } => Err(RpcError::MissingResult {
                method: method.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
