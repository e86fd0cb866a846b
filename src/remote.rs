use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::error::RemoteError;

const MISSING_OUTPUT: &str = "risposta senza campo output";

#[derive(Serialize)]
struct ProxyRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    output: Option<String>,
}

/// HTTP adapter for the server-side proxy that talks to the language model.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dialettami/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"prompt": ...}` and return the `output` field of the reply.
    ///
    /// A success reply without an `output` string is a decode error.
    #[instrument(level = "debug", skip(self, prompt), fields(endpoint = %self.endpoint, prompt_len = prompt.len()))]
    pub async fn ask(&self, prompt: &str) -> Result<String, RemoteError> {
        debug!("sending prompt to proxy");
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&ProxyRequest { prompt })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| RemoteError::Transport(e.to_string()))?;
            warn!(%status, "proxy returned an error");
            return Err(RemoteError::status(status.as_u16(), body));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "proxy response");
        let parsed: ProxyResponse = serde_json::from_str(&raw)?;
        parsed
            .output
            .ok_or_else(|| RemoteError::Decode(MISSING_OUTPUT.to_string()))
    }
}
