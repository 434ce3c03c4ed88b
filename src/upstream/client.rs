use crate::{
    Result,
    config::UpstreamConfig,
    proxy::{UpstreamRequest, UpstreamResponse},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Raw result of one upstream call: the HTTP status and the parsed body.
/// Error statuses are data here, not transport failures; classification
/// happens later, in the response transformation.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: UpstreamResponse,
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn chat_completion(&self, request: &UpstreamRequest) -> Result<UpstreamReply>;
}

pub struct OpenAiUpstream {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiUpstream {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl UpstreamClient for OpenAiUpstream {
    async fn chat_completion(&self, request: &UpstreamRequest) -> Result<UpstreamReply> {
        debug!(
            "Forwarding {} messages to {}",
            request.messages.len(),
            self.completions_url()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        // An unparseable body is kept as an empty one; the response
        // transformation synthesizes a message from the status.
        let body = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                warn!(status, "Unparseable upstream response body: {}", e);
                UpstreamResponse::default()
            }
        };

        debug!(status, choices = body.choices.len(), "Upstream replied");

        Ok(UpstreamReply { status, body })
    }
}
