use async_trait::async_trait;
use faai_proxy::{
    Error, Result,
    proxy::UpstreamRequest,
    upstream::{UpstreamClient, UpstreamReply},
};
use std::sync::{Arc, Mutex};

/// Mock upstream client for testing
pub struct MockUpstream {
    pub replies: Arc<Mutex<Vec<UpstreamReply>>>,
    pub requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    pub error: Option<String>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(self, reply: UpstreamReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn chat_completion(&self, request: &UpstreamRequest) -> Result<UpstreamReply> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::internal("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}
