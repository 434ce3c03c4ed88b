use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single chat message, passed through to the upstream provider verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Body of `POST /chat` as the public contract defines it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Schema check applied before any transformation or upstream call.
    ///
    /// Presence of `messages` and of `role`/`content` on each element is
    /// already enforced by deserialization; this rejects empty strings.
    /// An empty `messages` array is accepted and forwarded as-is.
    pub fn validate(&self) -> Result<()> {
        for (i, message) in self.messages.iter().enumerate() {
            if message.role.is_empty() {
                return Err(Error::validation(format!(
                    "messages[{i}].role must be a non-empty string"
                )));
            }
            if message.content.is_empty() {
                return Err(Error::validation(format!(
                    "messages[{i}].content must be a non-empty string"
                )));
            }
        }
        Ok(())
    }
}

/// Fixed request parameters stamped onto every upstream call. These come
/// from configuration, never from the caller.
#[derive(Debug, Clone)]
pub struct ModelPolicy {
    pub model: String,
    pub temperature: f64,
}

/// Body sent to the upstream chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<Message>,
}

/// Parsed upstream response body. Covers both the success shape
/// (`choices[i].message`) and the error shape (`error.message`); whichever
/// half is absent defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub choices: Vec<UpstreamChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamChoice {
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamError {
    pub message: String,
}

/// What the proxy sends back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// `choices[0].message`, re-emitted verbatim with HTTP 200.
    Success(Message),
    /// `{ "error": message }` with the collapsed status (400 or 500).
    Error { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: &str, content: &str) -> Message {
        Message {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_messages() {
        let request = ChatRequest {
            messages: vec![message("user", "hi"), message("assistant", "hello")],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_accepts_empty_message_list() {
        let request = ChatRequest { messages: vec![] };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_role() {
        let request = ChatRequest {
            messages: vec![message("user", "hi"), message("", "hello")],
        };
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("messages[1].role"));
    }

    #[test]
    fn validate_rejects_empty_content() {
        let request = ChatRequest {
            messages: vec![message("user", "")],
        };
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("messages[0].content"));
    }
}
