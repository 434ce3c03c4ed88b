//! The two payload transformations applied on every request: public chat
//! request in, upstream completion request out, and upstream response back
//! into the public shape. Both are pure; validation happens before them and
//! the HTTP plumbing around them.

use super::types::{ChatRequest, ModelPolicy, Outbound, UpstreamRequest, UpstreamResponse};
use crate::{Error, Result};

/// Builds the upstream request from an already-validated inbound request.
///
/// `messages` is copied through unchanged, preserving order and fields;
/// `model` and `temperature` are stamped from policy.
pub fn build_upstream_request(policy: &ModelPolicy, inbound: ChatRequest) -> UpstreamRequest {
    UpstreamRequest {
        model: policy.model.clone(),
        temperature: policy.temperature,
        messages: inbound.messages,
    }
}

/// Maps an upstream status and parsed body to the outbound reply.
///
/// The full 4xx and 5xx ranges collapse to outbound 400 and 500, keeping
/// only the upstream error message text. A 200 with no choices, or any
/// status outside 200/4xx/5xx, is a contract violation the caller surfaces
/// as a server error.
pub fn build_outbound_response(status: u16, upstream: UpstreamResponse) -> Result<Outbound> {
    match status {
        200 => upstream
            .choices
            .into_iter()
            .next()
            .map(|choice| Outbound::Success(choice.message))
            .ok_or_else(|| Error::upstream_contract("upstream returned 200 with no choices")),
        400..=499 => Ok(Outbound::Error {
            status: 400,
            message: error_message(status, upstream),
        }),
        500..=599 => Ok(Outbound::Error {
            status: 500,
            message: error_message(status, upstream),
        }),
        other => Err(Error::upstream_contract(format!(
            "unexpected upstream status {other}"
        ))),
    }
}

fn error_message(status: u16, upstream: UpstreamResponse) -> String {
    upstream
        .error
        .map(|e| e.message)
        .unwrap_or_else(|| format!("upstream returned status {status}"))
}
