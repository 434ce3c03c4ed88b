mod client;

pub use client::{OpenAiUpstream, UpstreamClient, UpstreamReply};
