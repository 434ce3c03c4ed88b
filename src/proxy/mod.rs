mod transform;
mod types;

pub use transform::{build_outbound_response, build_upstream_request};
pub use types::*;
