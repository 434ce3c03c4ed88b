use super::types::ErrorResponse;
use crate::proxy::{self, ChatRequest, Message, ModelPolicy, Outbound};
use crate::upstream::UpstreamClient;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
    pub policy: Arc<ModelPolicy>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Message>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!(%request_id, messages = request.messages.len(), "Received chat request");

    // Schema check before anything touches the upstream
    if let Err(e) = request.validate() {
        info!(%request_id, "Rejected chat request: {}", e);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    let upstream_request = proxy::build_upstream_request(&state.policy, request);

    let reply = match state.upstream.chat_completion(&upstream_request).await {
        Ok(reply) => reply,
        Err(e) => {
            // Transport failure; detail goes to the log, not the caller
            error!(%request_id, "Upstream call failed: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "upstream request failed".to_string(),
                }),
            ));
        }
    };

    match proxy::build_outbound_response(reply.status, reply.body) {
        Ok(Outbound::Success(message)) => {
            info!(%request_id, "Completed chat request");
            Ok(Json(message))
        }
        Ok(Outbound::Error { status, message }) => {
            info!(%request_id, upstream_status = reply.status, "Upstream error: {}", message);
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(ErrorResponse { error: message })))
        }
        Err(e) => {
            error!(%request_id, upstream_status = reply.status, "{}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
