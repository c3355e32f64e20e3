use actix_web::{http::StatusCode, post, web, HttpResponse, Result as WebResult};
use std::sync::Arc;
use tracing::error;

use crate::api::models::{ChatRelayRequest, ChatRelayResponse};
use crate::config::AppConfig;
use crate::provider::{
    models::{ChatOptions, ProviderMessage},
    ChatProvider, ProviderError,
};

const MSG_INVALID_FORMAT: &str = "无效的消息格式";
const MSG_UPSTREAM_ERROR: &str = "AI 服务暂时不可用，请稍后再试";
const MSG_INTERNAL_ERROR: &str = "服务器内部错误，请稍后再试";

#[post("/chat")]
pub async fn relay_chat(
    config: web::Data<AppConfig>,
    provider: web::Data<Arc<dyn ChatProvider>>,
    req: web::Json<ChatRelayRequest>,
) -> WebResult<HttpResponse> {
    let req = req.into_inner();

    // Reject before any upstream call is made.
    let messages = match req.messages {
        Some(value) if value.is_array() => value,
        _ => return Ok(bad_request()),
    };

    let messages: Vec<ProviderMessage> = match serde_json::from_value(messages) {
        Ok(msgs) => msgs,
        Err(_) => return Ok(bad_request()),
    };

    let options = ChatOptions {
        model: req.model,
        system_prompt: Some(
            req.system_prompt
                .unwrap_or_else(|| config.ai.system_prompt.clone()),
        ),
    };

    match provider.chat(&messages, options).await {
        Ok(content) => Ok(HttpResponse::Ok().json(ChatRelayResponse { response: content })),
        Err(ProviderError::Api { status, body }) => {
            // The upstream error body stays in the server log; the caller
            // only ever sees the generic message.
            error!("Upstream provider error {}: {}", status, body);
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status)
                .json(serde_json::json!({ "error": MSG_UPSTREAM_ERROR })))
        }
        Err(e) => {
            error!("Relay handler failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": MSG_INTERNAL_ERROR })))
        }
    }
}

fn bad_request() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": MSG_INVALID_FORMAT }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/ai").service(relay_chat));
}
