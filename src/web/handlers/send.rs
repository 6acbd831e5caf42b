//! Message submission endpoint

use axum::{http::StatusCode, response::Json};

use crate::types::{Ack, SendRequest};

/// Handle `POST /send`: acknowledge a non-empty `message`, reject the rest.
/// A body that is not valid JSON never reaches this function; the `Json`
/// extractor answers it with a 400-class rejection.
pub async fn send_message(Json(req): Json<SendRequest>) -> (StatusCode, Json<Ack>) {
    match req.message.as_deref() {
        Some(message) if !message.is_empty() => {
            tracing::info!("Received message: {}", message);
            (StatusCode::OK, Json(Ack::success("输入已接收")))
        }
        _ => (StatusCode::BAD_REQUEST, Json(Ack::error("输入不能为空"))),
    }
}
