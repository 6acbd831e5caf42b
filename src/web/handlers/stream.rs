//! Typewriter streaming endpoint

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::web::typewriter::{typewriter_frames, TYPEWRITER_TEXT, TYPING_DELAY};

/// Handle `GET /stream`: emit the fixed reply one character at a time as SSE
/// frames. Every invocation replays the identical sequence; nothing carries
/// over between requests. If the client disconnects, the body stream is
/// dropped and the remaining characters are never produced.
pub async fn stream_typewriter() -> Response {
    tracing::info!("📡 SSE connection established, streaming typewriter text");

    let frames = typewriter_frames(TYPEWRITER_TEXT, TYPING_DELAY);

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(frames),
    )
        .into_response()
}
