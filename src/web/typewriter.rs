//! Character-by-character SSE frame production

use axum::body::Bytes;
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

/// Delay between two characters, ~10 characters per second.
pub const TYPING_DELAY: Duration = Duration::from_millis(100);

/// The fixed three-line reply every `/stream` invocation replays. The two
/// embedded newlines are streamed as characters like any other.
pub const TYPEWRITER_TEXT: &str = "这是一个较长的回复内容，将逐字显示。\n\
                                   这是第二行内容，继续逐字显示。\n\
                                   这是最后一行内容，打字机效果结束。";

/// Lazy, finite stream of SSE frames: one `data: <char>\n\n` frame per
/// character of `text`, each preceded by `delay`. Frames are emitted as raw
/// bytes so that newline characters ride inside the payload unchanged;
/// `axum::response::sse::Event` would re-split them into separate data lines.
/// Each frame is produced and flushed immediately, never buffered. Dropping
/// the stream mid-flight abandons the remaining characters.
pub fn typewriter_frames(
    text: &'static str,
    delay: Duration,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    async_stream::stream! {
        for ch in text.chars() {
            tokio::time::sleep(delay).await;
            yield Ok(Bytes::from(format!("data: {}\n\n", ch)));
        }
    }
}
