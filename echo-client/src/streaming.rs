//! Adapter from HTTP response bodies to parsed event streams.
//!
//! Drives the response byte stream through frame decoding and
//! classification, yielding one [`StreamEvent`] per complete frame.

use echo_types::{ChatStream, ClientError, StreamEvent};
use futures::{Stream, StreamExt};
use reqwest::Response;

use crate::decode::FrameDecoder;
use crate::error::map_reqwest_error;
use crate::parse::parse_frame;

/// Wrap an HTTP response body into a [`ChatStream`] of parsed events.
pub(crate) fn stream_events(response: Response) -> ChatStream {
    let bytes = response.bytes_stream().map(|r| r.map_err(map_reqwest_error));
    ChatStream {
        events: Box::pin(decode_frames(bytes)),
    }
}

/// Decode a byte stream into classified events.
///
/// The event stream ends after the sentinel, when the bytes run out, or at
/// the first transport error. Partial-frame text left over at end of
/// stream is logged and discarded; an incomplete trailing frame is not an
/// error.
fn decode_frames(
    byte_stream: impl Stream<Item = Result<bytes::Bytes, ClientError>> + Send + 'static,
) -> impl Stream<Item = Result<StreamEvent, ClientError>> + Send + 'static {
    async_stream::stream! {
        let mut decoder = FrameDecoder::new();
        let mut byte_stream = std::pin::pin!(byte_stream);

        while let Some(chunk) = byte_stream.next().await {
            let chunk = match chunk {
                Ok(bytes) => bytes,
                Err(err) => {
                    yield Err(err);
                    return;
                }
            };

            for frame in decoder.feed(&chunk) {
                let event = parse_frame(&frame);
                let done = matches!(event, StreamEvent::StreamEnd);
                yield Ok(event);
                if done {
                    return;
                }
            }
        }

        if let Some(residue) = decoder.finish() {
            tracing::debug!(len = residue.len(), "discarding partial frame at end of stream");
        }
    }
}
