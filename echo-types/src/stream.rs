//! Streaming event and session lifecycle types.

use std::pin::Pin;

use futures::Stream;

use crate::error::ClientError;
use crate::types::MessageId;

/// An event produced from one complete frame of the response stream.
///
/// Classification is total: every frame maps to exactly one variant, and
/// frames that match no known shape become [`StreamEvent::Unparsable`]
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Sideband assistant state for the reply in progress.
    ///
    /// May arrive any number of times; the last occurrence wins.
    Metadata {
        /// Reported assistant mood.
        mood: String,
        /// Suggested user action, when the backend offers one.
        suggested_action: Option<String>,
    },
    /// An incremental fragment of reply text, applied in arrival order.
    ContentDelta(String),
    /// The explicit end-of-stream sentinel.
    StreamEnd,
    /// A frame that matched no known shape. Consumers drop it.
    Unparsable,
}

/// Lifecycle state of one streamed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The stream is still being consumed.
    Open,
    /// The stream ended normally, with or without the sentinel.
    Completed,
    /// The exchange failed after a diagnostic suffix was appended.
    Failed,
    /// The exchange was cancelled before completion.
    Cancelled,
}

impl SessionStatus {
    /// Whether the session can no longer change.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

/// Terminal result of one submitted exchange.
#[derive(Debug)]
pub struct ChatOutcome {
    /// Id of the assistant message the session streamed into.
    pub message_id: MessageId,
    /// Terminal status. Never [`SessionStatus::Open`].
    pub status: SessionStatus,
    /// The failure that ended the session, when `status` is `Failed`.
    pub error: Option<ClientError>,
}

/// Handle to a streaming chat response.
pub struct ChatStream {
    /// The stream of parsed events. Consume with `StreamExt::next()`.
    pub events: Pin<Box<dyn Stream<Item = Result<StreamEvent, ClientError>> + Send>>,
}
