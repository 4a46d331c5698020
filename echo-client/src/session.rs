//! Chat session lifecycle: submit input, stream the reply, settle an outcome.

use echo_types::{
    ChatOutcome, ChatStream, ClientError, Conversation, Message, MessageId, SessionStatus,
    StreamEvent,
};
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::assembler::ReplyAssembler;
use crate::client::EchoClient;

/// Notice appended to a reply whose stream failed mid-flight.
///
/// Partial content already streamed stays in place; the notice marks where
/// the reply was cut off.
pub const FAILURE_NOTICE: &str = "\n[Error: Failed to complete response]";

/// Drives chat sessions over a single conversation.
///
/// One session at a time: while a reply is streaming, further submissions
/// are rejected with [`ClientError::Busy`] rather than interleaved.
pub struct ChatController {
    client: EchoClient,
    conversation: Conversation,
    in_flight: bool,
}

impl ChatController {
    /// Create a controller with an empty conversation.
    #[must_use]
    pub fn new(client: EchoClient) -> Self {
        Self {
            client,
            conversation: Conversation::new(),
            in_flight: false,
        }
    }

    /// The conversation accumulated so far.
    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Consume the controller, keeping the conversation.
    #[must_use]
    pub fn into_conversation(self) -> Conversation {
        self.conversation
    }

    /// Whether a session is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Submit user input and stream the reply to completion.
    ///
    /// Equivalent to [`ChatController::submit_with`] with a fresh token and
    /// no observer.
    pub async fn submit(&mut self, input: &str) -> Result<ChatOutcome, ClientError> {
        self.submit_with(input, CancellationToken::new(), |_| {})
            .await
    }

    /// Submit user input with a cancellation token and an update observer.
    ///
    /// The observer runs after every event that changes the reply message,
    /// receiving the message as it stands at that point.
    ///
    /// Input that is empty after trimming is rejected with
    /// [`ClientError::EmptyInput`] before anything is sent or recorded.
    /// Otherwise the text is transmitted and stored exactly as given,
    /// surrounding whitespace included.
    ///
    /// `Err` is returned only when no exchange started. Failures after the
    /// exchange started are reported through the outcome's status.
    ///
    /// Dropping the returned future before it settles abandons the exchange:
    /// the controller is idle again and the reply keeps whatever content had
    /// arrived.
    pub async fn submit_with(
        &mut self,
        input: &str,
        cancel: CancellationToken,
        mut on_update: impl FnMut(&Message),
    ) -> Result<ChatOutcome, ClientError> {
        if input.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }
        if self.in_flight {
            return Err(ClientError::Busy);
        }

        self.conversation.push(Message::user(input));
        let reply_id = self.conversation.push(Message::assistant_placeholder());

        // Split borrows: the guard holds the flag while the stream writes
        // into the conversation.
        let Self {
            client,
            conversation,
            in_flight,
        } = self;
        let _gate = FlightGuard::engage(in_flight);
        tracing::debug!(reply = %reply_id, "chat session started");

        let outcome = match client.chat_stream(input).await {
            Ok(stream) => {
                consume_stream(conversation, stream, reply_id, &cancel, &mut on_update).await
            }
            Err(err) => settle_failure(conversation, reply_id, err, &mut on_update),
        };
        tracing::debug!(reply = %reply_id, status = ?outcome.status, "chat session finished");
        Ok(outcome)
    }
}

/// Holds the single-flight flag for the duration of one exchange.
///
/// The flag drops back to idle when the guard does, whether the exchange
/// settled or the submission future was dropped mid-await.
struct FlightGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> FlightGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Pump stream events into the reply message until the session settles.
async fn consume_stream(
    conversation: &mut Conversation,
    mut stream: ChatStream,
    reply_id: MessageId,
    cancel: &CancellationToken,
    on_update: &mut impl FnMut(&Message),
) -> ChatOutcome {
    let assembler = ReplyAssembler::new(reply_id);
    loop {
        // Check cancellation between events. Once cancelled, the reply
        // is left exactly as it stands.
        if cancel.is_cancelled() {
            return ChatOutcome {
                message_id: reply_id,
                status: SessionStatus::Cancelled,
                error: None,
            };
        }

        match stream.events.next().await {
            // Natural end of body counts as completion even when no end
            // frame was seen.
            None | Some(Ok(StreamEvent::StreamEnd)) => {
                return ChatOutcome {
                    message_id: reply_id,
                    status: SessionStatus::Completed,
                    error: None,
                };
            }
            Some(Ok(event)) => {
                if let Some(updated) = assembler.apply(conversation, &event) {
                    on_update(updated);
                }
            }
            Some(Err(err)) => return settle_failure(conversation, reply_id, err, on_update),
        }
    }
}

/// Settle a failed session: append the failure notice and keep the error.
fn settle_failure(
    conversation: &mut Conversation,
    reply_id: MessageId,
    err: ClientError,
    on_update: &mut impl FnMut(&Message),
) -> ChatOutcome {
    tracing::warn!(reply = %reply_id, error = %err, "chat session failed");
    if let Some(message) = conversation.message_mut(reply_id) {
        message.content.push_str(FAILURE_NOTICE);
        on_update(&*message);
    }
    ChatOutcome {
        message_id: reply_id,
        status: SessionStatus::Failed,
        error: Some(err),
    }
}
