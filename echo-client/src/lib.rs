#![deny(missing_docs)]
//! Streaming chat client for the EchoOS backend.
//!
//! The centerpiece is the response-stream pipeline: [`EchoClient`] opens a
//! chat request, [`decode::FrameDecoder`] reassembles complete frames from
//! arbitrarily chunked bytes, [`parse::parse_frame`] classifies each frame
//! into a [`StreamEvent`](echo_types::StreamEvent), and [`ChatController`]
//! applies events to a growing assistant message that callers can observe
//! while the stream is still open.
//!
//! The backend's REST endpoints (tasks, memories, agents, twin profile) are
//! wrapped as plain request/response calls under [`api`].
//!
//! # Example
//!
//! ```no_run
//! use echo_client::{ChatController, EchoClient};
//!
//! # async fn run() -> Result<(), echo_types::ClientError> {
//! let mut chat = ChatController::new(EchoClient::from_env());
//! let outcome = chat.submit("What's on my plate today?").await?;
//! let reply = chat.conversation().message(outcome.message_id);
//! println!("{}", reply.map(|m| m.content.as_str()).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod assembler;
pub mod client;
pub mod decode;
pub(crate) mod error;
pub mod parse;
pub mod session;
pub(crate) mod streaming;
pub(crate) mod types;

pub use assembler::ReplyAssembler;
pub use client::EchoClient;
pub use decode::FrameDecoder;
pub use parse::parse_frame;
pub use session::{ChatController, FAILURE_NOTICE};

// Re-export echo-types for convenience
pub use echo_types::{
    ChatOutcome, ChatStream, ClientError, Conversation, Message, MessageId, Role, SessionStatus,
    StreamEvent,
};
