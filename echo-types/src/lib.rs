#![deny(missing_docs)]
//! Shared types for the EchoOS client.
//!
//! Defines the conversation data model ([`Message`], [`Conversation`]), the
//! streaming event vocabulary ([`StreamEvent`]), session lifecycle types
//! ([`SessionStatus`], [`ChatOutcome`]), and the error taxonomy
//! ([`ClientError`]).

pub mod error;
pub mod stream;
pub mod types;

pub use error::*;
pub use stream::*;
pub use types::*;
