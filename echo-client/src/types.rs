//! Wire payload shapes for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequestBody<'a> {
    pub(crate) input: &'a str,
}

/// Payload of a metadata frame.
#[derive(Debug, Deserialize)]
pub(crate) struct MetadataPayload {
    pub(crate) mood: String,
    /// Sent as JSON `null` when the backend has nothing to suggest.
    #[serde(default)]
    pub(crate) suggested_action: Option<String>,
}

/// Payload of a content delta frame.
#[derive(Debug, Deserialize)]
pub(crate) struct DeltaPayload {
    #[serde(default)]
    pub(crate) content: Option<String>,
}
