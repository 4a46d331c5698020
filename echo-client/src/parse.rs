//! Frame classification for the chat response stream.
//!
//! The backend frames its reply as blank-line-delimited events:
//!
//! ```text
//! event: metadata
//! data: {"mood": "happy", "suggested_action": null}
//!
//! data: {"content": "Hel"}
//!
//! event: done
//! data: [DONE]
//! ```
//!
//! Each complete frame maps to exactly one [`StreamEvent`].

use echo_types::StreamEvent;

use crate::types::{DeltaPayload, MetadataPayload};

/// Marker line identifying a metadata frame.
const METADATA_MARKER: &str = "event: metadata";
/// Prefix of the payload line within a frame.
const DATA_PREFIX: &str = "data: ";
/// Reserved payload signaling explicit end of stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Classify one complete frame into exactly one [`StreamEvent`].
///
/// Total over arbitrary input: any frame that is not a recognizable
/// metadata, sentinel, or content frame comes back as
/// [`StreamEvent::Unparsable`]. Never panics and never returns an error.
#[must_use]
pub fn parse_frame(frame: &str) -> StreamEvent {
    let data = payload_line(frame);

    if has_metadata_marker(frame) {
        return match data.and_then(|d| serde_json::from_str::<MetadataPayload>(d).ok()) {
            Some(payload) => StreamEvent::Metadata {
                mood: payload.mood,
                suggested_action: payload.suggested_action,
            },
            None => {
                tracing::debug!(frame, "dropping malformed metadata frame");
                StreamEvent::Unparsable
            }
        };
    }

    let Some(data) = data else {
        return StreamEvent::Unparsable;
    };

    if data.trim() == DONE_SENTINEL {
        return StreamEvent::StreamEnd;
    }

    match serde_json::from_str::<DeltaPayload>(data) {
        Ok(DeltaPayload {
            content: Some(content),
        }) if !content.is_empty() => StreamEvent::ContentDelta(content),
        Ok(_) => StreamEvent::Unparsable,
        Err(err) => {
            tracing::debug!(error = %err, "dropping malformed content frame");
            StreamEvent::Unparsable
        }
    }
}

/// Whether any line of the frame carries the metadata marker.
fn has_metadata_marker(frame: &str) -> bool {
    frame
        .lines()
        .any(|line| line.trim_end_matches('\r').starts_with(METADATA_MARKER))
}

/// The `data: ` payload of the frame, wherever the line sits.
///
/// The sentinel arrives as `event: done` followed by the data line, so the
/// payload cannot be assumed to be frame-initial.
fn payload_line(frame: &str) -> Option<&str> {
    frame
        .lines()
        .find_map(|line| line.trim_end_matches('\r').strip_prefix(DATA_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_frame_parses_to_delta() {
        let event = parse_frame(r#"data: {"content": "Hello"}"#);
        assert_eq!(event, StreamEvent::ContentDelta("Hello".into()));
    }

    #[test]
    fn metadata_frame_parses_mood_and_action() {
        let frame = "event: metadata\ndata: {\"mood\": \"stressed\", \"suggested_action\": \"Take a break\"}";
        assert_eq!(
            parse_frame(frame),
            StreamEvent::Metadata {
                mood: "stressed".into(),
                suggested_action: Some("Take a break".into()),
            }
        );
    }

    #[test]
    fn metadata_action_may_be_null() {
        let frame = "event: metadata\ndata: {\"mood\": \"neutral\", \"suggested_action\": null}";
        assert_eq!(
            parse_frame(frame),
            StreamEvent::Metadata {
                mood: "neutral".into(),
                suggested_action: None,
            }
        );
    }

    #[test]
    fn metadata_without_data_line_is_unparsable() {
        assert_eq!(parse_frame("event: metadata"), StreamEvent::Unparsable);
    }

    #[test]
    fn metadata_with_bad_json_is_unparsable() {
        let frame = "event: metadata\ndata: {\"mood\": }";
        assert_eq!(parse_frame(frame), StreamEvent::Unparsable);
    }

    #[test]
    fn metadata_missing_mood_is_unparsable() {
        let frame = "event: metadata\ndata: {\"suggested_action\": \"rest\"}";
        assert_eq!(parse_frame(frame), StreamEvent::Unparsable);
    }

    #[test]
    fn bare_sentinel_ends_the_stream() {
        assert_eq!(parse_frame("data: [DONE]"), StreamEvent::StreamEnd);
    }

    #[test]
    fn sentinel_with_event_line_first_still_ends_the_stream() {
        assert_eq!(parse_frame("event: done\ndata: [DONE]"), StreamEvent::StreamEnd);
    }

    #[test]
    fn invalid_json_payload_is_unparsable() {
        assert_eq!(parse_frame("data: not-json"), StreamEvent::Unparsable);
    }

    #[test]
    fn payload_without_content_field_is_unparsable() {
        assert_eq!(
            parse_frame(r#"data: {"answer": "hi"}"#),
            StreamEvent::Unparsable
        );
    }

    #[test]
    fn empty_content_is_unparsable() {
        assert_eq!(
            parse_frame(r#"data: {"content": ""}"#),
            StreamEvent::Unparsable
        );
    }

    #[test]
    fn empty_frame_is_unparsable() {
        assert_eq!(parse_frame(""), StreamEvent::Unparsable);
    }

    #[test]
    fn frame_without_data_prefix_is_unparsable() {
        assert_eq!(parse_frame("event: ping"), StreamEvent::Unparsable);
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        let frame = "event: metadata\r\ndata: {\"mood\": \"happy\", \"suggested_action\": null}\r";
        assert_eq!(
            parse_frame(frame),
            StreamEvent::Metadata {
                mood: "happy".into(),
                suggested_action: None,
            }
        );
    }

    #[test]
    fn delta_with_unicode_content() {
        let event = parse_frame("data: {\"content\": \"naïve 😀\"}");
        assert_eq!(event, StreamEvent::ContentDelta("naïve 😀".into()));
    }
}
