//! Applies parsed stream events to the assistant message they belong to.
//!
//! The assembler holds no buffer of its own. It addresses one message in a
//! [`Conversation`] by id and mutates it in place: content deltas append in
//! arrival order, metadata replaces both metadata fields wholesale. A later
//! metadata frame therefore wins even when it carries less information than
//! an earlier one.

use echo_types::{Conversation, Message, MessageId, StreamEvent};

/// Routes stream events into a single assistant message.
#[derive(Debug, Clone, Copy)]
pub struct ReplyAssembler {
    target: MessageId,
}

impl ReplyAssembler {
    /// Create an assembler that writes into the message with the given id.
    #[must_use]
    pub fn new(target: MessageId) -> Self {
        Self { target }
    }

    /// Id of the message this assembler mutates.
    #[must_use]
    pub fn target(&self) -> MessageId {
        self.target
    }

    /// Apply one event to the target message.
    ///
    /// Returns the updated message when the event changed it. Events that
    /// carry nothing to apply ([`StreamEvent::StreamEnd`],
    /// [`StreamEvent::Unparsable`]) return `None`, as does a target id that
    /// is not present in the conversation.
    pub fn apply<'a>(
        &self,
        conversation: &'a mut Conversation,
        event: &StreamEvent,
    ) -> Option<&'a Message> {
        let message = conversation.message_mut(self.target)?;
        match event {
            StreamEvent::Metadata {
                mood,
                suggested_action,
            } => {
                // Whole-field overwrite: a frame without a suggested action
                // clears one set by an earlier frame.
                message.mood = Some(mood.clone());
                message.suggested_action = suggested_action.clone();
            }
            StreamEvent::ContentDelta(delta) => message.content.push_str(delta),
            StreamEvent::StreamEnd | StreamEvent::Unparsable => return None,
        }
        Some(&*message)
    }
}
