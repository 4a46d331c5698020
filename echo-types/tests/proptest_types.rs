//! Property-based tests: conversation ordering and error classification.

use echo_types::*;
use proptest::prelude::*;
use std::time::Duration;

fn arb_message() -> impl Strategy<Value = Message> {
    prop_oneof![
        "[a-zA-Z ]{1,80}".prop_map(Message::user),
        Just(()).prop_map(|()| Message::assistant_placeholder()),
    ]
}

fn arb_client_error() -> impl Strategy<Value = ClientError> {
    prop_oneof![
        any::<String>().prop_map(|s| ClientError::Network(s.into())),
        (0u64..3600).prop_map(|secs| ClientError::Timeout(Duration::from_secs(secs))),
        (100u16..600, any::<String>()).prop_map(|(status, body)| ClientError::Status {
            status,
            body,
        }),
        any::<String>().prop_map(ClientError::InvalidResponse),
        Just(()).prop_map(|()| ClientError::EmptyInput),
        Just(()).prop_map(|()| ClientError::Busy),
    ]
}

proptest! {
    #[test]
    fn conversation_preserves_arrival_order(
        messages in proptest::collection::vec(arb_message(), 0..20),
    ) {
        let mut conversation = Conversation::new();
        let ids: Vec<MessageId> = messages
            .iter()
            .map(|m| conversation.push(m.clone()))
            .collect();

        prop_assert_eq!(conversation.len(), messages.len());
        let stored: Vec<MessageId> = conversation.messages().iter().map(|m| m.id).collect();
        prop_assert_eq!(stored, ids);
    }

    #[test]
    fn every_pushed_message_is_findable_by_id(
        messages in proptest::collection::vec(arb_message(), 1..20),
    ) {
        let mut conversation = Conversation::new();
        for message in &messages {
            let id = conversation.push(message.clone());
            let found = conversation.message(id);
            prop_assert!(found.is_some(), "pushed message not found by id");
            prop_assert_eq!(found.map(|m| m.role), Some(message.role));
        }
        prop_assert_eq!(conversation.last().map(|m| m.id), messages.last().map(|m| m.id));
    }

    #[test]
    fn message_serde_round_trip(msg in arb_message()) {
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(msg.id, back.id);
        prop_assert_eq!(msg.role, back.role);
        prop_assert_eq!(msg.content, back.content);
    }

    #[test]
    fn client_error_retryable_classification(err in arb_client_error()) {
        let retryable = err.is_retryable();
        match &err {
            ClientError::Network(_) | ClientError::Timeout(_) => prop_assert!(retryable),
            ClientError::Status { status, .. } => {
                prop_assert_eq!(retryable, *status >= 500);
            }
            ClientError::InvalidResponse(_) | ClientError::EmptyInput | ClientError::Busy => {
                prop_assert!(!retryable);
            }
        }
    }
}
