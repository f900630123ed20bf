//! Property tests for the codec's algebraic guarantees.

use chatcodec_message::{decode, encode, ChatMessage, MessageKind};
use proptest::prelude::*;

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (any::<u64>(), any::<u64>(), ".{0,64}").prop_map(|(channel_id, sender_id, content)| {
        let mut msg = ChatMessage::new();
        msg.kind = MessageKind::UserMessage;
        msg.channel_id = channel_id;
        msg.sender_id = sender_id;
        msg.content = content;
        msg
    })
}

proptest! {
    #[test]
    fn roundtrip_preserves_message(msg in arb_message()) {
        let data = encode(&msg).unwrap();
        prop_assert_eq!(decode(&data).unwrap(), msg);
    }

    #[test]
    fn byte_size_equals_encoded_length(msg in arb_message()) {
        let data = encode(&msg).unwrap();
        prop_assert_eq!(data.len(), msg.byte_size());
    }

    #[test]
    fn merge_with_default_is_identity(msg in arb_message()) {
        let mut merged = msg.clone();
        merged.merge_from(&ChatMessage::new());
        prop_assert_eq!(merged, msg);
    }

    #[test]
    fn merge_of_full_source_replaces_everything(a in arb_message(), b in arb_message()) {
        prop_assume!(b.channel_id != 0 && b.sender_id != 0 && !b.content.is_empty());
        let mut merged = a;
        merged.merge_from(&b);
        prop_assert_eq!(merged, b);
    }

    #[test]
    fn decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&data);
    }
}
