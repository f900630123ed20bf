//! The message kind enumeration.

/// Discriminating type tag of a chat stream message.
///
/// The enumeration is closed: decoding rejects integers with no matching
/// variant instead of retaining them. Adding a variant therefore means
/// updating [`MessageKind::from_raw`] together with the variant list, or old
/// decoders and new encoders will disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u64)]
pub enum MessageKind {
    /// A user-authored message. Doubles as the zero/default variant, so it is
    /// omitted from encoded output.
    #[default]
    UserMessage = 0,
}

impl MessageKind {
    /// Maps a decoded varint to a kind. Returns `None` for integers outside
    /// the enumeration.
    pub fn from_raw(raw: u64) -> Option<MessageKind> {
        match raw {
            0 => Some(MessageKind::UserMessage),
            _ => None,
        }
    }

    /// The varint representation of this kind.
    pub fn to_raw(self) -> u64 {
        self as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_enumeration() {
        assert_eq!(MessageKind::from_raw(0), Some(MessageKind::UserMessage));
        assert_eq!(MessageKind::from_raw(1), None);
        assert_eq!(MessageKind::from_raw(7), None);
        assert_eq!(MessageKind::from_raw(u64::MAX), None);
    }

    #[test]
    fn default_is_user_message() {
        assert_eq!(MessageKind::default(), MessageKind::UserMessage);
        assert_eq!(MessageKind::default().to_raw(), 0);
    }
}
