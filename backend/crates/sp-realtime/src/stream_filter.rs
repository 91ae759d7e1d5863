use crate::Envelope;

use sp_core::ConversationId;

/// Which envelopes a stream forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFilter {
    /// Everything addressed to the user
    All,
    /// Only envelopes belonging to one conversation; envelopes without a
    /// conversation are dropped
    Conversation(ConversationId),
}

impl StreamFilter {
    pub fn accepts(&self, envelope: &Envelope) -> bool {
        match self {
            Self::All => true,
            Self::Conversation(id) => envelope.conversation_id() == Some(*id),
        }
    }
}

impl std::fmt::Display for StreamFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Conversation(id) => write!(f, "conversation:{id}"),
        }
    }
}
