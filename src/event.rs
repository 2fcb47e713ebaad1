use serde::{Deserialize, Serialize};

/// An interaction event arriving from a chat platform.
///
/// Carries just enough identity for callbacks to respond to the right chat
/// and user; everything else about the platform event stays opaque to the
/// widget core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Platform-assigned event id.
    pub id: String,
    /// Channel the event arrived on (e.g. "telegram").
    pub channel: String,
    /// Conversation the event belongs to.
    pub chat_id: String,
    /// User who triggered the event.
    pub user_id: String,
}

impl ChatEvent {
    pub fn new(
        id: impl Into<String>,
        channel: impl Into<String>,
        chat_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel: channel.into(),
            chat_id: chat_id.into(),
            user_id: user_id.into(),
        }
    }
}
