//! Inbound message payload shared by every transport.

use crate::entry::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub user_id: UserId,
    /// Display name used in greetings.
    pub first_name: String,
    pub username: Option<String>,
    pub text: String,
}

impl IncomingMessage {
    pub fn new(user_id: UserId, first_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id,
            first_name: first_name.into(),
            username: None,
            text: text.into(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}
