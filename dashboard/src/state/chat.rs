//! Local transcript for the conversation panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Messages typed into the chat panel during this session.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    pub content: String,
}

impl ChatState {
    /// Append `draft` as a message from `author`. Blank drafts are ignored.
    ///
    /// Returns `true` if a message was added.
    pub fn post(&mut self, author: &str, draft: &str) -> bool {
        let content = draft.trim();
        if content.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.to_owned(),
            content: content.to_owned(),
        });
        true
    }
}
