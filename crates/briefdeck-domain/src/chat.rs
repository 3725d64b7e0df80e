//! Chat turn types for conversing with the model
//!
//! The inference endpoint speaks a chat-completion style API: an ordered
//! sequence of role-tagged turns. These types are wire-format agnostic;
//! `briefdeck-llm` owns the serialization.

/// The speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The fixed instruction framing the whole exchange
    System,
    /// The end user (brief text, or a replayed example brief)
    User,
    /// The model (a replayed example breakdown, or the live reply)
    Assistant,
}

impl Role {
    /// Wire name of the role as chat-completion APIs expect it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single turn in the conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: Role,
    /// The turn's text content
    pub content: String,
}

impl ChatMessage {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::System.as_str(), "system");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("analyze this");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "analyze this");

        assert_eq!(ChatMessage::system("x").role, Role::System);
        assert_eq!(ChatMessage::assistant("x").role, Role::Assistant);
    }
}
