use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single exchange entry: who spoke and what they said
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

/// Append-only conversation history, owned by the caller of the loop.
///
/// Lives for a single process run; turns are never mutated after being
/// appended.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    turns: Vec<ConversationTurn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Convert the history to OpenAI message format
    pub fn as_messages(&self) -> Vec<Value> {
        self.turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "content": turn.text
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_append_in_order() {
        let mut history = ChatHistory::new();
        history.push_user("How much is a week in Lima?");
        history.push_assistant("Roughly 1200 USD all-in.");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].role, Role::User);
        assert_eq!(history.turns()[1].role, Role::Assistant);
    }

    #[test]
    fn test_as_messages_roles() {
        let mut history = ChatHistory::new();
        history.push_user("hola");
        history.push_assistant("¡hola!");

        let messages = history.as_messages();
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "hola");
        assert_eq!(messages[1]["role"], "assistant");
    }

    #[test]
    fn test_starts_empty() {
        let history = ChatHistory::new();
        assert!(history.is_empty());
        assert!(history.as_messages().is_empty());
    }
}
