//! Append-only session history.

use serde::{Deserialize, Serialize};

/// Who produced a turn's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human asking questions.
    User,
    /// The model answering them.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// One entry in the transcript: a role and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who produced the text.
    pub role: Role,
    /// The text body.
    pub text: String,
}

/// An append-only transcript for one interactive session.
///
/// Entries are never edited or removed; the whole history is dropped when
/// the session ends. A completed turn contributes two entries, the user
/// input followed by the assistant reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    turns: Vec<Turn>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user entry.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn { role: Role::User, text: text.into() });
    }

    /// Append an assistant entry.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn { role: Role::Assistant, text: text.into() });
    }

    /// All entries in submission order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
