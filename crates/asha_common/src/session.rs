//! Session state for one chat lifetime.
//!
//! One session owns its conversation log and the last-disaster context used
//! to resolve follow-up questions. The state lives in memory only and dies
//! with the session; there is deliberately no file or database persistence.
//! A session is used by exactly one logical user, sequentially, so no
//! locking is involved.

use crate::disaster::Disaster;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// Per-session state: the append-only conversation log plus the
/// last-disaster context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: Uuid,
    turns: Vec<ConversationTurn>,
    last_disaster: Option<Disaster>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            turns: Vec::new(),
            last_disaster: None,
        }
    }

    /// Append one turn to the conversation log.
    pub fn push_turn(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role,
            content: content.into(),
            at: Utc::now(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recently resolved disaster, if any turn resolved one.
    pub fn last_disaster(&self) -> Option<Disaster> {
        self.last_disaster
    }

    pub fn set_last_disaster(&mut self, disaster: Disaster) {
        self.last_disaster = Some(disaster);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
