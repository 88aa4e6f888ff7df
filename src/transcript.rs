use serde::{Deserialize, Serialize};

/// One completed exchange: the user's message and the assistant's reply.
///
/// Turns are immutable once appended to a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub reply: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            reply: reply.into(),
        }
    }
}

/// Ordered chat history. Insertion order is the canonical display order.
///
/// A transcript is never edited in place: [`Transcript::with_turn`] returns
/// an extended copy and leaves the original untouched. Serializes as a plain
/// JSON array of turns, which is also the HTTP wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Return a copy of this transcript extended by `turn`.
    #[must_use]
    pub fn with_turn(&self, turn: Turn) -> Transcript {
        let mut turns = self.turns.clone();
        turns.push(turn);
        Transcript { turns }
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}
