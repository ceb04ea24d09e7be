//! Error types for game operations.
//!
//! Every variant is recoverable at the boundary: the presentation layer
//! surfaces a notice and the operation that failed has left decks and
//! ledgers unchanged (draws are all or nothing).

use serde::{Deserialize, Serialize};

use crate::types::{DeckKind, DraftPhase, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Single draw from an exhausted deck.
    EmptyDeck { deck: DeckKind },
    /// Batch draw exceeding the remaining count. Nothing is drawn.
    InsufficientCards {
        deck: DeckKind,
        requested: usize,
        remaining: usize,
    },
    /// An intent arrived in a phase that forbids it.
    InvalidPhase { phase: Phase, draft: DraftPhase },
    /// Draft selection index outside the two offered cards.
    InvalidSelection { index: usize },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::EmptyDeck { deck } => {
                write!(f, "the {deck} deck is empty")
            }
            GameError::InsufficientCards {
                deck,
                requested,
                remaining,
            } => write!(
                f,
                "the {deck} deck holds {remaining} cards, {requested} needed"
            ),
            GameError::InvalidPhase { phase, draft } => {
                write!(f, "not allowed in phase {phase:?} (draft {draft:?})")
            }
            GameError::InvalidSelection { index } => {
                write!(f, "draft selection index {index} out of range")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
