//! Headless rules engine for a solitaire wall-defense card game:
//! six rounds of drafting tasks, banking resources, and weathering
//! Pict attacks sized by difficulty. No rendering lives here; the
//! presentation layer reads state and feeds intents back in.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod setup;
pub mod types;


pub use cards::*;
pub use deck::Deck;
pub use error::{GameError, GameResult};
pub use ledger::*;
pub use types::*;
