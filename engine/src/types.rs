// ═══════════════════════════════════════════════════════════════════════
// Core types — phases, difficulty tables, and the game state record
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::cards::{PictCard, PlayerCard};
use crate::deck::Deck;
use crate::ledger::{OngoingPool, RoundPool};

/// A game always runs this many rounds.
pub const MAX_ROUNDS: u8 = 6;

/// Valour awarded per round (display data, indexed by round - 1).
pub const VALOUR_PER_ROUND: [u8; MAX_ROUNDS as usize] = [1, 2, 2, 3, 3, 4];

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Base adversary draw count for each round (indexed by round - 1).
    pub fn attack_schedule(self) -> [u8; MAX_ROUNDS as usize] {
        match self {
            Difficulty::Easy => [1, 2, 3, 4, 6, 8],
            Difficulty::Medium => [1, 2, 4, 6, 8, 10],
            Difficulty::Hard => [1, 3, 5, 7, 9, 12],
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The two-step round cycle, plus the terminal label after round 6's
/// attack has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    PictAttack,
    Complete,
}

/// Per-round draft progress. Resolution is terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftPhase {
    AwaitingDraw,
    AwaitingSelection,
    Resolved,
}

/// Wall section a Pict card attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackPosition {
    Left,
    Middle,
    Right,
}

impl AttackPosition {
    /// Resolve a raw dataset tag, case-insensitively. `"center"` counts
    /// as the middle section; anything unrecognised stays unclassified.
    pub fn from_tag(tag: &str) -> Option<AttackPosition> {
        match tag.to_ascii_lowercase().as_str() {
            "left" => Some(AttackPosition::Left),
            "middle" | "center" => Some(AttackPosition::Middle),
            "right" => Some(AttackPosition::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Player,
    Neutral,
    Pict,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Player => write!(f, "player"),
            DeckKind::Neutral => write!(f, "neutral"),
            DeckKind::Pict => write!(f, "Pict"),
        }
    }
}

// ── Deferred hide stamp ────────────────────────────────────────────────

/// Version stamp for the deferred auto-hide of the lead Pict card. The
/// presentation layer holds the stamp across its delay and fires it back;
/// a stamp from a superseded round no longer matches and does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideStamp {
    pub round: u8,
    pub seq: u64,
}

// ── Attack summary ─────────────────────────────────────────────────────

/// Outcome of an attack phase. Retained on state until the next round
/// starts so the presentation layer can re-read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSummary {
    /// Scheduled draw count for this round and difficulty.
    pub base: u8,
    /// One-shot bonus consumed from the ongoing pool.
    pub bonus: u32,
    /// The drawn batch, in draw order. Unclassified cards stay in the
    /// list even though they are absent from the counts below.
    pub drawn: Vec<PictCard>,
    pub left: u32,
    pub middle: u32,
    pub right: u32,
}

impl AttackSummary {
    pub fn total(&self) -> usize {
        self.drawn.len()
    }
}

impl std::fmt::Display for AttackSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.left > 0 {
            parts.push(format!("{} left", self.left));
        }
        if self.middle > 0 {
            parts.push(format!("{} center", self.middle));
        }
        if self.right > 0 {
            parts.push(format!("{} right", self.right));
        }
        write!(f, "{}", parts.join(", "))
    }
}

// ── Game State ─────────────────────────────────────────────────────────

/// The single record every operation works on. Owned by the caller,
/// read-only to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub round: u8,
    pub difficulty: Difficulty,
    pub phase: Phase,

    // Decks shrink through draws; only a new game refills them.
    pub player_deck: Deck<PlayerCard>,
    pub neutral_deck: Deck<PlayerCard>,
    pub pict_deck: Deck<PictCard>,

    pub round_resources: RoundPool,
    pub ongoing_resources: OngoingPool,

    // Per-round draft state, cleared at every round start.
    pub draft_phase: DraftPhase,
    pub draft_options: Vec<PlayerCard>,
    pub rejected_card: Option<PlayerCard>,
    pub neutral_display: Vec<PlayerCard>,

    // Lead Pict card display state.
    pub active_card: Option<PictCard>,
    pub active_card_hidden: bool,
    pub scheduled_hide: Option<HideStamp>,
    pub hide_seq: u64,

    /// Accepted task per round, indexed by round - 1.
    pub selected_tasks: Vec<Option<PlayerCard>>,
    pub last_attack: Option<AttackSummary>,

    /// Seed the three deck shuffles were driven by.
    pub seed: u64,
}

impl GameState {
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Accepted task for a round (1-based), if one was recorded.
    pub fn task_for_round(&self, round: u8) -> Option<&PlayerCard> {
        self.selected_tasks
            .get((round - 1) as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Scheduled adversary draw count for the current round, before the
    /// one-shot bonus.
    pub fn base_attack_count(&self) -> u8 {
        self.difficulty.attack_schedule()[(self.round - 1) as usize]
    }
}
