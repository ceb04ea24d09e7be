// ═══════════════════════════════════════════════════════════════════════
// Greedy agent — keeps the task worth the most victory points
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use vallum_engine::cards::PlayerCard;
use vallum_engine::ledger::RoundResource;
use vallum_engine::types::GameState;

#[derive(Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent
    }

    /// Best victory-point payout printed on the card.
    fn task_value(card: &PlayerCard) -> u32 {
        card.task_count_vp
            .as_ref()
            .and_then(|vp| vp.values().copied().max())
            .unwrap_or(0)
    }

    /// How many tokens a rejection of this card would actually bank
    /// (unknown tokens pay nothing).
    fn banked_value(card: &PlayerCard) -> usize {
        card.resource_tokens()
            .iter()
            .filter(|t| RoundResource::from_token(t).is_some())
            .count()
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn select_draft(&mut self, state: &GameState) -> usize {
        let options = &state.draft_options;
        if options.len() < 2 {
            return 0;
        }
        // Keep the higher-VP task; on a VP tie, keep the card whose
        // rejection would bank less, so the richer card pays out.
        let keep_0 = (
            Self::task_value(&options[0]),
            Self::banked_value(&options[1]),
        );
        let keep_1 = (
            Self::task_value(&options[1]),
            Self::banked_value(&options[0]),
        );
        usize::from(keep_1 > keep_0)
    }
}
