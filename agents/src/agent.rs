// ═══════════════════════════════════════════════════════════════════════
// Agent trait — the decision interface for headless play
//
// The solitaire game asks the player exactly one kind of decision:
// which of the two drafted cards to keep. Everything else (advancing
// phases, firing the deferred hide) is mechanical and the run loop
// handles it.
// ═══════════════════════════════════════════════════════════════════════

use vallum_engine::types::GameState;

pub trait Agent: Send {
    /// Human-readable name (e.g. "Random", "Greedy").
    fn name(&self) -> &str;

    /// Choose which draft option to keep. Called only while an offer is
    /// outstanding (`draft_options` holds two cards); must return 0 or 1.
    fn select_draft(&mut self, state: &GameState) -> usize;
}
