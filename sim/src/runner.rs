// ═══════════════════════════════════════════════════════════════════════
// Run loop — plays one complete headless game with an agent
// ═══════════════════════════════════════════════════════════════════════

use serde::Serialize;

use vallum_agents::Agent;
use vallum_engine::engine::{self, AdvanceOutcome};
use vallum_engine::types::{Difficulty, DraftPhase};
use vallum_engine::CardSet;

/// Safety bound on intents per game; a full run needs well under 100.
const MAX_STEPS: u32 = 1_000;

/// Result of a finished run. `completed` is false when a deck ran dry
/// before round 6's attack resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub agent_name: String,
    pub completed: bool,
    /// Attack phases that resolved (0..=6).
    pub rounds_completed: u8,
    pub attacks_left: u32,
    pub attacks_middle: u32,
    pub attacks_right: u32,
    pub final_renown: u32,
    pub final_piety: u32,
    pub final_valour: u32,
    pub final_discipline: u32,
}

/// Drive a game from `new_game` to completion (or deck exhaustion),
/// asking the agent for every draft decision.
pub fn run_game(
    cards: &CardSet,
    difficulty: Difficulty,
    seed: u64,
    agent: &mut dyn Agent,
) -> RunResult {
    let mut state = vallum_engine::setup::new_game(cards, difficulty, seed);

    let mut rounds_completed = 0u8;
    let (mut left, mut middle, mut right) = (0u32, 0u32, 0u32);
    let mut completed = false;

    for _ in 0..MAX_STEPS {
        if state.draft_phase == DraftPhase::AwaitingSelection {
            let index = agent.select_draft(&state);
            if engine::select_draft_card(&mut state, index).is_err() {
                // An agent answering out of range forfeits the choice.
                let _ = engine::select_draft_card(&mut state, 0);
            }
            continue;
        }

        match engine::advance_phase(&mut state) {
            Ok(AdvanceOutcome::AttackResolved) => {
                rounds_completed += 1;
                if let Some(attack) = &state.last_attack {
                    left += attack.left;
                    middle += attack.middle;
                    right += attack.right;
                }
            }
            Ok(AdvanceOutcome::RoundStarted(_)) => {}
            Ok(AdvanceOutcome::GameComplete) => {
                completed = true;
                break;
            }
            // A dry deck ends the run early; the state stays readable.
            Err(_) => break,
        }
    }

    let ongoing = &state.ongoing_resources;
    RunResult {
        seed,
        difficulty,
        agent_name: agent.name().to_string(),
        completed,
        rounds_completed,
        attacks_left: left,
        attacks_middle: middle,
        attacks_right: right,
        final_renown: ongoing.renown,
        final_piety: ongoing.piety,
        final_valour: ongoing.valour,
        final_discipline: ongoing.discipline,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use vallum_agents::{GreedyAgent, RandomAgent};
    use vallum_engine::cards::{PictCard, PlayerCard};

    /// A dataset generous enough to finish any difficulty: hard needs
    /// 37 attack cards plus 6 lead draws.
    pub fn big_card_set() -> CardSet {
        let player_cards = (0..24)
            .map(|i| PlayerCard {
                name: format!("Task {i}"),
                task: format!("Do task {i}"),
                task_count_vp: Some([("2".to_string(), (i % 5) as u32)].into_iter().collect()),
                market: Some(i as u32 % 12 + 1),
                resources: Some(vec!["stone".into(), "soldier".into()]),
                shape: None,
            })
            .collect();
        let pict_cards = (0..60)
            .map(|i| PictCard {
                attack: Some(["left", "middle", "right", "center"][i % 4].into()),
                gladiator: Some((i % 7) as u32),
                market: Some((i % 12) as u32 + 1),
                resources: None,
            })
            .collect();
        CardSet {
            player_cards,
            pict_cards,
        }
    }

    #[test]
    fn test_random_agent_finishes_a_medium_game() {
        let cards = big_card_set();
        let mut agent = RandomAgent::new(7);
        let result = run_game(&cards, Difficulty::Medium, 7, &mut agent);

        assert!(result.completed);
        assert_eq!(result.rounds_completed, 6);
        // Medium draws 31 attack cards across the six rounds.
        let total = result.attacks_left + result.attacks_middle + result.attacks_right;
        assert_eq!(total, 31);
    }

    #[test]
    fn test_greedy_agent_finishes_a_hard_game() {
        let cards = big_card_set();
        let mut agent = GreedyAgent::new();
        let result = run_game(&cards, Difficulty::Hard, 11, &mut agent);

        assert!(result.completed);
        assert_eq!(result.rounds_completed, 6);
        assert_eq!(result.agent_name, "Greedy");
    }

    #[test]
    fn test_thin_pict_deck_ends_the_run_early() {
        let mut cards = big_card_set();
        cards.pict_cards.truncate(8); // hard round 3 wants 5 more than remain
        let mut agent = RandomAgent::new(3);
        let result = run_game(&cards, Difficulty::Hard, 3, &mut agent);

        assert!(!result.completed);
        assert!(result.rounds_completed < 6);
    }
}
