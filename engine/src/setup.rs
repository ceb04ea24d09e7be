// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds a fresh GameState from the injected dataset
// ═══════════════════════════════════════════════════════════════════════

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cards::CardSet;
use crate::deck::Deck;
use crate::engine;
use crate::ledger::{OngoingPool, RoundPool};
use crate::types::*;

/// Start a new game. Always succeeds, whatever state the previous game
/// was in: the three decks are rebuilt from their snapshots and
/// reshuffled, both pools reset, history cleared, and round 1 begins
/// immediately. Seed drives the shuffles for reproducibility.
pub fn new_game(cards: &CardSet, difficulty: Difficulty, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut player_deck = Deck::new(DeckKind::Player, cards.player_cards.clone());
    // The neutral pile is dealt from the player card list; it is only
    // ever drawn for display.
    let mut neutral_deck = Deck::new(DeckKind::Neutral, cards.player_cards.clone());
    let mut pict_deck = Deck::new(DeckKind::Pict, cards.pict_cards.clone());
    player_deck.reset(&mut rng);
    neutral_deck.reset(&mut rng);
    pict_deck.reset(&mut rng);

    let mut state = GameState {
        round: 1,
        difficulty,
        phase: Phase::Start,
        player_deck,
        neutral_deck,
        pict_deck,
        round_resources: RoundPool::default(),
        ongoing_resources: OngoingPool::baseline(),
        draft_phase: DraftPhase::AwaitingDraw,
        draft_options: Vec::new(),
        rejected_card: None,
        neutral_display: Vec::new(),
        active_card: None,
        active_card_hidden: false,
        scheduled_hide: None,
        hide_seq: 0,
        selected_tasks: vec![None; MAX_ROUNDS as usize],
        last_attack: None,
        seed,
    };

    engine::start_round(&mut state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{PictCard, PlayerCard};

    fn sample_cards() -> CardSet {
        let player_cards = (0..8)
            .map(|i| PlayerCard {
                name: format!("Task {i}"),
                task: format!("Do task {i}"),
                task_count_vp: None,
                market: Some(i),
                resources: Some(vec!["stone".into()]),
                shape: None,
            })
            .collect();
        let pict_cards = (0..12)
            .map(|i| PictCard {
                attack: Some(["left", "middle", "right"][i % 3].into()),
                gladiator: Some(i as u32),
                market: Some(i as u32),
                resources: None,
            })
            .collect();
        CardSet {
            player_cards,
            pict_cards,
        }
    }

    #[test]
    fn test_new_game_enters_round_1() {
        let state = new_game(&sample_cards(), Difficulty::Medium, 42);

        assert_eq!(state.round, 1);
        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.draft_phase, DraftPhase::AwaitingSelection);
        assert_eq!(state.draft_options.len(), 2);
        assert!(state.selected_tasks.iter().all(|t| t.is_none()));

        // Round 1 has drawn the lead Pict card and the two options.
        assert_eq!(state.pict_deck.len(), 11);
        assert_eq!(state.player_deck.len(), 6);
        assert_eq!(state.neutral_deck.len(), 8);
        assert!(state.active_card.is_some());
        assert!(!state.active_card_hidden);
    }

    #[test]
    fn test_new_game_resets_the_ledger() {
        let state = new_game(&sample_cards(), Difficulty::Easy, 7);

        assert_eq!(state.ongoing_resources, OngoingPool::baseline());
        // Baseline stone carries into the round pool; the sample Pict
        // cards grant nothing on the lead draw.
        assert_eq!(state.round_resources.stone, 1);
        assert_eq!(state.round_resources.soldier, 0);
    }

    #[test]
    fn test_same_seed_same_decks() {
        let a = new_game(&sample_cards(), Difficulty::Hard, 123);
        let b = new_game(&sample_cards(), Difficulty::Hard, 123);

        assert_eq!(a.player_deck.cards(), b.player_deck.cards());
        assert_eq!(a.pict_deck.cards(), b.pict_deck.cards());
        assert_eq!(a.draft_options, b.draft_options);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let orders: Vec<Vec<String>> = (0..8)
            .map(|seed| {
                new_game(&sample_cards(), Difficulty::Easy, seed)
                    .player_deck
                    .cards()
                    .iter()
                    .map(|c| c.name.clone())
                    .collect()
            })
            .collect();
        assert!(orders.iter().any(|o| o != &orders[0]));
    }
}
