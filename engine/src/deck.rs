// ═══════════════════════════════════════════════════════════════════════
// Deck — shuffle and draw primitive shared by all three card piles
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::types::DeckKind;

/// An ordered draw pile plus the immutable ordering it was built from.
/// Play only shrinks the pile; `reset` restores the snapshot and
/// reshuffles at new-game start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck<C> {
    kind: DeckKind,
    original: Vec<C>,
    cards: Vec<C>,
}

impl<C: Clone> Deck<C> {
    /// Build a deck in dataset order. Call [`Deck::reset`] to shuffle.
    pub fn new(kind: DeckKind, cards: Vec<C>) -> Deck<C> {
        Deck {
            kind,
            original: cards.clone(),
            cards,
        }
    }

    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in draw order, front first.
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Restore the original snapshot, then shuffle. New-game only; the
    /// snapshot itself is never touched by play.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.cards = self.original.clone();
        self.cards.shuffle(rng);
    }

    /// Remove and return the front card.
    pub fn draw_one(&mut self) -> GameResult<C> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck { deck: self.kind });
        }
        Ok(self.cards.remove(0))
    }

    /// Remove and return the front `n` cards. All or nothing: a deck
    /// holding fewer than `n` is left untouched.
    pub fn draw_n(&mut self, n: usize) -> GameResult<Vec<C>> {
        if self.cards.len() < n {
            return Err(GameError::InsufficientCards {
                deck: self.kind,
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn numbered_deck(n: u8) -> Deck<u8> {
        Deck::new(DeckKind::Pict, (0..n).collect())
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = numbered_deck(20);
        deck.reset(&mut rng);

        assert_eq!(deck.len(), 20);
        let mut seen: Vec<u8> = deck.cards().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_shuffle_front_position_is_roughly_uniform() {
        // 4 cards, 200 seeds: each card should lead about 50 times.
        let mut front_counts = [0u32; 4];
        for seed in 0..200u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut deck = numbered_deck(4);
            deck.reset(&mut rng);
            front_counts[deck.cards()[0] as usize] += 1;
        }
        for &count in &front_counts {
            assert!((25..=75).contains(&count), "front counts skewed: {front_counts:?}");
        }
    }

    #[test]
    fn test_draw_one_takes_from_the_front() {
        let mut deck = numbered_deck(3);
        assert_eq!(deck.draw_one().unwrap(), 0);
        assert_eq!(deck.draw_one().unwrap(), 1);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_draw_one_from_empty_deck_fails() {
        let mut deck = numbered_deck(0);
        assert_eq!(
            deck.draw_one(),
            Err(GameError::EmptyDeck { deck: DeckKind::Pict })
        );
    }

    #[test]
    fn test_draw_n_is_atomic() {
        let mut deck = numbered_deck(5);
        let err = deck.draw_n(6).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCards {
                deck: DeckKind::Pict,
                requested: 6,
                remaining: 5,
            }
        );
        // Nothing was drawn.
        assert_eq!(deck.len(), 5);

        let drawn = deck.draw_n(5).unwrap();
        assert_eq!(drawn, vec![0, 1, 2, 3, 4]);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_reset_restores_the_full_deck_after_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = numbered_deck(10);
        deck.reset(&mut rng);
        deck.draw_n(7).unwrap();
        assert_eq!(deck.len(), 3);

        deck.reset(&mut rng);
        assert_eq!(deck.len(), 10);
    }
}
