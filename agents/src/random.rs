// ═══════════════════════════════════════════════════════════════════════
// Random agent — baseline, and a stability workout for the engine
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::Agent;
use vallum_engine::types::GameState;

pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn select_draft(&mut self, _state: &GameState) -> usize {
        self.rng.gen_range(0..2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_stay_in_range_and_vary() {
        let mut agent = RandomAgent::new(99);
        let state = crate::test_support::fixture_state();
        let picks: Vec<usize> = (0..50).map(|_| agent.select_draft(&state)).collect();
        assert!(picks.iter().all(|&p| p < 2));
        assert!(picks.contains(&0) && picks.contains(&1));
    }
}
