// ═══════════════════════════════════════════════════════════════════════
// Batch execution — many seeded runs in parallel
// ═══════════════════════════════════════════════════════════════════════

use rayon::prelude::*;

use crate::runner::{run_game, RunResult};
use vallum_agents::{Agent, GreedyAgent, RandomAgent};
use vallum_engine::types::Difficulty;
use vallum_engine::CardSet;

/// Agent families the lab knows how to build per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Random,
    Greedy,
}

impl AgentKind {
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
        }
    }
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "greedy" => Ok(AgentKind::Greedy),
            other => Err(format!("unknown agent: {other}")),
        }
    }
}

/// Run `games` seeded games in parallel. Each run gets its own state and
/// its own agent, so nothing is shared across threads.
pub fn run_batch(
    cards: &CardSet,
    difficulty: Difficulty,
    start_seed: u64,
    games: u32,
    agent: AgentKind,
) -> Vec<RunResult> {
    (0..games)
        .into_par_iter()
        .map(|g| {
            let seed = start_seed + g as u64 * 1000;
            let mut agent = agent.build(seed);
            run_game(cards, difficulty, seed, agent.as_mut())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::tests::big_card_set;

    #[test]
    fn test_batch_produces_one_result_per_seed() {
        let cards = big_card_set();
        let results = run_batch(&cards, Difficulty::Easy, 42, 8, AgentKind::Random);

        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|r| r.completed));
        let mut seeds: Vec<u64> = results.iter().map(|r| r.seed).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 8);
    }

    #[test]
    fn test_agent_kind_parsing() {
        assert_eq!("random".parse::<AgentKind>().unwrap(), AgentKind::Random);
        assert_eq!("Greedy".parse::<AgentKind>().unwrap(), AgentKind::Greedy);
        assert!("mcts".parse::<AgentKind>().is_err());
    }
}
