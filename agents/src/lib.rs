pub mod agent;
pub mod greedy;
pub mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use random::RandomAgent;

#[cfg(test)]
pub(crate) mod test_support {
    use vallum_engine::cards::{CardSet, PictCard, PlayerCard};
    use vallum_engine::setup::new_game;
    use vallum_engine::types::{Difficulty, GameState};

    pub fn player_card(name: &str, vp: &[(&str, u32)], tokens: &[&str]) -> PlayerCard {
        PlayerCard {
            name: name.into(),
            task: format!("{name} duties"),
            task_count_vp: if vp.is_empty() {
                None
            } else {
                Some(vp.iter().map(|(k, v)| (k.to_string(), *v)).collect())
            },
            market: Some(3),
            resources: if tokens.is_empty() {
                None
            } else {
                Some(tokens.iter().map(|t| t.to_string()).collect())
            },
            shape: None,
        }
    }

    pub fn fixture_state() -> GameState {
        let cards = CardSet {
            player_cards: vec![
                player_card("High Value", &[("2", 6)], &["soldier"]),
                player_card("Low Value", &[("2", 1)], &["stone", "stone"]),
            ],
            pict_cards: (0..4)
                .map(|_| PictCard {
                    attack: Some("left".into()),
                    gladiator: None,
                    market: Some(2),
                    resources: None,
                })
                .collect(),
        };
        new_game(&cards, Difficulty::Easy, 17)
    }
}
