// ═══════════════════════════════════════════════════════════════════════
// Card data model and dataset ingestion
//
// Cards arrive as an external, pre-validated dataset (two JSON
// collections). Resource tokens stay raw on the cards and are resolved
// against the closed ledger enums at grant time, so unknown tokens are
// ignored rather than rejected.
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::types::AttackPosition;

/// Tile shape printed on a player card. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileShape {
    Square,
    Long,
    S,
    L,
    T,
}

/// A draftable task card. Also the shape of the neutral pile, which is
/// dealt from the same collection but only ever drawn for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub name: String,
    pub task: String,
    /// Completed-task-count to victory-point mapping, as printed.
    #[serde(default)]
    pub task_count_vp: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub market: Option<u32>,
    /// Tokens banked (+1 each) when this card is rejected in a draft.
    #[serde(default)]
    pub resources: Option<Vec<String>>,
    #[serde(default)]
    pub shape: Option<TileShape>,
}

impl PlayerCard {
    pub fn resource_tokens(&self) -> &[String] {
        self.resources.as_deref().unwrap_or(&[])
    }
}

/// An adversary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictCard {
    /// Raw attack-position tag; see [`PictCard::position`].
    #[serde(default)]
    pub attack: Option<String>,
    #[serde(default)]
    pub gladiator: Option<u32>,
    #[serde(default)]
    pub market: Option<u32>,
    /// Resources granted when drawn as the round's lead card.
    #[serde(default)]
    pub resources: Option<HashMap<String, u32>>,
}

impl PictCard {
    /// Resolved attack position. `None` when the tag is missing or
    /// unrecognised; such cards are omitted from attack counts.
    pub fn position(&self) -> Option<AttackPosition> {
        self.attack.as_deref().and_then(AttackPosition::from_tag)
    }
}

/// The injected dataset: two ordered card collections, assumed valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub player_cards: Vec<PlayerCard>,
    pub pict_cards: Vec<PictCard>,
}

impl CardSet {
    /// Parse the two JSON collections the game ships with.
    pub fn from_json(player_json: &str, pict_json: &str) -> serde_json::Result<CardSet> {
        Ok(CardSet {
            player_cards: serde_json::from_str(player_json)?,
            pict_cards: serde_json::from_str(pict_json)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cards_from_json() {
        let players = r#"[
            {"name": "Milecastle Watch", "task": "Garrison the milecastle",
             "task_count_vp": {"2": 3, "4": 7}, "market": 4,
             "resources": ["soldier", "stone"], "shape": "long"},
            {"name": "Quarry Detail", "task": "Cut stone for the wall"}
        ]"#;
        let picts = r#"[
            {"attack": "Left", "gladiator": 3, "market": 7, "resources": {"stone": 1}},
            {"attack": "Center"},
            {"market": 2}
        ]"#;

        let set = CardSet::from_json(players, picts).unwrap();
        assert_eq!(set.player_cards.len(), 2);
        assert_eq!(set.player_cards[0].shape, Some(TileShape::Long));
        assert_eq!(set.player_cards[0].resource_tokens().len(), 2);
        assert!(set.player_cards[1].resources.is_none());

        assert_eq!(set.pict_cards[0].position(), Some(AttackPosition::Left));
        assert_eq!(set.pict_cards[1].position(), Some(AttackPosition::Middle));
        assert_eq!(set.pict_cards[2].position(), None);
    }

    #[test]
    fn test_attack_tag_resolution_is_lenient() {
        for tag in ["left", "LEFT", "Left"] {
            assert_eq!(AttackPosition::from_tag(tag), Some(AttackPosition::Left));
        }
        assert_eq!(AttackPosition::from_tag("middle"), Some(AttackPosition::Middle));
        assert_eq!(AttackPosition::from_tag("center"), Some(AttackPosition::Middle));
        assert_eq!(AttackPosition::from_tag("flank"), None);
        assert_eq!(AttackPosition::from_tag(""), None);
    }
}
