// ═══════════════════════════════════════════════════════════════════════
// Resource ledger — round-scoped and persistent resource pools
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Resource kinds ─────────────────────────────────────────────────────

/// Round-scoped resource kinds. The pool resets to zero at every round
/// start, then takes the carry-over and the round's draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResource {
    Soldier,
    Builder,
    Servant,
    Civilian,
    Stone,
}

impl RoundResource {
    pub const ALL: [RoundResource; 5] = [
        RoundResource::Soldier,
        RoundResource::Builder,
        RoundResource::Servant,
        RoundResource::Civilian,
        RoundResource::Stone,
    ];

    /// Resolve a dataset token. Tokens outside the closed set resolve to
    /// `None` and the grant paths ignore them.
    pub fn from_token(token: &str) -> Option<RoundResource> {
        match token {
            "soldier" => Some(RoundResource::Soldier),
            "builder" => Some(RoundResource::Builder),
            "servant" => Some(RoundResource::Servant),
            "civilian" => Some(RoundResource::Civilian),
            "stone" => Some(RoundResource::Stone),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResource::Soldier => write!(f, "soldier"),
            RoundResource::Builder => write!(f, "builder"),
            RoundResource::Servant => write!(f, "servant"),
            RoundResource::Civilian => write!(f, "civilian"),
            RoundResource::Stone => write!(f, "stone"),
        }
    }
}

/// Persistent resource kinds, carried across rounds and reset only at
/// new-game start. `PictAttack` is a one-shot bonus consumed by the next
/// attack resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OngoingResource {
    Stone,
    Builder,
    Civilian,
    Renown,
    Piety,
    Valour,
    Discipline,
    PictAttack,
}

impl OngoingResource {
    pub const ALL: [OngoingResource; 8] = [
        OngoingResource::Stone,
        OngoingResource::Builder,
        OngoingResource::Civilian,
        OngoingResource::Renown,
        OngoingResource::Piety,
        OngoingResource::Valour,
        OngoingResource::Discipline,
        OngoingResource::PictAttack,
    ];
}

impl std::fmt::Display for OngoingResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OngoingResource::Stone => write!(f, "stone"),
            OngoingResource::Builder => write!(f, "builder"),
            OngoingResource::Civilian => write!(f, "civilian"),
            OngoingResource::Renown => write!(f, "renown"),
            OngoingResource::Piety => write!(f, "piety"),
            OngoingResource::Valour => write!(f, "valour"),
            OngoingResource::Discipline => write!(f, "discipline"),
            OngoingResource::PictAttack => write!(f, "pictAttack"),
        }
    }
}

// ── Pools ──────────────────────────────────────────────────────────────

/// Counts never go below zero; `adjust` clamps instead of underflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPool {
    pub soldier: u32,
    pub builder: u32,
    pub servant: u32,
    pub civilian: u32,
    pub stone: u32,
}

impl RoundPool {
    pub fn get(&self, kind: RoundResource) -> u32 {
        match kind {
            RoundResource::Soldier => self.soldier,
            RoundResource::Builder => self.builder,
            RoundResource::Servant => self.servant,
            RoundResource::Civilian => self.civilian,
            RoundResource::Stone => self.stone,
        }
    }

    pub fn get_mut(&mut self, kind: RoundResource) -> &mut u32 {
        match kind {
            RoundResource::Soldier => &mut self.soldier,
            RoundResource::Builder => &mut self.builder,
            RoundResource::Servant => &mut self.servant,
            RoundResource::Civilian => &mut self.civilian,
            RoundResource::Stone => &mut self.stone,
        }
    }

    /// Bounded mutation: `count = max(0, count + delta)`.
    pub fn adjust(&mut self, kind: RoundResource, delta: i32) {
        let slot = self.get_mut(kind);
        *slot = clamp_add(*slot, delta);
    }

    /// Zero every kind. Runs unconditionally at the top of each round.
    pub fn reset(&mut self) {
        *self = RoundPool::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingPool {
    pub stone: u32,
    pub builder: u32,
    pub civilian: u32,
    pub renown: u32,
    pub piety: u32,
    pub valour: u32,
    pub discipline: u32,
    pub pict_attack: u32,
}

impl OngoingPool {
    /// New-game baseline: one stone, everything else zero.
    pub fn baseline() -> OngoingPool {
        OngoingPool {
            stone: 1,
            ..OngoingPool::default()
        }
    }

    pub fn get(&self, kind: OngoingResource) -> u32 {
        match kind {
            OngoingResource::Stone => self.stone,
            OngoingResource::Builder => self.builder,
            OngoingResource::Civilian => self.civilian,
            OngoingResource::Renown => self.renown,
            OngoingResource::Piety => self.piety,
            OngoingResource::Valour => self.valour,
            OngoingResource::Discipline => self.discipline,
            OngoingResource::PictAttack => self.pict_attack,
        }
    }

    pub fn get_mut(&mut self, kind: OngoingResource) -> &mut u32 {
        match kind {
            OngoingResource::Stone => &mut self.stone,
            OngoingResource::Builder => &mut self.builder,
            OngoingResource::Civilian => &mut self.civilian,
            OngoingResource::Renown => &mut self.renown,
            OngoingResource::Piety => &mut self.piety,
            OngoingResource::Valour => &mut self.valour,
            OngoingResource::Discipline => &mut self.discipline,
            OngoingResource::PictAttack => &mut self.pict_attack,
        }
    }

    /// Bounded mutation: `count = max(0, count + delta)`.
    pub fn adjust(&mut self, kind: OngoingResource, delta: i32) {
        let slot = self.get_mut(kind);
        *slot = clamp_add(*slot, delta);
    }

    /// Restore the baseline. New-game start only.
    pub fn reset(&mut self) {
        *self = OngoingPool::baseline();
    }
}

fn clamp_add(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}
