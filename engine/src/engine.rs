// ═══════════════════════════════════════════════════════════════════════
// Game engine — phase transitions and intent resolution
//
// Architecture:
//   The engine is a pure state machine. It never does I/O and never
//   sleeps. The presentation layer (CLI, sim loop, or UI) feeds one
//   intent at a time into these functions and reads public state back
//   out between calls. The timed hide of the lead Pict card is expressed
//   as a stamp the caller fires after its own delay.
//
// Round flow:
//   start ──advance──▶ pict-attack ──advance──▶ start of round+1
//   round 6's attack ──advance──▶ complete (terminal, re-advancing is a
//   reported no-op)
// ═══════════════════════════════════════════════════════════════════════

use log::{debug, warn};

use crate::error::{GameError, GameResult};
use crate::ledger::{OngoingResource, RoundResource};
use crate::types::*;

/// What an `advance_phase` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Adversary batch drawn and classified; now in the attack phase.
    AttackResolved,
    /// Round counter advanced and the new round set up.
    RoundStarted(u8),
    /// Round 6's attack has resolved; nothing left to run.
    GameComplete,
}

/// Result of the ad-hoc market draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDraw {
    pub market: Option<u32>,
    /// Raw attack tag of the card the number came from.
    pub attack: Option<String>,
}

/// Result of the ad-hoc gladiator-battle draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GladiatorDraw {
    /// Gladiator strength; a card without one reads as 0.
    pub strength: u32,
    pub attack: Option<String>,
}

// ── Phase machine ──────────────────────────────────────────────────────

/// Advance the game. A single toggle whose effect depends entirely on
/// the current phase: from `Start` it resolves the Pict attack, from
/// `PictAttack` it sets up the next round (or reports completion after
/// round 6). A failed advance leaves phase, decks and ledgers unchanged,
/// except that the one-shot attack bonus is consumed by the attempt.
pub fn advance_phase(state: &mut GameState) -> GameResult<AdvanceOutcome> {
    match state.phase {
        Phase::Start => {
            resolve_pict_attack(state)?;
            Ok(AdvanceOutcome::AttackResolved)
        }
        Phase::PictAttack => {
            if state.round >= MAX_ROUNDS {
                state.phase = Phase::Complete;
                return Ok(AdvanceOutcome::GameComplete);
            }
            // Refuse the whole transition up front if the draft draw
            // cannot succeed, so nothing is half-applied.
            if state.player_deck.len() < 2 {
                return Err(GameError::InsufficientCards {
                    deck: DeckKind::Player,
                    requested: 2,
                    remaining: state.player_deck.len(),
                });
            }
            state.round += 1;
            state.phase = Phase::Start;
            start_round(state);
            Ok(AdvanceOutcome::RoundStarted(state.round))
        }
        Phase::Complete => Ok(AdvanceOutcome::GameComplete),
    }
}

/// Attack resolution: draw `schedule[round] + pict_attack` cards from the
/// Pict deck and classify them by wall section. At most once per round;
/// the phase guard in `advance_phase` enforces it.
fn resolve_pict_attack(state: &mut GameState) -> GameResult<()> {
    let base = state.base_attack_count();
    let bonus = state.ongoing_resources.pict_attack;
    let wanted = base as usize + bonus as usize;

    let drawn = state.pict_deck.draw_n(wanted);
    // One-shot bonus: consumed by the attempt whether or not the draw
    // went through. The deck itself is untouched on failure.
    state.ongoing_resources.pict_attack = 0;
    let drawn = drawn?;

    let mut summary = AttackSummary {
        base,
        bonus,
        drawn,
        left: 0,
        middle: 0,
        right: 0,
    };
    for card in &summary.drawn {
        match card.position() {
            Some(AttackPosition::Left) => summary.left += 1,
            Some(AttackPosition::Middle) => summary.middle += 1,
            Some(AttackPosition::Right) => summary.right += 1,
            None => {}
        }
    }

    debug!(
        "round {}: Pict attack drew {} cards ({} base + {} bonus)",
        state.round,
        summary.total(),
        base,
        bonus
    );
    state.last_attack = Some(summary);
    state.phase = Phase::PictAttack;
    Ok(())
}

/// Round-start sequence, shared by `new_game` and the next-round
/// transition: clear last round's transients, reset the round pool,
/// carry over the persistent stone/builder/civilian counts, draw the
/// lead Pict card, then offer the two draft options.
pub(crate) fn start_round(state: &mut GameState) {
    state.rejected_card = None;
    state.neutral_display.clear();
    state.last_attack = None;
    state.active_card_hidden = false;

    state.round_resources.reset();
    carry_over(state);
    draw_lead_card(state);
    draw_draft_options(state);
}

/// Exactly once per round, before the lead draw.
fn carry_over(state: &mut GameState) {
    let ongoing = &state.ongoing_resources;
    let (stone, builder, civilian) = (ongoing.stone, ongoing.builder, ongoing.civilian);
    state.round_resources.stone += stone;
    state.round_resources.builder += builder;
    state.round_resources.civilian += civilian;
}

fn draw_lead_card(state: &mut GameState) {
    match state.pict_deck.draw_one() {
        Ok(card) => {
            if let Some(resources) = &card.resources {
                for (token, count) in resources {
                    match RoundResource::from_token(token) {
                        Some(kind) => state.round_resources.adjust(kind, *count as i32),
                        None => {
                            debug!("ignoring resource token {token:?} on the lead card")
                        }
                    }
                }
            }
            state.active_card = Some(card);
            state.active_card_hidden = false;
            let stamp = schedule_hide(state);
            state.scheduled_hide = Some(stamp);
        }
        Err(_) => {
            // The lead draw is informational; an exhausted Pict deck does
            // not stop the round.
            warn!("round {}: no Pict card left for the lead draw", state.round);
            state.active_card = None;
            state.scheduled_hide = None;
        }
    }
}

fn schedule_hide(state: &mut GameState) -> HideStamp {
    state.hide_seq += 1;
    HideStamp {
        round: state.round,
        seq: state.hide_seq,
    }
}

fn draw_draft_options(state: &mut GameState) {
    state.draft_options.clear();
    state.draft_phase = DraftPhase::AwaitingDraw;
    match state.player_deck.draw_n(2) {
        Ok(cards) => {
            state.draft_options = cards;
            state.draft_phase = DraftPhase::AwaitingSelection;
        }
        Err(err) => {
            // Reachable only from `new_game` with a degenerate dataset;
            // the next-round transition pre-checks the player deck.
            warn!("round {}: draft draw failed: {err}", state.round);
        }
    }
}

// ── Draft resolution ───────────────────────────────────────────────────

/// Resolve the round's draft: keep `index`, bank +1 per resource token on
/// the other card, expose it as the rejected card, then deal the two
/// informational neutral cards. Terminal for the round.
pub fn select_draft_card(state: &mut GameState, index: usize) -> GameResult<()> {
    if state.draft_phase != DraftPhase::AwaitingSelection {
        return Err(GameError::InvalidPhase {
            phase: state.phase,
            draft: state.draft_phase,
        });
    }
    if index >= state.draft_options.len() {
        return Err(GameError::InvalidSelection { index });
    }

    let rejected = state.draft_options.remove(1 - index);
    let selected = state.draft_options.remove(0);

    state.selected_tasks[(state.round - 1) as usize] = Some(selected);

    // Flat +1 per listed token, whatever the card's own weighting.
    for token in rejected.resource_tokens() {
        match RoundResource::from_token(token) {
            Some(kind) => state.round_resources.adjust(kind, 1),
            None => debug!("ignoring resource token {token:?} on the rejected card"),
        }
    }
    state.rejected_card = Some(rejected);
    state.draft_phase = DraftPhase::Resolved;

    draw_neutral_cards(state);
    Ok(())
}

fn draw_neutral_cards(state: &mut GameState) {
    let wanted = 2usize.min(state.neutral_deck.len());
    if wanted < 2 {
        warn!(
            "round {}: only {} neutral cards remain",
            state.round, wanted
        );
    }
    state.neutral_display = state.neutral_deck.draw_n(wanted).unwrap_or_default();
}

// ── Ad-hoc draws ───────────────────────────────────────────────────────

/// Draw one Pict card for its market number. Independent of the phase
/// machine; the deck still shrinks.
pub fn draw_market_number(state: &mut GameState) -> GameResult<MarketDraw> {
    let card = state.pict_deck.draw_one()?;
    Ok(MarketDraw {
        market: card.market,
        attack: card.attack,
    })
}

/// Draw one Pict card for a gladiator battle.
pub fn gladiator_battle(state: &mut GameState) -> GameResult<GladiatorDraw> {
    let card = state.pict_deck.draw_one()?;
    Ok(GladiatorDraw {
        strength: card.gladiator.unwrap_or(0),
        attack: card.attack,
    })
}

// ── Manual adjustments and display intents ─────────────────────────────

/// Manual adjustment of the round pool, clamped at zero.
pub fn adjust_round_resource(state: &mut GameState, kind: RoundResource, delta: i32) {
    state.round_resources.adjust(kind, delta);
}

/// Manual adjustment of the persistent pool, clamped at zero.
pub fn adjust_ongoing_resource(state: &mut GameState, kind: OngoingResource, delta: i32) {
    state.ongoing_resources.adjust(kind, delta);
}

/// Apply a deferred hide. A stamp from a superseded round, or from a
/// schedule that already fired, no longer matches and does nothing.
pub fn fire_scheduled_hide(state: &mut GameState, stamp: HideStamp) {
    if state.scheduled_hide == Some(stamp) {
        state.active_card_hidden = true;
        state.scheduled_hide = None;
    }
}

/// Manual show/hide toggle for the active Pict card.
pub fn toggle_active_card(state: &mut GameState) {
    state.active_card_hidden = !state.active_card_hidden;
}
