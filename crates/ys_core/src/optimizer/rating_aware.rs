use super::debug::LineupResult;
use super::fill::{build_lineup, FocusSlotRule};
use crate::error::{AdvisorError, Result};
use crate::lineup::{Slot, SlotPlan};
use crate::models::{Player, PlayerId, SkillKey};
use crate::ranking::TrainingPolicy;
use fxhash::FxHashMap;

/// Observed match-performance scores per (player, position), supplied by
/// the caller from past observation cycles. Sparse; missing entries mean
/// no observation.
#[derive(Debug, Clone, Default)]
pub struct PositionRatings {
    ratings: FxHashMap<(PlayerId, Slot), f32>,
}

impl PositionRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: PlayerId, slot: Slot, rating: f32) {
        self.ratings.insert((player, slot), rating);
    }

    pub fn get(&self, player: PlayerId, slot: Slot) -> Option<f32> {
        self.ratings.get(&(player, slot)).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Like [`super::optimize_for_focus`], but consults observed per-position
/// performance when skill ranks tie in the bench/fallback fill, and
/// refuses outright degenerate requests: an empty roster and a focus
/// player with no training headroom left both surface as errors here.
pub fn optimize_with_ratings(
    players: &[Player],
    focus_player_id: PlayerId,
    primary_skill: SkillKey,
    secondary_skill: SkillKey,
    auto_selected: bool,
    policy: &TrainingPolicy,
    ratings: &PositionRatings,
) -> Result<LineupResult> {
    if players.is_empty() {
        return Err(AdvisorError::EmptyRoster);
    }

    let focus = players
        .iter()
        .find(|p| p.id == focus_player_id)
        .ok_or(AdvisorError::InvalidFocusPlayer(focus_player_id))?;

    if focus.skills.get(primary_skill).is_exhausted() {
        return Err(AdvisorError::FocusAlreadyMaxed {
            player: focus_player_id,
            skill: primary_skill,
        });
    }

    let plan = SlotPlan::for_skills(primary_skill, secondary_skill);
    Ok(build_lineup(
        players,
        focus,
        &plan,
        auto_selected,
        policy,
        FocusSlotRule::BestCoverage,
        Some(ratings),
    ))
}
