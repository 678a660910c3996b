//! Observation-seeking lineup variants.
//!
//! When a fact about the focus player is still missing, the lineup can be
//! bent to surface it: parking the player in a full-weight slot for the
//! skill in question makes the next observation cycle report the missing
//! value. Slot choice for the focus player is the only difference from
//! the primary optimizer; everything else fills identically.

use super::debug::LineupResult;
use super::fill::{build_lineup, FocusSlotRule};
use crate::error::{AdvisorError, Result};
use crate::lineup::SlotPlan;
use crate::models::{Player, PlayerId, SkillKey};
use crate::ranking::TrainingPolicy;

/// Place the focus player so the next observation reveals their current
/// level on the primary skill. Errors with `AlreadyKnown` when that
/// value is already on record.
pub fn reveal_primary_current(
    players: &[Player],
    focus_player_id: PlayerId,
    primary_skill: SkillKey,
    secondary_skill: SkillKey,
    auto_selected: bool,
    policy: &TrainingPolicy,
) -> Result<LineupResult> {
    if players.is_empty() {
        return Ok(LineupResult::empty(focus_player_id, primary_skill, secondary_skill, auto_selected));
    }

    let focus = players
        .iter()
        .find(|p| p.id == focus_player_id)
        .ok_or(AdvisorError::InvalidFocusPlayer(focus_player_id))?;

    if focus.skills.get(primary_skill).current().is_some() {
        return Err(AdvisorError::AlreadyKnown { player: focus_player_id, skill: primary_skill });
    }

    let plan = SlotPlan::for_skills(primary_skill, secondary_skill);
    Ok(build_lineup(players, focus, &plan, auto_selected, policy, FocusSlotRule::RevealPrimary, None))
}

/// Place the focus player so the next observation reveals their ceiling
/// on the secondary skill. Errors with `AlreadyKnown` when that value is
/// already on record.
pub fn reveal_secondary_max(
    players: &[Player],
    focus_player_id: PlayerId,
    primary_skill: SkillKey,
    secondary_skill: SkillKey,
    auto_selected: bool,
    policy: &TrainingPolicy,
) -> Result<LineupResult> {
    if players.is_empty() {
        return Ok(LineupResult::empty(focus_player_id, primary_skill, secondary_skill, auto_selected));
    }

    let focus = players
        .iter()
        .find(|p| p.id == focus_player_id)
        .ok_or(AdvisorError::InvalidFocusPlayer(focus_player_id))?;

    if focus.skills.get(secondary_skill).max().is_some() {
        return Err(AdvisorError::AlreadyKnown { player: focus_player_id, skill: secondary_skill });
    }

    let plan = SlotPlan::for_skills(primary_skill, secondary_skill);
    Ok(build_lineup(players, focus, &plan, auto_selected, policy, FocusSlotRule::RevealSecondary, None))
}
