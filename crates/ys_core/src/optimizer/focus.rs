use super::debug::LineupResult;
use super::fill::{build_lineup, FocusSlotRule};
use crate::error::{AdvisorError, Result};
use crate::lineup::SlotPlan;
use crate::models::{Player, PlayerId, SkillKey};
use crate::ranking::TrainingPolicy;

/// Build a full lineup that maximizes simultaneous training coverage of
/// the primary and secondary skills around the focus player.
///
/// The focus player takes the best dual-coverage slot; every other slot
/// is filled greedily from the skill rankings, full-weight slots first,
/// with a general fallback for slots outside the training topology. An
/// empty roster yields an all-empty assignment, not an error.
pub fn optimize_for_focus(
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

    let plan = SlotPlan::for_skills(primary_skill, secondary_skill);
    Ok(build_lineup(players, focus, &plan, auto_selected, policy, FocusSlotRule::BestCoverage, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::Slot;
    use crate::models::{Age, SkillObservation, SkillSheet};

    fn player(id: PlayerId, skills: SkillSheet) -> Player {
        Player { id, name: format!("P{id}"), age: Age::new(15, 0), specialty: None, skills }
    }

    fn scoring_player(id: PlayerId, current: u8) -> Player {
        let mut skills = SkillSheet::default();
        skills.set(SkillKey::Scoring, SkillObservation::observe(Some(current), Some(8)));
        player(id, skills)
    }

    #[test]
    fn test_unknown_focus_player_is_an_error() {
        let roster = vec![scoring_player(1, 2)];
        let result = optimize_for_focus(
            &roster,
            99,
            SkillKey::Scoring,
            SkillKey::Passing,
            false,
            &TrainingPolicy::default(),
        );
        assert_eq!(result.unwrap_err(), AdvisorError::InvalidFocusPlayer(99));
    }

    #[test]
    fn test_empty_roster_yields_empty_assignment() {
        let result = optimize_for_focus(
            &[],
            1,
            SkillKey::Scoring,
            SkillKey::Passing,
            false,
            &TrainingPolicy::default(),
        )
        .unwrap();
        assert!(result.assignment.is_empty());
        assert!(result.debug.primary_ranking.is_empty());
    }

    #[test]
    fn test_focus_lands_on_dual_coverage_slot() {
        let roster: Vec<Player> = (1..=4).map(|i| scoring_player(i, i as u8)).collect();
        let result = optimize_for_focus(
            &roster,
            3,
            SkillKey::Scoring,
            SkillKey::Passing,
            false,
            &TrainingPolicy::default(),
        )
        .unwrap();
        // Forwards train both scoring (full) and passing (full)
        assert_eq!(result.assignment.player_at(Slot::ForwardRight), Some(3));
    }

    #[test]
    fn test_no_player_placed_twice() {
        let roster: Vec<Player> = (1..=6).map(|i| scoring_player(i, (i % 5) as u8)).collect();
        let result = optimize_for_focus(
            &roster,
            1,
            SkillKey::Scoring,
            SkillKey::Scoring,
            false,
            &TrainingPolicy::default(),
        )
        .unwrap();
        let mut ids = result.assignment.assigned_players();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "a player appears in two slots");
    }

    #[test]
    fn test_debug_records_selection_and_plan() {
        let roster = vec![scoring_player(1, 2), scoring_player(2, 3)];
        let result = optimize_for_focus(
            &roster,
            2,
            SkillKey::Scoring,
            SkillKey::Playmaking,
            true,
            &TrainingPolicy::default(),
        )
        .unwrap();
        let debug = &result.debug;
        assert_eq!(debug.focus_player_id, 2);
        assert_eq!(debug.primary_skill, SkillKey::Scoring);
        assert_eq!(debug.secondary_skill, SkillKey::Playmaking);
        assert!(debug.auto_selected);
        assert_eq!(debug.plan.primary_full, vec![Slot::ForwardRight, Slot::ForwardLeft]);
        assert_eq!(debug.primary_ranking.len(), 2);
    }
}
