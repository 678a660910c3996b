use super::debug::FocusCandidate;
use crate::models::{Player, SkillKey};
use crate::ranking::{rank, Category, TrainingPolicy};
use serde::{Deserialize, Serialize};

/// Advisory (focus player, primary skill, secondary skill) triple. The
/// user may override any of the three; doing so clears the auto-selected
/// provenance flag the caller passes to the optimizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSelection {
    pub focus_player_id: crate::models::PlayerId,
    pub primary_skill: SkillKey,
    pub secondary_skill: SkillKey,
}

/// Auto-selection never gambles on a fully unknown observation; that is
/// the reveal optimizers' job. At least one side must be known.
fn selectable(category: Category) -> bool {
    matches!(category, Category::Cat1 | Category::Cat2 | Category::Cat3)
}

/// Per-skill top candidate board, also exposed in the diagnostic trace.
pub(crate) fn candidate_board(players: &[Player], policy: &TrainingPolicy) -> Vec<FocusCandidate> {
    let mut board = Vec::new();
    for skill in SkillKey::ALL {
        let ranking = rank(players, skill, policy);
        let Some(top) = ranking.iter().find(|e| selectable(e.category)) else {
            continue;
        };
        let Some(player) = players.iter().find(|p| p.id == top.player_id) else {
            continue;
        };
        board.push(FocusCandidate {
            player_id: top.player_id,
            skill,
            category: top.category,
            score: top.score,
            age_days: player.age.total_days(),
        });
    }
    board
}

/// Pick the most defensible (focus, primary, secondary) triple from the
/// roster: the skill whose top candidate has the best tie-broken standing
/// becomes primary and names the focus player; the best remaining skill
/// becomes secondary. `None` when the roster is empty or no skill has a
/// candidate with any known value left to train.
pub fn auto_select(players: &[Player], policy: &TrainingPolicy) -> Option<AutoSelection> {
    let board = candidate_board(players, policy);
    let best = board.iter().min_by_key(|c| (c.category, c.score, c.age_days, c.player_id))?;

    // 두 번째 스킬이 없으면 primary로 대체
    let secondary_skill = board
        .iter()
        .filter(|c| c.skill != best.skill)
        .min_by_key(|c| (c.category, c.score, c.age_days, c.player_id))
        .map(|c| c.skill)
        .unwrap_or(best.skill);

    log::debug!(
        "auto-select: focus {} primary {:?} secondary {:?}",
        best.player_id,
        best.skill,
        secondary_skill
    );

    Some(AutoSelection {
        focus_player_id: best.player_id,
        primary_skill: best.skill,
        secondary_skill,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Age, Player, SkillObservation, SkillSheet};

    fn player(id: u32, skills: SkillSheet) -> Player {
        Player { id, name: format!("P{id}"), age: Age::new(15, 0), specialty: None, skills }
    }

    #[test]
    fn test_empty_roster_selects_nothing() {
        assert_eq!(auto_select(&[], &TrainingPolicy::default()), None);
    }

    #[test]
    fn test_all_unknown_roster_selects_nothing() {
        let roster = vec![player(1, SkillSheet::default())];
        assert_eq!(auto_select(&roster, &TrainingPolicy::default()), None);
    }

    #[test]
    fn test_all_exhausted_roster_selects_nothing() {
        let mut skills = SkillSheet::default();
        for key in SkillKey::ALL {
            skills.set(key, SkillObservation::observe(Some(8), Some(8)));
        }
        let roster = vec![player(1, skills)];
        assert_eq!(auto_select(&roster, &TrainingPolicy::default()), None);
    }

    #[test]
    fn test_picks_best_skill_and_distinct_secondary() {
        let mut a = SkillSheet::default();
        // Scoring: big known headroom -> Cat1, current 1
        a.set(SkillKey::Scoring, SkillObservation::observe(Some(1), Some(8)));
        let mut b = SkillSheet::default();
        // Passing: Cat1 as well but higher current
        b.set(SkillKey::Passing, SkillObservation::observe(Some(4), Some(8)));
        let roster = vec![player(1, a), player(2, b)];

        let selection = auto_select(&roster, &TrainingPolicy::default()).unwrap();
        assert_eq!(selection.focus_player_id, 1);
        assert_eq!(selection.primary_skill, SkillKey::Scoring);
        assert_eq!(selection.secondary_skill, SkillKey::Passing);
    }

    #[test]
    fn test_single_trainable_skill_degenerates_to_same_pair() {
        let mut skills = SkillSheet::default();
        skills.set(SkillKey::Defending, SkillObservation::observe(Some(2), Some(7)));
        let roster = vec![player(5, skills)];

        let selection = auto_select(&roster, &TrainingPolicy::default()).unwrap();
        assert_eq!(selection.primary_skill, SkillKey::Defending);
        assert_eq!(selection.secondary_skill, SkillKey::Defending);
    }

    #[test]
    fn test_board_skips_unknown_only_skills() {
        let mut skills = SkillSheet::default();
        skills.set(SkillKey::Winger, SkillObservation::observe(None, Some(6)));
        let roster = vec![player(3, skills)];

        let board = candidate_board(&roster, &TrainingPolicy::default());
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].skill, SkillKey::Winger);
        assert_eq!(board[0].category, Category::Cat3);
    }
}
