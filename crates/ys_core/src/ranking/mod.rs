//! Training-priority ranking
//!
//! Orders a roster for one skill: category tier first, then the numeric
//! score appropriate to the tier, then youngest age, then player id. The
//! result is a deterministic total order, independent of roster
//! permutation, which the greedy slot fill relies on.

use crate::models::{Player, PlayerId, SkillKey, SkillObservation};
use serde::{Deserialize, Serialize};

/// Training-priority tier for one (player, skill) pair.
///
/// Declaration order is priority order: earlier variants are more
/// training-worthy, so an ascending sort puts the best candidates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Current and ceiling both known, headroom left.
    Cat1,
    /// Only the current level is known; the ceiling is still open.
    Cat2,
    /// Only the ceiling is known; the floor is still open.
    Cat3,
    /// Nothing observed yet.
    Cat4,
    /// Revealed zero ceiling: this skill can never be trained here.
    DontCare,
    /// Current equals ceiling; no training benefit left.
    Exhausted,
}

impl Category {
    /// Classify one observation.
    pub fn of(observation: SkillObservation) -> Self {
        match observation {
            SkillObservation::Both { current, max } if current >= max => Category::Exhausted,
            SkillObservation::Both { .. } => Category::Cat1,
            SkillObservation::Current { .. } => Category::Cat2,
            SkillObservation::Max { value: 0 } => Category::DontCare,
            SkillObservation::Max { .. } => Category::Cat3,
            SkillObservation::Unknown => Category::Cat4,
        }
    }

    /// Tiers the Primary Optimizer and Auto-Selection draw from.
    pub fn is_trainable(&self) -> bool {
        matches!(self, Category::Cat1 | Category::Cat2 | Category::Cat3 | Category::Cat4)
    }
}

/// Within-category ordering value; lower sorts first.
///
/// Cat1/Cat2: lower current level means more headroom, so it comes first.
/// Cat3: a higher known ceiling is the better bet, so max is negated.
/// Cat4/DontCare carry no number at all.
fn score_for(category: Category, observation: SkillObservation) -> i16 {
    match category {
        Category::Cat1 | Category::Cat2 | Category::Exhausted => {
            observation.current().unwrap_or(0) as i16
        }
        Category::Cat3 => -(observation.max().unwrap_or(0) as i16),
        Category::Cat4 | Category::DontCare => 0,
    }
}

/// One row of a skill ranking. Exposed verbatim in the diagnostic trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub player_id: PlayerId,
    pub category: Category,
    pub current: Option<u8>,
    pub max: Option<u8>,
    pub score: i16,
    /// 0-based, dense.
    pub rank: usize,
}

/// Configuration switch carried through every ranking and fill step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainingPolicy {
    /// When false, players already at their ceiling for a skill are
    /// removed from that skill's consideration entirely, never merely
    /// deprioritized.
    pub allow_training_until_maxed_out: bool,
}

/// Rank every eligible player on the roster for `skill`.
///
/// Each player appears exactly once, or not at all when the policy
/// excludes exhausted players. Identical inputs always produce the
/// identical sequence.
pub fn rank(players: &[Player], skill: SkillKey, policy: &TrainingPolicy) -> Vec<RankedEntry> {
    let mut rows: Vec<(RankedEntry, u32)> = Vec::with_capacity(players.len());

    for player in players {
        let observation = player.skills.get(skill);
        let category = Category::of(observation);
        if category == Category::Exhausted && !policy.allow_training_until_maxed_out {
            log::trace!("rank: dropping exhausted player {} for {:?}", player.id, skill);
            continue;
        }
        let entry = RankedEntry {
            player_id: player.id,
            category,
            current: observation.current(),
            max: observation.max(),
            score: score_for(category, observation),
            rank: 0,
        };
        rows.push((entry, player.age.total_days()));
    }

    // 동점이면 어린 선수 우선, 그 다음은 id
    rows.sort_by_key(|(entry, age_days)| (entry.category, entry.score, *age_days, entry.player_id));

    rows.iter()
        .enumerate()
        .map(|(position, (entry, _))| RankedEntry { rank: position, ..*entry })
        .collect()
}
