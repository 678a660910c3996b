use super::assignment::Assignment;
use crate::lineup::SlotPlan;
use crate::models::{PlayerId, SkillKey};
use crate::ranking::{Category, RankedEntry};
use serde::{Deserialize, Serialize};

/// Per-skill top training candidate, as considered during focus-player
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusCandidate {
    pub player_id: PlayerId,
    pub skill: SkillKey,
    pub category: Category,
    pub score: i16,
    pub age_days: u32,
}

/// Diagnostic trace of one optimizer call.
///
/// Captures everything needed to reconstruct the "why" of every
/// placement. Reproducible byte-for-byte from the same inputs; the
/// serialization determinism test relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerDebug {
    pub focus_player_id: PlayerId,
    pub primary_skill: SkillKey,
    pub secondary_skill: SkillKey,
    /// True when the (focus, primary, secondary) triple came from
    /// auto-selection unmodified; a user override clears it.
    pub auto_selected: bool,
    pub focus_candidates: Vec<FocusCandidate>,
    pub primary_ranking: Vec<RankedEntry>,
    pub secondary_ranking: Vec<RankedEntry>,
    pub plan: SlotPlan,
}

/// Assignment plus its diagnostic trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupResult {
    pub assignment: Assignment,
    pub debug: OptimizerDebug,
}

impl LineupResult {
    /// All-slots-empty result for the trivial roster.
    pub(crate) fn empty(
        focus_player_id: PlayerId,
        primary: SkillKey,
        secondary: SkillKey,
        auto_selected: bool,
    ) -> Self {
        LineupResult {
            assignment: Assignment::new(),
            debug: OptimizerDebug {
                focus_player_id,
                primary_skill: primary,
                secondary_skill: secondary,
                auto_selected,
                focus_candidates: Vec::new(),
                primary_ranking: Vec::new(),
                secondary_ranking: Vec::new(),
                plan: SlotPlan::for_skills(primary, secondary),
            },
        }
    }
}
