//! Greedy slot-filling machinery shared by every optimizer variant.

use super::assignment::Assignment;
use super::auto_select::candidate_board;
use super::debug::{LineupResult, OptimizerDebug};
use super::rating_aware::PositionRatings;
use crate::lineup::{Slot, SlotPlan};
use crate::models::{Player, PlayerId};
use crate::ranking::{rank, Category, RankedEntry, TrainingPolicy};
use fxhash::{FxHashMap, FxHashSet};

/// Which slot the focus player goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusSlotRule {
    /// Best simultaneous coverage of both target skills.
    BestCoverage,
    /// A full-weight primary slot, so the next observation cycle reports
    /// the primary skill's current value.
    RevealPrimary,
    /// A full-weight secondary slot, so the next observation cycle
    /// reports the secondary skill's ceiling.
    RevealSecondary,
}

pub(crate) fn choose_focus_slot(plan: &SlotPlan, rule: FocusSlotRule) -> Option<Slot> {
    match rule {
        FocusSlotRule::RevealPrimary => plan.primary_full.first().copied(),
        FocusSlotRule::RevealSecondary => plan.secondary_full.first().copied(),
        FocusSlotRule::BestCoverage => plan
            .primary_full
            .iter()
            .find(|slot| plan.secondary_full.contains(slot))
            .or_else(|| plan.primary_full.iter().find(|slot| plan.secondary_half.contains(slot)))
            .or_else(|| plan.primary_full.first())
            .or_else(|| plan.primary_half.first())
            .copied(),
    }
}

/// Skill-rank standing of one player in the fallback pool, used when the
/// rating-aware variant breaks ties. Lower compares better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FallbackTier {
    list: u8,
    category: Category,
    score: i16,
}

const UNRANKED: FallbackTier = FallbackTier { list: 2, category: Category::Cat4, score: 0 };

/// Threads the owned used-player set through every placement; the only
/// writer of [`Assignment`].
pub(crate) struct Filler<'a> {
    plan: &'a SlotPlan,
    policy: TrainingPolicy,
    by_id: FxHashMap<PlayerId, &'a Player>,
    assignment: Assignment,
    used: FxHashSet<PlayerId>,
}

impl<'a> Filler<'a> {
    pub fn new(players: &'a [Player], plan: &'a SlotPlan, policy: TrainingPolicy) -> Self {
        let by_id = players.iter().map(|p| (p.id, p)).collect();
        Filler {
            plan,
            policy,
            by_id,
            assignment: Assignment::new(),
            used: FxHashSet::default(),
        }
    }

    fn is_open(&self, slot: Slot) -> bool {
        self.assignment.player_at(slot).is_none()
    }

    /// With strict policy, a player already at the ceiling for a skill
    /// may not occupy a slot training that skill, not even as a last
    /// resort.
    fn barred(&self, player: PlayerId, slot: Slot) -> bool {
        if self.policy.allow_training_until_maxed_out {
            return false;
        }
        let Some(p) = self.by_id.get(&player) else {
            return false;
        };
        (self.plan.trains_primary(slot) && p.skills.get(self.plan.primary_skill).is_exhausted())
            || (self.plan.trains_secondary(slot)
                && p.skills.get(self.plan.secondary_skill).is_exhausted())
    }

    pub fn place(&mut self, slot: Slot, player: PlayerId) -> bool {
        if !self.is_open(slot) || self.used.contains(&player) {
            return false;
        }
        self.assignment.insert(slot, player);
        self.used.insert(player);
        true
    }

    /// Fill each still-open slot with the best unused Cat1..Cat4 entry of
    /// `ranking`.
    pub fn fill_from_ranking(&mut self, slots: &[Slot], ranking: &[RankedEntry]) {
        for &slot in slots {
            if !self.is_open(slot) {
                continue;
            }
            let next = ranking
                .iter()
                .find(|e| e.category.is_trainable() && !self.used.contains(&e.player_id));
            if let Some(entry) = next {
                self.place(slot, entry.player_id);
            }
        }
    }

    /// Fill every remaining slot from `order`, first eligible player
    /// wins.
    pub fn fill_remaining(&mut self, order: &[PlayerId]) {
        for slot in Slot::ALL {
            if !self.is_open(slot) {
                continue;
            }
            for &player in order {
                if self.used.contains(&player) || self.barred(player, slot) {
                    continue;
                }
                self.place(slot, player);
                break;
            }
        }
    }

    /// Like [`Self::fill_remaining`], but equal skill-rank standing is
    /// broken by the observed per-(player, slot) performance rating,
    /// higher first.
    pub fn fill_remaining_with_ratings(
        &mut self,
        order: &[PlayerId],
        tiers: &FxHashMap<PlayerId, FallbackTier>,
        ratings: &PositionRatings,
    ) {
        for slot in Slot::ALL {
            if !self.is_open(slot) {
                continue;
            }
            let mut best: Option<(FallbackTier, f32, u32, PlayerId)> = None;
            for &player in order {
                if self.used.contains(&player) || self.barred(player, slot) {
                    continue;
                }
                let tier = tiers.get(&player).copied().unwrap_or(UNRANKED);
                let rating = ratings.get(player, slot).unwrap_or(0.0);
                let age_days =
                    self.by_id.get(&player).map(|p| p.age.total_days()).unwrap_or(u32::MAX);
                let candidate = (tier, rating, age_days, player);
                let better = match best {
                    None => true,
                    Some(current) => beats(&candidate, &current),
                };
                if better {
                    best = Some(candidate);
                }
            }
            if let Some((_, _, _, player)) = best {
                self.place(slot, player);
            }
        }
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}

fn beats(a: &(FallbackTier, f32, u32, PlayerId), b: &(FallbackTier, f32, u32, PlayerId)) -> bool {
    match a.0.cmp(&b.0) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => {
            match a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => (a.2, a.3) < (b.2, b.3),
            }
        }
    }
}

/// General-purpose fallback order: primary ranking, then secondary
/// ranking, then the rest of the roster in snapshot order.
fn fallback_order(
    players: &[Player],
    primary_ranking: &[RankedEntry],
    secondary_ranking: &[RankedEntry],
) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = Vec::with_capacity(players.len());
    let mut seen = FxHashSet::default();
    let ranked = primary_ranking.iter().chain(secondary_ranking).map(|e| e.player_id);
    for player in ranked.chain(players.iter().map(|p| p.id)) {
        if seen.insert(player) {
            order.push(player);
        }
    }
    order
}

fn fallback_tiers(
    primary_ranking: &[RankedEntry],
    secondary_ranking: &[RankedEntry],
) -> FxHashMap<PlayerId, FallbackTier> {
    let mut tiers = FxHashMap::default();
    for (list, ranking) in [(0u8, primary_ranking), (1u8, secondary_ranking)] {
        for entry in ranking {
            tiers.entry(entry.player_id).or_insert(FallbackTier {
                list,
                category: entry.category,
                score: entry.score,
            });
        }
    }
    tiers
}

/// Optimizer core shared by every variant: rank both skills, place the
/// focus player, run the greedy fill passes, emit the trace.
pub(crate) fn build_lineup(
    players: &[Player],
    focus: &Player,
    plan: &SlotPlan,
    auto_selected: bool,
    policy: &TrainingPolicy,
    rule: FocusSlotRule,
    ratings: Option<&PositionRatings>,
) -> LineupResult {
    let primary_ranking = rank(players, plan.primary_skill, policy);
    let secondary_ranking = rank(players, plan.secondary_skill, policy);

    let mut filler = Filler::new(players, plan, *policy);

    if let Some(slot) = choose_focus_slot(plan, rule) {
        filler.place(slot, focus.id);
        log::debug!("focus player {} -> {:?} ({:?})", focus.id, slot, rule);
    }

    // Full-weight slots first, primary skill outranking secondary.
    filler.fill_from_ranking(&plan.primary_full, &primary_ranking);
    filler.fill_from_ranking(&plan.secondary_full, &secondary_ranking);
    filler.fill_from_ranking(&plan.primary_half, &primary_ranking);
    filler.fill_from_ranking(&plan.secondary_half, &secondary_ranking);

    let order = fallback_order(players, &primary_ranking, &secondary_ranking);
    match ratings {
        Some(ratings) => {
            let tiers = fallback_tiers(&primary_ranking, &secondary_ranking);
            filler.fill_remaining_with_ratings(&order, &tiers, ratings);
        }
        None => filler.fill_remaining(&order),
    }

    let assignment = filler.into_assignment();
    log::debug!(
        "lineup for focus {}: {}/{} slots filled",
        focus.id,
        assignment.len(),
        Slot::ALL.len()
    );

    LineupResult {
        assignment,
        debug: OptimizerDebug {
            focus_player_id: focus.id,
            primary_skill: plan.primary_skill,
            secondary_skill: plan.secondary_skill,
            auto_selected,
            focus_candidates: candidate_board(players, policy),
            primary_ranking,
            secondary_ranking,
            plan: plan.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Age, SkillKey, SkillObservation, SkillSheet};

    fn plain_player(id: PlayerId) -> Player {
        Player {
            id,
            name: format!("P{id}"),
            age: Age::new(15, 0),
            specialty: None,
            skills: SkillSheet::default(),
        }
    }

    #[test]
    fn test_place_rejects_taken_slot_and_used_player() {
        let players = vec![plain_player(1), plain_player(2)];
        let plan = SlotPlan::for_skills(SkillKey::Scoring, SkillKey::Passing);
        let mut filler = Filler::new(&players, &plan, TrainingPolicy::default());

        assert!(filler.place(Slot::Keeper, 1));
        assert!(!filler.place(Slot::Keeper, 2), "slot already taken");
        assert!(!filler.place(Slot::ForwardLeft, 1), "player already placed");
        assert!(filler.place(Slot::ForwardLeft, 2));
    }

    #[test]
    fn test_best_coverage_prefers_dual_full_slot() {
        // Scoring full = forwards; Passing full includes forwards too
        let plan = SlotPlan::for_skills(SkillKey::Scoring, SkillKey::Passing);
        let slot = choose_focus_slot(&plan, FocusSlotRule::BestCoverage).unwrap();
        assert_eq!(slot, Slot::ForwardRight);

        // Keeper never overlaps an outfield skill: plain primary full slot
        let plan = SlotPlan::for_skills(SkillKey::Keeper, SkillKey::Scoring);
        let slot = choose_focus_slot(&plan, FocusSlotRule::BestCoverage).unwrap();
        assert_eq!(slot, Slot::Keeper);
    }

    #[test]
    fn test_full_half_overlap_falls_back_to_half_coverage() {
        // Winger full = wingers; Playmaking half = wingers as well, so a
        // winger slot covers primary at full and secondary at half.
        let plan = SlotPlan::for_skills(SkillKey::Winger, SkillKey::Playmaking);
        let slot = choose_focus_slot(&plan, FocusSlotRule::BestCoverage).unwrap();
        assert_eq!(slot, Slot::WingerRight);
    }

    #[test]
    fn test_fallback_order_ranked_before_rest() {
        let mut a = plain_player(1);
        a.skills.set(SkillKey::Scoring, SkillObservation::observe(Some(2), Some(8)));
        let b = plain_player(2);
        let mut c = plain_player(3);
        c.skills.set(SkillKey::Passing, SkillObservation::observe(Some(1), None));
        let players = vec![b.clone(), a.clone(), c.clone()];

        let policy = TrainingPolicy::default();
        let primary = rank(&players, SkillKey::Scoring, &policy);
        let secondary = rank(&players, SkillKey::Passing, &policy);
        let order = fallback_order(&players, &primary, &secondary);

        // Ranked lists are whole-roster, so the order is the primary
        // ranking followed by unseen ids only.
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], 1, "best scoring candidate leads");
    }
}
