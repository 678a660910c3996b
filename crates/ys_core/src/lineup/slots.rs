use crate::models::SkillKey;
use serde::{Deserialize, Serialize};

/// One fixed lineup position. 11 field slots in a 4-4-2 shape plus six
/// bench slots: one per broad skill family and one wildcard. Bench slots
/// train nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Keeper,
    WingBackRight,
    CentralDefenderRight,
    CentralDefenderLeft,
    WingBackLeft,
    WingerRight,
    InnerMidRight,
    InnerMidLeft,
    WingerLeft,
    ForwardRight,
    ForwardLeft,
    BenchKeeper,
    BenchDefender,
    BenchMidfielder,
    BenchWinger,
    BenchForward,
    BenchExtra,
}

impl Slot {
    pub const FIELD: [Slot; 11] = [
        Slot::Keeper,
        Slot::WingBackRight,
        Slot::CentralDefenderRight,
        Slot::CentralDefenderLeft,
        Slot::WingBackLeft,
        Slot::WingerRight,
        Slot::InnerMidRight,
        Slot::InnerMidLeft,
        Slot::WingerLeft,
        Slot::ForwardRight,
        Slot::ForwardLeft,
    ];

    pub const BENCH: [Slot; 6] = [
        Slot::BenchKeeper,
        Slot::BenchDefender,
        Slot::BenchMidfielder,
        Slot::BenchWinger,
        Slot::BenchForward,
        Slot::BenchExtra,
    ];

    pub const ALL: [Slot; 17] = [
        Slot::Keeper,
        Slot::WingBackRight,
        Slot::CentralDefenderRight,
        Slot::CentralDefenderLeft,
        Slot::WingBackLeft,
        Slot::WingerRight,
        Slot::InnerMidRight,
        Slot::InnerMidLeft,
        Slot::WingerLeft,
        Slot::ForwardRight,
        Slot::ForwardLeft,
        Slot::BenchKeeper,
        Slot::BenchDefender,
        Slot::BenchMidfielder,
        Slot::BenchWinger,
        Slot::BenchForward,
        Slot::BenchExtra,
    ];

    pub fn is_bench(&self) -> bool {
        matches!(
            self,
            Slot::BenchKeeper
                | Slot::BenchDefender
                | Slot::BenchMidfielder
                | Slot::BenchWinger
                | Slot::BenchForward
                | Slot::BenchExtra
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Slot::Keeper => "Keeper",
            Slot::WingBackRight => "Right Wing Back",
            Slot::CentralDefenderRight => "Right Central Defender",
            Slot::CentralDefenderLeft => "Left Central Defender",
            Slot::WingBackLeft => "Left Wing Back",
            Slot::WingerRight => "Right Winger",
            Slot::InnerMidRight => "Right Inner Midfielder",
            Slot::InnerMidLeft => "Left Inner Midfielder",
            Slot::WingerLeft => "Left Winger",
            Slot::ForwardRight => "Right Forward",
            Slot::ForwardLeft => "Left Forward",
            Slot::BenchKeeper => "Bench Keeper",
            Slot::BenchDefender => "Bench Defender",
            Slot::BenchMidfielder => "Bench Midfielder",
            Slot::BenchWinger => "Bench Winger",
            Slot::BenchForward => "Bench Forward",
            Slot::BenchExtra => "Bench Extra",
        }
    }
}

/// Slots that train `skill` at full weight.
pub fn full_training_slots(skill: SkillKey) -> &'static [Slot] {
    match skill {
        SkillKey::Keeper => &[Slot::Keeper],
        SkillKey::Defending => &[Slot::CentralDefenderRight, Slot::CentralDefenderLeft],
        SkillKey::Playmaking => &[Slot::InnerMidRight, Slot::InnerMidLeft],
        SkillKey::Winger => &[Slot::WingerRight, Slot::WingerLeft],
        SkillKey::Passing => &[
            Slot::InnerMidRight,
            Slot::InnerMidLeft,
            Slot::ForwardRight,
            Slot::ForwardLeft,
        ],
        SkillKey::Scoring => &[Slot::ForwardRight, Slot::ForwardLeft],
        // 세트피스는 필드 전원이 훈련
        SkillKey::SetPieces => &Slot::FIELD,
    }
}

/// Slots that train `skill` at half weight (adjacent positions).
pub fn half_training_slots(skill: SkillKey) -> &'static [Slot] {
    match skill {
        SkillKey::Keeper => &[],
        SkillKey::Defending => &[Slot::WingBackRight, Slot::WingBackLeft],
        SkillKey::Playmaking => &[Slot::WingerRight, Slot::WingerLeft],
        SkillKey::Winger => &[Slot::WingBackRight, Slot::WingBackLeft],
        SkillKey::Passing => &[Slot::WingerRight, Slot::WingerLeft],
        SkillKey::Scoring => &[Slot::InnerMidRight, Slot::InnerMidLeft],
        SkillKey::SetPieces => &[],
    }
}

/// Resolved slot topology for one (primary, secondary) skill pair.
///
/// Recomputed per optimizer call, never mutated in place. When the two
/// skills are equal the secondary sets degenerate to copies of the
/// primary sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPlan {
    pub primary_skill: SkillKey,
    pub secondary_skill: SkillKey,
    pub primary_full: Vec<Slot>,
    pub primary_half: Vec<Slot>,
    pub secondary_full: Vec<Slot>,
    pub secondary_half: Vec<Slot>,
}

impl SlotPlan {
    pub fn for_skills(primary: SkillKey, secondary: SkillKey) -> Self {
        SlotPlan {
            primary_skill: primary,
            secondary_skill: secondary,
            primary_full: full_training_slots(primary).to_vec(),
            primary_half: half_training_slots(primary).to_vec(),
            secondary_full: full_training_slots(secondary).to_vec(),
            secondary_half: half_training_slots(secondary).to_vec(),
        }
    }

    /// All slots training the primary skill, full weight first.
    pub fn primary(&self) -> Vec<Slot> {
        let mut slots = self.primary_full.clone();
        slots.extend(self.primary_half.iter().copied());
        slots
    }

    /// All slots training the secondary skill, full weight first.
    pub fn secondary(&self) -> Vec<Slot> {
        let mut slots = self.secondary_full.clone();
        slots.extend(self.secondary_half.iter().copied());
        slots
    }

    /// Union of every slot the plan trains, primary side first,
    /// duplicates removed.
    pub fn all(&self) -> Vec<Slot> {
        let mut slots = self.primary();
        for slot in self.secondary() {
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
        slots
    }

    /// Does `slot` train the primary skill (at either weight)?
    pub fn trains_primary(&self, slot: Slot) -> bool {
        self.primary_full.contains(&slot) || self.primary_half.contains(&slot)
    }

    /// Does `slot` train the secondary skill (at either weight)?
    pub fn trains_secondary(&self, slot: Slot) -> bool {
        self.secondary_full.contains(&slot) || self.secondary_half.contains(&slot)
    }
}
