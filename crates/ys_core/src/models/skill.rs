use serde::{Deserialize, Serialize};

/// The seven trainable skills. Closed set; the data provider knows no others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKey {
    Keeper,
    Defending,
    Playmaking,
    Winger,
    Passing,
    Scoring,
    SetPieces,
}

impl SkillKey {
    /// All trainable skills, in canonical order.
    pub const ALL: [SkillKey; 7] = [
        SkillKey::Keeper,
        SkillKey::Defending,
        SkillKey::Playmaking,
        SkillKey::Winger,
        SkillKey::Passing,
        SkillKey::Scoring,
        SkillKey::SetPieces,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillKey::Keeper => "Keeper",
            SkillKey::Defending => "Defending",
            SkillKey::Playmaking => "Playmaking",
            SkillKey::Winger => "Winger",
            SkillKey::Passing => "Passing",
            SkillKey::Scoring => "Scoring",
            SkillKey::SetPieces => "Set Pieces",
        }
    }
}

/// What we currently know about one skill of one player.
///
/// The data provider reveals current level and potential ceiling
/// independently, so each may be present or absent on its own. Absence is
/// a first-class state, never a sentinel number.
///
/// Levels are small non-negative integers. Younger players use a narrower
/// scale than seniors; nothing here assumes a particular ceiling, only
/// relative comparisons and the exhausted fact are ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkillObservation {
    #[default]
    Unknown,
    Current {
        value: u8,
    },
    Max {
        value: u8,
    },
    Both {
        current: u8,
        max: u8,
    },
}

impl SkillObservation {
    /// Normalize a raw per-skill reading into an observation.
    ///
    /// Total function: missing readings map to the unknown-bearing
    /// variants, there is no error path.
    pub fn observe(current: Option<u8>, max: Option<u8>) -> Self {
        match (current, max) {
            (None, None) => SkillObservation::Unknown,
            (Some(value), None) => SkillObservation::Current { value },
            (None, Some(value)) => SkillObservation::Max { value },
            (Some(current), Some(max)) => SkillObservation::Both { current, max },
        }
    }

    pub fn current(&self) -> Option<u8> {
        match self {
            SkillObservation::Current { value } => Some(*value),
            SkillObservation::Both { current, .. } => Some(*current),
            _ => None,
        }
    }

    pub fn max(&self) -> Option<u8> {
        match self {
            SkillObservation::Max { value } => Some(*value),
            SkillObservation::Both { max, .. } => Some(*max),
            _ => None,
        }
    }

    /// Current has reached the ceiling; no further training benefit.
    /// Only decidable when both sides are known.
    pub fn is_exhausted(&self) -> bool {
        match self {
            SkillObservation::Both { current, max } => current >= max,
            _ => false,
        }
    }
}

/// One observation per trainable skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillSheet {
    pub keeper: SkillObservation,
    pub defending: SkillObservation,
    pub playmaking: SkillObservation,
    pub winger: SkillObservation,
    pub passing: SkillObservation,
    pub scoring: SkillObservation,
    pub set_pieces: SkillObservation,
}

impl SkillSheet {
    pub fn get(&self, key: SkillKey) -> SkillObservation {
        match key {
            SkillKey::Keeper => self.keeper,
            SkillKey::Defending => self.defending,
            SkillKey::Playmaking => self.playmaking,
            SkillKey::Winger => self.winger,
            SkillKey::Passing => self.passing,
            SkillKey::Scoring => self.scoring,
            SkillKey::SetPieces => self.set_pieces,
        }
    }

    pub fn set(&mut self, key: SkillKey, observation: SkillObservation) {
        match key {
            SkillKey::Keeper => self.keeper = observation,
            SkillKey::Defending => self.defending = observation,
            SkillKey::Playmaking => self.playmaking = observation,
            SkillKey::Winger => self.winger = observation,
            SkillKey::Passing => self.passing = observation,
            SkillKey::Scoring => self.scoring = observation,
            SkillKey::SetPieces => self.set_pieces = observation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_maps_absence_to_unknown() {
        assert_eq!(SkillObservation::observe(None, None), SkillObservation::Unknown);
        assert_eq!(
            SkillObservation::observe(Some(3), None),
            SkillObservation::Current { value: 3 }
        );
        assert_eq!(SkillObservation::observe(None, Some(7)), SkillObservation::Max { value: 7 });
        assert_eq!(
            SkillObservation::observe(Some(2), Some(6)),
            SkillObservation::Both { current: 2, max: 6 }
        );
    }

    #[test]
    fn test_exhausted_only_when_both_known_and_equal() {
        assert!(SkillObservation::observe(Some(8), Some(8)).is_exhausted());
        assert!(!SkillObservation::observe(Some(7), Some(8)).is_exhausted());
        // 한쪽만 알면 판단 불가
        assert!(!SkillObservation::observe(Some(8), None).is_exhausted());
        assert!(!SkillObservation::observe(None, Some(8)).is_exhausted());
        assert!(!SkillObservation::Unknown.is_exhausted());
    }

    #[test]
    fn test_sheet_get_set_roundtrip() {
        let mut sheet = SkillSheet::default();
        for key in SkillKey::ALL {
            assert_eq!(sheet.get(key), SkillObservation::Unknown);
        }
        sheet.set(SkillKey::Scoring, SkillObservation::observe(Some(4), Some(8)));
        assert_eq!(sheet.get(SkillKey::Scoring).current(), Some(4));
        assert_eq!(sheet.get(SkillKey::Scoring).max(), Some(8));
        assert_eq!(sheet.get(SkillKey::Passing), SkillObservation::Unknown);
    }
}
