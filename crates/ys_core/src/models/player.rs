use super::skill::SkillSheet;
use serde::{Deserialize, Serialize};

/// Provider-issued player identifier. Opaque; unique within one roster
/// snapshot.
pub type PlayerId = u32;

/// In-game years run on a fixed day count, not the calendar.
pub const DAYS_PER_YEAR: u16 = 112;

/// Players leave the youth squad once they turn this old.
pub const PROMOTION_AGE_YEARS: u8 = 17;

/// Two-field age: whole years plus a sub-year day counter.
///
/// Kept as two fields because promotion eligibility and the ranking
/// tiebreak both work in whole days of a fixed-length year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: u8,
    pub days: u16,
}

impl Age {
    /// Build an age, folding overflowing day counters into years.
    pub fn new(years: u8, days: u16) -> Self {
        let extra = days / DAYS_PER_YEAR;
        Age {
            years: years.saturating_add(extra as u8),
            days: days % DAYS_PER_YEAR,
        }
    }

    pub fn total_days(&self) -> u32 {
        self.years as u32 * DAYS_PER_YEAR as u32 + self.days as u32
    }

    /// Old enough to be pulled up to the senior squad.
    pub fn is_promotable(&self) -> bool {
        self.years >= PROMOTION_AGE_YEARS
    }
}

impl PartialOrd for Age {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Age {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_days().cmp(&other.total_days())
    }
}

/// Specialty tag reported by the scouting provider. Low cardinality,
/// closed set; absent when scouting has not revealed it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Technical,
    Quick,
    Powerful,
    Unpredictable,
    Head,
    Regainer,
    Support,
}

impl Specialty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Specialty::Technical => "Technical",
            Specialty::Quick => "Quick",
            Specialty::Powerful => "Powerful",
            Specialty::Unpredictable => "Unpredictable",
            Specialty::Head => "Head",
            Specialty::Regainer => "Regainer",
            Specialty::Support => "Support",
        }
    }
}

/// One youth player as seen in a roster snapshot.
///
/// Snapshots are immutable for the duration of one optimizer call; the
/// advisor never mutates a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: Age,
    #[serde(default)]
    pub specialty: Option<Specialty>,
    #[serde(default)]
    pub skills: SkillSheet,
}
