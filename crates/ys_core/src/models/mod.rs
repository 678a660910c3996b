//! Roster data model
//!
//! This module contains the entities the advisor consumes:
//! - Player identity, two-field age and optional specialty
//! - The seven trainable skills and their observation states
//! - SkillSheet: one observation per trainable skill

pub mod player;
pub mod skill;

pub use player::{Age, Player, PlayerId, Specialty, DAYS_PER_YEAR, PROMOTION_AGE_YEARS};
pub use skill::{SkillKey, SkillObservation, SkillSheet};
