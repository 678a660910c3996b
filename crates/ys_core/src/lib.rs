//! # ys_core - Youth Squad Training Lineup Advisor
//!
//! Pure decision engine for a youth squad: given a roster snapshot with
//! partially known per-skill ratings, it ranks players by training
//! benefit, assigns them to formation slots around a focus player so two
//! chosen skills get maximum combined training exposure, and can bend a
//! lineup toward revealing a rating that is still unknown.
//!
//! ## Properties
//! - Deterministic: identical inputs always produce identical output
//! - Pure: no I/O, no shared state, no clock; safe to call concurrently
//! - Absence-aware: an unobserved rating is a first-class value, never a
//!   sentinel or an error
//!
//! The surrounding application owns data fetching, persistence and
//! rendering; this crate only maps (roster, configuration) to
//! (assignment, diagnostics).

pub mod error;
pub mod lineup;
pub mod models;
pub mod optimizer;
pub mod ranking;

pub use error::{AdvisorError, Result};
pub use lineup::{full_training_slots, half_training_slots, Slot, SlotPlan};
pub use models::{Age, Player, PlayerId, SkillKey, SkillObservation, SkillSheet, Specialty};
pub use optimizer::{
    auto_select, optimize_for_focus, optimize_with_ratings, reveal_primary_current,
    reveal_secondary_max, Assignment, AutoSelection, FocusCandidate, LineupResult, OptimizerDebug,
    PositionRatings,
};
pub use ranking::{rank, Category, RankedEntry, TrainingPolicy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
