//! Lineup optimizers
//!
//! Four variants over one shared greedy core:
//! - focus: maximize dual training coverage around the focus player
//! - rating_aware: same, with observed performance breaking fallback ties
//! - reveal: bend the focus slot toward surfacing a missing observation
//! - auto_select: pick the (focus, primary, secondary) triple when the
//!   user has not

pub mod assignment;
pub mod auto_select;
pub mod debug;
mod fill;
pub mod focus;
pub mod rating_aware;
pub mod reveal;

pub use assignment::Assignment;
pub use auto_select::{auto_select, AutoSelection};
pub use debug::{FocusCandidate, LineupResult, OptimizerDebug};
pub use focus::optimize_for_focus;
pub use rating_aware::{optimize_with_ratings, PositionRatings};
pub use reveal::{reveal_primary_current, reveal_secondary_max};
