//! Slot/skill topology
//!
//! Fixed lineup positions and the static mapping from each trainable
//! skill to the slots that train it. The per-session `SlotPlan` is a pure
//! function of the chosen primary/secondary skill pair.

pub mod slots;

pub use slots::{full_training_slots, half_training_slots, Slot, SlotPlan};
