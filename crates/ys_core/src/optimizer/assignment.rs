use crate::lineup::Slot;
use crate::models::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot -> player mapping produced by an optimizer.
///
/// A player appears in at most one slot; the only insertion point is the
/// fill routine, which consults its used-player set before calling
/// [`Assignment::insert`], so injectivity holds by construction. Unfilled
/// slots are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    slots: BTreeMap<Slot, PlayerId>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, slot: Slot, player: PlayerId) {
        self.slots.insert(slot, player);
    }

    pub fn player_at(&self, slot: Slot) -> Option<PlayerId> {
        self.slots.get(&slot).copied()
    }

    pub fn slot_of(&self, player: PlayerId) -> Option<Slot> {
        self.slots.iter().find(|(_, &id)| id == player).map(|(&slot, _)| slot)
    }

    pub fn assigned_players(&self) -> Vec<PlayerId> {
        self.slots.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, PlayerId)> + '_ {
        self.slots.iter().map(|(&slot, &player)| (slot, player))
    }

    /// Filled field slots, in slot order.
    pub fn field(&self) -> Vec<(Slot, PlayerId)> {
        self.iter().filter(|(slot, _)| !slot.is_bench()).collect()
    }

    /// Filled bench slots, in slot order.
    pub fn bench(&self) -> Vec<(Slot, PlayerId)> {
        self.iter().filter(|(slot, _)| slot.is_bench()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_split_field_and_bench() {
        let mut assignment = Assignment::new();
        assignment.insert(Slot::Keeper, 10);
        assignment.insert(Slot::BenchKeeper, 20);
        assignment.insert(Slot::ForwardLeft, 30);

        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.field().len(), 2);
        assert_eq!(assignment.bench(), vec![(Slot::BenchKeeper, 20)]);
        assert_eq!(assignment.player_at(Slot::Keeper), Some(10));
        assert_eq!(assignment.player_at(Slot::WingerLeft), None);
        assert_eq!(assignment.slot_of(30), Some(Slot::ForwardLeft));
        assert_eq!(assignment.slot_of(99), None);
    }
}
