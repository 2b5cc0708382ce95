//! Append-only record heap.

use crate::types::Position;

/// A heap slot: the record plus its tombstone flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<R> {
    /// The stored record.
    pub record: R,
    /// Set once the record has been logically deleted.
    pub deleted: bool,
}

impl<R> Slot<R> {
    /// Returns the record if the slot is live.
    pub fn live(&self) -> Option<&R> {
        (!self.deleted).then_some(&self.record)
    }
}

/// Append-only sequence of record slots.
///
/// Slots are never removed or reordered, so a [`Position`] stays valid for
/// the lifetime of the heap.
#[derive(Debug, Clone)]
pub struct Heap<R> {
    slots: Vec<Slot<R>>,
}

impl<R> Default for Heap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Heap<R> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Appends a live record and returns its position.
    pub fn append(&mut self, record: R) -> Position {
        let position = Position::new(self.slots.len());
        self.slots.push(Slot {
            record,
            deleted: false,
        });
        position
    }

    /// Returns the slot at `position`, live or not.
    pub fn slot(&self, position: Position) -> Option<&Slot<R>> {
        self.slots.get(position.as_usize())
    }

    /// Returns the record at `position` if it is in bounds and live.
    pub fn live(&self, position: Position) -> Option<&R> {
        self.slot(position).and_then(Slot::live)
    }

    /// Sets the tombstone on a live slot.
    ///
    /// Returns false if the position is out of bounds or already deleted.
    pub fn tombstone(&mut self, position: Position) -> bool {
        match self.slots.get_mut(position.as_usize()) {
            Some(slot) if !slot.deleted => {
                slot.deleted = true;
                true
            }
            _ => false,
        }
    }

    /// Returns the total number of slots, including tombstoned ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing was ever appended.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all slots with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Slot<R>)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (Position::new(i), slot))
    }
}
