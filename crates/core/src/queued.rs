//! Two-slot buffer separating a committed value from a pending one.
//!
//! Input may `set` the pending slot any number of times between turns; the
//! engine `consume`s it exactly once per turn. Validation of new requests is
//! done against [`QueuedValue::observe`], the value committed by the last turn.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedValue<T: Copy> {
    committed: T,
    pending: T,
}

impl<T: Copy> QueuedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            committed: value,
            pending: value,
        }
    }

    /// Queue `value` for the next turn. `observe()` is unaffected.
    pub fn set(&mut self, value: T) {
        self.pending = value;
    }

    /// The value committed by the last turn.
    pub fn observe(&self) -> T {
        self.committed
    }

    /// The value that the next `consume` will commit.
    pub fn pending(&self) -> T {
        self.pending
    }

    /// Commit the pending value and return it.
    pub fn consume(&mut self) -> T {
        self.committed = self.pending;
        self.committed
    }
}

/// Snake heading: committed for the current turn, pending for the next.
pub type DirectionQueue = QueuedValue<Direction>;
