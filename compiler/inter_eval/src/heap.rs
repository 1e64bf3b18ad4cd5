//! Cell heap: the storage half of the environment model.
//!
//! An append-only arena of mutable value cells. Cells are created by `Bind`
//! and by closure application, overwritten by `Assign`, and never removed or
//! reused while a program runs. The whole heap is dropped with its
//! `Interpreter`.

use std::fmt;

use crate::Value;

/// Index of a cell in a `Heap`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Slot(u32);

impl Slot {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Append-only store of mutable value cells.
#[derive(Clone, Debug, Default)]
pub struct Heap {
    cells: Vec<Value>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new cell holding `value`.
    ///
    /// # Panics
    /// Panics if the heap exceeds `u32::MAX` cells.
    pub fn alloc(&mut self, value: Value) -> Slot {
        let slot = Slot(
            u32::try_from(self.cells.len())
                .unwrap_or_else(|_| panic!("heap exceeded u32::MAX cells")),
        );
        tracing::trace!(?slot, %value, "allocated cell");
        self.cells.push(value);
        slot
    }

    /// Current value of a cell.
    ///
    /// # Panics
    /// Panics if `slot` was not allocated by this heap.
    #[inline]
    #[track_caller]
    pub fn get(&self, slot: Slot) -> &Value {
        &self.cells[slot.index()]
    }

    /// Overwrite a cell in place.
    ///
    /// # Panics
    /// Panics if `slot` was not allocated by this heap.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, slot: Slot, value: Value) {
        self.cells[slot.index()] = value;
    }

    /// Number of cells allocated so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
