//! Environment: the name-resolution half of the environment model.
//!
//! An `Environment` is an immutable `Name -> Slot` map. Extending it
//! allocates a cell and returns a *new* environment; the original is left
//! untouched, which is what lets a closure keep the exact scope it was
//! created in. The map is an `im::HashMap`, so cloning (capturing) shares
//! structure instead of copying the table.

use im::HashMap;
use inter_ir::Name;

use crate::{Heap, Slot, Value};

/// Persistent mapping from identifier to heap cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<Name, Slot>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell `name` currently resolves to.
    #[inline]
    pub fn resolve(&self, name: Name) -> Option<Slot> {
        self.bindings.get(&name).copied()
    }

    /// The current value of the cell `name` resolves to.
    #[inline]
    pub fn lookup<'h>(&self, name: Name, heap: &'h Heap) -> Option<&'h Value> {
        self.resolve(name).map(|slot| heap.get(slot))
    }

    /// Bind `name` to a fresh cell holding `value`.
    ///
    /// Always allocates, even if `name` is already bound: the old cell stays
    /// reachable from every environment created before this call.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value, heap: &mut Heap) -> Self {
        let slot = heap.alloc(value);
        Environment {
            bindings: self.bindings.update(name, slot),
        }
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Number of visible names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
