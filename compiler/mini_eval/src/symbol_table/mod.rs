//! Fixed-capacity symbol table.
//!
//! Names and values live together in one slot sequence whose length is the
//! table capacity. A slot is either empty or holds exactly one binding, and a
//! name occupies at most one slot. Slots are filled lowest-index first and are
//! never cleared during a run; [`SymbolTable::clear`] resets the whole table
//! between runs.

use smallvec::SmallVec;
use std::fmt;

use crate::errors::{EvalError, EvalResult};

/// Number of slots in the interpreter's symbol table.
pub const SYMBOL_CAPACITY: usize = 5;

/// Position of a populated (or just-allocated) slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A name/value pair held in one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    name: String,
    value: i32,
}

impl Binding {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Mapping from symbol name to integer value with a fixed number of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    slots: SmallVec<[Option<Binding>; SYMBOL_CAPACITY]>,
}

impl SymbolTable {
    /// Create an empty table with [`SYMBOL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(SYMBOL_CAPACITY)
    }

    /// Create an empty table with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        SymbolTable {
            slots: SmallVec::from_elem(None, capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Find the slot bound to `name`.
    pub fn find(&self, name: &str) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|b| b.name == name))
            .map(SlotIndex)
    }

    /// First empty slot, or `None` when the table is full.
    pub fn allocate_slot(&self) -> Option<SlotIndex> {
        self.slots.iter().position(Option::is_none).map(SlotIndex)
    }

    /// Overwrite the value of a populated slot.
    pub fn set(&mut self, index: SlotIndex, value: i32) {
        let slot = &mut self.slots[index.0];
        debug_assert!(slot.is_some(), "set on empty slot {}", index.0);
        if let Some(binding) = slot {
            binding.value = value;
        }
    }

    /// Populate a slot obtained from [`allocate_slot`](Self::allocate_slot).
    pub fn bind(&mut self, index: SlotIndex, name: &str, value: i32) {
        debug_assert!(
            self.slots[index.0].is_none(),
            "bind on occupied slot {}",
            index.0
        );
        debug_assert!(self.find(name).is_none(), "duplicate symbol `{name}`");
        self.slots[index.0] = Some(Binding {
            name: name.to_owned(),
            value,
        });
    }

    /// Value of a populated slot.
    ///
    /// Indices come from [`find`](Self::find) or [`upsert`](Self::upsert), so
    /// an empty slot here is a caller bug; release builds read it as zero.
    pub fn get(&self, index: SlotIndex) -> i32 {
        let slot = &self.slots[index.0];
        debug_assert!(slot.is_some(), "get on empty slot {}", index.0);
        slot.as_ref().map_or(0, Binding::value)
    }

    /// Value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.find(name).map(|index| self.get(index))
    }

    /// Bind `name` to `value`, reusing its slot when it already exists.
    ///
    /// Fails with [`EvalError::SymbolTableFull`] only when `name` is new and
    /// no slot is free; the table is left untouched in that case.
    pub fn upsert(&mut self, name: &str, value: i32) -> EvalResult<SlotIndex> {
        if let Some(index) = self.find(name) {
            self.set(index, value);
            return Ok(index);
        }
        let Some(index) = self.allocate_slot() else {
            return Err(EvalError::SymbolTableFull {
                name: name.to_owned(),
                capacity: self.capacity(),
            });
        };
        self.bind(index, name, value);
        Ok(index)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Populated bindings in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.slots.iter().flatten()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per slot, empty slots included.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(binding) => writeln!(f, "[{index}] {} = {}", binding.name, binding.value)?,
                None => writeln!(f, "[{index}] <empty>")?,
            }
        }
        Ok(())
    }
}
