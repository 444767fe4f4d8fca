//! Handles to blackboard slots.
//!
//! The blackboard is whatever context type `C` the caller ticks the tree
//! with. Leaves never store references into it; they store a handle holding
//! a field accessor and resolve it against the context passed to every
//! [`tick`](crate::Behavior::tick). A write made by one leaf is therefore
//! visible to the very next leaf of the same evaluation.
//!
//! ```rust
//! use behavior_tree::{Slot, Stack};
//!
//! struct Board {
//!     doors: Vec<u32>,
//!     current: Option<u32>,
//! }
//!
//! fn doors(board: &mut Board) -> &mut Vec<u32> {
//!     &mut board.doors
//! }
//!
//! fn current(board: &mut Board) -> &mut Option<u32> {
//!     &mut board.current
//! }
//!
//! let doors = Stack::new("doors", doors);
//! let current = Slot::new("current", current);
//! # let _ = (doors, current);
//! ```

/// Handle to a stack of `T` stored in the context `C`.
///
/// The top of the stack is the end of the vector.
pub struct Stack<C, T> {
    name: &'static str,
    access: fn(&mut C) -> &mut Vec<T>,
}

impl<C, T> Stack<C, T> {
    pub const fn new(name: &'static str, access: fn(&mut C) -> &mut Vec<T>) -> Self {
        Self { name, access }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn get<'a>(&self, ctx: &'a mut C) -> &'a mut Vec<T> {
        (self.access)(ctx)
    }
}

impl<C, T> Clone for Stack<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for Stack<C, T> {}

/// Handle to a single optional `T` stored in the context `C`.
pub struct Slot<C, T> {
    name: &'static str,
    access: fn(&mut C) -> &mut Option<T>,
}

impl<C, T> Slot<C, T> {
    pub const fn new(name: &'static str, access: fn(&mut C) -> &mut Option<T>) -> Self {
        Self { name, access }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn get<'a>(&self, ctx: &'a mut C) -> &'a mut Option<T> {
        (self.access)(ctx)
    }
}

impl<C, T> Clone for Slot<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for Slot<C, T> {}
