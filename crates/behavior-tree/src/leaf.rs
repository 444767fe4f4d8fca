//! Leaf nodes over blackboard stacks and slots.
//!
//! These are the generic building blocks leaves use to move items between
//! stacks and single-value slots of the context. Every node is generic over
//! the item type `T` and addresses the context through [`Stack`] and
//! [`Slot`] handles.
//!
//! | Node             | Verdict                                      |
//! |------------------|----------------------------------------------|
//! | [`PushToStack`]  | Always `Success`                             |
//! | [`GetStack`]     | Always `Success`                             |
//! | [`PopFromStack`] | `Failure` if the stack is empty              |
//! | [`StackIsEmpty`] | `Success` iff the stack is empty             |
//! | [`SetVariable`]  | Always `Success`                             |
//! | [`IsNull`]       | `Success` iff the slot is unset              |
//!
//! Reading a value out of an unset slot is a contract violation and yields
//! [`TreeError::UnsetSlot`].

use std::fmt;

use crate::{Behavior, Result, Slot, Stack, Status, TreeError};

/// Pushes the value of `item` onto `stack`.
pub struct PushToStack<C, T> {
    item: Slot<C, T>,
    stack: Stack<C, T>,
}

impl<C, T> PushToStack<C, T> {
    pub fn new(item: Slot<C, T>, stack: Stack<C, T>) -> Self {
        Self { item, stack }
    }
}

impl<C, T: Clone> Behavior<C> for PushToStack<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let value = self.item.get(ctx).clone().ok_or(TreeError::UnsetSlot {
            node: "PushToStack",
            slot: self.item.name(),
        })?;
        self.stack.get(ctx).push(value);
        Ok(Status::Success)
    }
}

/// Replaces `stack` with a copy of `source`, optionally topped with one
/// extra item.
///
/// The copy is a snapshot: changing `source` afterwards leaves `stack`
/// untouched.
pub struct GetStack<C, T> {
    stack: Stack<C, T>,
    source: Stack<C, T>,
    extra: Option<T>,
}

impl<C, T> GetStack<C, T> {
    pub fn new(stack: Stack<C, T>, source: Stack<C, T>) -> Self {
        Self {
            stack,
            source,
            extra: None,
        }
    }

    /// Pushes `item` on top of every fresh copy.
    pub fn with_extra(mut self, item: T) -> Self {
        self.extra = Some(item);
        self
    }
}

impl<C, T: Clone + Send + Sync> Behavior<C> for GetStack<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let mut snapshot = self.source.get(ctx).clone();
        if let Some(extra) = &self.extra {
            snapshot.push(extra.clone());
        }
        *self.stack.get(ctx) = snapshot;
        Ok(Status::Success)
    }
}

/// Pops the top of `stack` into `item`.
///
/// Fails without touching `item` when the stack is empty.
pub struct PopFromStack<C, T> {
    stack: Stack<C, T>,
    item: Slot<C, T>,
}

impl<C, T> PopFromStack<C, T> {
    pub fn new(stack: Stack<C, T>, item: Slot<C, T>) -> Self {
        Self { stack, item }
    }
}

impl<C, T: fmt::Display> Behavior<C> for PopFromStack<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let Some(value) = self.stack.get(ctx).pop() else {
            return Ok(Status::Failure);
        };
        tracing::info!(
            stack = self.stack.name(),
            slot = self.item.name(),
            "trying {value}"
        );
        *self.item.get(ctx) = Some(value);
        Ok(Status::Success)
    }
}

/// Succeeds iff `stack` is empty.
pub struct StackIsEmpty<C, T> {
    stack: Stack<C, T>,
}

impl<C, T> StackIsEmpty<C, T> {
    pub fn new(stack: Stack<C, T>) -> Self {
        Self { stack }
    }
}

impl<C, T> Behavior<C> for StackIsEmpty<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        Ok(Status::from(self.stack.get(ctx).is_empty()))
    }
}

/// Copies the value of `source` into `variable`.
///
/// An unset `source` is reported as [`TreeError::UnsetSlot`] and `variable`
/// keeps its previous value.
pub struct SetVariable<C, T> {
    variable: Slot<C, T>,
    source: Slot<C, T>,
}

impl<C, T> SetVariable<C, T> {
    pub fn new(variable: Slot<C, T>, source: Slot<C, T>) -> Self {
        Self { variable, source }
    }
}

impl<C, T: Clone + fmt::Display> Behavior<C> for SetVariable<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let value = self.source.get(ctx).clone().ok_or(TreeError::UnsetSlot {
            node: "SetVariable",
            slot: self.source.name(),
        })?;
        tracing::info!(
            variable = self.variable.name(),
            source = self.source.name(),
            "{} is now {value}",
            self.variable.name()
        );
        *self.variable.get(ctx) = Some(value);
        Ok(Status::Success)
    }
}

/// Succeeds iff `slot` holds no value.
pub struct IsNull<C, T> {
    slot: Slot<C, T>,
}

impl<C, T> IsNull<C, T> {
    pub fn new(slot: Slot<C, T>) -> Self {
        Self { slot }
    }
}

impl<C, T> Behavior<C> for IsNull<C, T> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        Ok(Status::from(self.slot.get(ctx).is_none()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Board {
        stack: Vec<u32>,
        source: Vec<u32>,
        current: Option<u32>,
        used: Option<u32>,
    }

    fn stack(board: &mut Board) -> &mut Vec<u32> {
        &mut board.stack
    }

    fn source(board: &mut Board) -> &mut Vec<u32> {
        &mut board.source
    }

    fn current(board: &mut Board) -> &mut Option<u32> {
        &mut board.current
    }

    fn used(board: &mut Board) -> &mut Option<u32> {
        &mut board.used
    }

    const STACK: Stack<Board, u32> = Stack::new("stack", stack);
    const SOURCE: Stack<Board, u32> = Stack::new("source", source);
    const CURRENT: Slot<Board, u32> = Slot::new("current", current);
    const USED: Slot<Board, u32> = Slot::new("used", used);

    #[test]
    fn push_to_stack_pushes_slot_value() {
        let push = PushToStack::new(CURRENT, STACK);
        let mut board = Board {
            stack: vec![1],
            current: Some(7),
            ..Board::default()
        };

        assert_eq!(push.tick(&mut board), Ok(Status::Success));
        assert_eq!(board.stack, [1, 7]);
        assert_eq!(board.current, Some(7));
    }

    #[test]
    fn push_to_stack_from_unset_slot_is_an_error() {
        let push = PushToStack::new(CURRENT, STACK);
        let mut board = Board::default();

        assert_eq!(
            push.tick(&mut board),
            Err(TreeError::UnsetSlot {
                node: "PushToStack",
                slot: "current"
            })
        );
        assert!(board.stack.is_empty());
    }

    #[test]
    fn get_stack_takes_a_snapshot() {
        let get = GetStack::new(STACK, SOURCE);
        let mut board = Board {
            stack: vec![99],
            source: vec![3, 2, 1],
            ..Board::default()
        };

        assert_eq!(get.tick(&mut board), Ok(Status::Success));
        assert_eq!(board.stack, [3, 2, 1]);

        board.source.push(0);
        board.source.remove(0);
        assert_eq!(board.stack, [3, 2, 1]);
    }

    #[test]
    fn get_stack_pushes_extra_on_top() {
        let get = GetStack::new(STACK, SOURCE).with_extra(42);
        let mut board = Board {
            source: vec![1, 2],
            ..Board::default()
        };

        assert_eq!(get.tick(&mut board), Ok(Status::Success));
        assert_eq!(board.stack, [1, 2, 42]);
        assert_eq!(board.source, [1, 2]);
    }

    #[test]
    fn pop_from_empty_stack_fails_without_touching_slot() {
        let pop = PopFromStack::new(STACK, CURRENT);
        let mut board = Board {
            current: Some(5),
            ..Board::default()
        };

        assert_eq!(pop.tick(&mut board), Ok(Status::Failure));
        assert_eq!(board.current, Some(5));
    }

    #[test]
    fn pop_from_stack_moves_top_into_slot() {
        let pop = PopFromStack::new(STACK, CURRENT);
        let mut board = Board {
            stack: vec![3, 2, 1],
            ..Board::default()
        };

        assert_eq!(pop.tick(&mut board), Ok(Status::Success));
        assert_eq!(board.current, Some(1));
        assert_eq!(board.stack, [3, 2]);
    }

    #[test]
    fn stack_is_empty_is_a_pure_check() {
        let check = StackIsEmpty::new(STACK);
        let mut board = Board::default();
        assert_eq!(check.tick(&mut board), Ok(Status::Success));

        board.stack.push(1);
        assert_eq!(check.tick(&mut board), Ok(Status::Failure));
        assert_eq!(board.stack, [1]);
    }

    #[test]
    fn set_variable_copies_source() {
        let set = SetVariable::new(USED, CURRENT);
        let mut board = Board {
            current: Some(3),
            ..Board::default()
        };

        assert_eq!(set.tick(&mut board), Ok(Status::Success));
        assert_eq!(board.used, Some(3));
        assert_eq!(board.current, Some(3));
    }

    #[test]
    fn set_variable_from_unset_source_is_an_error() {
        let set = SetVariable::new(USED, CURRENT);
        let mut board = Board {
            used: Some(9),
            ..Board::default()
        };

        assert_eq!(
            set.tick(&mut board),
            Err(TreeError::UnsetSlot {
                node: "SetVariable",
                slot: "current"
            })
        );
        assert_eq!(board.used, Some(9));
    }

    #[test]
    fn is_null_checks_slot() {
        let check = IsNull::new(USED);
        let mut board = Board::default();
        assert_eq!(check.tick(&mut board), Ok(Status::Success));

        board.used = Some(1);
        assert_eq!(check.tick(&mut board), Ok(Status::Failure));
    }
}
