//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`RandomSelector`] (OR logic in a fresh random order on every tick).

use rand::seq::SliceRandom;

use crate::{Behavior, Result, Status, rng};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation, so an
/// empty sequence succeeds.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    /// Appends every child of `children`, preserving their order.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Box<dyn Behavior<C>>>) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        // Execute children in order until one fails
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => continue,                   // Move to next child
                Status::Failure => return Ok(Status::Failure), // Short-circuit
            }
        }
        // All children succeeded
        Ok(Status::Success)
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation, so an
/// empty selector fails.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    /// Appends every child of `children`, preserving their order.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Box<dyn Behavior<C>>>) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        // Try children in order until one succeeds
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => return Ok(Status::Success), // Short-circuit
                Status::Failure => continue,                   // Try next child
            }
        }
        // All children failed
        Ok(Status::Failure)
    }
}

/// Executes child behaviors in a random order until one succeeds.
///
/// # Semantics
///
/// Same policy as [`Selector`], but every tick visits the children in a
/// freshly shuffled order drawn from the process-wide generator in
/// [`rng`](crate::rng). The stored child order is never changed.
///
/// Useful when there is no preferred order among equally valid options.
pub struct RandomSelector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> RandomSelector<C> {
    /// Creates a new random selector with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    /// Appends every child of `children`.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Box<dyn Behavior<C>>>) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Default for RandomSelector<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for RandomSelector<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let mut order: Vec<usize> = (0..self.children.len()).collect();
        // The lock is released before any child runs; children may draw too.
        rng::with_rng(|rng| order.shuffle(rng));

        for index in order {
            if self.children[index].tick(ctx)?.is_success() {
                return Ok(Status::Success);
            }
        }
        Ok(Status::Failure)
    }
}
