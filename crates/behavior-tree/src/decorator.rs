//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Root`] (pass-through), [`Inverter`] (NOT logic),
//! [`Succeeder`] and [`Failer`] (result override), and the looping
//! [`Repeater`] and [`RepeatUntilFail`].
//!
//! Every decorator can be created unbound (`Default`) and wired later with
//! `set_child`. Ticking an unbound decorator returns
//! [`TreeError::MissingChild`] instead of a status.

use std::num::NonZeroU32;

use crate::{Behavior, CancelToken, Result, Status, TreeError};

fn bound<'a, C>(
    child: &'a Option<Box<dyn Behavior<C>>>,
    node: &'static str,
) -> Result<&'a dyn Behavior<C>> {
    child.as_deref().ok_or(TreeError::MissingChild { node })
}

/// Returns exactly what its child returns.
///
/// Used by [`BehaviorTree`](crate::BehaviorTree) as its fixed entry point so
/// the subtree underneath can be swapped without replacing the tree.
pub struct Root<C> {
    child: Option<Box<dyn Behavior<C>>>,
}

impl<C> Root<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child: Some(child) }
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }
}

impl<C> Default for Root<C> {
    fn default() -> Self {
        Self { child: None }
    }
}

impl<C> Behavior<C> for Root<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        bound(&self.child, "Root")?.tick(ctx)
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Option<Box<dyn Behavior<C>>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child: Some(child) }
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }
}

impl<C> Default for Inverter<C> {
    fn default() -> Self {
        Self { child: None }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        Ok(bound(&self.child, "Inverter")?.tick(ctx)?.invert())
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Branches where failure is expected but the enclosing sequence must go on
pub struct Succeeder<C> {
    child: Option<Box<dyn Behavior<C>>>,
}

impl<C> Succeeder<C> {
    /// Creates a new succeeder around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child: Some(child) }
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }
}

impl<C> Default for Succeeder<C> {
    fn default() -> Self {
        Self { child: None }
    }
}

impl<C> Behavior<C> for Succeeder<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        // Execute child but ignore the result
        let _ = bound(&self.child, "Succeeder")?.tick(ctx)?;
        Ok(Status::Success)
    }
}

/// Always returns `Failure`, regardless of the child's result.
///
/// Equivalent to an [`Inverter`] over a [`Succeeder`].
pub struct Failer<C> {
    child: Option<Box<dyn Behavior<C>>>,
}

impl<C> Failer<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child: Some(child) }
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }
}

impl<C> Default for Failer<C> {
    fn default() -> Self {
        Self { child: None }
    }
}

impl<C> Behavior<C> for Failer<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let _ = bound(&self.child, "Failer")?.tick(ctx)?;
        Ok(Status::Failure)
    }
}

/// How many times a [`Repeater`] runs its child.
#[derive(Clone, Debug)]
pub enum Repetitions {
    /// Run exactly this many times and report the last result.
    Times(NonZeroU32),
    /// Run until the token is cancelled.
    Forever(CancelToken),
}

/// Runs its child repeatedly.
///
/// # Semantics
///
/// - [`Repetitions::Times`]: the child runs `n` times; every result but the
///   last is discarded and the last one is returned.
/// - [`Repetitions::Forever`]: the child runs until the [`CancelToken`] is
///   cancelled, whatever it returns. **This blocks the calling thread** until
///   someone cancels the token; the node then returns
///   [`TreeError::Cancelled`]. Meant for the outermost layer of a
///   continuously driven agent.
pub struct Repeater<C> {
    child: Option<Box<dyn Behavior<C>>>,
    repetitions: Repetitions,
}

impl<C> Repeater<C> {
    /// Runs `child` exactly `count` times.
    pub fn times(count: NonZeroU32, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child: Some(child),
            repetitions: Repetitions::Times(count),
        }
    }

    /// Runs `child` until `token` is cancelled.
    pub fn forever(token: CancelToken, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child: Some(child),
            repetitions: Repetitions::Forever(token),
        }
    }

    /// Creates an unbound repeater; wire it with [`set_child`](Self::set_child).
    pub fn with_repetitions(repetitions: Repetitions) -> Self {
        Self {
            child: None,
            repetitions,
        }
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }

    pub fn repetitions(&self) -> &Repetitions {
        &self.repetitions
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let child = bound(&self.child, "Repeater")?;

        match &self.repetitions {
            Repetitions::Times(count) => {
                let mut last = Status::Failure;
                for _ in 0..count.get() {
                    last = child.tick(ctx)?;
                }
                Ok(last)
            }
            Repetitions::Forever(token) => {
                let mut iterations: u64 = 0;
                loop {
                    if token.is_cancelled() {
                        tracing::warn!(iterations, "repeater cancelled");
                        return Err(TreeError::Cancelled { node: "Repeater" });
                    }
                    child.tick(ctx)?;
                    iterations += 1;
                }
            }
        }
    }
}

/// Runs its child until the child fails, then succeeds.
///
/// The child runs `k + 1` times, where `k` is the number of successes before
/// the first failure. A child that never fails makes this loop forever;
/// attach a [`CancelToken`] with [`with_cancel`](Self::with_cancel) when that
/// is possible. A cancelled loop returns [`TreeError::Cancelled`].
pub struct RepeatUntilFail<C> {
    child: Option<Box<dyn Behavior<C>>>,
    cancel: Option<CancelToken>,
}

impl<C> RepeatUntilFail<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child: Some(child),
            cancel: None,
        }
    }

    /// Checks `token` before every iteration.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.child = Some(child);
    }
}

impl<C> Default for RepeatUntilFail<C> {
    fn default() -> Self {
        Self {
            child: None,
            cancel: None,
        }
    }
}

impl<C> Behavior<C> for RepeatUntilFail<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        let child = bound(&self.child, "RepeatUntilFail")?;

        let mut successes: u64 = 0;
        loop {
            if let Some(token) = &self.cancel
                && token.is_cancelled()
            {
                tracing::warn!(successes, "repeat-until-fail cancelled");
                return Err(TreeError::Cancelled {
                    node: "RepeatUntilFail",
                });
            }
            match child.tick(ctx)? {
                Status::Success => successes += 1,
                Status::Failure => break,
            }
        }

        tracing::debug!(successes, "repeat-until-fail finished");
        Ok(Status::Success)
    }
}
