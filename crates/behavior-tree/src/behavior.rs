//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, the caller-owned blackboard that leaves read and write.

use crate::{Result, Status};

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the blackboard. Leaves read and write
    ///   its slots; composites and decorators only pass it down.
    ///
    /// # Returns
    ///
    /// - `Ok(Status::Success)` if the behavior succeeded
    /// - `Ok(Status::Failure)` if the behavior failed
    /// - `Err(_)` if the tree is miswired or was cancelled; the whole
    ///   evaluation stops
    fn tick(&self, ctx: &mut C) -> Result<Status>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Result<Status> {
        (**self).tick(ctx)
    }
}
