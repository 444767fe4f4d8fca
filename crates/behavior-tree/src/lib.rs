//! Lightweight, synchronous behavior tree library.
//!
//! This library provides a minimal behavior tree implementation in which
//! every evaluation runs to completion on the calling thread.
//!
//! - **No delta time**: Every tick completes immediately
//! - **No Running state**: Actions either succeed or fail instantly
//! - **Caller-owned blackboard**: Nodes read and write the context `C` they
//!   are ticked with; composites and decorators never touch it
//! - **Two channels**: [`Status`] is the verdict, [`TreeError`] aborts the
//!   evaluation on a miswired tree or a cancelled loop
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure (no Running state)
//! - [`BehaviorTree`]: Fixed [`Root`] plus the subtree bound to it
//! - Composite nodes: [`Sequence`], [`Selector`], [`RandomSelector`]
//! - Decorator nodes: [`Root`], [`Inverter`], [`Succeeder`], [`Failer`],
//!   [`Repeater`], [`RepeatUntilFail`]
//! - Leaf nodes: [`PushToStack`], [`GetStack`], [`PopFromStack`],
//!   [`StackIsEmpty`], [`SetVariable`], [`IsNull`] over [`Stack`] and
//!   [`Slot`] handles

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod cancel;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod rng;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use blackboard::{Slot, Stack};
pub use cancel::CancelToken;
pub use composite::{RandomSelector, Selector, Sequence};
pub use decorator::{Failer, Inverter, RepeatUntilFail, Repeater, Repetitions, Root, Succeeder};
pub use error::{Result, TreeError};
pub use leaf::{GetStack, IsNull, PopFromStack, PushToStack, SetVariable, StackIsEmpty};
pub use status::Status;
pub use tree::BehaviorTree;
