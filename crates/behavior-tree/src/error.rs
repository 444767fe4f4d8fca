//! Contract violations raised while evaluating a tree.
//!
//! A node that merely fails reports [`Status::Failure`](crate::Status). A
//! [`TreeError`] means the tree itself is miswired or was stopped: the
//! evaluation is aborted and the error travels up to the caller of
//! [`BehaviorTree::run`](crate::BehaviorTree::run).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A decorator (or the tree root) was evaluated before a child was bound.
    #[error("{node} has no child bound")]
    MissingChild { node: &'static str },

    /// A leaf needed a value from a blackboard slot that holds nothing.
    #[error("{node} read unset blackboard slot `{slot}`")]
    UnsetSlot {
        node: &'static str,
        slot: &'static str,
    },

    /// An unbounded loop observed its cancellation token.
    #[error("{node} was cancelled")]
    Cancelled { node: &'static str },
}
