//! Tree wrapper around a fixed [`Root`].

use crate::{Behavior, Result, Root, Status};

/// A behavior tree: one [`Root`] created up front, plus whatever subtree is
/// bound to it with [`set_root_child`](Self::set_root_child).
///
/// # Example
///
/// ```rust
/// use behavior_tree::{BehaviorTree, Behavior, Result, Status, builder::*};
///
/// struct Counter;
/// impl Behavior<u32> for Counter {
///     fn tick(&self, ctx: &mut u32) -> Result<Status> {
///         *ctx += 1;
///         Ok(Status::from(*ctx < 3))
///     }
/// }
///
/// let mut tree = BehaviorTree::<u32>::new();
/// tree.set_root_child(repeat_until_fail(Box::new(Counter)));
///
/// let mut count: u32 = 0;
/// assert_eq!(tree.run(&mut count), Ok(Status::Success));
/// assert_eq!(count, 3);
/// ```
pub struct BehaviorTree<C> {
    root: Root<C>,
}

impl<C> BehaviorTree<C> {
    pub fn new() -> Self {
        Self {
            root: Root::default(),
        }
    }

    /// Binds the subtree evaluated by [`run`](Self::run), replacing any
    /// previous one.
    pub fn set_root_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.root.set_child(child);
    }

    /// Evaluates the whole tree once against `ctx`.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingChild`](crate::TreeError::MissingChild) if no
    /// root child was bound, or any contract violation raised inside the
    /// subtree.
    pub fn run(&self, ctx: &mut C) -> Result<Status> {
        let status = self.root.tick(ctx)?;
        tracing::debug!(?status, "behavior tree evaluated");
        Ok(status)
    }
}

impl<C> Default for BehaviorTree<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeError;

    struct Fixed(Status);
    impl Behavior<()> for Fixed {
        fn tick(&self, _ctx: &mut ()) -> Result<Status> {
            Ok(self.0)
        }
    }

    #[test]
    fn run_without_root_child_is_an_error() {
        let tree = BehaviorTree::<()>::new();
        assert_eq!(
            tree.run(&mut ()),
            Err(TreeError::MissingChild { node: "Root" })
        );
    }

    #[test]
    fn run_returns_root_child_verdict() {
        let mut tree = BehaviorTree::<()>::new();
        tree.set_root_child(Box::new(Fixed(Status::Failure)));
        assert_eq!(tree.run(&mut ()), Ok(Status::Failure));

        tree.set_root_child(Box::new(Fixed(Status::Success)));
        assert_eq!(tree.run(&mut ()), Ok(Status::Success));
    }
}
