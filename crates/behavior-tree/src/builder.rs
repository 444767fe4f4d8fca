//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use std::num::NonZeroU32;

use crate::{
    Behavior, CancelToken, Failer, Inverter, RandomSelector, RepeatUntilFail, Repeater, Selector,
    Sequence, Succeeder,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a random selector node.
#[inline]
pub fn random_selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(RandomSelector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates a succeeder node.
#[inline]
pub fn succeeder<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Succeeder::new(child))
}

/// Creates a failer node.
#[inline]
pub fn failer<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Failer::new(child))
}

/// Creates a repeater that runs `child` exactly `count` times.
#[inline]
pub fn repeat<C: 'static>(count: NonZeroU32, child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::times(count, child))
}

/// Creates a repeater that runs `child` until `token` is cancelled.
#[inline]
pub fn repeat_forever<C: 'static>(
    token: CancelToken,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::forever(token, child))
}

/// Creates a repeat-until-fail node.
#[inline]
pub fn repeat_until_fail<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(RepeatUntilFail::new(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Result, Status, TreeError};

    #[derive(Default)]
    struct Counter {
        ticks: u32,
    }

    struct Count(Status);

    impl Behavior<Counter> for Count {
        fn tick(&self, ctx: &mut Counter) -> Result<Status> {
            ctx.ticks += 1;
            Ok(self.0)
        }
    }

    /// Cancels the token on the given tick.
    struct StopAt {
        token: CancelToken,
        at: u32,
    }

    impl Behavior<Counter> for StopAt {
        fn tick(&self, ctx: &mut Counter) -> Result<Status> {
            ctx.ticks += 1;
            if ctx.ticks == self.at {
                self.token.cancel();
            }
            Ok(Status::Success)
        }
    }

    fn count(status: Status) -> Box<dyn Behavior<Counter>> {
        Box::new(Count(status))
    }

    #[test]
    fn random_selector_succeeds_when_any_child_does() {
        let node = random_selector(vec![
            count(Status::Failure),
            count(Status::Success),
            count(Status::Failure),
        ]);
        let mut ctx = Counter::default();

        assert_eq!(node.tick(&mut ctx), Ok(Status::Success));
        assert!((1..=3).contains(&ctx.ticks));
    }

    #[test]
    fn random_selector_of_failures_fails_after_every_child() {
        let node = random_selector(vec![count(Status::Failure), count(Status::Failure)]);
        let mut ctx = Counter::default();

        assert_eq!(node.tick(&mut ctx), Ok(Status::Failure));
        assert_eq!(ctx.ticks, 2);
    }

    #[test]
    fn failer_overrides_success() {
        let mut ctx = Counter::default();

        assert_eq!(failer(count(Status::Success)).tick(&mut ctx), Ok(Status::Failure));
        assert_eq!(ctx.ticks, 1);
    }

    #[test]
    fn repeat_runs_child_count_times() {
        let times = NonZeroU32::new(4).unwrap();
        let node = repeat(times, count(Status::Failure));
        let mut ctx = Counter::default();

        assert_eq!(node.tick(&mut ctx), Ok(Status::Failure));
        assert_eq!(ctx.ticks, 4);
    }

    #[test]
    fn repeat_forever_stops_on_cancel() {
        let token = CancelToken::new();
        let node = repeat_forever(
            token.clone(),
            Box::new(StopAt {
                token: token.clone(),
                at: 5,
            }),
        );
        let mut ctx = Counter::default();

        assert_eq!(
            node.tick(&mut ctx),
            Err(TreeError::Cancelled { node: "Repeater" })
        );
        assert_eq!(ctx.ticks, 5);
        assert!(token.is_cancelled());
    }

    #[test]
    fn nested_helpers_compose() {
        // sequence(succeeder(fail), inverter(fail), repeat_until_fail(fail))
        let node = sequence(vec![
            succeeder(count(Status::Failure)),
            inverter(count(Status::Failure)),
            repeat_until_fail(count(Status::Failure)),
        ]);
        let mut ctx = Counter::default();

        assert_eq!(node.tick(&mut ctx), Ok(Status::Success));
        assert_eq!(ctx.ticks, 3);
        assert_eq!(
            selector(vec![count(Status::Failure)]).tick(&mut ctx),
            Ok(Status::Failure)
        );
    }
}
