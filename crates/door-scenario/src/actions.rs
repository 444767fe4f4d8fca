//! Door action leaves.
//!
//! Each action succeeds or fails according to its [`ActionPolicy`], logs the
//! outcome, and appends it to the context journal. Actions only read the
//! current door; moving doors around is left to the generic stack leaves.

use behavior_tree::{Behavior, Result, Status, TreeError, rng};
use rand::Rng;

use crate::config::ChanceConfig;
use crate::context::{BuildingContext, Door, JournalEntry};

pub const WALK_TO_DOOR: &str = "Walk to door";
pub const OPEN_DOOR: &str = "Open door";
pub const UNLOCK_DOOR: &str = "Unlock door";
pub const SMASH_DOOR: &str = "Smash door";
pub const WALK_THROUGH_DOOR: &str = "Walk through door";
pub const CLOSE_DOOR: &str = "Close door";

/// Decides whether a [`DoorAction`] succeeds.
#[derive(Clone, Copy, Debug)]
pub enum ActionPolicy {
    /// Fixed outcome.
    Always(bool),
    /// Succeeds when a roll in `0..100` on the shared rng is below `percent`.
    Chance { percent: u32 },
    /// Outcome computed from the current door. Requires a current door.
    Script(fn(&Door) -> bool),
}

pub struct DoorAction {
    name: &'static str,
    policy: ActionPolicy,
}

impl DoorAction {
    pub fn new(name: &'static str, policy: ActionPolicy) -> Self {
        Self { name, policy }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Behavior<BuildingContext> for DoorAction {
    fn tick(&self, ctx: &mut BuildingContext) -> Result<Status> {
        let succeeded = match self.policy {
            ActionPolicy::Always(outcome) => outcome,
            ActionPolicy::Chance { percent } => {
                rng::with_rng(|rng| rng.gen_range(0..100) < percent)
            }
            ActionPolicy::Script(script) => {
                let door = ctx.current_door.as_ref().ok_or(TreeError::UnsetSlot {
                    node: "DoorAction",
                    slot: "current_door",
                })?;
                script(door)
            }
        };

        let door = ctx.current_door.map(|door| door.number);
        if succeeded {
            tracing::info!(action = self.name, ?door, "{} succeeded", self.name);
        } else {
            tracing::info!(action = self.name, ?door, "{} failed", self.name);
        }
        ctx.journal.push(JournalEntry {
            action: self.name,
            door,
            succeeded,
        });

        Ok(Status::from(succeeded))
    }
}

/// The six actions the door tree is wired from.
pub struct DoorActions {
    pub walk_to: DoorAction,
    pub open: DoorAction,
    pub unlock: DoorAction,
    pub smash: DoorAction,
    pub walk_through: DoorAction,
    pub close: DoorAction,
}

impl DoorActions {
    /// Probabilistic actions using the given success chances.
    pub fn from_config(chances: &ChanceConfig) -> Self {
        let chance = |percent| ActionPolicy::Chance { percent };
        Self {
            walk_to: DoorAction::new(WALK_TO_DOOR, chance(chances.walk_to)),
            open: DoorAction::new(OPEN_DOOR, chance(chances.open)),
            unlock: DoorAction::new(UNLOCK_DOOR, chance(chances.unlock)),
            smash: DoorAction::new(SMASH_DOOR, chance(chances.smash)),
            walk_through: DoorAction::new(WALK_THROUGH_DOOR, chance(chances.walk_through)),
            close: DoorAction::new(CLOSE_DOOR, chance(chances.close)),
        }
    }

    /// Actions with the given policies, in tree order.
    pub fn scripted(
        walk_to: ActionPolicy,
        open: ActionPolicy,
        unlock: ActionPolicy,
        smash: ActionPolicy,
        walk_through: ActionPolicy,
        close: ActionPolicy,
    ) -> Self {
        Self {
            walk_to: DoorAction::new(WALK_TO_DOOR, walk_to),
            open: DoorAction::new(OPEN_DOOR, open),
            unlock: DoorAction::new(UNLOCK_DOOR, unlock),
            smash: DoorAction::new(SMASH_DOOR, smash),
            walk_through: DoorAction::new(WALK_THROUGH_DOOR, walk_through),
            close: DoorAction::new(CLOSE_DOOR, close),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_door(number: u32) -> BuildingContext {
        BuildingContext {
            current_door: Some(Door { number }),
            ..BuildingContext::default()
        }
    }

    #[test]
    fn fixed_outcome_is_journaled() {
        let action = DoorAction::new(OPEN_DOOR, ActionPolicy::Always(false));
        let mut ctx = at_door(2);

        assert_eq!(action.tick(&mut ctx), Ok(Status::Failure));
        assert_eq!(
            ctx.journal,
            [JournalEntry {
                action: OPEN_DOOR,
                door: Some(2),
                succeeded: false
            }]
        );
    }

    #[test]
    fn script_sees_current_door() {
        let action = DoorAction::new(SMASH_DOOR, ActionPolicy::Script(|door| door.number == 3));

        assert_eq!(action.tick(&mut at_door(3)), Ok(Status::Success));
        assert_eq!(action.tick(&mut at_door(1)), Ok(Status::Failure));
    }

    #[test]
    fn script_without_current_door_is_an_error() {
        let action = DoorAction::new(SMASH_DOOR, ActionPolicy::Script(|_| true));
        let mut ctx = BuildingContext::default();

        assert_eq!(
            action.tick(&mut ctx),
            Err(TreeError::UnsetSlot {
                node: "DoorAction",
                slot: "current_door"
            })
        );
        assert!(ctx.journal.is_empty());
    }

    #[test]
    fn certain_chances_are_deterministic() {
        let always = DoorAction::new(CLOSE_DOOR, ActionPolicy::Chance { percent: 100 });
        let never = DoorAction::new(OPEN_DOOR, ActionPolicy::Chance { percent: 0 });
        let mut ctx = at_door(1);

        for _ in 0..50 {
            assert_eq!(always.tick(&mut ctx), Ok(Status::Success));
            assert_eq!(never.tick(&mut ctx), Ok(Status::Failure));
        }
    }
}
