//! Doors, the building and the blackboard the door tree runs against.

use std::fmt;

use behavior_tree::{Slot, Stack};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Door {
    pub number: u32,
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door #{}", self.number)
    }
}

/// A building whose doors are stacked so that door #1 is tried first.
#[derive(Clone, Debug)]
pub struct Building {
    doors: Vec<Door>,
}

impl Building {
    /// Creates a building with `door_count` doors, numbered from 1.
    pub fn new(door_count: u32) -> Self {
        let doors = (0..door_count)
            .map(|i| Door {
                number: door_count - i,
            })
            .collect();
        Self { doors }
    }

    /// The doors as a stack: the last element is the top.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}

/// One door action outcome, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    pub action: &'static str,
    pub door: Option<u32>,
    pub succeeded: bool,
}

/// Blackboard for the door tree.
///
/// The tree refills `doors` from `entrances` on every run, but it never
/// clears `current_door` or `used_door`. A context reused for a second run
/// would still hold the door from the first one, and the final
/// `IsNull(used_door)` check would pass even if every door failed. Call
/// [`begin_attempt`](Self::begin_attempt) before each run.
#[derive(Clone, Debug, Default)]
pub struct BuildingContext {
    /// The building's doors, never modified by the tree.
    pub entrances: Vec<Door>,
    /// Doors still to try.
    pub doors: Vec<Door>,
    pub current_door: Option<Door>,
    /// The door that got us in, if any.
    pub used_door: Option<Door>,
    pub journal: Vec<JournalEntry>,
}

impl BuildingContext {
    pub fn new(building: &Building) -> Self {
        Self {
            entrances: building.doors().to_vec(),
            ..Self::default()
        }
    }

    /// Clears what a previous run left behind. The journal is kept.
    pub fn begin_attempt(&mut self) {
        self.doors.clear();
        self.current_door = None;
        self.used_door = None;
    }

    /// Numbers of the doors that were walked to, in order.
    pub fn attempted_doors(&self) -> Vec<u32> {
        self.journal
            .iter()
            .filter(|entry| entry.action == crate::actions::WALK_TO_DOOR)
            .filter_map(|entry| entry.door)
            .collect()
    }
}

fn entrances(ctx: &mut BuildingContext) -> &mut Vec<Door> {
    &mut ctx.entrances
}

fn doors(ctx: &mut BuildingContext) -> &mut Vec<Door> {
    &mut ctx.doors
}

fn current_door(ctx: &mut BuildingContext) -> &mut Option<Door> {
    &mut ctx.current_door
}

fn used_door(ctx: &mut BuildingContext) -> &mut Option<Door> {
    &mut ctx.used_door
}

pub const ENTRANCES: Stack<BuildingContext, Door> = Stack::new("entrances", entrances);
pub const DOORS: Stack<BuildingContext, Door> = Stack::new("doors", doors);
pub const CURRENT_DOOR: Slot<BuildingContext, Door> = Slot::new("current_door", current_door);
pub const USED_DOOR: Slot<BuildingContext, Door> = Slot::new("used_door", used_door);
