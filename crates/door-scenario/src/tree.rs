//! Wiring of the door-opening tree.
//!
//! ```text
//! Sequence
//! ├── GetStack(doors <- entrances)
//! ├── RepeatUntilFail
//! │   └── Sequence
//! │       ├── PopFromStack(doors -> current_door)
//! │       └── Inverter
//! │           └── Sequence
//! │               ├── walk to door
//! │               ├── Selector [open, unlock, smash]
//! │               ├── walk through door
//! │               ├── Succeeder(close door)
//! │               └── SetVariable(used_door <- current_door)
//! └── Inverter
//!     └── IsNull(used_door)
//! ```
//!
//! The inner loop keeps popping doors while getting through the current one
//! fails. It stops either when a door worked (the inverter turns that
//! success into the failure that ends the loop) or when no door is left.
//! The final check tells the two apart.

use behavior_tree::{
    Behavior, BehaviorTree, GetStack, IsNull, PopFromStack, SetVariable, builder::*,
};

use crate::actions::DoorActions;
use crate::context::{BuildingContext, CURRENT_DOOR, DOORS, ENTRANCES, USED_DOOR};

type Node = Box<dyn Behavior<BuildingContext>>;

pub fn build_tree(actions: DoorActions) -> BehaviorTree<BuildingContext> {
    let DoorActions {
        walk_to,
        open,
        unlock,
        smash,
        walk_through,
        close,
    } = actions;

    let get_through_door: Node = sequence(vec![
        Box::new(walk_to),
        selector(vec![Box::new(open), Box::new(unlock), Box::new(smash)]),
        Box::new(walk_through),
        succeeder(Box::new(close)),
        Box::new(SetVariable::new(USED_DOOR, CURRENT_DOOR)),
    ]);

    let try_next_door: Node = sequence(vec![
        Box::new(PopFromStack::new(DOORS, CURRENT_DOOR)),
        inverter(get_through_door),
    ]);

    let mut tree = BehaviorTree::new();
    tree.set_root_child(sequence(vec![
        Box::new(GetStack::new(DOORS, ENTRANCES)),
        repeat_until_fail(try_next_door),
        inverter(Box::new(IsNull::new(USED_DOOR))),
    ]));
    tree
}
