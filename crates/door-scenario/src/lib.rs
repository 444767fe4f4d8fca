//! Door-opening agent built on `behavior-tree`.
//!
//! An agent stands in front of a building and tries its doors one after the
//! other: walk to the door, get it open (open, unlock or smash it), walk
//! through and close it behind. The first door that works is remembered in
//! the blackboard; if none works the tree fails.
//!
//! - [`context`]: doors, building and the [`BuildingContext`] blackboard
//! - [`actions`]: [`DoorAction`] leaves and their [`ActionPolicy`]
//! - [`tree`]: [`build_tree`] wiring
//! - [`config`]: [`ScenarioConfig`] loaded from the environment

pub mod actions;
pub mod config;
pub mod context;
pub mod error;
pub mod tree;

pub use actions::{ActionPolicy, DoorAction, DoorActions};
pub use config::{ChanceConfig, ScenarioConfig};
pub use context::{Building, BuildingContext, Door, JournalEntry};
pub use error::{Result, ScenarioError};
pub use tree::build_tree;

use behavior_tree::{Status, rng};

/// Runs one attempt at entering a building configured by `config`.
///
/// Reseeds the shared rng when the configuration carries a seed. Returns the
/// verdict together with the final blackboard.
pub fn enter_building(config: &ScenarioConfig) -> Result<(Status, BuildingContext)> {
    if let Some(seed) = config.seed {
        rng::reseed(seed);
    }

    let building = Building::new(config.door_count);
    let mut ctx = BuildingContext::new(&building);
    ctx.begin_attempt();
    let tree = build_tree(DoorActions::from_config(&config.chances));

    let status = tree.run(&mut ctx)?;
    Ok((status, ctx))
}
