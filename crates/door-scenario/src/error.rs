use behavior_tree::TreeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{key} must be a percentage between 0 and 100, got {value}")]
    InvalidChance { key: &'static str, value: u32 },

    #[error("DOOR_COUNT must be between 1 and {max}, got {value}")]
    InvalidDoorCount { value: u64, max: u32 },

    #[error("{key} is not a valid unsigned number: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("behavior tree evaluation aborted")]
    Tree(#[from] TreeError),
}
