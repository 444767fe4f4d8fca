//! Scenario configuration structures and loaders.
use std::env;

use crate::error::{Result, ScenarioError};

/// Configuration for one attempt at entering the building.
#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    pub door_count: u32,
    pub seed: Option<u64>,
    pub chances: ChanceConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            door_count: 5,
            seed: None,
            chances: ChanceConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Largest accepted `DOOR_COUNT`.
    pub const MAX_DOOR_COUNT: u32 = 10_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DOOR_COUNT` - Doors in the building (default: 5, 1..=10000)
    /// - `BT_SEED` - Seed for the behavior tree rng (default: OS entropy)
    /// - `DOOR_CHANCE_WALK_TO` - Success chance in percent (default: 99)
    /// - `DOOR_CHANCE_OPEN` - (default: 15)
    /// - `DOOR_CHANCE_UNLOCK` - (default: 25)
    /// - `DOOR_CHANCE_SMASH` - (default: 60)
    /// - `DOOR_CHANCE_WALK_THROUGH` - (default: 60)
    /// - `DOOR_CHANCE_CLOSE` - (default: 100)
    ///
    /// Unset variables keep their default. A set variable that does not
    /// parse, or lies outside its range, is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(count) = read_env::<u64>(&lookup, "DOOR_COUNT")? {
            if count == 0 || count > u64::from(Self::MAX_DOOR_COUNT) {
                return Err(ScenarioError::InvalidDoorCount {
                    value: count,
                    max: Self::MAX_DOOR_COUNT,
                });
            }
            config.door_count = count as u32;
        }

        config.seed = read_env(&lookup, "BT_SEED")?;

        let chances = &mut config.chances;
        for (key, chance) in [
            ("DOOR_CHANCE_WALK_TO", &mut chances.walk_to),
            ("DOOR_CHANCE_OPEN", &mut chances.open),
            ("DOOR_CHANCE_UNLOCK", &mut chances.unlock),
            ("DOOR_CHANCE_SMASH", &mut chances.smash),
            ("DOOR_CHANCE_WALK_THROUGH", &mut chances.walk_through),
            ("DOOR_CHANCE_CLOSE", &mut chances.close),
        ] {
            if let Some(value) = read_env::<u32>(&lookup, key)? {
                if value > 100 {
                    return Err(ScenarioError::InvalidChance { key, value });
                }
                *chance = value;
            }
        }

        Ok(config)
    }
}

/// Success chance, in percent, of every door action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChanceConfig {
    pub walk_to: u32,
    pub open: u32,
    pub unlock: u32,
    pub smash: u32,
    pub walk_through: u32,
    pub close: u32,
}

impl Default for ChanceConfig {
    fn default() -> Self {
        Self {
            walk_to: 99,
            open: 15,
            unlock: 25,
            smash: 60,
            walk_through: 60,
            close: 100,
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ScenarioError::InvalidValue { key, value: raw })
}
