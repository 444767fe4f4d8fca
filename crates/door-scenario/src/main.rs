//! Door scenario entry point.
use anyhow::Result;
use door_scenario::{ScenarioConfig, enter_building};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ScenarioConfig::from_env()?;
    tracing::debug!(?config, "scenario configured");

    let (status, ctx) = enter_building(&config)?;

    match ctx.used_door {
        Some(door) if status.is_success() => {
            tracing::info!(door = door.number, "made it into the building through {door}");
        }
        _ => tracing::info!("failed to enter the building"),
    }

    Ok(())
}
