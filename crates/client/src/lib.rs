//! Console driver for the tactics simulation.
//!
//! Loads a scenario and tunables, runs the turn loop, and reports what each
//! actor did. Without a scenario file the built-in arena is used.

pub mod options;
pub mod report;

pub use options::CliOptions;

use anyhow::Result;
use tactics_content::{ConfigLoader, ScenarioLoader};
use tactics_core::{GameConfig, World};
use tactics_runtime::{Simulation, TurnRecord};

/// Scenario used when none is given.
pub const BUILTIN_ARENA: &str = include_str!("../scenarios/arena.ron");

/// Builds the simulation described by `options`.
pub fn prepare(options: &CliOptions) -> Result<Simulation> {
    let config = match &options.config {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let world = load_world(options)?;
    tracing::info!(
        entities = world.entities().count(),
        actors = world.living_actors().len(),
        max_turns = config.max_turns,
        "world ready"
    );
    Ok(Simulation::new(world, config))
}

fn load_world(options: &CliOptions) -> Result<World> {
    match &options.scenario {
        Some(path) => ScenarioLoader::load_world(path),
        None => {
            tracing::debug!("no scenario given, using the built-in arena");
            ScenarioLoader::parse(BUILTIN_ARENA)?.build()
        }
    }
}

/// Runs `options.turns` rounds, or `max_turns` when unset.
pub fn run(simulation: &mut Simulation, options: &CliOptions) -> Result<Vec<TurnRecord>> {
    let rounds = options.turns.unwrap_or(simulation.config().max_turns);
    Ok(simulation.run(rounds)?)
}
