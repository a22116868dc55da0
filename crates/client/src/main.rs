//! `tactics` binary.
//!
//! ```bash
//! tactics --scenario duel.ron --config tactics.toml --turns 30
//! RUST_LOG=tactics_runtime=debug tactics
//! ```

use anyhow::Result;
use clap::Parser;
use tactics_client::{CliOptions, report};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = CliOptions::parse();
    let mut simulation = tactics_client::prepare(&options)?;

    println!("{}", report::render_world(simulation.world()));
    let records = tactics_client::run(&mut simulation, &options)?;
    for record in &records {
        println!("{}", report::describe(record));
    }
    println!();
    println!("{}", report::render_world(simulation.world()));

    tracing::info!(
        rounds = simulation.turn(),
        records = records.len(),
        survivors = simulation.world().living_humans().len(),
        "simulation finished"
    );
    Ok(())
}
