#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_abilities::{init_logging, Report, Scenario, Simulation};
#[cfg(feature = "std")]
use clap::Parser;

/// Place the standard fleet, stamp the cone, cross and diamond abilities,
/// and print the resulting board.
///
/// Set BATTLESHIP_LOG (error, warn, info, debug, trace) to change verbosity.
#[derive(Parser)]
#[command(version)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let mut sim = Simulation::new(Scenario::standard());
    let outcome = sim.run().context("ship placement failed")?;

    println!();
    print!("{}", Report::new(&outcome));
    sim.finish();
    Ok(())
}
