use anyhow::{Context, Result};
use slimsweep_driver::parse::{payload, PAYLOAD_PREFIX};
use slimsweep_driver::{process, SlimCommand};

use crate::args::RunArgs;
use crate::defaults;

/// Run the simulator once and print the stripped `OUT:` payload.
///
/// The `--header` flag prints the fixed CSV header first, so the first run
/// of a batch turns the concatenated outputs into a well-formed CSV.
pub fn run_once(args: &RunArgs) -> Result<()> {
    if args.header {
        println!("{}", defaults::CSV_HEADER);
    }

    // The all-caps names must exactly match the constants the models define.
    let cmd = SlimCommand::new(&args.source)
        .with_program(&args.slim)
        .define("HOMING_SUCCESS_RATE", args.homing)
        .define("RESISTANCE_FORMATION_RATE", args.res)
        .define("RECESSIVE_FEMALE_STERILE_SUPPRESSION", args.suppression);

    let output = process::run(&cmd).context("Failed to run SLiM")?;

    println!("{}", payload(&output.stdout, PAYLOAD_PREFIX));
    Ok(())
}
