use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use slimsweep_driver::sweep::{
    write_cluster_params, write_local_array, LocalArrayOptions, SweepAxis, SweepGrid,
};

use crate::args::{ClusterArgs, LocalArgs};
use crate::defaults;

/// Generate the params file for a cluster array run.
pub fn cluster(args: &ClusterArgs) -> Result<()> {
    let grid = SweepGrid::new(
        SweepAxis::new(args.homing_start, args.homing_step, args.homing_steps),
        SweepAxis::new(args.res_start, args.res_step, args.res_steps),
    );

    let mut sink = open_sink(args.output.as_ref())?;
    write_cluster_params(&mut sink, &grid, defaults::DRIVER_PROGRAM)
        .context("Failed to write params file")?;
    sink.flush()?;
    Ok(())
}

/// Generate the bash script for a local parallel array run.
pub fn local(args: &LocalArgs) -> Result<()> {
    let grid = SweepGrid::new(
        SweepAxis::new(args.homing_start, args.homing_step, args.homing_steps),
        SweepAxis::new(args.res_start, args.res_step, args.res_steps),
    );
    let options = LocalArrayOptions {
        jobs: args.jobs,
        data_dir: args.data_dir.clone(),
        output: args.csv.clone(),
    };

    let mut sink = open_sink(args.output.as_ref())?;
    write_local_array(&mut sink, &grid, defaults::DRIVER_PROGRAM, &options)
        .context("Failed to write array script")?;
    sink.flush()?;
    Ok(())
}

fn open_sink(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
