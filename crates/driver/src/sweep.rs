//! Parameter sweep script generation.
//!
//! Batch runs over a 2-D grid of (homing rate, resistance rate) are driven
//! by generated text: a params file of one driver invocation per grid point
//! for cluster schedulers, or a bash script of backgrounded jobs with `wait`
//! barriers for a single multi-core machine. Generation is purely textual;
//! nothing here executes or validates the emitted commands.

use std::io::{self, Write};

/// One swept axis: `steps` values starting at `start`, spaced by `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis {
    pub start: f64,
    pub step: f64,
    pub steps: usize,
}

impl SweepAxis {
    pub fn new(start: f64, step: f64, steps: usize) -> Self {
        Self { start, step, steps }
    }

    /// The i-th value on the axis.
    pub fn value(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }
}

/// The (homing × resistance) grid swept by the batch generators.
///
/// Points are enumerated row-major with resistance as the inner axis, so
/// consecutive lines share a homing rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepGrid {
    pub homing: SweepAxis,
    pub resistance: SweepAxis,
}

impl SweepGrid {
    pub fn new(homing: SweepAxis, resistance: SweepAxis) -> Self {
        Self { homing, resistance }
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.homing.steps * self.resistance.steps
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerate all (homing, resistance) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.homing.steps).flat_map(move |h| {
            (0..self.resistance.steps).map(move |r| (self.homing.value(h), self.resistance.value(r)))
        })
    }
}

fn run_command(driver: &str, homing: f64, resistance: f64, header: bool) -> String {
    let header = if header { " --header" } else { "" };
    format!("{driver} run --homing {homing:.2} --res {resistance:.3}{header}")
}

/// Write a params file: one driver invocation per grid point.
///
/// Only the very first line carries `--header`, so the concatenated output
/// of all runs forms a single CSV.
pub fn write_cluster_params<W: Write>(w: &mut W, grid: &SweepGrid, driver: &str) -> io::Result<()> {
    let mut first = true;
    for (homing, resistance) in grid.points() {
        writeln!(w, "{}", run_command(driver, homing, resistance, first))?;
        first = false;
    }
    Ok(())
}

/// Options for the locally-executed array script.
#[derive(Debug, Clone)]
pub struct LocalArrayOptions {
    /// Maximum number of simultaneous simulator processes.
    pub jobs: usize,
    /// Directory the generated script creates for per-run partial outputs.
    pub data_dir: String,
    /// Name of the concatenated CSV the script leaves behind.
    pub output: String,
}

/// Write a bash script running the whole grid locally in parallel.
///
/// Each grid point becomes a backgrounded job redirected to a numbered
/// `.part` file. A `wait` barrier is inserted after every `jobs` launches;
/// threads that finish early idle at the barrier, which costs some
/// utilization but bounds how many simulator instances hold memory at once.
/// The trailer waits for the stragglers, concatenates the parts into one
/// CSV, and deletes them.
pub fn write_local_array<W: Write>(
    w: &mut W,
    grid: &SweepGrid,
    driver: &str,
    options: &LocalArrayOptions,
) -> io::Result<()> {
    writeln!(w, "#!/bin/bash")?;
    writeln!(w, "mkdir -p {}", options.data_dir)?;

    let mut run_number = 1usize;
    for (homing, resistance) in grid.points() {
        writeln!(
            w,
            "{} > {}/{}.part &",
            run_command(driver, homing, resistance, run_number == 1),
            options.data_dir,
            run_number
        )?;
        if options.jobs > 0 && run_number % options.jobs == 0 {
            writeln!(w, "wait")?;
        }
        run_number += 1;
    }

    writeln!(w, "wait")?;
    writeln!(w, "cd {}", options.data_dir)?;
    writeln!(w, "cat *.part > {}", options.output)?;
    writeln!(w, "rm *.part")?;
    Ok(())
}
