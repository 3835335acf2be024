use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use slimsweep_driver::parse::REPLICATE_MARKER;
use slimsweep_driver::{replicate, SlimCommand};

use crate::args::ReplicatesArgs;

/// Run the model repeatedly and tabulate the replicate metric.
///
/// Without `--progress`, the running mean is printed after every run, which
/// is what long unattended batch logs want. With it, a progress bar is shown
/// and only the final mean is printed.
pub fn run_replicates(args: &ReplicatesArgs) -> Result<()> {
    let cmd = SlimCommand::new(&args.source).with_program(&args.slim);

    let pb = if args.progress {
        let pb = ProgressBar::new(args.runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let aggregate =
        replicate::run_replicates(&cmd, args.runs, REPLICATE_MARKER, |_, _, mean| match &pb {
            Some(pb) => pb.inc(1),
            None => println!("{mean}"),
        })
        .context("Replicate run failed")?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
        println!("{}", aggregate.mean());
    }

    Ok(())
}
