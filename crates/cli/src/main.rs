mod args;
mod commands;
pub mod defaults;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{ClusterArgs, LocalArgs, ReplicatesArgs, RunArgs};
use commands::{replicates, run, stats, sweep};

/// Slimsweep: batch orchestration for SLiM gene drive simulations
///
/// Runs the external SLiM simulator with gene drive parameters, tabulates
/// replicate metrics, and generates the batch scripts for large parameter
/// sweeps on a cluster or a single multi-core machine.
#[derive(Parser, Debug)]
#[command(name = "slimsweep")]
#[command(author, version, about = "Runs, replicates and sweeps SLiM gene drive simulations", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the simulator once and print the collected payload.
    ///
    /// Lines of simulator output starting with `OUT:` are stripped of the
    /// prefix and concatenated; everything else is discarded.
    Run(RunArgs),

    /// Run replicated simulations and print the running mean after each run.
    ///
    /// Each run's metric is parsed from the first `#OUTPUT:` line of the
    /// simulator's stdout.
    Replicates(ReplicatesArgs),

    /// Generate batch invocation scripts for a 2-D parameter sweep.
    #[command(subcommand)]
    Sweep(SweepCommand),

    /// Compute popgen summary statistics over the built-in demo alignment.
    Stats {
        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

#[derive(Subcommand, Debug)]
enum SweepCommand {
    /// Emit a params file of one driver invocation per grid point.
    Cluster(ClusterArgs),

    /// Emit a bash script running the grid locally with bounded parallelism.
    Local(LocalArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_once(&args)?;
        }
        Commands::Replicates(args) => {
            replicates::run_replicates(&args)?;
        }
        Commands::Sweep(SweepCommand::Cluster(args)) => {
            sweep::cluster(&args)?;
        }
        Commands::Sweep(SweepCommand::Local(args)) => {
            sweep::local(&args)?;
        }
        Commands::Stats { format } => {
            stats::print_stats(&format)?;
        }
    }

    Ok(())
}
