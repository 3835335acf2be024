use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// SLiM model file to run.
    #[arg(short = 's', long, default_value = defaults::SOURCE_FILE)]
    pub source: PathBuf,

    /// Print a CSV header line before running.
    #[arg(long)]
    pub header: bool,

    /// Drive homing success rate.
    #[arg(long, default_value_t = defaults::HOMING_SUCCESS_RATE)]
    pub homing: f64,

    /// Resistance allele formation rate.
    #[arg(long, default_value_t = defaults::RESISTANCE_FORMATION_RATE)]
    pub res: f64,

    /// Model a suppression drive (recessive female sterility) instead of a
    /// modification drive.
    #[arg(long)]
    pub suppression: bool,

    /// Simulator executable to invoke.
    #[arg(long, default_value = slimsweep_driver::DEFAULT_PROGRAM)]
    pub slim: String,
}

#[derive(Args, Debug)]
pub struct ReplicatesArgs {
    /// SLiM model file to run for each replicate.
    ///
    /// The model is expected to report its metric on a `#OUTPUT:` line.
    #[arg(short = 's', long, default_value = defaults::REPLICATE_SOURCE)]
    pub source: PathBuf,

    /// Number of replicate runs.
    #[arg(short = 'r', long, default_value_t = defaults::REPLICATE_RUNS)]
    pub runs: usize,

    /// Show a progress bar and only print the final mean.
    #[arg(long)]
    pub progress: bool,

    /// Simulator executable to invoke.
    #[arg(long, default_value = slimsweep_driver::DEFAULT_PROGRAM)]
    pub slim: String,
}

#[derive(Args, Debug)]
pub struct ClusterArgs {
    /// First homing rate value.
    #[arg(long, default_value_t = defaults::SWEEP_HOMING_START)]
    pub homing_start: f64,

    /// Homing rate increment per step.
    #[arg(long, default_value_t = defaults::SWEEP_HOMING_STEP)]
    pub homing_step: f64,

    /// Number of homing rate steps.
    #[arg(long, default_value_t = defaults::CLUSTER_STEPS)]
    pub homing_steps: usize,

    /// First resistance rate value.
    #[arg(long, default_value_t = defaults::SWEEP_RES_START)]
    pub res_start: f64,

    /// Resistance rate increment per step.
    #[arg(long, default_value_t = defaults::CLUSTER_RES_STEP)]
    pub res_step: f64,

    /// Number of resistance rate steps.
    #[arg(long, default_value_t = defaults::CLUSTER_STEPS)]
    pub res_steps: usize,

    /// Write the params file here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LocalArgs {
    /// First homing rate value.
    #[arg(long, default_value_t = defaults::SWEEP_HOMING_START)]
    pub homing_start: f64,

    /// Homing rate increment per step.
    #[arg(long, default_value_t = defaults::SWEEP_HOMING_STEP)]
    pub homing_step: f64,

    /// Number of homing rate steps.
    #[arg(long, default_value_t = defaults::LOCAL_STEPS)]
    pub homing_steps: usize,

    /// First resistance rate value.
    #[arg(long, default_value_t = defaults::SWEEP_RES_START)]
    pub res_start: f64,

    /// Resistance rate increment per step.
    #[arg(long, default_value_t = defaults::LOCAL_RES_STEP)]
    pub res_step: f64,

    /// Number of resistance rate steps.
    #[arg(long, default_value_t = defaults::LOCAL_STEPS)]
    pub res_steps: usize,

    /// Maximum number of simultaneous simulator processes.
    ///
    /// Defaults to the number of logical CPUs.
    #[arg(short, long, default_value_t = defaults::max_jobs())]
    pub jobs: usize,

    /// Directory the generated script uses for per-run partial outputs.
    #[arg(long, default_value = defaults::LOCAL_DATA_DIR)]
    pub data_dir: String,

    /// Name of the concatenated CSV the generated script leaves behind.
    #[arg(long, default_value = defaults::LOCAL_CSV)]
    pub csv: String,

    /// Write the script here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
