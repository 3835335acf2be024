//! Shared default values for the CLI commands.
//! Grid shapes and rates reproduce the published batch scripts for the
//! minimal gene drive models.

pub const SOURCE_FILE: &str = "minimal_gene_drive.slim";
pub const REPLICATE_SOURCE: &str = "test.slim";
pub const REPLICATE_RUNS: usize = 999;

pub const HOMING_SUCCESS_RATE: f64 = 1.0;
pub const RESISTANCE_FORMATION_RATE: f64 = 0.0;

// Sweep grids
pub const SWEEP_HOMING_START: f64 = 0.5;
pub const SWEEP_HOMING_STEP: f64 = 0.01;
pub const SWEEP_RES_START: f64 = 0.0;

pub const CLUSTER_STEPS: usize = 51;
pub const CLUSTER_RES_STEP: f64 = 0.001;

pub const LOCAL_STEPS: usize = 11;
pub const LOCAL_RES_STEP: f64 = 0.005;

pub const LOCAL_DATA_DIR: &str = "sweep_data";
pub const LOCAL_CSV: &str = "large_array.csv";

/// Command generated scripts use to invoke this tool.
pub const DRIVER_PROGRAM: &str = "slimsweep";

/// CSV header emitted by `run --header`; the column layout is fixed by the
/// gene drive models' `OUT:` lines.
pub const CSV_HEADER: &str = "Drive homing rate,Resistance formation rate,rate wt,rate dr,\
rate of function preserving resistance,rate of function disrupting resistance,\
rate of inds with at least 1 drive copy,ending pop size";

/// Default concurrency cap for the local array script.
pub fn max_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
