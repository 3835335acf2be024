//! # Driver Crate
//!
//! The `driver` crate wraps the external SLiM simulator as a subprocess.
//! It provides command-line construction (`-d NAME=value` constant
//! definitions), output capture, marker-line parsing, replicate aggregation,
//! and generation of batch sweep scripts for cluster or local execution.

pub mod command;
pub mod error;
pub mod parse;
pub mod process;
pub mod replicate;
pub mod sweep;

pub use command::{DefineValue, SlimCommand, DEFAULT_PROGRAM};
pub use error::DriverError;
pub use process::RunOutput;
pub use replicate::{run_replicates, RunningMean};
pub use sweep::{SweepAxis, SweepGrid};
