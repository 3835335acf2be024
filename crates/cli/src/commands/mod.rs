pub mod replicates;
pub mod run;
pub mod stats;
pub mod sweep;
