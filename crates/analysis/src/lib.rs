//! # Analysis Crate
//!
//! Population genetics summary statistics over aligned DNA sequences:
//! - Allele encoding and per-site allele counts
//! - Nucleotide diversity (π)
//! - Watterson's estimator (θ_W)
//! - Tajima's D

pub mod allele;
pub mod diversity;
pub mod utils;

pub use allele::{encode_alignment, Allele, AlleleCounts, AlignmentError};
pub use diversity::{nucleotide_diversity, tajimas_d, wattersons_theta};
