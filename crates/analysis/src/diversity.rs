//! Diversity metrics for population genetics
//!
//! Implements standard measures of genetic diversity computed from per-site
//! allele counts:
//! - Nucleotide diversity (π)
//! - Watterson's estimator (θ_W)
//! - Tajima's D

use rayon::prelude::*;

use crate::allele::AlleleCounts;
use crate::utils::harmonic_number;

/// Calculate nucleotide diversity (π) per site.
///
/// Nucleotide diversity is the average number of nucleotide differences
/// per site between two sequences.
///
/// # Formula
///
/// $$\pi = \frac{1}{L}\sum_{s} \frac{d_s}{n_s(n_s-1)/2}$$
///
/// where $d_s$ is the number of differing pairs at site $s$, computed from
/// the allele counts as $(n_s^2 - \sum_k c_{sk}^2)/2$, and $n_s$ is the
/// number of called alleles at that site. Sites with fewer than two called
/// alleles contribute zero.
///
/// # Returns
///
/// Average pairwise diversity per site, 0.0 for alignments with fewer than
/// two haplotypes or no sites.
///
/// # References
///
/// Nei, M., & Li, W. H. (1979). Mathematical model for studying genetic
/// variation in terms of restriction endonucleases. PNAS, 76(10), 5269-5273.
pub fn nucleotide_diversity(counts: &AlleleCounts) -> f64 {
    let length = counts.sites();
    if counts.haplotypes() < 2 || length == 0 {
        return 0.0;
    }

    mean_pairwise_differences(counts) / length as f64
}

/// Calculate Watterson's estimator (θ_W) per site.
///
/// Estimates θ = 4Nμ from the number of segregating sites.
///
/// # Formula
///
/// $$\theta_W = \frac{S}{a_n \cdot L}$$
///
/// where $S$ is the number of segregating sites and
/// $a_n = \sum_{i=1}^{n-1} \frac{1}{i}$ over the $n$ haplotypes.
///
/// # References
///
/// Watterson, G. A. (1975). On the number of segregating sites in genetical
/// models without recombination. Theoretical Population Biology, 7(2), 256-276.
pub fn wattersons_theta(counts: &AlleleCounts) -> f64 {
    let n = counts.haplotypes();
    let length = counts.sites();
    if n < 2 || length == 0 {
        return 0.0;
    }

    let s = counts.segregating_sites() as f64;
    let a_n = harmonic_number(n);

    s / (a_n * length as f64)
}

/// Calculate Tajima's D statistic.
///
/// Tajima's D tests the hypothesis of neutral evolution by comparing two
/// estimates of θ: one based on the number of segregating sites and one
/// based on nucleotide diversity.
///
/// # Formula
///
/// $$D = \frac{\pi - \theta_W}{\sqrt{Var(\pi - \theta_W)}}$$
///
/// Positive D suggests balancing selection or population contraction.
/// Negative D suggests purifying selection or population expansion.
///
/// # Returns
///
/// Tajima's D. Returns 0.0 if there is no variation or the variance term is
/// not positive.
///
/// # References
///
/// Tajima, F. (1989). Statistical method for testing the neutral mutation
/// hypothesis by DNA polymorphism. Genetics, 123(3), 585-595.
pub fn tajimas_d(counts: &AlleleCounts) -> f64 {
    let n = counts.haplotypes();
    let length = counts.sites();
    if n < 2 || length == 0 {
        return 0.0;
    }

    let s = counts.segregating_sites() as f64;
    if s == 0.0 {
        return 0.0;
    }

    // π and θ_W as totals over the alignment rather than per site.
    let pi_total = mean_pairwise_differences(counts);
    let a1 = harmonic_number(n);
    let theta_total = s / a1;

    // Variance components
    let n_f64 = n as f64;
    let a2: f64 = (1..n).map(|i| 1.0 / (i * i) as f64).sum();

    let b1 = (n_f64 + 1.0) / (3.0 * (n_f64 - 1.0));
    let b2 = 2.0 * (n_f64 * n_f64 + n_f64 + 3.0) / (9.0 * n_f64 * (n_f64 - 1.0));

    let c1 = b1 - 1.0 / a1;
    let c2 = b2 - (n_f64 + 2.0) / (a1 * n_f64) + a2 / (a1 * a1);

    let e1 = c1 / a1;
    let e2 = c2 / (a1 * a1 + a2);

    let var = e1 * s + e2 * s * (s - 1.0);
    if var <= 0.0 {
        return 0.0;
    }

    (pi_total - theta_total) / var.sqrt()
}

// ===== Helper Functions =====

/// Sum over sites of the mean pairwise difference at each site.
///
/// Equals π before division by the alignment length. Missing data shrinks a
/// site's own pair denominator.
fn mean_pairwise_differences(counts: &AlleleCounts) -> f64 {
    (0..counts.sites())
        .into_par_iter()
        .map(|site| {
            let called = counts.called(site);
            if called < 2 {
                return 0.0;
            }

            let sum_squared: usize = counts.site(site).iter().map(|&c| c * c).sum();
            let differing_pairs = (called * called - sum_squared) as f64 / 2.0;
            let pairs = (called * (called - 1)) as f64 / 2.0;

            differing_pairs / pairs
        })
        .sum()
}
