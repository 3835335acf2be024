//! Shared helper functions for the analysis statistics.

/// Cache for commonly used harmonic numbers.
/// Avoids recalculating for common sample sizes.
/// Note: harmonic_number(n) = sum_{i=1}^{n-1} 1/i
static HARMONIC_CACHE: [f64; 11] = [
    0.0,                // n=0 (unused)
    0.0,                // n=1
    1.0,                // n=2
    1.5,                // n=3
    1.8333333333333333, // n=4
    2.083333333333333,  // n=5
    2.283333333333333,  // n=6
    2.45,               // n=7
    2.5928571428571425, // n=8
    2.7178571428571425, // n=9
    2.8289682539682537, // n=10
];

/// Calculate harmonic number efficiently
#[inline]
pub fn harmonic_number(n: usize) -> f64 {
    if n < HARMONIC_CACHE.len() {
        HARMONIC_CACHE[n]
    } else {
        (1..n).map(|i| 1.0 / i as f64).sum()
    }
}
