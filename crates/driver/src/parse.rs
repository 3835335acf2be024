//! Extraction of tagged payload lines from simulator output.
//!
//! The SLiM models in this project tag the lines meant for downstream
//! consumption with a fixed prefix so they can be located amid the
//! simulator's own log output. Two conventions are in use: replicate models
//! report a single metric on a `#OUTPUT:` line, and the gene drive models
//! emit CSV fragments on `OUT:` lines.

use crate::error::DriverError;

/// Marker used by replicate models to report a single metric.
pub const REPLICATE_MARKER: &str = "#OUTPUT:";

/// Prefix on payload lines produced by the gene drive models.
pub const PAYLOAD_PREFIX: &str = "OUT:";

/// Parse the metric from the first line starting with `marker`.
///
/// The value is the second whitespace-separated token of the marker line
/// (the first token is the marker itself). Returns `Ok(None)` when no line
/// starts with the marker; a marker line with a missing or non-numeric token
/// is an error.
pub fn marker_value(output: &str, marker: &str) -> Result<Option<f64>, DriverError> {
    let line = match output.lines().find(|line| line.starts_with(marker)) {
        Some(line) => line,
        None => return Ok(None),
    };

    let token = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| DriverError::EmptyMarkerLine(marker.to_string()))?;

    let value = token
        .parse::<f64>()
        .map_err(|source| DriverError::MalformedValue {
            marker: marker.to_string(),
            token: token.to_string(),
            source,
        })?;

    Ok(Some(value))
}

/// Concatenate the payload of every line starting with `prefix`.
///
/// The prefix is stripped and the remainders are joined with no separator;
/// payload lines carry their own delimiters. Non-matching lines are
/// discarded.
pub fn payload(output: &str, prefix: &str) -> String {
    let mut collected = String::new();
    for line in output.lines() {
        if let Some(rest) = line.strip_prefix(prefix) {
            collected.push_str(rest);
        }
    }
    collected
}
