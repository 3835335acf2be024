use std::io;

use thiserror::Error;

/// Error type for simulator invocation and output parsing.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The simulator executable could not be launched.
    #[error("Failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// No line of simulator output started with the expected marker.
    #[error("No line starting with '{0}' in simulator output")]
    MarkerMissing(String),

    /// A marker line was found but carried no value token after the marker.
    #[error("Marker line '{0}' carries no value token")]
    EmptyMarkerLine(String),

    /// The value token on a marker line did not parse as a number.
    #[error("Malformed value '{token}' on '{marker}' line")]
    MalformedValue {
        marker: String,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
