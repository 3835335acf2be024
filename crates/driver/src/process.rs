//! Running the external simulator.

use log::{debug, warn};

use crate::command::SlimCommand;
use crate::error::DriverError;

/// Captured text output of one simulator run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run the simulator to completion and capture its output.
///
/// Blocks until the subprocess exits. The exit status is not inspected; a
/// model that fails mid-run simply produces output without the expected
/// marker lines, which the parsing layer reports. Only a failure to launch
/// the executable at all is an error here.
pub fn run(cmd: &SlimCommand) -> Result<RunOutput, DriverError> {
    debug!("spawning: {} {}", cmd.program(), cmd.args().join(" "));

    let output = cmd
        .to_command()
        .output()
        .map_err(|source| DriverError::Spawn {
            program: cmd.program().to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !stderr.is_empty() {
        warn!("{} wrote to stderr: {}", cmd.program(), stderr.trim_end());
    }

    Ok(RunOutput { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let cmd = SlimCommand::new("model.slim").with_program("definitely-not-a-real-simulator");
        let err = run(&cmd).unwrap_err();
        assert!(matches!(err, DriverError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        // `echo` prints its arguments, so the "source file" round-trips
        // through the subprocess onto stdout.
        let cmd = SlimCommand::new("model.slim").with_program("echo");
        let out = run(&cmd).unwrap();
        assert_eq!(out.stdout.trim_end(), "model.slim");
        assert!(out.stderr.is_empty());
    }
}
