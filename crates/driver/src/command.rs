//! Construction of SLiM command lines.
//!
//! SLiM receives model parameters as `-d NAME=value` constant definitions,
//! with the model source file as the final positional argument. `SlimCommand`
//! assembles that argument list without executing anything; execution lives
//! in [`crate::process`].

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Name of the simulator executable, resolved via `PATH` unless overridden.
pub const DEFAULT_PROGRAM: &str = "slim";

/// A value for a SLiM `-d` constant definition.
///
/// Rendering follows Eidos literal syntax: logicals are the single-letter
/// tokens `T`/`F`, floats keep a trailing `.0` when integral so SLiM defines
/// a float constant rather than an integer one.
#[derive(Debug, Clone, PartialEq)]
pub enum DefineValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug formatting keeps the ".0" on integral floats.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(true) => write!(f, "T"),
            Self::Bool(false) => write!(f, "F"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for DefineValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for DefineValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for DefineValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for DefineValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

/// Builder for one invocation of the simulator.
///
/// Definitions are emitted in insertion order; the source file is always the
/// final argument.
#[derive(Debug, Clone)]
pub struct SlimCommand {
    program: String,
    defines: Vec<(String, DefineValue)>,
    source: PathBuf,
}

impl SlimCommand {
    /// Create a command running `source` with the default `slim` executable.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            defines: Vec::new(),
            source: source.into(),
        }
    }

    /// Override the simulator executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Append a `-d name=value` constant definition.
    pub fn define(mut self, name: impl Into<String>, value: impl Into<DefineValue>) -> Self {
        self.defines.push((name.into(), value.into()));
        self
    }

    /// The executable this command will invoke.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The model source file.
    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    /// Render the argument list: `-d` pairs first, source file last.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.defines.len() * 2 + 1);
        for (name, value) in &self.defines {
            args.push("-d".to_string());
            args.push(format!("{name}={value}"));
        }
        args.push(self.source.to_string_lossy().into_owned());
        args
    }

    /// Build a ready-to-spawn [`Command`].
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}
