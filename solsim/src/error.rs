//! Library error type.
//!
//! Everything the core can reject ends up here. Degenerate geometry during a
//! tick is not an error: the offending pair is skipped and the run continues.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SimError {
    /// A body was given zero, negative or non-finite mass
    NonPositiveMass(f64),
    /// Orbiting body count outside `0..=MAX_ORBITING_BODIES`
    BodyCountOutOfRange(usize),
    /// A physical parameter that must be positive and finite was not
    InvalidParameter { name: &'static str, value: f64 },
    /// The configuration file could not be opened
    ConfigIo { path: PathBuf, source: std::io::Error },
    /// The configuration was not valid YAML for the expected shape
    ConfigParse(serde_yaml::Error),
    /// The periodic timer thread could not be spawned
    Timer(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveMass(m) => write!(f, "body mass must be positive, got {m}"),
            SimError::BodyCountOutOfRange(n) => write!(f, "orbiting body count {n} is out of range"),
            SimError::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` must be positive and finite, got {value}")
            }
            SimError::ConfigIo { path, source } => {
                write!(f, "failed to read configuration {}: {source}", path.display())
            }
            SimError::ConfigParse(err) => write!(f, "failed to parse configuration: {err}"),
            SimError::Timer(err) => write!(f, "failed to start simulation timer: {err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::ConfigIo { source, .. } => Some(source),
            SimError::ConfigParse(err) => Some(err),
            SimError::Timer(err) => Some(err),
            _ => None,
        }
    }
}
