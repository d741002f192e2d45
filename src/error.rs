//! Error types
//!
//! Zero overlap is not an error: it is the game-over signal and is handled by
//! the state machine. Everything here is either a caller contract violation or
//! a broken internal invariant.

use std::fmt;

/// Simulation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Viewport width was zero, negative, or not finite
    InvalidViewport { width: f32 },
    /// No placed block lies beneath the moving block. The foundation always
    /// should, so this means the state is corrupt.
    NoSupportBlock { level: u32, bottom: f32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidViewport { width } => {
                write!(f, "invalid viewport width: {width}")
            }
            SimError::NoSupportBlock { level, bottom } => write!(
                f,
                "no support block beneath level {level} (bottom edge at {bottom})"
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON could not be parsed
    Parse(String),
    /// A field holds a value the simulation cannot run with
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Best-score storage errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// I/O error
    Io(String),
    /// Stored record could not be encoded or decoded
    Serde(String),
    /// Backing storage does not exist in this environment
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {msg}"),
            StoreError::Serde(msg) => write!(f, "serialization error: {msg}"),
            StoreError::Unavailable => write!(f, "storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e.to_string())
    }
}
