// VisitDesk - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The time editor in core::time_input never produces any of these: its
// input problems are absorbed. Errors exist for visit validation and
// configuration loading only.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for VisitDesk operations.
#[derive(Debug)]
pub enum VisitDeskError {
    /// A visit draft failed validation.
    Visit(VisitError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for VisitDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visit(e) => write!(f, "Visit error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for VisitDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Visit(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Visit errors
// ---------------------------------------------------------------------------

/// Reasons a visit draft cannot be recorded.
#[derive(Debug)]
pub enum VisitError {
    /// The patient name is blank.
    MissingPatient,

    /// A free-text field exceeds its length limit.
    TooLong {
        field: &'static str,
        length: usize,
        max_length: usize,
    },

    /// The visit date does not match the expected format.
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    /// The start time was left unset.
    MissingStartTime,

    /// A time field holds a value that is not a canonical `HH:MM`.
    InvalidTime { field: &'static str, value: String },

    /// The visit ends before it starts.
    EndBeforeStart { start: String, end: String },

    /// A CPAP metric is outside its allowed range.
    MetricOutOfRange {
        metric: &'static str,
        value: String,
        expected: String,
    },
}

impl fmt::Display for VisitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPatient => write!(f, "Patient name is required"),
            Self::TooLong {
                field,
                length,
                max_length,
            } => write!(
                f,
                "'{field}' is {length} characters, exceeds maximum of {max_length}"
            ),
            Self::InvalidDate { input, source } => {
                write!(f, "Visit date '{input}' is not a YYYY-MM-DD date: {source}")
            }
            Self::MissingStartTime => write!(f, "Start time is required"),
            Self::InvalidTime { field, value } => {
                write!(f, "'{field}' = '{value}' is not a valid HH:MM time")
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "Visit ends at {end}, before it starts at {start}")
            }
            Self::MetricOutOfRange {
                metric,
                value,
                expected,
            } => write!(f, "'{metric}' = {value} is out of range. Expected: {expected}"),
        }
    }
}

impl std::error::Error for VisitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<VisitError> for VisitDeskError {
    fn from(e: VisitError) -> Self {
        Self::Visit(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for VisitDeskError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for VisitDesk results.
pub type Result<T> = std::result::Result<T, VisitDeskError>;
