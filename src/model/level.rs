//! Log severity levels
//!
//! Records carry a bare numeric code. Known codes resolve to a [`Severity`];
//! anything else stays an unknown [`LogLevel`] that still renders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of severities a log backend emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Detailed debug information
    Debug,
    /// Interesting events
    Info,
    /// Normal but significant events
    Notice,
    /// Exceptional occurrences that are not errors
    Warning,
    /// Runtime errors
    Error,
    /// Critical conditions
    Critical,
    /// Action must be taken immediately
    Alert,
    /// System is unusable
    Emergency,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Self; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    /// Numeric code as stored by the backend
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Debug => 100,
            Self::Info => 200,
            Self::Notice => 250,
            Self::Warning => 300,
            Self::Error => 400,
            Self::Critical => 500,
            Self::Alert => 550,
            Self::Emergency => 600,
        }
    }

    /// Resolve a numeric code, or `None` for codes outside the fixed set
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            100 => Some(Self::Debug),
            200 => Some(Self::Info),
            250 => Some(Self::Notice),
            300 => Some(Self::Warning),
            400 => Some(Self::Error),
            500 => Some(Self::Critical),
            550 => Some(Self::Alert),
            600 => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Full upper-case name, e.g. `WARNING`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Alert => "ALERT",
            Self::Emergency => "EMERGENCY",
        }
    }

    /// Three-letter label used in list output
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::Debug => "DBG",
            Self::Info => "INF",
            Self::Notice => "NTC",
            Self::Warning => "WRN",
            Self::Error => "ERR",
            Self::Critical => "CRT",
            Self::Alert => "ALR",
            Self::Emergency => "EMR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Level of a single record, serialized as its bare numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel {
    /// Numeric code, possibly outside the known set
    pub code: i64,
}

impl LogLevel {
    /// Wrap a raw code
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self { code }
    }

    /// The known severity for this code, if any
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        Severity::from_code(self.code)
    }
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        Self::new(severity.code())
    }
}
