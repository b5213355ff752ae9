use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of an alert. Determines the status emoji of the rendered issue.
///
/// The wire format keeps severity as a plain lower-case string so that an
/// unknown value survives cleaning and is reported by validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Panic situations.
    Panic,
    /// Error situations. Alerts sent with the legacy value `critical` are
    /// converted to this severity by the cleaning pass.
    Error,
    Warning,
    /// A previous panic/error/warning situation has been resolved.
    /// Not to be confused with `Info`.
    Resolved,
    /// Fire-and-forget status messages.
    Info,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 5] = [
        Self::Panic,
        Self::Error,
        Self::Warning,
        Self::Resolved,
        Self::Info,
    ];

    /// Severities an escalation point may raise an issue to.
    pub const ESCALATION_TARGETS: [AlertSeverity; 3] = [Self::Panic, Self::Error, Self::Warning];

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref() {
            "panic" => Some(Self::Panic),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "resolved" => Some(Self::Resolved),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Resolved => "resolved",
            Self::Info => "info",
        }
    }

    /// Comparison weight: panic > error > warning > resolved = info.
    pub fn priority(&self) -> i32 {
        match self {
            Self::Panic => 3,
            Self::Error => 2,
            Self::Warning => 1,
            Self::Resolved | Self::Info => 0,
        }
    }

    pub fn is_escalation_target(&self) -> bool {
        Self::ESCALATION_TARGETS.contains(self)
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

pub fn severity_is_valid(code: &str) -> bool {
    AlertSeverity::from_code(code).is_some()
}

/// Priority of a raw severity string, `-1` when the value is not a known severity.
pub fn severity_priority(code: &str) -> i32 {
    AlertSeverity::from_code(code)
        .map(|s| s.priority())
        .unwrap_or(-1)
}

pub fn valid_severities() -> Vec<&'static str> {
    AlertSeverity::ALL.iter().map(AlertSeverity::as_code).collect()
}
