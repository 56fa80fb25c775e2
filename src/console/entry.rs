//! Log entries and the scripted steps that produce them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

/// Severity tag of a console line. Closed set; drives the line colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
}

impl LogKind {
    /// Lowercase tag, as written in scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Success => "success",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
        }
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(LogKind::Info),
            "success" => Ok(LogKind::Success),
            "warning" | "warn" => Ok(LogKind::Warning),
            "error" => Ok(LogKind::Error),
            other => Err(format!("unknown log kind '{other}'")),
        }
    }
}

/// One timestamped line in a console. Fields are read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    kind: LogKind,
    message: String,
    timestamp: String,
}

impl LogEntry {
    /// Build an entry stamped at `at`.
    pub fn new(kind: LogKind, message: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: format_timestamp(&at),
        }
    }

    /// Build an entry stamped with the current local time.
    pub fn now(kind: LogKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, Local::now())
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Display-formatted local time (HH:MM:SS).
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Format a local time as HH:MM:SS.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Static template for one line of a simulated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedStep {
    pub kind: LogKind,
    pub message: Cow<'static, str>,
}

impl ScriptedStep {
    pub const fn new(kind: LogKind, message: &'static str) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(message),
        }
    }

    /// A step whose text is built at runtime.
    pub fn owned(kind: LogKind, message: String) -> Self {
        Self {
            kind,
            message: Cow::Owned(message),
        }
    }

    /// Stamp this step into a log entry.
    pub fn to_entry(&self) -> LogEntry {
        LogEntry::now(self.kind, self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_hms() {
        let at = Local.with_ymd_and_hms(2024, 1, 15, 14, 23, 45).unwrap();
        let entry = LogEntry::new(LogKind::Info, "hello", at);
        assert_eq!(entry.timestamp(), "14:23:45");
        assert_eq!(entry.to_string(), "[14:23:45] hello");
    }

    #[test]
    fn kind_round_trips_through_text() {
        for kind in [LogKind::Info, LogKind::Success, LogKind::Warning, LogKind::Error] {
            assert_eq!(kind.as_str().parse::<LogKind>().unwrap(), kind);
        }
        assert_eq!("WARN".parse::<LogKind>().unwrap(), LogKind::Warning);
        assert!("debug".parse::<LogKind>().is_err());
    }

    #[test]
    fn step_to_entry_keeps_kind_and_text() {
        const STEP: ScriptedStep = ScriptedStep::new(LogKind::Success, "done");
        let entry = STEP.to_entry();
        assert_eq!(entry.kind(), LogKind::Success);
        assert_eq!(entry.message(), "done");
        assert_eq!(entry.timestamp().len(), 8);
    }

    #[test]
    fn owned_step() {
        let step = ScriptedStep::owned(LogKind::Error, format!("{} broken", "a.com"));
        assert_eq!(step.message, "a.com broken");
    }
}
