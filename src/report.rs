//! Leveled diagnostics routed through the host's reporting sink.

use std::fmt;

/// Diagnostic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostic sink supplied by the host environment.
pub trait Reporter {
    fn print(&mut self, severity: Severity, message: &str);
}

/// Writes `level: message` lines to stderr. Used by the standalone binary.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn print(&mut self, severity: Severity, message: &str) {
        eprintln!("{}: {}", severity, message);
    }
}

/// Collects diagnostics in memory, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub messages: Vec<(Severity, String)>,
}

impl Reporter for MemoryReporter {
    fn print(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}

impl MemoryReporter {
    /// All recorded messages of one severity, in order.
    pub fn with_severity(&self, severity: Severity) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}
