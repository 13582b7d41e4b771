//! User-facing diagnostics for the driver.
//!
//! Problems with the user's input (missing sources, bad assembly
//! descriptions) are collected rather than returned as errors, so one run
//! reports all of them. The command decides whether to stop.

use std::fmt;

/// Driver diagnostic codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// No source files found
    E0001,
    /// Source root does not exist
    E0002,
    /// Assembly description unreadable or invalid
    E0003,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "no source files",
            ErrorCode::E0002 => "source root does not exist",
            ErrorCode::E0003 => "invalid assembly description",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Diagnostics of one driver run, in report order.
#[derive(Default, Debug)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, severity: Severity, code: ErrorCode, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            code,
            severity,
            message: message.into(),
        };
        tracing::debug!(%diagnostic, "reported");
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.report(Severity::Error, code, message);
    }

    pub fn warning(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.report(Severity::Warning, code, message);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
            .count()
    }

    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|diagnostic| diagnostic.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// One line per diagnostic.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
        out
    }
}
