//! Per-file diagnostic accumulation
//!
//! A [`Report`] collects every error, warning and informational message produced while checking one
//! descriptor. Messages are prefixed with the labels of the scopes that were open when they were emitted
//! (for example `cppDep.0` and the archive file name), so each finding can be traced back to the
//! dependency and artifact that caused it.

use colored::Colorize;
use std::fmt;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub context: Vec<String>,
    pub message: String,
}

impl Diagnostic {
    /// Render with a colored severity label for terminal output
    pub fn render(&self) -> String {
        let label = match self.severity {
            Severity::Error => self.severity.label().red().bold(),
            Severity::Warning => self.severity.label().yellow().bold(),
            Severity::Info => self.severity.label().cyan(),
        };
        format!("{label}: {}", self.body())
    }

    fn body(&self) -> String {
        let mut body = String::new();
        for label in &self.context {
            body.push_str(label);
            body.push_str(": ");
        }
        body.push_str(&self.message);
        body
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.body())
    }
}

/// Diagnostics and counters for a single descriptor
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
    warnings: usize,
    context: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors += 1;
        self.push(Severity::Error, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings += 1;
        self.push(Severity::Warning, message.into());
    }

    /// Informational messages are surfaced but never counted
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.diagnostics.push(Diagnostic {
            severity,
            context: self.context.clone(),
            message,
        });
    }

    /// Open a context scope. The label is popped again when the returned guard is dropped, whichever
    /// way the enclosing check exits.
    pub fn scope(&mut self, label: impl Into<String>) -> ScopedContext<'_> {
        self.context.push(label.into());
        ScopedContext { report: self }
    }

    /// Labels of the currently open scopes, outermost first
    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Diagnostics of the given severity whose message contains `needle`
    pub fn matching<'a>(
        &'a self,
        severity: Severity,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity && d.message.contains(needle))
    }

    pub fn summary(&self) -> String {
        format!("{} errors, {} warnings", self.errors, self.warnings)
    }
}

/// Guard returned by [`Report::scope`]
pub struct ScopedContext<'a> {
    report: &'a mut Report,
}

impl Deref for ScopedContext<'_> {
    type Target = Report;

    fn deref(&self) -> &Report {
        self.report
    }
}

impl DerefMut for ScopedContext<'_> {
    fn deref_mut(&mut self) -> &mut Report {
        self.report
    }
}

impl Drop for ScopedContext<'_> {
    fn drop(&mut self) {
        self.report.context.pop();
    }
}
