//! Output sink and execution results
//!
//! Commands never write to the screen directly; they emit lines into an
//! [`Output`] buffer together with a severity, and the host decides how to
//! render them: `info` for normal output, `success`/`error` for highlighted
//! diagnostics.

use serde::Serialize;

/// Severity of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A single line of command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub severity: Severity,
    pub text: String,
}

/// Buffering output sink passed to every command handler.
#[derive(Debug, Default)]
pub struct Output {
    lines: Vec<Line>,
}

impl Output {
    /// Create an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a line at info severity.
    pub fn print(&mut self, text: impl Into<String>) {
        self.push(Severity::Info, text);
    }

    /// Emit a line at success severity.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Severity::Success, text);
    }

    /// Emit a line at error severity.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Severity::Error, text);
    }

    fn push(&mut self, severity: Severity, text: impl Into<String>) {
        self.lines.push(Line {
            severity,
            text: text.into(),
        });
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn into_result(self, outcome: Outcome) -> ExecResult {
        ExecResult {
            lines: self.lines,
            outcome,
        }
    }
}

/// Definite result of one dispatch: the dispatcher never propagates a fault
/// further up than this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Result of executing one input line via [`Shell::exec`](crate::Shell::exec).
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Output lines in emission order.
    pub lines: Vec<Line>,
    /// Whether the dispatched command succeeded.
    pub outcome: Outcome,
}

impl ExecResult {
    /// Non-error output joined with newlines, trailing newline included.
    pub fn stdout(&self) -> String {
        self.join(|s| s != Severity::Error)
    }

    /// Error output joined with newlines, trailing newline included.
    pub fn stderr(&self) -> String {
        self.join(|s| s == Severity::Error)
    }

    /// Check if the result indicates success.
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    fn join(&self, keep: impl Fn(Severity) -> bool) -> String {
        let mut out = String::new();
        for line in self.lines.iter().filter(|l| keep(l.severity)) {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_excludes_errors() {
        let mut out = Output::new();
        out.print("hello");
        out.error("oops");
        out.success("done");
        let result = out.into_result(Outcome::Success);
        assert_eq!(result.stdout(), "hello\ndone\n");
        assert_eq!(result.stderr(), "oops\n");
    }

    #[test]
    fn test_line_json_shape() {
        let line = Line {
            severity: Severity::Error,
            text: "oops".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            serde_json::json!({"severity": "error", "text": "oops"})
        );
    }

    #[test]
    fn test_empty_output() {
        let result = Output::new().into_result(Outcome::Success);
        assert_eq!(result.stdout(), "");
        assert_eq!(result.stderr(), "");
        assert!(result.is_success());
    }
}
