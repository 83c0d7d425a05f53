use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Note,
}

/// One `file:line:col: severity: message` line from clang's stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
}

/// Counts of what the front-end reported for one translation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    pub errors: usize,
    pub warnings: usize,
    pub first_error: Option<Diagnostic>,
}

impl DiagnosticSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

pub struct DiagnosticParser {
    diagnostic_re: Regex,
}

impl Default for DiagnosticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticParser {
    pub fn new() -> Self {
        Self {
            diagnostic_re: Regex::new(r"^(.*?):(\d+):(\d+):\s*(fatal error|error|warning|note):\s*(.*)$").unwrap(),
        }
    }

    /// Attempt to parse a single line of compiler output.
    ///
    /// Expected format: `filename:line:column: severity: message`
    pub fn parse_line(
        &self,
        line: &str,
    ) -> Option<Diagnostic> {
        let caps = self.diagnostic_re.captures(line)?;

        let severity = match caps.get(4)?.as_str() {
            "fatal error" => Severity::Fatal,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Note,
        };

        Some(Diagnostic {
            file: caps.get(1)?.as_str().to_owned(),
            line: caps.get(2)?.as_str().parse().ok()?,
            column: caps.get(3)?.as_str().parse().ok()?,
            severity,
            message: caps.get(5)?.as_str().to_owned(),
        })
    }

    pub fn parse(
        &self,
        output: &str,
    ) -> Vec<Diagnostic> {
        output.lines().filter_map(|line| self.parse_line(line)).collect()
    }

    pub fn summarize(
        &self,
        output: &str,
    ) -> DiagnosticSummary {
        let mut summary = DiagnosticSummary::default();
        for diag in self.parse(output) {
            match diag.severity {
                Severity::Fatal | Severity::Error => {
                    summary.errors += 1;
                    summary.first_error.get_or_insert(diag);
                },
                Severity::Warning => summary.warnings += 1,
                Severity::Note => {},
            }
        }
        summary
    }
}

#[cfg(test)]
#[path = "../../tests/src/frontend/diagnostics_tests.rs"]
mod tests;
