use std::{collections::BTreeSet, io::Write};

use tracing::trace;

use super::FunctionDefinition;
use crate::matcher::{FunctionMatch, MatchCallback};

/// Restricts output to an exact set of file paths.
///
/// Paths are compared as plain strings: `a.cpp` and `./a.cpp` are different
/// entries. An empty filter lets everything through.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    files: BTreeSet<String>,
}

impl FileFilter {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn allows(
        &self,
        file: &str,
    ) -> bool {
        self.files.is_empty() || self.files.contains(file)
    }
}

/// Match callback that formats each allowed definition as one line on `out`.
///
/// Write failures are remembered rather than raised from inside the
/// traversal; the first one is returned by [`SignatureCollector::finish`].
pub struct SignatureCollector<W: Write> {
    filter: FileFilter,
    out: W,
    emitted: usize,
    filtered: usize,
    error: Option<std::io::Error>,
}

impl<W: Write> SignatureCollector<W> {
    pub fn new(
        filter: FileFilter,
        out: W,
    ) -> Self {
        Self {
            filter,
            out,
            emitted: 0,
            filtered: 0,
            error: None,
        }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn filtered(&self) -> usize {
        self.filtered
    }

    /// Flush the writer and hand it back, surfacing the first write error.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

}

impl<W: Write> MatchCallback for SignatureCollector<W> {
    fn run(
        &mut self,
        found: &FunctionMatch<'_>,
    ) {
        if self.error.is_some() {
            return;
        }
        let Some(def) = FunctionDefinition::from_match(found) else {
            trace!("[collector] skipping {} without a location", found.name());
            return;
        };
        if !self.filter.allows(&def.file) {
            self.filtered += 1;
            return;
        }
        match writeln!(self.out, "{def}") {
            Ok(()) => self.emitted += 1,
            Err(err) => self.error = Some(err),
        }
    }

    // Keep stdout roughly in step with the diagnostics clang writes to stderr.
    fn on_end_of_translation_unit(&mut self) {
        if self.error.is_none()
            && let Err(err) = self.out.flush()
        {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/signature/collector_tests.rs"]
mod tests;
