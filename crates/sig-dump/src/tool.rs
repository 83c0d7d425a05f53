use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, error, warn};

use crate::{
    compilation_db::{CompilationDatabase, CompileCommand, paths},
    config::Settings,
    error::ScanError,
    frontend::{DiagnosticParser, FrontendArgs, adjust_arguments, decode_ast, run_ast_dump},
    matcher::{MatchCallback, find_function_definitions},
    options::ScanOptions,
    signature::SignatureCollector,
};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolStatus {
    /// Compile commands the front-end was run for.
    pub commands: usize,
    /// Commands whose front-end run failed.
    pub failed: usize,
    /// Sources without any compile command.
    pub skipped: usize,
    /// Definitions handed to the callback.
    pub matched: usize,
}

impl ToolStatus {
    /// `1` if any translation unit failed, else `2` if any source was
    /// skipped, else `0`.
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else if self.skipped > 0 {
            2
        } else {
            0
        }
    }
}

/// Runs the front-end over every compile command of every source and feeds
/// each translation unit to the function definition matcher.
pub struct SignatureTool {
    database: CompilationDatabase,
    sources: Vec<PathBuf>,
    frontend: FrontendArgs,
    diagnostics: DiagnosticParser,
}

impl SignatureTool {
    pub fn new(
        database: CompilationDatabase,
        sources: Vec<PathBuf>,
        frontend: FrontendArgs,
    ) -> Self {
        Self {
            database,
            sources,
            frontend,
            diagnostics: DiagnosticParser::new(),
        }
    }

    /// Process sources in order; a failing translation unit never stops the
    /// ones after it.
    pub async fn run(
        &self,
        callback: &mut dyn MatchCallback,
    ) -> ToolStatus {
        let mut status = ToolStatus::default();
        for source in &self.sources {
            let file = paths::absolute(source);
            let commands = self.database.compile_commands(&file);
            if commands.is_empty() {
                warn!("Skipping {}. Compile command not found.", file.display());
                status.skipped += 1;
                continue;
            }
            for command in &commands {
                status.commands += 1;
                match self.run_command(command, &file, callback).await {
                    Ok(matched) => status.matched += matched,
                    Err(matched) => {
                        status.matched += matched;
                        status.failed += 1;
                        error!("Error while processing {}.", file.display());
                    },
                }
            }
        }
        debug!(
            "[tool] {} commands, {} failed, {} skipped, {} definitions",
            status.commands, status.failed, status.skipped, status.matched
        );
        status
    }

    /// `Ok(matched)` on success, `Err(matched)` when the translation unit
    /// failed; definitions recovered from a partial AST are still matched.
    async fn run_command(
        &self,
        command: &CompileCommand,
        file: &Path,
        callback: &mut dyn MatchCallback,
    ) -> Result<usize, usize> {
        let args = adjust_arguments(command, &self.frontend);
        let dump = match run_ast_dump(&args, &command.directory, file).await {
            Ok(dump) => dump,
            Err(err) => {
                error!("{err}");
                return Err(0);
            },
        };

        if !dump.stderr.is_empty() {
            let _ = std::io::stderr().write_all(dump.stderr.as_bytes());
        }
        let summary = self.diagnostics.summarize(&dump.stderr);
        debug!("[tool] {}: {} errors, {} warnings", file.display(), summary.errors, summary.warnings);
        if let Some(diag) = &summary.first_error {
            debug!("[tool] first error at {}:{}:{}: {}", diag.file, diag.line, diag.column, diag.message);
        }

        let mut matched = 0;
        let mut decoded = false;
        if dump.has_ast() {
            match decode_ast(&dump.stdout, file) {
                Ok(root) => {
                    matched = find_function_definitions(&root, callback);
                    callback.on_end_of_translation_unit();
                    decoded = true;
                },
                Err(err) => warn!("{err}"),
            }
        } else {
            warn!("[tool] no usable AST for {}", file.display());
        }

        // A front-end that reports errors but exits 0 still failed the unit.
        if dump.success() && decoded && !summary.has_errors() {
            Ok(matched)
        } else {
            Err(matched)
        }
    }
}

/// Load the compilation database, run the scan and write every allowed
/// definition to `out`.
///
/// Database errors are returned before anything is run.
pub async fn scan<W: Write>(
    options: &ScanOptions,
    settings: &Settings,
    out: W,
) -> Result<ToolStatus, ScanError> {
    let database = options.load_database()?;
    let tool = SignatureTool::new(database, options.sources.clone(), options.frontend_args(settings));
    let mut collector = SignatureCollector::new(options.file_filter(), out);
    let status = tool.run(&mut collector).await;
    debug!("[tool] printed {} definitions, filtered {}", collector.emitted(), collector.filtered());
    collector.finish()?;
    Ok(status)
}

#[cfg(test)]
#[path = "../tests/src/tool_tests.rs"]
mod tests;
