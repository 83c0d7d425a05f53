//! Running clang over one compile command and decoding its JSON AST.

mod adjust;
mod compiler;
mod diagnostics;

pub use adjust::{AST_DUMP_ARGS, FrontendArgs, adjust_arguments};
pub use compiler::{AstDump, decode_ast, run_ast_dump};
pub use diagnostics::{Diagnostic, DiagnosticParser, DiagnosticSummary, Severity};
use tokio::process::Command;

/// The front-end process dies with us if the scan is dropped mid-run.
pub(crate) fn clang_command(program: &str) -> Command {
    let mut command = Command::new(program);
    command.kill_on_drop(true);
    command
}
