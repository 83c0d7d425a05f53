use std::path::Path;

use tracing::debug;

use super::{CompileCommand, paths};

/// Borrow the command of the known file closest to `file` and retarget it.
///
/// Candidates rank by matching file stem (`foo.h` prefers `foo.cpp`), then by
/// the number of leading path components shared with `file`. Earlier
/// database entries win ties.
pub(super) fn infer_command(
    commands: &[CompileCommand],
    file: &Path,
) -> Option<CompileCommand> {
    let stem = file.file_stem();
    let mut best: Option<(&CompileCommand, (bool, usize))> = None;
    for cmd in commands {
        let candidate = paths::normalize_against(&cmd.directory, &cmd.filename);
        let score = (candidate.file_stem() == stem, paths::shared_prefix_len(&candidate, file));
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((cmd, score));
        }
    }

    let (proxy, _) = best?;
    debug!("[compdb] inferring command for {} from {}", file.display(), proxy.filename.display());
    Some(transfer(proxy, file))
}

/// Rewrite `proxy` so it compiles `file` instead of its own file.
fn transfer(
    proxy: &CompileCommand,
    file: &Path,
) -> CompileCommand {
    let proxy_name = proxy.filename.display().to_string();
    let proxy_abs = paths::normalize_against(&proxy.directory, &proxy.filename).display().to_string();
    let target = file.display().to_string();

    let mut arguments = Vec::with_capacity(proxy.arguments.len() + 2);
    let mut has_language = false;
    let mut replaced = false;
    for arg in &proxy.arguments {
        if arg == "-x" || (arg.starts_with("-x") && arg.len() > 2) {
            has_language = true;
        }
        if !replaced && (*arg == proxy_name || *arg == proxy_abs) {
            replaced = true;
            continue;
        }
        arguments.push(arg.clone());
    }

    // A header borrowing a source file's command has to be parsed as a header.
    if paths::is_header(file) && !paths::is_header(&proxy.filename) && !has_language {
        arguments.push("-x".to_owned());
        let lang = if paths::is_c_source(&proxy.filename) {
            "c-header"
        } else {
            "c++-header"
        };
        arguments.push(lang.to_owned());
    }
    arguments.push(target);

    CompileCommand {
        directory: proxy.directory.clone(),
        filename: file.to_path_buf(),
        arguments,
    }
}

#[cfg(test)]
#[path = "../../tests/src/compilation_db/interpolate_tests.rs"]
mod tests;
