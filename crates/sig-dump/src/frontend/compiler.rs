use std::{
    path::Path,
    process::{ExitStatus, Stdio},
};

use serde::Deserialize;
use tracing::debug;

use super::clang_command;
use crate::{error::FrontendError, matcher::Node};

/// Raw result of one front-end run.
#[derive(Debug)]
pub struct AstDump {
    pub status: ExitStatus,
    /// JSON AST, possibly partial when the translation unit has errors.
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl AstDump {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Clang still dumps the AST it recovered after errors; an empty or
    /// non-object stdout means there is nothing to scan.
    pub fn has_ast(&self) -> bool {
        self.stdout.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{')
    }
}

/// Run `args` (executable first) in `directory` and capture the AST dump.
pub async fn run_ast_dump(
    args: &[String],
    directory: &Path,
    file: &Path,
) -> Result<AstDump, FrontendError> {
    let Some((program, rest)) = args.split_first() else {
        return Err(FrontendError::Spawn {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        });
    };

    debug!("[frontend] (cd {} && {})", directory.display(), args.join(" "));

    let output = clang_command(program)
        .args(rest)
        .current_dir(directory)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| FrontendError::Spawn {
            program: program.clone(),
            source,
        })?;

    debug!("[frontend] {} exited with {}, {} bytes of JSON", file.display(), output.status, output.stdout.len());

    Ok(AstDump {
        status: output.status,
        stdout: output.stdout,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Deserialize a translation unit from clang's `-ast-dump=json` output.
pub fn decode_ast(
    json: &[u8],
    file: &Path,
) -> Result<Node, FrontendError> {
    if json.iter().all(u8::is_ascii_whitespace) {
        return Err(FrontendError::EmptyDump {
            file: file.to_path_buf(),
        });
    }
    // Real translation units nest far deeper than serde_json's default
    // recursion limit; grow the stack on demand instead.
    let mut deserializer = serde_json::Deserializer::from_slice(json);
    deserializer.disable_recursion_limit();
    let deserializer = serde_stacker::Deserializer::new(&mut deserializer);
    Node::deserialize(deserializer).map_err(|source| FrontendError::Decode {
        file: file.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src/frontend/compiler_tests.rs"]
mod tests;
