use std::path::{Path, PathBuf};

use super::{CompileCommand, paths};
use crate::error::CompilationDatabaseError;

/// Placeholder `argv[0]`; the front-end executable replaces it anyway.
const TOOL_ARGV0: &str = "clang-tool";

/// The same flags for every file, run from one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCompilationDatabase {
    directory: PathBuf,
    args: Vec<String>,
}

impl FixedCompilationDatabase {
    pub fn new(
        directory: impl Into<PathBuf>,
        args: Vec<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            args,
        }
    }

    /// Flags given after `--` on the command line, run from the current
    /// directory.
    pub fn from_command_line(args: Vec<String>) -> Self {
        Self::new(paths::absolute(Path::new(".")), args)
    }

    /// `compile_flags.txt`: one flag per line, blank lines ignored. Commands
    /// run from the directory that holds the file.
    pub fn load_flags_file(path: &Path) -> Result<Self, CompilationDatabaseError> {
        let content = std::fs::read_to_string(path).map_err(|source| CompilationDatabaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let args = content.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_owned).collect();
        let directory = path.parent().map(paths::absolute).unwrap_or_else(|| paths::absolute(Path::new(".")));
        Ok(Self::new(directory, args))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn compile_commands(
        &self,
        file: &Path,
    ) -> Vec<CompileCommand> {
        let mut arguments = Vec::with_capacity(self.args.len() + 2);
        arguments.push(TOOL_ARGV0.to_owned());
        arguments.extend(self.args.iter().cloned());
        arguments.push(file.display().to_string());
        vec![CompileCommand {
            directory: self.directory.clone(),
            filename: file.to_path_buf(),
            arguments,
        }]
    }
}
