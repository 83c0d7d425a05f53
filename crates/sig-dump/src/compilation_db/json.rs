use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use super::{CompileCommand, interpolate, paths};
use crate::error::CompilationDatabaseError;

/// One raw entry of `compile_commands.json`.
#[derive(Debug, Deserialize)]
struct Entry {
    directory: String,
    file: String,
    #[serde(default)]
    arguments: Option<Vec<String>>,
    #[serde(default)]
    command: Option<String>,
}

/// A parsed `compile_commands.json`, indexed by normalized absolute path.
#[derive(Debug, Clone, Default)]
pub struct JsonCompilationDatabase {
    commands: Vec<CompileCommand>,
    /// Normalized absolute file path -> indices into `commands`.
    by_file: HashMap<PathBuf, Vec<usize>>,
}

impl JsonCompilationDatabase {
    pub fn load(path: &Path) -> Result<Self, CompilationDatabaseError> {
        let content = std::fs::read_to_string(path).map_err(|source| CompilationDatabaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, path)
    }

    /// Parse database text. `path` is only used in error messages.
    pub fn from_json_str(
        content: &str,
        path: &Path,
    ) -> Result<Self, CompilationDatabaseError> {
        let entries: Vec<Entry> = serde_json::from_str(content).map_err(|source| CompilationDatabaseError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let mut db = Self::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let arguments = match (entry.arguments, entry.command) {
                (Some(args), _) => args,
                (None, Some(command)) => shlex::split(&command).ok_or_else(|| CompilationDatabaseError::Entry {
                    path: path.to_path_buf(),
                    index,
                    message: format!("unbalanced quoting in command: {command}"),
                })?,
                (None, None) => {
                    return Err(CompilationDatabaseError::Entry {
                        path: path.to_path_buf(),
                        index,
                        message: "neither \"arguments\" nor \"command\" given".to_owned(),
                    });
                },
            };
            if arguments.is_empty() {
                return Err(CompilationDatabaseError::Entry {
                    path: path.to_path_buf(),
                    index,
                    message: "empty command line".to_owned(),
                });
            }

            let directory = PathBuf::from(entry.directory);
            let filename = PathBuf::from(entry.file);
            let key = paths::normalize_against(&directory, &filename);
            db.by_file.entry(key).or_default().push(db.commands.len());
            db.commands.push(CompileCommand {
                directory,
                filename,
                arguments,
            });
        }

        debug!("[compdb] {} commands for {} files", db.len(), db.by_file.len());
        Ok(db)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Exact commands for `file`; when there are none, a command inferred
    /// from the closest known file.
    pub fn compile_commands(
        &self,
        file: &Path,
    ) -> Vec<CompileCommand> {
        if let Some(indices) = self.by_file.get(file) {
            return indices.iter().map(|&i| self.commands[i].clone()).collect();
        }
        interpolate::infer_command(&self.commands, file).into_iter().collect()
    }
}
