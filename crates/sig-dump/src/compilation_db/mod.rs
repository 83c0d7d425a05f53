//! Compilation databases: where each source file's compiler invocation comes
//! from.
//!
//! Three sources are supported, matching what clang tooling accepts:
//! `compile_commands.json`, `compile_flags.txt`, and fixed arguments given on
//! the command line after `--`.

mod fixed;
mod interpolate;
mod json;
pub mod paths;

use std::path::{Path, PathBuf};

pub use fixed::FixedCompilationDatabase;
pub use json::JsonCompilationDatabase;
use tracing::{debug, warn};

use crate::error::CompilationDatabaseError;

pub const JSON_DATABASE_FILENAME: &str = "compile_commands.json";
pub const FLAGS_FILENAME: &str = "compile_flags.txt";

/// One compiler invocation for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    /// Working directory the command runs in.
    pub directory: PathBuf,
    /// The file as named in the database.
    pub filename: PathBuf,
    /// Full argument vector, `argv[0]` included.
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum CompilationDatabase {
    Json(JsonCompilationDatabase),
    Fixed(FixedCompilationDatabase),
}

impl CompilationDatabase {
    /// Commands for `file`, which must be absolute and normalized.
    pub fn compile_commands(
        &self,
        file: &Path,
    ) -> Vec<CompileCommand> {
        match self {
            CompilationDatabase::Json(db) => db.compile_commands(file),
            CompilationDatabase::Fixed(db) => db.compile_commands(file),
        }
    }

    /// Load a database stored directly in `dir`, if there is one.
    pub fn load_from_directory(dir: &Path) -> Result<Option<Self>, CompilationDatabaseError> {
        let json_path = dir.join(JSON_DATABASE_FILENAME);
        if json_path.is_file() {
            debug!("[compdb] loading {}", json_path.display());
            let db = JsonCompilationDatabase::load(&json_path)?;
            if db.is_empty() {
                warn!("[compdb] {} has no entries", json_path.display());
            }
            return Ok(Some(CompilationDatabase::Json(db)));
        }
        let flags_path = dir.join(FLAGS_FILENAME);
        if flags_path.is_file() {
            let db = FixedCompilationDatabase::load_flags_file(&flags_path)?;
            debug!(
                "[compdb] {}: {} flags for every file in {}",
                flags_path.display(),
                db.args().len(),
                db.directory().display()
            );
            return Ok(Some(CompilationDatabase::Fixed(db)));
        }
        Ok(None)
    }

    /// Search `dir` and then each of its ancestors.
    pub fn auto_detect_from_directory(dir: &Path) -> Result<Self, CompilationDatabaseError> {
        let start = paths::absolute(dir);
        find_upwards(&start)?.ok_or_else(|| CompilationDatabaseError::NotFoundInDirectory(dir.to_path_buf()))
    }

    /// Search upwards from the directory containing `source`.
    pub fn auto_detect_from_source(source: &Path) -> Result<Self, CompilationDatabaseError> {
        let abs = paths::absolute(source);
        let dir = abs.parent().map(Path::to_path_buf).unwrap_or_else(|| abs.clone());
        find_upwards(&dir)?.ok_or_else(|| CompilationDatabaseError::NotFoundForSource {
            file: source.to_path_buf(),
            dir,
        })
    }
}

fn find_upwards(start: &Path) -> Result<Option<CompilationDatabase>, CompilationDatabaseError> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        if let Some(db) = CompilationDatabase::load_from_directory(d)? {
            return Ok(Some(db));
        }
        dir = d.parent();
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/src/compilation_db/database_tests.rs"]
mod tests;
