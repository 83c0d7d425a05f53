//! Error types for each stage of a scan.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Reading or parsing `sig-dump.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Locating or loading a compilation database.
#[derive(Debug, Error)]
pub enum CompilationDatabaseError {
    #[error(
        "Could not auto-detect compilation database from directory \"{}\"\nNo compilation database found in {} or any parent directory",
        .0.display(),
        .0.display()
    )]
    NotFoundInDirectory(PathBuf),
    #[error(
        "Could not auto-detect compilation database for file \"{}\"\nNo compilation database found in {} or any parent directory",
        file.display(),
        dir.display()
    )]
    NotFoundForSource { file: PathBuf, dir: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: entry {index}: {message}", path.display())]
    Entry { path: PathBuf, index: usize, message: String },
}

/// Running the front-end or decoding what it produced.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("front-end produced no AST for {}", file.display())]
    EmptyDump { file: PathBuf },
    #[error("failed to decode AST for {}: {source}", file.display())]
    Decode {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that stops a scan before or while it runs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error while trying to load a compilation database:\n{0}")]
    Database(#[from] CompilationDatabaseError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
