use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use tracing::debug;

use crate::{
    compilation_db::{CompilationDatabase, FixedCompilationDatabase},
    config::Settings,
    error::CompilationDatabaseError,
    frontend::FrontendArgs,
    signature::FileFilter,
};

/// Print `path:qualified(params)[ const]:line` for every C++ function
/// definition in the given sources.
///
/// Compile commands come from `compile_commands.json` (or
/// `compile_flags.txt`) found via `-p` or next to the first source, or from
/// the arguments after `--`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sig-dump", version, about)]
pub struct ScanOptions {
    /// Source files to scan.
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Build directory containing compile_commands.json (searched upwards).
    #[arg(short = 'p', value_name = "BUILD_PATH")]
    pub build_path: Option<PathBuf>,

    /// Only print definitions whose file path is exactly one of these.
    #[arg(long, num_args = 1.., value_name = "PATH")]
    pub files: Vec<String>,

    /// Extra argument appended to every compile command.
    #[arg(long = "extra-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub extra_args: Vec<String>,

    /// Extra argument inserted before every compile command's own arguments.
    #[arg(long = "extra-arg-before", value_name = "ARG", allow_hyphen_values = true)]
    pub extra_args_before: Vec<String>,

    /// Clang executable used as the front-end.
    #[arg(long, value_name = "PATH")]
    pub clang: Option<String>,

    /// Settings file (default: nearest sig-dump.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, short)]
    pub verbose: bool,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Compiler arguments given after `--`.
    #[arg(skip)]
    pub fixed_args: Option<Vec<String>>,
}

impl ScanOptions {
    /// Parse a full argument vector (program name first).
    ///
    /// Everything after the first `--` is taken as a fixed compile command
    /// before the rest is handed to clap.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let fixed_args = argv.iter().skip(1).position(|a| a == "--").map(|pos| {
            argv.split_off(pos + 1).into_iter().skip(1).map(|a| a.to_string_lossy().into_owned()).collect::<Vec<_>>()
        });
        let mut options = Self::try_parse_from(argv)?;
        options.fixed_args = fixed_args;
        Ok(options)
    }

    /// Fixed arguments win over `-p`; without either, search upwards from the
    /// first source.
    pub fn load_database(&self) -> Result<CompilationDatabase, CompilationDatabaseError> {
        if let Some(args) = &self.fixed_args {
            let fixed = FixedCompilationDatabase::from_command_line(args.clone());
            debug!("[compdb] fixed command line in {}: {}", fixed.directory().display(), fixed.args().join(" "));
            return Ok(CompilationDatabase::Fixed(fixed));
        }
        match (&self.build_path, self.sources.first()) {
            (Some(build_path), _) => CompilationDatabase::auto_detect_from_directory(build_path),
            (None, Some(source)) => CompilationDatabase::auto_detect_from_source(source),
            (None, None) => CompilationDatabase::auto_detect_from_directory(&PathBuf::from(".")),
        }
    }

    /// Front-end invocation: command-line values layered over the settings
    /// file.
    pub fn frontend_args(
        &self,
        settings: &Settings,
    ) -> FrontendArgs {
        FrontendArgs {
            clang: self.clang.clone().unwrap_or_else(|| settings.compiler.clang.clone()),
            extra_args_before: settings
                .compiler
                .extra_args_before
                .iter()
                .chain(&self.extra_args_before)
                .cloned()
                .collect(),
            extra_args: settings.compiler.extra_args.iter().chain(&self.extra_args).cloned().collect(),
        }
    }

    pub fn file_filter(&self) -> FileFilter {
        FileFilter::new(self.files.iter().cloned())
    }
}

#[cfg(test)]
#[path = "../tests/src/options_tests.rs"]
mod tests;
