//! Settings loaded from an optional `sig-dump.toml`.
//!
//! The file is split into one table per category. Each category has a public
//! settings struct with defaults and a private `*Patch` struct for partial
//! deserialization; unknown keys are accepted and ignored. Command-line
//! values are layered on top by the caller.

pub(crate) mod compiler;
pub(crate) mod logging;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use compiler::{CompilerSettings, DEFAULT_CLANG};
use compiler::CompilerSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const CONFIG_FILENAME: &str = "sig-dump.toml";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub compiler: CompilerSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Parse settings from TOML text, applying them over the defaults.
    pub fn from_toml_str(
        content: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let patch: SettingsPatch = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.normalize();
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `explicit` when given, else the nearest `sig-dump.toml` above
    /// `start`, else the defaults.
    pub fn discover(
        explicit: Option<&Path>,
        start: &Path,
    ) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(start),
        };
        match path {
            Some(p) => {
                debug!("[config] loading {}", p.display());
                Self::load(&p)
            },
            None => Ok(Self::default()),
        }
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        if let Some(p) = patch.compiler {
            self.compiler.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.compiler.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct SettingsPatch {
    compiler: Option<CompilerSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: BTreeMap<String, toml::Value>,
}

/// Walks parent directories from `start` looking for `sig-dump.toml`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
#[path = "../../tests/src/config/config_tests.rs"]
mod tests;
