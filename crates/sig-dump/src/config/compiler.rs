use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_CLANG: &str = "clang++";

/// How the front-end is invoked for every compile command.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerSettings {
    /// Executable that replaces the compiler named by each compile command.
    pub clang: String,
    /// Appended after the compile command's own arguments.
    pub extra_args: Vec<String>,
    /// Inserted right after the executable.
    pub extra_args_before: Vec<String>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            clang: DEFAULT_CLANG.to_owned(),
            extra_args: Vec::new(),
            extra_args_before: Vec::new(),
        }
    }
}

impl CompilerSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: CompilerSettingsPatch,
    ) {
        if let Some(v) = patch.clang {
            self.clang = v;
        }
        if let Some(v) = patch.extra_args {
            self.extra_args = v;
        }
        if let Some(v) = patch.extra_args_before {
            self.extra_args_before = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.clang = self.clang.trim().to_owned();
        if self.clang.is_empty() {
            self.clang = DEFAULT_CLANG.to_owned();
        }
        self.extra_args = self.extra_args.iter().map(|f| f.trim().to_owned()).filter(|f| !f.is_empty()).collect();
        self.extra_args_before =
            self.extra_args_before.iter().map(|f| f.trim().to_owned()).filter(|f| !f.is_empty()).collect();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct CompilerSettingsPatch {
    pub(crate) clang: Option<String>,
    pub(crate) extra_args: Option<Vec<String>>,
    pub(crate) extra_args_before: Option<Vec<String>>,
    #[serde(flatten)]
    pub(crate) _extra: BTreeMap<String, toml::Value>,
}
