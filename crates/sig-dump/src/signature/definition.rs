use std::fmt;

use crate::matcher::FunctionMatch;

/// One matched definition, built per match and printed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub file: String,
    pub qualified_name: String,
    pub param_types: Vec<String>,
    /// Only ever set for member functions.
    pub is_const: bool,
    /// 1-based spelling line of the name token.
    pub line: usize,
}

impl FunctionDefinition {
    /// Build the record for a match. Returns `None` when the declaration has
    /// no usable location (e.g. a builtin).
    pub fn from_match(found: &FunctionMatch<'_>) -> Option<Self> {
        let loc = found.spelling_loc()?;
        if loc.line == 0 {
            return None;
        }
        Some(Self {
            file: loc.file.to_string(),
            qualified_name: found.qualified_name(),
            param_types: found.param_types(),
            is_const: found.is_const_method(),
            line: loc.line,
        })
    }

    /// `name(type1, type2)[ const]`
    pub fn signature(&self) -> String {
        let mut out = String::with_capacity(self.qualified_name.len() + 16);
        out.push_str(&self.qualified_name);
        out.push('(');
        out.push_str(&self.param_types.join(", "));
        out.push(')');
        if self.is_const {
            out.push_str(" const");
        }
        out
    }
}

/// `path:qualified(params)[ const]:line`
impl fmt::Display for FunctionDefinition {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.signature(), self.line)
    }
}

#[cfg(test)]
#[path = "../../tests/src/signature/definition_tests.rs"]
mod tests;
