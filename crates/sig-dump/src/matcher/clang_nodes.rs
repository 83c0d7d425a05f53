use clang_ast::{BareSourceLocation, Id, SourceLocation, SourceRange};
use serde::Deserialize;

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of the Clang AST node kinds the matcher cares about.
///
/// Each variant corresponds to a Clang AST node `"kind"` value. Function-like
/// declarations are the match candidates; namespaces, records and template
/// specializations open scopes; statements are only inspected to decide
/// whether a function has a body.
#[derive(Deserialize, Debug)]
pub enum Clang {
    // --- Function-like declarations ---
    FunctionDecl(FunctionData),
    CXXMethodDecl(FunctionData),
    CXXConstructorDecl(FunctionData),
    CXXDestructorDecl(FunctionData),
    CXXConversionDecl(FunctionData),
    ParmVarDecl(ParmData),

    // --- Scopes ---
    NamespaceDecl(NamespaceData),
    #[allow(dead_code)]
    LinkageSpecDecl {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<SourceRange>,
    },
    CXXRecordDecl(RecordData),
    ClassTemplateSpecializationDecl(RecordData),
    ClassTemplatePartialSpecializationDecl(RecordData),
    TemplateArgument(TemplateArgData),

    // --- Bodies ---
    CompoundStmt(StmtData),
    CXXTryStmt(StmtData),

    // --- Catch-all ---
    // `loc` and `range` MUST be deserialized even for unrecognized node kinds.
    // `clang-ast` carries the "current file" and "current line" across the
    // stream through `SourceLocation`; skipping them makes later nodes inherit
    // a stale file or line.
    #[allow(dead_code)]
    Other {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<SourceRange>,
    },
}

/// Clang's qualified type representation.
#[derive(Deserialize, Debug, Clone)]
pub struct QualType {
    #[serde(rename = "qualType")]
    pub qual_type: Option<String>,
}

/// Data of `FunctionDecl` and the C++ method kinds derived from it.
///
/// `ty` is the function type as written, e.g. `"int (int, double) const"`.
#[derive(Deserialize, Debug)]
pub struct FunctionData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
    #[serde(rename = "parentDeclContextId")]
    pub parent_decl_context_id: Option<Id>,
    #[serde(rename = "explicitlyDefaulted")]
    pub explicitly_defaulted: Option<String>,
    #[serde(rename = "explicitlyDeleted")]
    pub explicitly_deleted: Option<bool>,
    pub variadic: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct ParmData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
}

#[derive(Deserialize, Debug)]
pub struct NamespaceData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "isInline")]
    pub is_inline: Option<bool>,
    #[serde(rename = "parentDeclContextId")]
    pub parent_decl_context_id: Option<Id>,
}

/// Data of `CXXRecordDecl` and class template specializations.
#[derive(Deserialize, Debug)]
pub struct RecordData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
    #[serde(rename = "tagUsed")]
    pub tag_used: Option<String>,
    #[serde(rename = "parentDeclContextId")]
    pub parent_decl_context_id: Option<Id>,
    #[serde(rename = "definitionData")]
    pub definition_data: Option<DefinitionData>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DefinitionData {
    #[serde(rename = "isLambda", default)]
    pub is_lambda: bool,
}

/// A template argument of a class template specialization. Type arguments
/// carry `type`, integral arguments carry `value`.
#[derive(Deserialize, Debug)]
pub struct TemplateArgData {
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
    pub value: Option<serde_json::Value>,
    pub range: Option<SourceRange>,
}

#[derive(Deserialize, Debug)]
pub struct StmtData {
    pub range: Option<SourceRange>,
}

impl FunctionData {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn is_implicit(&self) -> bool {
        self.is_implicit.unwrap_or(false)
    }
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
    /// Defaulted (`= default`) and deleted (`= delete`) functions are
    /// definitions even without a body.
    pub fn is_defaulted_or_deleted(&self) -> bool {
        self.explicitly_defaulted.is_some() || self.explicitly_deleted.unwrap_or(false)
    }
    pub fn is_variadic(&self) -> bool {
        self.variadic.unwrap_or(false)
    }
}

impl ParmData {
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
}

impl RecordData {
    pub fn is_lambda(&self) -> bool {
        self.definition_data.as_ref().is_some_and(|d| d.is_lambda)
    }
}

impl TemplateArgData {
    /// Render the argument the way it appears between `<` and `>`.
    pub fn render(&self) -> Option<String> {
        if let Some(ty) = self.ty.as_ref().and_then(|t| t.qual_type.as_deref()) {
            return Some(ty.to_owned());
        }
        match self.value.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Pick the spelling location of a declaration's name token.
///
/// For macro-generated declarations this is the position inside the macro
/// body; otherwise spelling and expansion coincide.
pub fn spelling_loc(loc: &SourceLocation) -> Option<&BareSourceLocation> {
    loc.spelling_loc.as_ref().or(loc.expansion_loc.as_ref())
}
