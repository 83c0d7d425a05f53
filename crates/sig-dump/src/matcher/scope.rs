use std::collections::HashMap;

use clang_ast::Id;

use super::clang_nodes::{Clang, Node, RecordData};

/// Semantic scope of every scope-introducing declaration seen so far, keyed by
/// node id.
///
/// Out-of-line definitions (`void ns::A::f() {}`) are nested lexically in the
/// enclosing namespace but name their class through `parentDeclContextId`;
/// the map resolves that id back to `["ns", "A"]`.
#[derive(Debug, Default)]
pub(super) struct ScopeMap {
    by_id: HashMap<Id, Vec<String>>,
}

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        id: Id,
        path: Vec<String>,
    ) {
        self.by_id.insert(id, path);
    }

    pub fn get(
        &self,
        id: Id,
    ) -> Option<&[String]> {
        self.by_id.get(&id).map(Vec::as_slice)
    }

    /// The semantic parent scope: the declared parent when it is known,
    /// otherwise the lexical scope.
    pub fn resolve<'a>(
        &'a self,
        parent: Option<Id>,
        lexical: &'a [String],
    ) -> &'a [String] {
        parent.and_then(|id| self.get(id)).unwrap_or(lexical)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}

pub(super) fn namespace_segment(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_owned(),
        _ => "(anonymous namespace)".to_owned(),
    }
}

/// Name a record the way `getQualifiedNameAsString` prints it as a scope.
pub(super) fn record_segment(
    node: &Node,
    data: &RecordData,
) -> String {
    let base = match data.name.as_deref() {
        Some(n) if !n.is_empty() => n.to_owned(),
        _ => format!("(anonymous {})", data.tag_used.as_deref().unwrap_or("struct")),
    };

    let args: Vec<String> = node
        .inner
        .iter()
        .filter_map(|child| match &child.kind {
            Clang::TemplateArgument(arg) => arg.render(),
            _ => None,
        })
        .collect();
    if matches!(
        node.kind,
        Clang::ClassTemplateSpecializationDecl(_) | Clang::ClassTemplatePartialSpecializationDecl(_)
    ) && !args.is_empty()
    {
        format!("{base}<{}>", args.join(", "))
    } else {
        base
    }
}

/// An enclosing function prints as `name(param, types)`, with a trailing
/// `...` when it is variadic.
pub(super) fn function_segment(
    name: &str,
    params: &[String],
    variadic: bool,
) -> String {
    let mut out = format!("{name}({}", params.join(", "));
    if variadic {
        if !params.is_empty() {
            out.push_str(", ");
        }
        out.push_str("...");
    }
    out.push(')');
    out
}
