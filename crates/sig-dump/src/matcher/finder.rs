use tracing::trace;

use super::{
    FunctionKind, FunctionMatch, MatchCallback,
    clang_nodes::{Clang, FunctionData, Node},
    scope::{ScopeMap, function_segment, namespace_segment, record_segment},
};

/// Walk a translation unit and report every function definition to
/// `callback`, in AST traversal order.
///
/// A declaration is a definition when it has a body (compound statement or
/// function-try-block) or is explicitly defaulted or deleted. Implicit
/// declarations and unnamed functions are never reported.
pub fn find_function_definitions(
    root: &Node,
    callback: &mut dyn MatchCallback,
) -> usize {
    let mut scopes = ScopeMap::new();
    scopes.insert(root.id, Vec::new());
    let mut matched = 0;
    for child in &root.inner {
        walk(child, &[], &mut scopes, callback, &mut matched);
    }
    trace!("[matcher] {} definitions, {} scopes", matched, scopes.len());
    matched
}

fn walk(
    node: &Node,
    lexical: &[String],
    scopes: &mut ScopeMap,
    callback: &mut dyn MatchCallback,
    matched: &mut usize,
) {
    match &node.kind {
        Clang::FunctionDecl(d) => visit_function(node, d, FunctionKind::Function, lexical, scopes, callback, matched),
        Clang::CXXMethodDecl(d) => visit_function(node, d, FunctionKind::Method, lexical, scopes, callback, matched),
        Clang::CXXConstructorDecl(d) => {
            visit_function(node, d, FunctionKind::Constructor, lexical, scopes, callback, matched);
        },
        Clang::CXXDestructorDecl(d) => {
            visit_function(node, d, FunctionKind::Destructor, lexical, scopes, callback, matched);
        },
        Clang::CXXConversionDecl(d) => {
            visit_function(node, d, FunctionKind::Conversion, lexical, scopes, callback, matched);
        },

        Clang::NamespaceDecl(d) => {
            let mut path = scopes.resolve(d.parent_decl_context_id, lexical).to_vec();
            if !d.is_inline.unwrap_or(false) {
                path.push(namespace_segment(d.name.as_deref()));
            }
            scopes.insert(node.id, path.clone());
            walk_children(node, &path, scopes, callback, matched);
        },
        Clang::CXXRecordDecl(d)
        | Clang::ClassTemplateSpecializationDecl(d)
        | Clang::ClassTemplatePartialSpecializationDecl(d) => {
            // Skip the injected class name; lambda closure types are implicit
            // too but hold the call operator.
            if d.is_implicit.unwrap_or(false) && !d.is_lambda() {
                return;
            }
            let mut path = scopes.resolve(d.parent_decl_context_id, lexical).to_vec();
            path.push(record_segment(node, d));
            scopes.insert(node.id, path.clone());
            walk_children(node, &path, scopes, callback, matched);
        },
        Clang::LinkageSpecDecl {
            ..
        } => {
            scopes.insert(node.id, lexical.to_vec());
            walk_children(node, lexical, scopes, callback, matched);
        },

        _ => walk_children(node, lexical, scopes, callback, matched),
    }
}

fn walk_children(
    node: &Node,
    lexical: &[String],
    scopes: &mut ScopeMap,
    callback: &mut dyn MatchCallback,
    matched: &mut usize,
) {
    for child in &node.inner {
        walk(child, lexical, scopes, callback, matched);
    }
}

fn visit_function(
    node: &Node,
    data: &FunctionData,
    kind: FunctionKind,
    lexical: &[String],
    scopes: &mut ScopeMap,
    callback: &mut dyn MatchCallback,
    matched: &mut usize,
) {
    let parent = scopes.resolve(data.parent_decl_context_id, lexical).to_vec();
    let name = match data.name() {
        Some(n) if !n.is_empty() => n,
        _ => return,
    };

    if !data.is_implicit() && is_definition(node, data) {
        *matched += 1;
        callback.run(&FunctionMatch {
            node,
            data,
            kind,
            scope: &parent,
        });
    }

    // Local classes and lambdas inside the body are scoped by this function.
    let mut inner = parent;
    inner.push(function_segment(name, &param_types(node), data.is_variadic()));
    scopes.insert(node.id, inner.clone());
    walk_children(node, &inner, scopes, callback, matched);
}

fn is_definition(
    node: &Node,
    data: &FunctionData,
) -> bool {
    data.is_defaulted_or_deleted()
        || node.inner.iter().any(|child| matches!(child.kind, Clang::CompoundStmt(_) | Clang::CXXTryStmt(_)))
}

/// Types of the direct `ParmVarDecl` children, in order.
pub(super) fn param_types(node: &Node) -> Vec<String> {
    node.inner
        .iter()
        .filter_map(|child| match &child.kind {
            Clang::ParmVarDecl(p) => Some(p.qual_type().unwrap_or_default().to_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/matcher/finder_tests.rs"]
mod tests;
