//! Function definition matching over a deserialized Clang JSON AST.
//!
//! [`find_function_definitions`] walks a translation unit and invokes a
//! [`MatchCallback`] once per function or method definition, in traversal
//! order. Each match carries the node and its resolved semantic scope so the
//! callback can build a qualified signature without re-walking the tree.

mod clang_nodes;
mod finder;
mod function_type;
mod scope;

use clang_ast::BareSourceLocation;

pub use clang_nodes::{Clang, FunctionData, Node};
pub use finder::find_function_definitions;
pub use function_type::has_const_qualifier;

/// The flavour of function declaration that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Method,
    Constructor,
    Destructor,
    Conversion,
}

impl FunctionKind {
    /// Whether the declaration is a C++ member function (`CXXMethodDecl` or
    /// one of its subclasses).
    pub fn is_method(self) -> bool {
        !matches!(self, FunctionKind::Function)
    }
}

/// A matched function definition, valid for the duration of the callback.
pub struct FunctionMatch<'a> {
    pub node: &'a Node,
    pub data: &'a FunctionData,
    pub kind: FunctionKind,
    /// Semantic scope segments, outermost first (`["ns", "A"]`).
    pub scope: &'a [String],
}

impl FunctionMatch<'_> {
    pub fn name(&self) -> &str {
        self.data.name().unwrap_or_default()
    }

    /// `ns::A::method`, or just the name at global scope.
    pub fn qualified_name(&self) -> String {
        let mut out = String::new();
        for segment in self.scope {
            out.push_str(segment);
            out.push_str("::");
        }
        out.push_str(self.name());
        out
    }

    /// Parameter types as written, in declaration order.
    pub fn param_types(&self) -> Vec<String> {
        finder::param_types(self.node)
    }

    /// True only for const-qualified member functions.
    pub fn is_const_method(&self) -> bool {
        self.kind.is_method() && self.data.qual_type().is_some_and(has_const_qualifier)
    }

    /// Spelling location of the function's name token.
    pub fn spelling_loc(&self) -> Option<&BareSourceLocation> {
        self.data.loc.as_ref().and_then(clang_nodes::spelling_loc)
    }
}

/// Receives every function definition found by [`find_function_definitions`].
pub trait MatchCallback {
    fn run(
        &mut self,
        found: &FunctionMatch<'_>,
    );

    /// Called once after each translation unit has been fully traversed.
    fn on_end_of_translation_unit(&mut self) {}
}

impl<F> MatchCallback for F
where
    F: FnMut(&FunctionMatch<'_>),
{
    fn run(
        &mut self,
        found: &FunctionMatch<'_>,
    ) {
        (self)(found)
    }
}
