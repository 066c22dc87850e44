use crate::context::TransformContext;
use crate::error::TransformError;
use dtx_syntax::SyntaxTree;

/// A structural rewrite pass over one syntax tree.
///
/// A pass gets exclusive access to the whole tree for the duration of `run`
/// and must leave it consistent: no empty attribute sections or namespaces
/// left behind by its own removals.
pub trait AstTransform {
    /// Stable name used in tracing output.
    fn name(&self) -> &'static str;

    fn run(&mut self, tree: &mut SyntaxTree, ctx: &TransformContext)
    -> Result<(), TransformError>;
}
