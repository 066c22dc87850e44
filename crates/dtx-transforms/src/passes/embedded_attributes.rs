//! Remove helper types the compiler embeds into its output.
//!
//! Language features such as `readonly struct` or nullable annotations are
//! backed by small attribute types the compiler copies into every assembly
//! that needs them, marked with `Microsoft.CodeAnalysis.EmbeddedAttribute`.
//! Re-emitting them as user source would clash with the copies the compiler
//! generates again.
//!
//! A declaration is removed only when its resolved name is one of the known
//! helper names *and* its definition carries the embedded flag, so a user
//! type that happens to reuse a reserved name survives.

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::AstTransform;
use dtx_common::known_names::is_embedded_attribute_name;
use dtx_syntax::{NodeIndex, NodeKind, SyntaxTree, TreeError};

#[derive(Debug, Default)]
pub struct RemoveEmbeddedAttributes;

impl AstTransform for RemoveEmbeddedAttributes {
    fn name(&self) -> &'static str {
        "remove-embedded-attributes"
    }

    fn run(
        &mut self,
        tree: &mut SyntaxTree,
        ctx: &TransformContext,
    ) -> Result<(), TransformError> {
        let declarations: Vec<NodeIndex> = tree
            .arena
            .descendants_of_kind(tree.root, NodeKind::TypeDeclaration)
            .collect();

        for decl in declarations {
            ctx.check_cancelled()?;

            // Already gone with an enclosing namespace or type.
            if !tree.arena.is_live(decl) || !is_embedded_helper(tree, decl) {
                continue;
            }

            let parent = tree.arena.parent(decl).ok_or(TreeError::NoParent(decl))?;
            let target = if tree.arena.kind(parent) == Some(NodeKind::NamespaceDeclaration)
                && tree.arena.members(parent).len() == 1
            {
                parent
            } else {
                decl
            };

            tracing::trace!(
                idx = decl.0,
                collapsed_namespace = target == parent,
                "remove embedded type"
            );
            tree.arena.remove(target)?;
        }
        Ok(())
    }
}

fn is_embedded_helper(tree: &SyntaxTree, decl: NodeIndex) -> bool {
    tree.annotations
        .symbol_of(decl)
        .is_some_and(|symbol| is_embedded_attribute_name(&symbol.full_name) && symbol.is_embedded())
}
