//! Remove assembly- and module-level attributes the compiler emits on its
//! own.
//!
//! Re-declaring these in exported source makes the recompiled project fail
//! with duplicate-attribute errors, so they are dropped when exporting a full
//! project. Only top-level attribute sections (direct children of the root)
//! are inspected.
//!
//! Matching is exact and fail-open:
//!
//! | Attribute | Removed when |
//! |-----------|--------------|
//! | `DebuggableAttribute` | always |
//! | `CompilationRelaxationsAttribute` | single positional `int` argument `8` |
//! | `RuntimeCompatibilityAttribute` | single named argument `WrapNonExceptionThrows = true` |
//! | `TargetFrameworkAttribute` | always |
//! | `SecurityPermissionAttribute` | `RequestMinimum` followed directly by `SkipVerification = true` |
//! | `UnverifiableCodeAttribute` (module) | always |
//!
//! Attributes without a resolved type are always kept.

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::AstTransform;
use dtx_common::known_names::{
    COMPILATION_RELAXATIONS_ATTRIBUTE, DEBUGGABLE_ATTRIBUTE, RUNTIME_COMPATIBILITY_ATTRIBUTE,
    SECURITY_PERMISSION_ATTRIBUTE, TARGET_FRAMEWORK_ATTRIBUTE, UNVERIFIABLE_CODE_ATTRIBUTE,
};
use dtx_syntax::{
    ArgumentData, ArgumentValue, AttributeTarget, Literal, NodeArena, NodeIndex, NodeKind,
    SyntaxTree,
};
use smallvec::SmallVec;

/// `CompilationRelaxations.NoStringInterning`, the value the compiler emits.
const NO_STRING_INTERNING: i32 = 8;

type RemovalRule = fn(&SyntaxTree, NodeIndex) -> bool;

#[derive(Debug, Default)]
pub struct RemoveCompilerGeneratedAssemblyAttributes;

impl AstTransform for RemoveCompilerGeneratedAssemblyAttributes {
    fn name(&self) -> &'static str {
        "remove-compiler-generated-assembly-attributes"
    }

    fn run(
        &mut self,
        tree: &mut SyntaxTree,
        ctx: &TransformContext,
    ) -> Result<(), TransformError> {
        let sections: SmallVec<[NodeIndex; 8]> = tree
            .arena
            .children(tree.root)
            .iter()
            .copied()
            .filter(|&child| tree.arena.kind(child) == Some(NodeKind::AttributeSection))
            .collect();

        for section in sections {
            ctx.check_cancelled()?;

            let rule: RemovalRule = match tree.arena.attribute_target(section) {
                Some(AttributeTarget::Assembly) => is_removable_assembly_attribute,
                Some(AttributeTarget::Module) => is_removable_module_attribute,
                _ => continue,
            };

            for attribute in tree.arena.attributes(section) {
                if rule(tree, attribute) {
                    tracing::trace!(
                        idx = attribute.0,
                        name = tree.attribute_full_name(attribute),
                        "remove compiler-generated attribute"
                    );
                    tree.arena.remove(attribute)?;
                }
            }

            if tree.arena.attributes(section).is_empty() {
                tracing::trace!(idx = section.0, "remove empty attribute section");
                tree.arena.remove(section)?;
            }
        }
        Ok(())
    }
}

fn is_removable_assembly_attribute(tree: &SyntaxTree, attribute: NodeIndex) -> bool {
    let Some(full_name) = tree.attribute_full_name(attribute) else {
        return false;
    };
    let arena = &tree.arena;
    let arguments = arena.arguments(attribute);

    match full_name {
        DEBUGGABLE_ATTRIBUTE | TARGET_FRAMEWORK_ATTRIBUTE => true,
        COMPILATION_RELAXATIONS_ATTRIBUTE => match arguments.as_slice() {
            [only] => matches!(
                arena.argument(*only),
                Some(ArgumentData::Positional(ArgumentValue::Literal(Literal::Int32(
                    NO_STRING_INTERNING
                ))))
            ),
            _ => false,
        },
        RUNTIME_COMPATIBILITY_ATTRIBUTE => match arguments.as_slice() {
            [only] => is_named_true(arena, *only, "WrapNonExceptionThrows"),
            _ => false,
        },
        SECURITY_PERMISSION_ATTRIBUTE => is_skip_verification_request(arena, &arguments),
        _ => false,
    }
}

fn is_removable_module_attribute(tree: &SyntaxTree, attribute: NodeIndex) -> bool {
    tree.attribute_full_name(attribute) == Some(UNVERIFIABLE_CODE_ATTRIBUTE)
}

/// `[assembly: SecurityPermission(SecurityAction.RequestMinimum, SkipVerification = true)]`
///
/// The named argument has to be the node right after `RequestMinimum`; the
/// same two arguments in the other order are kept.
fn is_skip_verification_request(arena: &NodeArena, arguments: &[NodeIndex]) -> bool {
    let [first, _] = arguments else {
        return false;
    };
    let Some(ArgumentData::Positional(ArgumentValue::MemberReference { member, .. })) =
        arena.argument(*first)
    else {
        return false;
    };
    if member != "RequestMinimum" {
        return false;
    }
    arena
        .next_sibling(*first)
        .is_some_and(|next| is_named_true(arena, next, "SkipVerification"))
}

fn is_named_true(arena: &NodeArena, argument: NodeIndex, expected_name: &str) -> bool {
    matches!(
        arena.argument(argument),
        Some(ArgumentData::Named {
            name,
            value: ArgumentValue::Literal(Literal::Bool(true)),
        }) if name == expected_name
    )
}
