//! One decompilation unit: arena, root and annotations.

use crate::annotations::{Annotations, SymbolAnnotation};
use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::error::TreeError;
use crate::node::{NodeData, NodeKind};

#[derive(Debug)]
pub struct SyntaxTree {
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub annotations: Annotations,
}

impl SyntaxTree {
    /// Create a tree whose root is an empty compilation unit.
    pub fn new() -> SyntaxTree {
        let mut arena = NodeArena::new();
        let root = arena.add_root(NodeData::CompilationUnit);
        SyntaxTree {
            arena,
            root,
            annotations: Annotations::new(),
        }
    }

    pub fn from_parts(arena: NodeArena, root: NodeIndex, annotations: Annotations) -> SyntaxTree {
        SyntaxTree {
            arena,
            root,
            annotations,
        }
    }

    /// Record the resolved full name of an attribute's type.
    pub fn annotate_attribute(
        &mut self,
        attribute: NodeIndex,
        full_name: impl Into<String>,
    ) -> Result<(), TreeError> {
        let type_ref = self
            .arena
            .attribute_type_ref(attribute)
            .ok_or_else(|| TreeError::KindMismatch {
                index: attribute,
                expected: NodeKind::Attribute,
                found: self.arena.kind(attribute).unwrap_or(NodeKind::Other),
            })?;
        self.annotations.set_type(type_ref, full_name);
        Ok(())
    }

    /// Record the resolved definition behind a type declaration.
    pub fn annotate_type_declaration(
        &mut self,
        declaration: NodeIndex,
        symbol: SymbolAnnotation,
    ) -> Result<(), TreeError> {
        let found = self.arena.live(declaration)?.kind();
        if found != NodeKind::TypeDeclaration {
            return Err(TreeError::KindMismatch {
                index: declaration,
                expected: NodeKind::TypeDeclaration,
                found,
            });
        }
        self.annotations.set_symbol(declaration, symbol);
        Ok(())
    }

    /// Resolved full name of an attribute's type, if the resolver found one.
    pub fn attribute_full_name(&self, attribute: NodeIndex) -> Option<&str> {
        let type_ref = self.arena.attribute_type_ref(attribute)?;
        self.annotations
            .type_of(type_ref)
            .map(|t| t.full_name.as_str())
    }

    /// Identifier names below the root, in pre-order.
    pub fn identifier_names(&self) -> Vec<&str> {
        self.arena
            .descendants_of_kind(self.root, NodeKind::Identifier)
            .filter_map(|idx| self.arena.identifier_name(idx))
            .collect()
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        SyntaxTree::new()
    }
}
