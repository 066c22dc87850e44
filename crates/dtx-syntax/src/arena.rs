//! Node arena for syntax tree storage.
//!
//! Nodes are stored contiguously and referenced by `NodeIndex`. Each node
//! records its parent and an ordered child list, so the passes can walk up
//! (namespace collapse) and sideways (argument order) as well as down.
//!
//! Removal detaches a node from its parent's child list and marks it and its
//! whole subtree as removed. Slots are never reused, so indices collected
//! before an edit stay meaningful after it.

use crate::base::NodeIndex;
use crate::error::TreeError;
use crate::node::{
    ArgumentData, AttributeData, AttributeSectionData, AttributeTarget, IdentifierData,
    NamespaceData, Node, NodeData, NodeKind, TypeDeclarationData, TypeKind,
};
use dtx_common::limits::TRAVERSAL_STACK_CAPACITY;
use smallvec::SmallVec;

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots, removed nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes still attached to a tree (or still detached roots).
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.removed).count()
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Get a node by index, whether or not it has been removed.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get a node that is still part of the tree.
    pub fn live(&self, index: NodeIndex) -> Result<&Node, TreeError> {
        let node = self.get(index).ok_or(TreeError::InvalidIndex(index))?;
        if node.removed {
            return Err(TreeError::Removed(index));
        }
        Ok(node)
    }

    fn live_mut(&mut self, index: NodeIndex) -> Result<&mut Node, TreeError> {
        let node = self.get_mut(index).ok_or(TreeError::InvalidIndex(index))?;
        if node.removed {
            return Err(TreeError::Removed(index));
        }
        Ok(node)
    }

    fn expect_kind(&self, index: NodeIndex, expected: NodeKind) -> Result<&Node, TreeError> {
        let node = self.live(index)?;
        let found = node.kind();
        if found != expected {
            return Err(TreeError::KindMismatch {
                index,
                expected,
                found,
            });
        }
        Ok(node)
    }

    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(Node::kind)
    }

    /// Whether `index` names a node that has not been removed.
    pub fn is_live(&self, index: NodeIndex) -> bool {
        self.get(index).is_some_and(|n| !n.removed)
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index)
            .map(|n| n.parent)
            .filter(|parent| parent.is_some())
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        match self.get(index) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// The node directly after `index` in its parent's child list.
    pub fn next_sibling(&self, index: NodeIndex) -> Option<NodeIndex> {
        let siblings = self.children(self.parent(index)?);
        let pos = siblings.iter().position(|&c| c == index)?;
        siblings.get(pos + 1).copied()
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    pub fn identifier_name(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Replace an identifier's name in place.
    pub fn set_identifier_name(
        &mut self,
        index: NodeIndex,
        name: impl Into<String>,
    ) -> Result<(), TreeError> {
        let node = self.live_mut(index)?;
        match &mut node.data {
            NodeData::Identifier(ident) => {
                ident.name = name.into();
                Ok(())
            }
            other => Err(TreeError::KindMismatch {
                index,
                expected: NodeKind::Identifier,
                found: other.kind(),
            }),
        }
    }

    pub fn attribute_target(&self, section: NodeIndex) -> Option<&AttributeTarget> {
        match &self.get(section)?.data {
            NodeData::AttributeSection(data) => Some(&data.target),
            _ => None,
        }
    }

    pub fn attribute_type_ref(&self, attribute: NodeIndex) -> Option<NodeIndex> {
        match &self.get(attribute)?.data {
            NodeData::Attribute(data) if data.type_ref.is_some() => Some(data.type_ref),
            _ => None,
        }
    }

    pub fn argument(&self, index: NodeIndex) -> Option<&ArgumentData> {
        match &self.get(index)?.data {
            NodeData::Argument(arg) => Some(arg),
            _ => None,
        }
    }

    /// Attributes of a section, in source order.
    pub fn attributes(&self, section: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        self.children_of_kind(section, NodeKind::Attribute)
    }

    /// Arguments of an attribute, in source order.
    pub fn arguments(&self, attribute: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        self.children_of_kind(attribute, NodeKind::Argument)
    }

    /// Members of a namespace or type declaration.
    ///
    /// The declaration's own name identifier is not a member, and neither
    /// are attribute sections applied to a type.
    pub fn members(&self, declaration: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let Some(node) = self.get(declaration) else {
            return SmallVec::new();
        };
        let name_slot = node.data.name_slot();
        node.children
            .iter()
            .copied()
            .filter(|&child| Some(child) != name_slot)
            .filter(|&child| self.kind(child) != Some(NodeKind::AttributeSection))
            .collect()
    }

    fn children_of_kind(&self, parent: NodeIndex, kind: NodeKind) -> SmallVec<[NodeIndex; 4]> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|&child| self.kind(child) == Some(kind))
            .collect()
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Pre-order walk over `root` and every live node below it.
    ///
    /// Iterative, so arbitrarily deep trees are walked in full.
    pub fn descendants_and_self(&self, root: NodeIndex) -> Descendants<'_> {
        let mut stack = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push(root);
        Descendants { arena: self, stack }
    }

    /// Pre-order walk yielding only nodes of `kind`.
    pub fn descendants_of_kind(
        &self,
        root: NodeIndex,
        kind: NodeKind,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.descendants_and_self(root)
            .filter(move |&idx| self.kind(idx) == Some(kind))
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Add a parentless node, typically the compilation unit.
    pub fn add_root(&mut self, data: NodeData) -> NodeIndex {
        self.push(Node::new(data, NodeIndex::NONE))
    }

    /// Append `data` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeIndex, data: NodeData) -> Result<NodeIndex, TreeError> {
        self.live(parent)?;
        let index = self.push(Node::new(data, parent));
        self.live_mut(parent)?.children.push(index);
        Ok(index)
    }

    pub fn add_identifier(
        &mut self,
        parent: NodeIndex,
        name: impl Into<String>,
    ) -> Result<NodeIndex, TreeError> {
        self.add_child(
            parent,
            NodeData::Identifier(IdentifierData { name: name.into() }),
        )
    }

    pub fn add_attribute_section(
        &mut self,
        parent: NodeIndex,
        target: AttributeTarget,
    ) -> Result<NodeIndex, TreeError> {
        self.add_child(
            parent,
            NodeData::AttributeSection(AttributeSectionData { target }),
        )
    }

    /// Add an attribute to a section, with a `TypeReference` child for
    /// `type_name` as written.
    pub fn add_attribute(
        &mut self,
        section: NodeIndex,
        type_name: impl Into<String>,
    ) -> Result<NodeIndex, TreeError> {
        self.expect_kind(section, NodeKind::AttributeSection)?;
        let attribute = self.add_child(
            section,
            NodeData::Attribute(AttributeData {
                type_ref: NodeIndex::NONE,
            }),
        )?;
        let type_ref = self.add_child(
            attribute,
            NodeData::TypeReference {
                name: type_name.into(),
            },
        )?;
        if let NodeData::Attribute(data) = &mut self.live_mut(attribute)?.data {
            data.type_ref = type_ref;
        }
        Ok(attribute)
    }

    pub fn add_argument(
        &mut self,
        attribute: NodeIndex,
        argument: ArgumentData,
    ) -> Result<NodeIndex, TreeError> {
        self.expect_kind(attribute, NodeKind::Attribute)?;
        self.add_child(attribute, NodeData::Argument(argument))
    }

    /// Add a type declaration with an `Identifier` child for its name.
    pub fn add_type_declaration(
        &mut self,
        parent: NodeIndex,
        kind: TypeKind,
        name: impl Into<String>,
    ) -> Result<NodeIndex, TreeError> {
        let decl = self.add_child(
            parent,
            NodeData::TypeDeclaration(TypeDeclarationData {
                kind,
                name: NodeIndex::NONE,
            }),
        )?;
        let ident = self.add_identifier(decl, name)?;
        if let NodeData::TypeDeclaration(data) = &mut self.live_mut(decl)?.data {
            data.name = ident;
        }
        Ok(decl)
    }

    /// Add a namespace declaration with an `Identifier` child for its name.
    pub fn add_namespace(
        &mut self,
        parent: NodeIndex,
        name: impl Into<String>,
    ) -> Result<NodeIndex, TreeError> {
        let ns = self.add_child(
            parent,
            NodeData::NamespaceDeclaration(NamespaceData {
                name: NodeIndex::NONE,
            }),
        )?;
        let ident = self.add_identifier(ns, name)?;
        if let NodeData::NamespaceDeclaration(data) = &mut self.live_mut(ns)?.data {
            data.name = ident;
        }
        Ok(ns)
    }

    pub fn add_other(
        &mut self,
        parent: NodeIndex,
        label: impl Into<String>,
    ) -> Result<NodeIndex, TreeError> {
        self.add_child(
            parent,
            NodeData::Other {
                label: label.into(),
            },
        )
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Detach `index` from its parent and mark its subtree as removed.
    ///
    /// Fails with `NoParent` for roots: a removal decision always needs a
    /// parent to detach from.
    pub fn remove(&mut self, index: NodeIndex) -> Result<(), TreeError> {
        let parent = self.live(index)?.parent;
        if parent.is_none() {
            return Err(TreeError::NoParent(index));
        }

        let siblings = &mut self.live_mut(parent)?.children;
        let pos = siblings
            .iter()
            .position(|&c| c == index)
            .ok_or(TreeError::NotAChild {
                child: index,
                parent,
            })?;
        siblings.remove(pos);

        if let Some(node) = self.get_mut(index) {
            node.parent = NodeIndex::NONE;
        }
        self.mark_removed(index);
        Ok(())
    }

    fn mark_removed(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.get_mut(idx) {
                if node.removed {
                    continue;
                }
                node.removed = true;
                stack.extend(node.children.iter().copied());
            }
        }
    }
}

/// Iterator returned by `NodeArena::descendants_and_self`.
///
/// Uses an explicit stack instead of recursion.
pub struct Descendants<'a> {
    arena: &'a NodeArena,
    stack: Vec<NodeIndex>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        while let Some(idx) = self.stack.pop() {
            let Some(node) = self.arena.get(idx) else {
                continue;
            };
            if node.removed {
                continue;
            }
            self.stack.extend(node.children.iter().rev().copied());
            return Some(idx);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_links_parent() {
        let mut arena = NodeArena::new();
        let root = arena.add_root(NodeData::CompilationUnit);
        let ident = arena.add_identifier(root, "x").unwrap();

        assert_eq!(arena.parent(ident), Some(root));
        assert_eq!(arena.children(root), &[ident]);
        assert_eq!(arena.parent(root), None);
    }

    #[test]
    fn test_add_attribute_to_non_section_is_rejected() {
        let mut arena = NodeArena::new();
        let root = arena.add_root(NodeData::CompilationUnit);
        let err = arena.add_attribute(root, "Obsolete").unwrap_err();
        assert_eq!(
            err,
            TreeError::KindMismatch {
                index: root,
                expected: NodeKind::AttributeSection,
                found: NodeKind::CompilationUnit,
            }
        );
    }

    #[test]
    fn test_remove_marks_subtree() {
        let mut arena = NodeArena::new();
        let root = arena.add_root(NodeData::CompilationUnit);
        let ns = arena.add_namespace(root, "N").unwrap();
        let ty = arena.add_type_declaration(ns, TypeKind::Class, "C").unwrap();

        arena.remove(ns).unwrap();

        assert!(arena.children(root).is_empty());
        assert!(!arena.is_live(ns));
        assert!(!arena.is_live(ty));
        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.remove(ty), Err(TreeError::Removed(ty)));
    }

    #[test]
    fn test_traversal_reaches_deeply_nested_nodes() {
        let mut arena = NodeArena::new();
        let root = arena.add_root(NodeData::CompilationUnit);
        let mut current = root;
        for _ in 0..5_000 {
            current = arena.add_other(current, "binary").unwrap();
        }
        let leaf = arena.add_identifier(current, "x").unwrap();

        assert_eq!(arena.descendants_and_self(root).count(), 5_002);
        assert_eq!(
            arena.descendants_of_kind(root, NodeKind::Identifier).collect::<Vec<_>>(),
            vec![leaf]
        );
    }
}
