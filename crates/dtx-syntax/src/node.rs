//! Node variants stored in the arena.
//!
//! Only the node kinds the rewrite passes inspect are modelled in detail.
//! Everything else the front end produces (statements, expressions, member
//! bodies) is carried as `NodeData::Other` and is never touched.

use crate::base::NodeIndex;

/// Target of an attribute section (`[assembly: ...]`, `[module: ...]`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeTarget {
    Assembly,
    Module,
    /// Any other target keyword, or the empty string for an untargeted section.
    Other(String),
}

impl AttributeTarget {
    /// Classify a target keyword as written in source.
    pub fn from_keyword(keyword: &str) -> AttributeTarget {
        match keyword {
            "assembly" => AttributeTarget::Assembly,
            "module" => AttributeTarget::Module,
            other => AttributeTarget::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

/// Literal values that can appear as attribute arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int32(i32),
    Int64(i64),
    Bool(bool),
    Char(char),
    String(String),
    Double(f64),
    Null,
}

/// The value expression of an attribute argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    Literal(Literal),
    /// `Target.Member`, e.g. `SecurityAction.RequestMinimum`.
    MemberReference { target: String, member: String },
    /// Any other expression, kept as its source text.
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentData {
    Positional(ArgumentValue),
    Named { name: String, value: ArgumentValue },
}

impl ArgumentData {
    pub fn value(&self) -> &ArgumentValue {
        match self {
            ArgumentData::Positional(value) | ArgumentData::Named { value, .. } => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierData {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSectionData {
    pub target: AttributeTarget,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeData {
    /// The `TypeReference` child naming the attribute type.
    pub type_ref: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclarationData {
    pub kind: TypeKind,
    /// The `Identifier` child holding the declared name.
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceData {
    /// The `Identifier` child holding the namespace name.
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    CompilationUnit,
    Identifier(IdentifierData),
    AttributeSection(AttributeSectionData),
    Attribute(AttributeData),
    /// Type name as written; the resolved name lives in `Annotations`.
    TypeReference { name: String },
    Argument(ArgumentData),
    TypeDeclaration(TypeDeclarationData),
    NamespaceDeclaration(NamespaceData),
    Other { label: String },
}

/// Fieldless discriminant of `NodeData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CompilationUnit,
    Identifier,
    AttributeSection,
    Attribute,
    TypeReference,
    Argument,
    TypeDeclaration,
    NamespaceDeclaration,
    Other,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::CompilationUnit => NodeKind::CompilationUnit,
            NodeData::Identifier(_) => NodeKind::Identifier,
            NodeData::AttributeSection(_) => NodeKind::AttributeSection,
            NodeData::Attribute(_) => NodeKind::Attribute,
            NodeData::TypeReference { .. } => NodeKind::TypeReference,
            NodeData::Argument(_) => NodeKind::Argument,
            NodeData::TypeDeclaration(_) => NodeKind::TypeDeclaration,
            NodeData::NamespaceDeclaration(_) => NodeKind::NamespaceDeclaration,
            NodeData::Other { .. } => NodeKind::Other,
        }
    }

    /// The child slot holding this node's own name, if it has one.
    ///
    /// Such children are part of the declaration itself, not members of it.
    pub fn name_slot(&self) -> Option<NodeIndex> {
        match self {
            NodeData::TypeDeclaration(decl) => Some(decl.name),
            NodeData::NamespaceDeclaration(ns) => Some(ns.name),
            _ => None,
        }
        .filter(|idx| idx.is_some())
    }
}

/// A slot in the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    pub(crate) parent: NodeIndex,
    pub(crate) children: Vec<NodeIndex>,
    pub(crate) removed: bool,
}

impl Node {
    pub(crate) fn new(data: NodeData, parent: NodeIndex) -> Node {
        Node {
            data,
            parent,
            children: Vec::new(),
            removed: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
