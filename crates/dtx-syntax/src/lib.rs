//! Arena-backed syntax tree for decompiled compilation units.
//!
//! The tree is produced by an external front end, annotated once by the
//! resolver, then rewritten in place by the passes in `dtx-transforms`.
//!
//! - `NodeIndex` / `NodeArena`: stable-index node storage with parent links
//! - `NodeData` / `NodeKind`: the closed set of node variants
//! - `Annotations`: resolved-name side table, read-only to the passes
//! - `SyntaxTree`: arena + root + annotations for one unit

pub mod annotations;
pub mod arena;
pub mod base;
pub mod error;
pub mod node;
pub mod tree;

pub use annotations::{Annotations, KnownAttributeFlags, SymbolAnnotation, TypeAnnotation};
pub use arena::{Descendants, NodeArena};
pub use base::NodeIndex;
pub use error::TreeError;
pub use node::{
    ArgumentData, ArgumentValue, AttributeData, AttributeSectionData, AttributeTarget,
    IdentifierData, Literal, NamespaceData, Node, NodeData, NodeKind, TypeDeclarationData,
    TypeKind,
};
pub use tree::SyntaxTree;
