//! dtx: structural rewrite passes for decompiled syntax trees.
//!
//! A front end builds a [`SyntaxTree`] per decompilation unit and attaches
//! resolved names to it. Before the tree is printed or exported as a
//! project, the owner runs a [`Pipeline`] of passes over it:
//!
//! ```
//! use dtx::{
//!     Pipeline, RemoveCompilerGeneratedAssemblyAttributes, RemoveEmbeddedAttributes,
//!     SyntaxTree, TransformContext, TransformSettings,
//! };
//!
//! let settings = TransformSettings { export_full_project: true, ..Default::default() };
//! let mut pipeline = Pipeline::new();
//! if settings.export_full_project {
//!     pipeline
//!         .push(RemoveCompilerGeneratedAssemblyAttributes)
//!         .push(RemoveEmbeddedAttributes);
//! }
//!
//! let mut tree = SyntaxTree::new();
//! pipeline.run(&mut tree, &TransformContext::new(settings)).unwrap();
//! ```
//!
//! The crate re-exports the workspace crates:
//! - `dtx-common`: traversal limits and well-known metadata names
//! - `dtx-syntax`: node arena, node variants, annotation side table
//! - `dtx-transforms`: pipeline, context and the passes

pub use dtx_common as common;
pub use dtx_syntax as syntax;
pub use dtx_transforms as transforms;

pub use dtx_syntax::{
    Annotations, ArgumentData, ArgumentValue, AttributeTarget, KnownAttributeFlags, Literal,
    NodeArena, NodeData, NodeIndex, NodeKind, SymbolAnnotation, SyntaxTree, TreeError, TypeKind,
};
pub use dtx_transforms::{
    AstTransform, CancellationToken, EscapeInvalidIdentifiers, Pipeline,
    RemoveCompilerGeneratedAssemblyAttributes, RemoveEmbeddedAttributes, TransformContext,
    TransformError, TransformSettings, escape_identifier,
};

// Run pipelines over many independent trees
pub mod parallel;
pub use parallel::transform_all;

// Tracing subscriber setup for hosts
pub mod tracing_config;
