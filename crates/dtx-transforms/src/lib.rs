//! Structural rewrite passes over decompiled syntax trees.
//!
//! Every pass implements [`AstTransform`] and mutates a [`SyntaxTree`] in
//! place. A [`Pipeline`] runs an ordered, caller-chosen list of passes one
//! after another; which passes to enable is up to the caller.
//!
//! | Pass | Effect |
//! |------|--------|
//! | [`EscapeInvalidIdentifiers`] | rewrites identifier text into `[A-Za-z0-9_]` |
//! | [`RemoveCompilerGeneratedAssemblyAttributes`] | drops assembly/module markers the compiler re-emits itself |
//! | [`RemoveEmbeddedAttributes`] | drops compiler-embedded helper type declarations |
//!
//! Passes are fail-open: anything that does not match a rule exactly is left
//! in place. Errors only report malformed trees or cancellation.
//!
//! [`SyntaxTree`]: dtx_syntax::SyntaxTree

pub mod context;
pub mod error;
pub mod passes;
pub mod pipeline;
pub mod transform;

pub use context::{CancellationToken, TransformContext, TransformSettings};
pub use error::TransformError;
pub use passes::{
    EscapeInvalidIdentifiers, RemoveCompilerGeneratedAssemblyAttributes, RemoveEmbeddedAttributes,
    escape_identifier,
};
pub use pipeline::Pipeline;
pub use transform::AstTransform;
