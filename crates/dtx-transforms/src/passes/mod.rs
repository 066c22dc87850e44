//! The rewrite passes.
//!
//! - `escape_invalid_identifiers`: identifier text → `[A-Za-z0-9_]`, opt-in
//! - `assembly_attributes`: compiler-synthesized assembly/module markers
//! - `embedded_attributes`: compiler-embedded helper type declarations
//!
//! The last two are only wanted when exporting a full project.

pub mod assembly_attributes;
pub mod embedded_attributes;
pub mod escape_invalid_identifiers;

pub use assembly_attributes::RemoveCompilerGeneratedAssemblyAttributes;
pub use embedded_attributes::RemoveEmbeddedAttributes;
pub use escape_invalid_identifiers::{EscapeInvalidIdentifiers, escape_identifier};
