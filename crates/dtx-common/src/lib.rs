//! Common types and utilities shared across the dtx crates.
//!
//! - Traversal limits (`limits`)
//! - Fully-qualified names of compiler-synthesized metadata types (`known_names`)

// Centralized limits and thresholds
pub mod limits;

// Metadata type names emitted by the C# compiler
pub mod known_names;
pub use known_names::is_embedded_attribute_name;
