//! Centralized limits for tree traversal.
//!
//! Trees handed to the passes come from an external producer, so nesting
//! depth is not under our control. Traversal is iterative and walks every
//! level.

/// Initial capacity for the explicit traversal stack.
///
/// Only a starting size; the stack grows with the tree.
pub const TRAVERSAL_STACK_CAPACITY: usize = 64;
