//! Structural errors raised by the arena.
//!
//! These only surface when the producer hands over a malformed tree or a
//! caller uses a stale index. Correct pass logic never triggers them.

use crate::base::NodeIndex;
use crate::node::NodeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist in this arena")]
    InvalidIndex(NodeIndex),

    #[error("node {0} has already been removed from the tree")]
    Removed(NodeIndex),

    #[error("node {0} has no parent")]
    NoParent(NodeIndex),

    #[error("node {child} is not listed among the children of its parent {parent}")]
    NotAChild { child: NodeIndex, parent: NodeIndex },

    #[error("node {index} is a {found:?}, expected {expected:?}")]
    KindMismatch {
        index: NodeIndex,
        expected: NodeKind,
        found: NodeKind,
    },
}
