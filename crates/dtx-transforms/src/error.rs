use dtx_syntax::TreeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("transform run was cancelled")]
    Cancelled,

    /// The tree handed in by the producer is structurally invalid.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
