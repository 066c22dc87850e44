//! Ordered pass runner.
//!
//! The pipeline does not decide which passes run; its owner builds it from
//! whatever policy applies (typically `TransformSettings`). Passes run
//! strictly in insertion order, each with exclusive access to the tree.

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::AstTransform;
use dtx_syntax::SyntaxTree;
use std::fmt;

#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl Pipeline {
    pub fn new() -> Pipeline {
        Pipeline::default()
    }

    /// Append a pass to the end of the pipeline.
    pub fn push(&mut self, transform: impl AstTransform + 'static) -> &mut Pipeline {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Builder form of [`Pipeline::push`].
    #[must_use]
    pub fn with(mut self, transform: impl AstTransform + 'static) -> Pipeline {
        self.push(transform);
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Pass names in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Run every pass against `tree`, in order.
    ///
    /// Stops at the first error. Cancellation is checked before each pass;
    /// passes also check it between node visits.
    pub fn run(
        &mut self,
        tree: &mut SyntaxTree,
        ctx: &TransformContext,
    ) -> Result<(), TransformError> {
        for transform in &mut self.transforms {
            ctx.check_cancelled()?;

            let span = tracing::debug_span!("transform", name = transform.name());
            let _guard = span.enter();
            let live_before = tree.arena.live_count();

            transform.run(tree, ctx)?;

            tracing::debug!(
                removed = live_before.saturating_sub(tree.arena.live_count()),
                "transform finished"
            );
        }
        Ok(())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("transforms", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/pipeline_order.rs"]
mod tests;
