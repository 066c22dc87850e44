//! Transform many independent trees at once.
//!
//! Each tree owns its arena and annotations, so trees can be processed on
//! separate threads with no shared mutable state. Every tree gets a fresh
//! pipeline from `make_pipeline`; passes are never shared between trees.

use dtx_syntax::SyntaxTree;
use dtx_transforms::{Pipeline, TransformContext, TransformError};
use rayon::prelude::*;

/// Run a pipeline over every tree in parallel.
///
/// Results are returned in the same order as `trees`. A failure in one tree
/// does not stop the others; cancelling `ctx` stops all of them at their
/// next abort point.
pub fn transform_all<F>(
    trees: &mut [SyntaxTree],
    make_pipeline: F,
    ctx: &TransformContext,
) -> Vec<Result<(), TransformError>>
where
    F: Fn() -> Pipeline + Sync,
{
    tracing::debug!(trees = trees.len(), "transforming trees in parallel");

    trees
        .par_iter_mut()
        .enumerate()
        .map(|(index, tree)| {
            let span = tracing::debug_span!("tree", index);
            let _guard = span.enter();
            make_pipeline().run(tree, ctx)
        })
        .collect()
}
