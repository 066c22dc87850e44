//! Escape identifiers containing characters that cannot appear in source.
//!
//! Every character outside `[A-Za-z0-9_]` becomes `_XXXX`, the uppercase
//! hex of its UTF-16 code unit(s). A result that would start with a digit
//! gets a leading `_`. The rewrite is idempotent: escaped output only holds
//! valid characters and never starts with a digit.

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::AstTransform;
use dtx_syntax::{NodeIndex, NodeKind, SyntaxTree};
use std::borrow::Cow;

#[inline]
fn is_valid_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[inline]
fn is_valid_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_valid_identifier(name: &str) -> bool {
    name.chars().all(is_valid_char) && name.chars().next().is_none_or(is_valid_start)
}

/// Rewrite `name` into a valid identifier.
///
/// Returns the input unchanged (borrowed) when it is already valid.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_valid_identifier(name) {
        return Cow::Borrowed(name);
    }

    let mut escaped = String::with_capacity(name.len() + 8);
    let mut units = [0u16; 2];
    for ch in name.chars() {
        if is_valid_char(ch) {
            escaped.push(ch);
            continue;
        }
        // Non-BMP characters take two units, so every escape is four digits.
        for unit in ch.encode_utf16(&mut units) {
            escaped.push_str(&format!("_{unit:04X}"));
        }
    }

    if escaped.chars().next().is_some_and(|ch| !is_valid_start(ch)) {
        escaped.insert(0, '_');
    }
    Cow::Owned(escaped)
}

/// Rewrites every identifier in the tree with [`escape_identifier`].
///
/// Not part of the default export setup; callers opt in.
#[derive(Debug, Default)]
pub struct EscapeInvalidIdentifiers;

impl AstTransform for EscapeInvalidIdentifiers {
    fn name(&self) -> &'static str {
        "escape-invalid-identifiers"
    }

    fn run(
        &mut self,
        tree: &mut SyntaxTree,
        ctx: &TransformContext,
    ) -> Result<(), TransformError> {
        let identifiers: Vec<NodeIndex> = tree
            .arena
            .descendants_of_kind(tree.root, NodeKind::Identifier)
            .collect();

        let mut rewritten = 0usize;
        for idx in identifiers {
            ctx.check_cancelled()?;

            let Some(name) = tree.arena.identifier_name(idx) else {
                continue;
            };
            let escaped = match escape_identifier(name) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(escaped) => escaped,
            };
            tracing::trace!(idx = idx.0, from = name, to = escaped.as_str(), "escape identifier");

            tree.arena.set_identifier_name(idx, escaped)?;
            rewritten += 1;
        }

        tracing::debug!(rewritten, "escaped invalid identifiers");
        Ok(())
    }
}
