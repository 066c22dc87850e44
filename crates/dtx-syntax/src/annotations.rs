//! Resolved-symbol side table.
//!
//! The upstream resolver fills this table once, before any pass runs. The
//! passes only read it; a node without an entry is treated as unresolved.

use crate::base::NodeIndex;
use bitflags::bitflags;
use rustc_hash::FxHashMap;

bitflags! {
    /// Well-known attributes declared on a resolved type definition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KnownAttributeFlags: u32 {
        /// `[Microsoft.CodeAnalysis.Embedded]`: the type was copied in by the compiler.
        const EMBEDDED = 1 << 0;
    }
}

/// Resolved type of a `TypeReference` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub full_name: String,
}

/// Resolved definition behind a `TypeDeclaration` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAnnotation {
    pub full_name: String,
    pub attributes: KnownAttributeFlags,
}

impl SymbolAnnotation {
    pub fn new(full_name: impl Into<String>, attributes: KnownAttributeFlags) -> Self {
        SymbolAnnotation {
            full_name: full_name.into(),
            attributes,
        }
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.attributes.contains(KnownAttributeFlags::EMBEDDED)
    }
}

#[derive(Debug, Default)]
pub struct Annotations {
    types: FxHashMap<NodeIndex, TypeAnnotation>,
    symbols: FxHashMap<NodeIndex, SymbolAnnotation>,
}

impl Annotations {
    pub fn new() -> Annotations {
        Annotations::default()
    }

    pub fn set_type(&mut self, type_ref: NodeIndex, full_name: impl Into<String>) {
        self.types.insert(
            type_ref,
            TypeAnnotation {
                full_name: full_name.into(),
            },
        );
    }

    pub fn set_symbol(&mut self, declaration: NodeIndex, symbol: SymbolAnnotation) {
        self.symbols.insert(declaration, symbol);
    }

    pub fn type_of(&self, type_ref: NodeIndex) -> Option<&TypeAnnotation> {
        self.types.get(&type_ref)
    }

    pub fn symbol_of(&self, declaration: NodeIndex) -> Option<&SymbolAnnotation> {
        self.symbols.get(&declaration)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.symbols.is_empty()
    }
}
