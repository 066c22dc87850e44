//! Fully-qualified names of metadata types the C# compiler emits on
//! its own.
//!
//! These are matched against the resolved names attached by the upstream
//! resolver, never against the text written in the tree.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

// Assembly-level markers
pub const DEBUGGABLE_ATTRIBUTE: &str = "System.Diagnostics.DebuggableAttribute";
pub const COMPILATION_RELAXATIONS_ATTRIBUTE: &str =
    "System.Runtime.CompilerServices.CompilationRelaxationsAttribute";
pub const RUNTIME_COMPATIBILITY_ATTRIBUTE: &str =
    "System.Runtime.CompilerServices.RuntimeCompatibilityAttribute";
pub const TARGET_FRAMEWORK_ATTRIBUTE: &str = "System.Runtime.Versioning.TargetFrameworkAttribute";
pub const SECURITY_PERMISSION_ATTRIBUTE: &str =
    "System.Security.Permissions.SecurityPermissionAttribute";

// Module-level markers
pub const UNVERIFIABLE_CODE_ATTRIBUTE: &str = "System.Security.UnverifiableCodeAttribute";

/// Marker applied to every helper type the compiler embeds into its output.
pub const EMBEDDED_ATTRIBUTE: &str = "Microsoft.CodeAnalysis.EmbeddedAttribute";

/// Helper types the compiler copies into each assembly to polyfill language
/// features, plus the embedded marker type itself.
pub const EMBEDDED_ATTRIBUTE_NAMES: [&str; 10] = [
    "System.Runtime.CompilerServices.IsReadOnlyAttribute",
    "System.Runtime.CompilerServices.IsByRefLikeAttribute",
    "System.Runtime.CompilerServices.IsUnmanagedAttribute",
    "System.Runtime.CompilerServices.NullableAttribute",
    "System.Runtime.CompilerServices.NullableContextAttribute",
    "System.Runtime.CompilerServices.NativeIntegerAttribute",
    "System.Runtime.CompilerServices.RefSafetyRulesAttribute",
    "System.Runtime.CompilerServices.ScopedRefAttribute",
    "System.Runtime.CompilerServices.RequiresLocationAttribute",
    EMBEDDED_ATTRIBUTE,
];

static EMBEDDED_ATTRIBUTE_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| EMBEDDED_ATTRIBUTE_NAMES.iter().copied().collect());

/// Whether `full_name` names one of the compiler-embedded helper types.
#[must_use]
pub fn is_embedded_attribute_name(full_name: &str) -> bool {
    EMBEDDED_ATTRIBUTE_SET.contains(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_names_are_matched_exactly() {
        assert!(is_embedded_attribute_name(
            "System.Runtime.CompilerServices.NullableContextAttribute"
        ));
        assert!(is_embedded_attribute_name(EMBEDDED_ATTRIBUTE));
        assert!(!is_embedded_attribute_name("NullableAttribute"));
        assert!(!is_embedded_attribute_name(
            "system.runtime.compilerservices.nullableattribute"
        ));
        assert!(!is_embedded_attribute_name(DEBUGGABLE_ATTRIBUTE));
    }
}
