use dtx_syntax::{
    Annotations, KnownAttributeFlags, NodeArena, NodeData, NodeIndex, NodeKind, SymbolAnnotation,
    SyntaxTree, TreeError, TypeDeclarationData, TypeKind,
};
use dtx_transforms::{AstTransform, RemoveEmbeddedAttributes, TransformContext, TransformError};

const IS_READ_ONLY: &str = "System.Runtime.CompilerServices.IsReadOnlyAttribute";
const NULLABLE: &str = "System.Runtime.CompilerServices.NullableAttribute";
const NULLABLE_CONTEXT: &str = "System.Runtime.CompilerServices.NullableContextAttribute";
const EMBEDDED: &str = "Microsoft.CodeAnalysis.EmbeddedAttribute";

fn declare(
    tree: &mut SyntaxTree,
    parent: NodeIndex,
    full_name: &str,
    flags: KnownAttributeFlags,
) -> NodeIndex {
    let short = full_name.rsplit('.').next().unwrap_or(full_name);
    let decl = tree
        .arena
        .add_type_declaration(parent, TypeKind::Class, short)
        .unwrap();
    tree.annotate_type_declaration(decl, SymbolAnnotation::new(full_name, flags))
        .unwrap();
    decl
}

fn run(tree: &mut SyntaxTree) -> Result<(), TransformError> {
    RemoveEmbeddedAttributes.run(tree, &TransformContext::default())
}

fn namespaces(tree: &SyntaxTree) -> Vec<NodeIndex> {
    tree.arena
        .descendants_of_kind(tree.root, NodeKind::NamespaceDeclaration)
        .collect()
}

#[test]
fn test_sole_embedded_member_removes_namespace() {
    let mut tree = SyntaxTree::new();
    let ns = tree
        .arena
        .add_namespace(tree.root, "System.Runtime.CompilerServices")
        .unwrap();
    let decl = declare(&mut tree, ns, IS_READ_ONLY, KnownAttributeFlags::EMBEDDED);

    run(&mut tree).unwrap();

    assert!(namespaces(&tree).is_empty());
    assert!(!tree.arena.is_live(ns));
    assert!(!tree.arena.is_live(decl));
    assert!(tree.arena.children(tree.root).is_empty());
}

#[test]
fn test_embedded_member_with_sibling_keeps_namespace() {
    let mut tree = SyntaxTree::new();
    let ns = tree.arena.add_namespace(tree.root, "App").unwrap();
    let decl = declare(&mut tree, ns, NULLABLE, KnownAttributeFlags::EMBEDDED);
    let program = tree
        .arena
        .add_type_declaration(ns, TypeKind::Class, "Program")
        .unwrap();

    run(&mut tree).unwrap();

    assert_eq!(namespaces(&tree), vec![ns]);
    assert!(!tree.arena.is_live(decl));
    assert_eq!(tree.arena.members(ns).as_slice(), &[program]);
}

#[test]
fn test_all_embedded_members_collapse_namespace() {
    let mut tree = SyntaxTree::new();
    let ns = tree
        .arena
        .add_namespace(tree.root, "Microsoft.CodeAnalysis")
        .unwrap();
    declare(&mut tree, ns, EMBEDDED, KnownAttributeFlags::EMBEDDED);
    declare(&mut tree, ns, NULLABLE_CONTEXT, KnownAttributeFlags::EMBEDDED);

    run(&mut tree).unwrap();

    // The first removal leaves one member, the second takes the namespace.
    assert!(!tree.arena.is_live(ns));
    assert!(tree.arena.children(tree.root).is_empty());
}

#[test]
fn test_reserved_name_without_embedded_flag_is_kept() {
    let mut tree = SyntaxTree::new();
    let ns = tree
        .arena
        .add_namespace(tree.root, "System.Runtime.CompilerServices")
        .unwrap();
    let read_only = declare(&mut tree, ns, IS_READ_ONLY, KnownAttributeFlags::empty());
    let nullable = declare(&mut tree, ns, NULLABLE, KnownAttributeFlags::empty());

    run(&mut tree).unwrap();

    assert_eq!(tree.arena.members(ns).as_slice(), &[read_only, nullable]);
}

#[test]
fn test_embedded_flag_on_unknown_name_is_kept() {
    let mut tree = SyntaxTree::new();
    let ns = tree.arena.add_namespace(tree.root, "App").unwrap();
    let decl = declare(
        &mut tree,
        ns,
        "App.Internal.PolyfillAttribute",
        KnownAttributeFlags::EMBEDDED,
    );

    run(&mut tree).unwrap();

    assert!(tree.arena.is_live(decl));
}

#[test]
fn test_unannotated_type_is_kept() {
    let mut tree = SyntaxTree::new();
    let ns = tree
        .arena
        .add_namespace(tree.root, "System.Runtime.CompilerServices")
        .unwrap();
    let decl = tree
        .arena
        .add_type_declaration(ns, TypeKind::Class, "IsReadOnlyAttribute")
        .unwrap();

    run(&mut tree).unwrap();

    assert!(tree.arena.is_live(decl));
    assert_eq!(namespaces(&tree), vec![ns]);
}

#[test]
fn test_top_level_embedded_type_is_removed_alone() {
    let mut tree = SyntaxTree::new();
    let root = tree.root;
    let decl = declare(&mut tree, root, NULLABLE, KnownAttributeFlags::EMBEDDED);
    let other = tree.arena.add_other(tree.root, "using System;").unwrap();

    run(&mut tree).unwrap();

    assert!(!tree.arena.is_live(decl));
    assert_eq!(tree.arena.children(tree.root), &[other]);
}

#[test]
fn test_nested_embedded_type_is_removed_from_its_container() {
    let mut tree = SyntaxTree::new();
    let ns = tree.arena.add_namespace(tree.root, "App").unwrap();
    let outer = tree
        .arena
        .add_type_declaration(ns, TypeKind::Class, "Outer")
        .unwrap();
    let nested = declare(&mut tree, outer, IS_READ_ONLY, KnownAttributeFlags::EMBEDDED);

    run(&mut tree).unwrap();

    assert!(!tree.arena.is_live(nested));
    assert!(tree.arena.is_live(outer));
    assert!(tree.arena.members(outer).is_empty());
}

#[test]
fn test_nested_namespaces_collapse_one_level() {
    let mut tree = SyntaxTree::new();
    let outer = tree.arena.add_namespace(tree.root, "System").unwrap();
    let inner = tree.arena.add_namespace(outer, "Runtime").unwrap();
    declare(&mut tree, inner, NULLABLE, KnownAttributeFlags::EMBEDDED);

    run(&mut tree).unwrap();

    assert!(!tree.arena.is_live(inner));
    assert_eq!(namespaces(&tree), vec![outer]);
}

#[test]
fn test_parentless_embedded_type_is_a_producer_defect() {
    let mut tree = detached_root(NULLABLE);

    assert_eq!(
        run(&mut tree),
        Err(TransformError::Tree(TreeError::NoParent(tree.root)))
    );
    assert!(tree.arena.is_live(tree.root));
}

/// A tree whose root is itself an embedded type declaration.
fn detached_root(full_name: &str) -> SyntaxTree {
    let mut arena = NodeArena::new();
    let root = arena.add_root(NodeData::TypeDeclaration(TypeDeclarationData {
        kind: TypeKind::Class,
        name: NodeIndex::NONE,
    }));
    let mut tree = SyntaxTree::from_parts(arena, root, Annotations::new());
    tree.annotate_type_declaration(
        root,
        SymbolAnnotation::new(full_name, KnownAttributeFlags::EMBEDDED),
    )
    .unwrap();
    tree
}

#[test]
fn test_deeply_nested_embedded_type_is_removed() {
    let mut tree = SyntaxTree::new();
    let ns = tree.arena.add_namespace(tree.root, "App").unwrap();
    let mut current = tree
        .arena
        .add_type_declaration(ns, TypeKind::Class, "Outer")
        .unwrap();
    for depth in 0..1_000 {
        current = tree
            .arena
            .add_type_declaration(current, TypeKind::Class, format!("Inner{depth}"))
            .unwrap();
    }
    let nested = declare(&mut tree, current, NULLABLE, KnownAttributeFlags::EMBEDDED);

    run(&mut tree).unwrap();

    assert!(!tree.arena.is_live(nested));
    assert!(tree.arena.is_live(current));
}
