//! Resolution assertion helpers.

use yangref::{LeafrefResolver, NodeId, ResolveErrorKind, SchemaTree, TypeKind};

/// Resolve the leafref at `from` and assert it lands on `expected` (data paths).
pub fn assert_resolves_to(tree: &SchemaTree, from: &str, expected: &str) -> NodeId {
    let node = super::tree_fixtures::node_at(tree, from);
    match LeafrefResolver::new(tree).resolve(node) {
        Ok(target) => {
            assert_eq!(
                tree.data_path(target),
                expected,
                "'{}' resolved to the wrong node",
                from
            );
            target
        }
        Err(err) => panic!("'{}' did not resolve: {}", from, err),
    }
}

/// Assert the leafref at `node` fails with the given kind.
pub fn assert_fails_with(tree: &SchemaTree, node: NodeId, expected: ResolveErrorKind) {
    match LeafrefResolver::new(tree).resolve(node) {
        Ok(target) => panic!(
            "'{}' unexpectedly resolved to '{}'",
            tree.schema_path(node),
            tree.schema_path(target)
        ),
        Err(err) => assert_eq!(
            err.kind(),
            expected,
            "'{}' failed with the wrong error: {}",
            tree.schema_path(node),
            err
        ),
    }
}

/// Assert the final type reached through a leafref chain.
pub fn assert_target_kind(tree: &SchemaTree, from: &str, expected: TypeKind) {
    let node = super::tree_fixtures::node_at(tree, from);
    let ty = LeafrefResolver::new(tree)
        .resolve_type(node)
        .unwrap_or_else(|err| panic!("'{}' type did not resolve: {}", from, err));
    assert_eq!(ty.kind, expected, "'{}' has the wrong target kind", from);
}
