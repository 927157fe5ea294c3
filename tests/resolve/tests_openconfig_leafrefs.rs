//! Resolution of the list-key and cross-module leafrefs found in OpenConfig models.

use rstest::rstest;
use yangref::{TypeKind, resolve_all};

use crate::helpers::resolve_assertions::*;
use crate::helpers::tree_fixtures::*;

// =============================================================================
// LIST KEYS
// =============================================================================

#[rstest]
#[case("/interfaces/interface/name", "/interfaces/interface/config/name")]
#[case(
    "/interfaces/interface/subinterfaces/subinterface/index",
    "/interfaces/interface/subinterfaces/subinterface/config/index"
)]
#[case(
    "/network-instances/network-instance/name",
    "/network-instances/network-instance/config/name"
)]
#[case(
    "/network-instances/network-instance/interfaces/interface/id",
    "/network-instances/network-instance/interfaces/interface/config/id"
)]
fn test_list_key_resolves_to_config_leaf(#[case] from: &str, #[case] expected: &str) {
    let tree = openconfig_tree();
    assert_resolves_to(&tree, from, expected);
}

// =============================================================================
// ABSOLUTE CROSS-MODULE REFERENCES
// =============================================================================

#[test]
fn test_absolute_reference_into_other_subtree() {
    let tree = openconfig_tree();
    assert_resolves_to(
        &tree,
        "/network-instances/network-instance/interfaces/interface/config/interface",
        "/interfaces/interface/name",
    );
    assert_resolves_to(
        &tree,
        "/network-instances/network-instance/interfaces/interface/config/subinterface",
        "/interfaces/interface/subinterfaces/subinterface/index",
    );
}

#[test]
fn test_absolute_reference_chain_reaches_typed_leaf() {
    // interface -> /interfaces/interface/name -> ../config/name (string)
    let tree = openconfig_tree();
    assert_target_kind(
        &tree,
        "/network-instances/network-instance/interfaces/interface/config/interface",
        TypeKind::String,
    );
    assert_target_kind(
        &tree,
        "/network-instances/network-instance/interfaces/interface/config/subinterface",
        TypeKind::Uint32,
    );
}

// =============================================================================
// WHOLE TREE
// =============================================================================

#[test]
fn test_resolve_all_on_valid_model() {
    let tree = openconfig_tree();
    let resolutions = resolve_all(&tree);

    assert_eq!(resolutions.len(), 6);
    assert!(
        resolutions.iter().all(|r| r.is_resolved()),
        "unresolved: {:?}",
        resolutions.iter().filter(|r| !r.is_resolved()).collect::<Vec<_>>()
    );

    let nodes: Vec<_> = resolutions.iter().map(|r| r.node).collect();
    let mut sorted = nodes.clone();
    sorted.sort();
    assert_eq!(nodes, sorted);
}

#[test]
fn test_data_path_of_every_node_roundtrips() {
    let mut tree = openconfig_tree();
    let host = node_at(&tree, "/network-instances/network-instance/config");
    let targets: Vec<_> = tree.iter().map(|(id, _)| id).skip(1).collect();

    for (idx, target) in targets.into_iter().enumerate() {
        let path = tree.data_path(target);
        let reference = add_leafref(&mut tree, host, &format!("ref-{idx}"), &path);
        assert_eq!(
            yangref::resolve_leafref(&tree, reference),
            Ok(target),
            "{} did not round-trip",
            path
        );
    }
}
