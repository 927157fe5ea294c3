//! Schema tree fixtures modelled on OpenConfig modules.

use yangref::{NodeId, SchemaNode, SchemaTree, TypeKind, YangType};

/// Attach a node, panicking on a duplicate name.
pub fn add(tree: &mut SchemaTree, parent: NodeId, node: SchemaNode) -> NodeId {
    tree.add_child(parent, node)
        .unwrap_or_else(|err| panic!("fixture construction failed: {err}"))
}

/// Attach a leafref leaf.
pub fn add_leafref(tree: &mut SchemaTree, parent: NodeId, name: &str, path: &str) -> NodeId {
    add(tree, parent, SchemaNode::leaf(name, YangType::leafref(path)))
}

/// Look up a node by its data path (`/a/b/c`), panicking if absent.
pub fn node_at(tree: &SchemaTree, data_path: &str) -> NodeId {
    tree.lookup(data_path.trim_start_matches('/').split('/'))
        .unwrap_or_else(|| panic!("no node at '{}'", data_path))
}

/// A fake root holding trimmed-down interfaces and network-instance models.
///
/// ```text
/// device
/// ├── interfaces
/// │   └── interface [name]
/// │       ├── name              leafref ../config/name
/// │       ├── config { name: string, mtu: uint16 }
/// │       └── subinterfaces
/// │           └── subinterface [index]
/// │               ├── index     leafref ../oc-if:config/oc-if:index
/// │               └── config { index: uint32 }
/// └── network-instances
///     └── network-instance [name]
///         ├── name              leafref ../config/name
///         ├── config { name: string }
///         └── interfaces
///             └── interface [id]
///                 ├── id        leafref ../config/id
///                 └── config
///                     ├── id: string
///                     ├── interface     leafref /oc-if:interfaces/oc-if:interface/oc-if:name
///                     └── subinterface  leafref /oc-if:interfaces/oc-if:interface/oc-if:subinterfaces/oc-if:subinterface/oc-if:index
/// ```
pub fn openconfig_tree() -> SchemaTree {
    let mut tree = SchemaTree::new(SchemaNode::container("device"));
    let root = tree.root();

    let interfaces = add(&mut tree, root, SchemaNode::container("interfaces"));
    let interface = add(&mut tree, interfaces, SchemaNode::list("interface", "name"));
    add_leafref(&mut tree, interface, "name", "../config/name");
    let config = add(&mut tree, interface, SchemaNode::container("config"));
    add(&mut tree, config, SchemaNode::leaf("name", TypeKind::String));
    add(&mut tree, config, SchemaNode::leaf("mtu", TypeKind::Uint16));

    let subinterfaces = add(&mut tree, interface, SchemaNode::container("subinterfaces"));
    let subinterface = add(
        &mut tree,
        subinterfaces,
        SchemaNode::list("subinterface", "index"),
    );
    add_leafref(&mut tree, subinterface, "index", "../oc-if:config/oc-if:index");
    let sub_config = add(&mut tree, subinterface, SchemaNode::container("config"));
    add(&mut tree, sub_config, SchemaNode::leaf("index", TypeKind::Uint32));

    let instances = add(&mut tree, root, SchemaNode::container("network-instances"));
    let instance = add(
        &mut tree,
        instances,
        SchemaNode::list("network-instance", "name"),
    );
    add_leafref(&mut tree, instance, "name", "../config/name");
    let ni_config = add(&mut tree, instance, SchemaNode::container("config"));
    add(&mut tree, ni_config, SchemaNode::leaf("name", TypeKind::String));

    let ni_interfaces = add(&mut tree, instance, SchemaNode::container("interfaces"));
    let ni_interface = add(&mut tree, ni_interfaces, SchemaNode::list("interface", "id"));
    add_leafref(&mut tree, ni_interface, "id", "../config/id");
    let ni_if_config = add(&mut tree, ni_interface, SchemaNode::container("config"));
    add(&mut tree, ni_if_config, SchemaNode::leaf("id", TypeKind::String));
    add_leafref(
        &mut tree,
        ni_if_config,
        "interface",
        "/oc-if:interfaces/oc-if:interface/oc-if:name",
    );
    add_leafref(
        &mut tree,
        ni_if_config,
        "subinterface",
        "/oc-if:interfaces/oc-if:interface/oc-if:subinterfaces/oc-if:subinterface/oc-if:index",
    );

    tree
}
