//! # yangref-base
//!
//! Leafref resolution over parent-linked YANG schema trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! config    → Generator options, fake root naming
//!   ↓
//! resolve   → Leafref resolver, error taxonomy, whole-tree resolution
//!   ↓
//! path      → Leafref path grammar (absolute/relative, module prefixes)
//!   ↓
//! schema    → SchemaTree arena, SchemaNode, YangType
//!   ↓
//! base      → Primitives (NodeId, grammar constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use yangref::resolve::resolve_leafref;
//! use yangref::schema::{SchemaNode, SchemaTree, TypeKind, YangType};
//!
//! let mut tree = SchemaTree::new(SchemaNode::list("interface", "name"));
//! let config = tree.add_child(tree.root(), SchemaNode::container("config")).unwrap();
//! let name = tree.add_child(config, SchemaNode::leaf("name", TypeKind::String)).unwrap();
//! let key = tree
//!     .add_child(tree.root(), SchemaNode::leaf("name", YangType::leafref("../oc-if:config/oc-if:name")))
//!     .unwrap();
//!
//! assert_eq!(resolve_leafref(&tree, key), Ok(name));
//! ```

// ============================================================================
// MODULES (dependency order: base → schema → path → resolve → config)
// ============================================================================

/// Foundation types: NodeId, path grammar constants
pub mod base;

/// Schema tree: arena, nodes, type descriptors
pub mod schema;

/// Leafref path grammar
pub mod path;

/// Leafref resolution
pub mod resolve;

/// Generator options
pub mod config;

// Re-export commonly needed items
pub use base::NodeId;
pub use config::{GeneratorOptions, resolve_root_name};
pub use path::{LeafrefPath, PathError};
pub use resolve::{LeafrefResolver, ResolveError, ResolveErrorKind, resolve_all, resolve_leafref};
pub use schema::{SchemaError, SchemaNode, SchemaTree, TypeKind, YangType};
