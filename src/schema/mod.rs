//! # Schema Tree
//!
//! Parent-linked tree of schema entries as produced by a YANG front end.
//! Nodes live in a [`SchemaTree`] arena and refer to each other by
//! [`NodeId`](crate::base::NodeId), so parent links never own anything.

mod error;
mod node;
mod tree;
mod types;

pub use error::SchemaError;
pub use node::SchemaNode;
pub use tree::{Ancestors, SchemaTree};
pub use types::{TypeKind, UnknownTypeKind, YangType};
