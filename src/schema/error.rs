//! Error types for schema tree construction.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::NodeId;

/// Errors that can occur while building a [`SchemaTree`](super::SchemaTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Sibling names must be unique.
    #[error("entry {name} already exists in {parent}")]
    DuplicateChild { parent: SmolStr, name: SmolStr },

    /// The arena already holds as many nodes as a NodeId can address.
    #[error("schema tree is full ({0} nodes)")]
    TooManyNodes(usize),

    /// The id does not belong to this tree.
    #[error("node {0} is not part of this schema tree")]
    UnknownNode(NodeId),
}
