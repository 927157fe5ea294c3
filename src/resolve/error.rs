//! Error types for leafref resolution.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::NodeId;
use crate::path::PathError;

/// Errors that can occur while resolving a leafref.
///
/// Every failure is terminal for the resolution call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The node has no type, or a type other than leafref.
    #[error("entry {name} is not a leafref")]
    NotALeafref { name: SmolStr },

    /// The leafref path does not have the shape of a reference.
    #[error("key {name} had an invalid path {schema_path}")]
    MalformedPath {
        name: SmolStr,
        /// Schema path of the offending node.
        schema_path: String,
        /// The leafref path as written.
        path: String,
        #[source]
        reason: PathError,
    },

    /// A relative path climbs past the topmost reachable node.
    #[error("entry {name} does not have a parent")]
    BrokenAncestorChain { name: SmolStr },

    /// A descent step names a child that does not exist.
    #[error("entry {segment} not found in {searched}")]
    SegmentNotFound { segment: SmolStr, searched: SmolStr },

    /// A node reached while following a leafref chain carries no type.
    #[error("entry {name} has no type")]
    MissingType { name: SmolStr },

    /// Following leafref targets came back to an entry already visited.
    #[error("leafref chain through {name} is cyclic")]
    Cycle { name: SmolStr },

    /// The id does not belong to the tree being resolved over.
    #[error("node {0} is not part of this schema tree")]
    UnknownNode(NodeId),
}

/// Fieldless discriminant of [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    NotALeafref,
    MalformedPath,
    BrokenAncestorChain,
    SegmentNotFound,
    MissingType,
    Cycle,
    UnknownNode,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::NotALeafref { .. } => ResolveErrorKind::NotALeafref,
            Self::MalformedPath { .. } => ResolveErrorKind::MalformedPath,
            Self::BrokenAncestorChain { .. } => ResolveErrorKind::BrokenAncestorChain,
            Self::SegmentNotFound { .. } => ResolveErrorKind::SegmentNotFound,
            Self::MissingType { .. } => ResolveErrorKind::MissingType,
            Self::Cycle { .. } => ResolveErrorKind::Cycle,
            Self::UnknownNode(_) => ResolveErrorKind::UnknownNode,
        }
    }
}
