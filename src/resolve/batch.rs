//! Whole-tree leafref resolution.

use rayon::prelude::*;
use tracing::debug;

use super::error::ResolveError;
use super::leafref::LeafrefResolver;
use crate::base::NodeId;
use crate::schema::SchemaTree;

/// Outcome of resolving one leafref node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafrefResolution {
    /// The leafref node.
    pub node: NodeId,
    /// Its target, or why it could not be found.
    pub result: Result<NodeId, ResolveError>,
}

impl LeafrefResolution {
    pub fn is_resolved(&self) -> bool {
        self.result.is_ok()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.result.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&ResolveError> {
        self.result.as_ref().err()
    }
}

/// Resolve every leafref node in `tree`, in parallel.
///
/// One entry per leafref node, ordered by [`NodeId`]. Whether a failure
/// aborts generation or becomes a diagnostic is left to the caller.
pub fn resolve_all(tree: &SchemaTree) -> Vec<LeafrefResolution> {
    let resolver = LeafrefResolver::new(tree);
    let leafrefs: Vec<NodeId> = tree.leafrefs().collect();

    let resolutions: Vec<LeafrefResolution> = leafrefs
        .par_iter()
        .map(|&node| LeafrefResolution {
            node,
            result: resolver.resolve(node),
        })
        .collect();

    debug!(
        "[RESOLVE_ALL] {} leafrefs, {} unresolved",
        resolutions.len(),
        failures(&resolutions).count()
    );
    resolutions
}

/// The failed entries of a [`resolve_all`] run.
pub fn failures(
    resolutions: &[LeafrefResolution],
) -> impl Iterator<Item = (NodeId, &ResolveError)> {
    resolutions
        .iter()
        .filter_map(|resolution| resolution.error().map(|err| (resolution.node, err)))
}
