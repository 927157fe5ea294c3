use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::ResolveError;
use crate::base::NodeId;
use crate::path::{LeafrefPath, PathAnchor};
use crate::schema::{SchemaTree, YangType};

/// Resolves leafref paths against a schema tree.
///
/// The resolver only reads the tree. Each call walks the tree as it is now;
/// nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct LeafrefResolver<'a> {
    tree: &'a SchemaTree,
}

impl<'a> LeafrefResolver<'a> {
    pub fn new(tree: &'a SchemaTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &'a SchemaTree {
        self.tree
    }

    // ============================================================
    // Primary Resolution API
    // ============================================================

    /// Find the node designated by the leafref path of `node`.
    pub fn resolve(&self, node: NodeId) -> Result<NodeId, ResolveError> {
        let entry = self.tree.get(node).ok_or(ResolveError::UnknownNode(node))?;
        let raw = entry
            .leafref_path()
            .ok_or_else(|| ResolveError::NotALeafref {
                name: entry.name().into(),
            })?;

        let path = LeafrefPath::parse(raw).map_err(|reason| {
            debug!("[LEAFREF] '{}' has malformed path '{}': {}", entry.name(), raw, reason);
            ResolveError::MalformedPath {
                name: entry.name().into(),
                schema_path: self.tree.schema_path(node),
                path: raw.to_string(),
                reason,
            }
        })?;
        trace!("[LEAFREF] resolve '{}' path='{}' -> {}", entry.name(), raw, path);

        let start = match path.anchor() {
            PathAnchor::Root => self.tree.root_of(node),
            PathAnchor::Ancestor(levels) => self.ascend(node, levels)?,
        };
        self.descend(start, &path)
    }

    /// Resolve `node` and keep following leafref targets until a node with
    /// a non-leafref type is reached, returning that type.
    pub fn resolve_type(&self, node: NodeId) -> Result<&'a YangType, ResolveError> {
        let tree = self.tree;
        let mut visited = FxHashSet::default();
        let mut current = node;

        loop {
            if !visited.insert(current) {
                debug!("[LEAFREF] cycle detected at {}", tree[current].name());
                return Err(ResolveError::Cycle {
                    name: tree[current].name().into(),
                });
            }

            let target = self.resolve(current)?;
            let target_node = &tree[target];
            match target_node.ty() {
                None => {
                    return Err(ResolveError::MissingType {
                        name: target_node.name().into(),
                    });
                }
                Some(ty) if ty.is_leafref() => {
                    trace!("[LEAFREF] follow chain into '{}'", target_node.name());
                    current = target;
                }
                Some(ty) => return Ok(ty),
            }
        }
    }

    // ============================================================
    // Navigation
    // ============================================================

    /// Climb `levels` parent links starting at `from` itself.
    fn ascend(&self, from: NodeId, levels: usize) -> Result<NodeId, ResolveError> {
        let mut current = from;
        for _ in 0..levels {
            current = self.tree.parent(current).ok_or_else(|| {
                debug!("[LEAFREF] ascent stopped at root '{}'", self.tree[current].name());
                ResolveError::BrokenAncestorChain {
                    name: self.tree[current].name().into(),
                }
            })?;
        }
        trace!("[LEAFREF] ascended {} to '{}'", levels, self.tree[current].name());
        Ok(current)
    }

    /// Walk the descent list down from `start`.
    fn descend(&self, start: NodeId, path: &LeafrefPath) -> Result<NodeId, ResolveError> {
        path.segments().try_fold(start, |current, segment| {
            let searched = &self.tree[current];
            searched.child(segment).ok_or_else(|| {
                debug!("[LEAFREF] '{}' not found in '{}'", segment, searched.name());
                ResolveError::SegmentNotFound {
                    segment: segment.into(),
                    searched: searched.name().into(),
                }
            })
        })
    }
}

/// Find the node designated by the leafref path of `node`.
///
/// Shorthand for [`LeafrefResolver::resolve`].
pub fn resolve_leafref(tree: &SchemaTree, node: NodeId) -> Result<NodeId, ResolveError> {
    LeafrefResolver::new(tree).resolve(node)
}
