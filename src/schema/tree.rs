use std::ops::Index;

use tracing::trace;

use super::error::SchemaError;
use super::node::SchemaNode;
use crate::base::NodeId;
use crate::base::constants::PATH_SEPARATOR;

/// Arena-backed, parent-linked schema tree.
///
/// The root is always the first node. Nodes are only ever appended under an
/// existing parent, so the tree is acyclic by construction.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    /// Arena storage for all nodes - single source of truth
    arena: Vec<SchemaNode>,
}

impl SchemaTree {
    /// Create a tree whose root is `root`.
    pub fn new(mut root: SchemaNode) -> Self {
        root.parent = None;
        root.children.clear();
        Self { arena: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Attach `node` under `parent` and return its id.
    ///
    /// Any parent or children the node carried are discarded: links are
    /// always owned by the tree.
    pub fn add_child(&mut self, parent: NodeId, mut node: SchemaNode) -> Result<NodeId, SchemaError> {
        let parent_node = self
            .arena
            .get(parent.index())
            .ok_or(SchemaError::UnknownNode(parent))?;

        if parent_node.children.contains_key(&node.name) {
            return Err(SchemaError::DuplicateChild {
                parent: parent_node.name.clone(),
                name: node.name,
            });
        }

        let id = NodeId::try_new(self.arena.len())
            .ok_or(SchemaError::TooManyNodes(self.arena.len()))?;
        node.parent = Some(parent);
        node.children.clear();
        trace!("[SCHEMA] attach '{}' {} under {}", node.name, id, parent);

        self.arena[parent.index()]
            .children
            .insert(node.name.clone(), id);
        self.arena.push(node);
        Ok(id)
    }

    /// The node for `id`, if it belongs to this tree.
    pub fn node(&self, id: NodeId) -> Option<&SchemaNode> {
        self.get(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&SchemaNode> {
        self.arena.get(id.index())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.arena.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(SchemaNode::parent)
    }

    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.get(id).and_then(|node| node.child(name))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.children.values().copied())
    }

    /// Walk parent links, nearest ancestor first. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// The topmost node reachable from `id` through parent links.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Follow `names` down from the root.
    pub fn lookup<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Option<NodeId> {
        names
            .into_iter()
            .try_fold(self.root(), |current, name| self.child(current, name))
    }

    /// `/`-joined names from the root down to `id`, both included.
    ///
    /// This is the form used in diagnostics, e.g. `/openconfig/interfaces/name`.
    pub fn schema_path(&self, id: NodeId) -> String {
        self.join_names(id, true)
    }

    /// `/`-joined names below the root down to `id`.
    ///
    /// This is the absolute leafref path designating `id`; the root itself
    /// yields `/`.
    pub fn data_path(&self, id: NodeId) -> String {
        self.join_names(id, false)
    }

    fn join_names(&self, id: NodeId, include_root: bool) -> String {
        let mut chain: Vec<NodeId> = std::iter::once(id).chain(self.ancestors(id)).collect();
        if !include_root {
            chain.pop();
        }
        if chain.is_empty() {
            return PATH_SEPARATOR.to_string();
        }

        let mut path = String::new();
        for node in chain.iter().rev().filter_map(|&n| self.get(n)) {
            path.push(PATH_SEPARATOR);
            path.push_str(node.name());
        }
        path
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterate over every node in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SchemaNode)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId::new(idx), node))
    }

    /// Ids of every node whose type is a leafref.
    pub fn leafrefs(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, node)| node.is_leafref())
            .map(|(id, _)| id)
    }
}

impl Index<NodeId> for SchemaTree {
    type Output = SchemaNode;

    fn index(&self, id: NodeId) -> &SchemaNode {
        &self.arena[id.index()]
    }
}

/// Iterator over the ancestors of a node. See [`SchemaTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a SchemaTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
