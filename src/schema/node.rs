use indexmap::IndexMap;
use smol_str::SmolStr;

use super::types::YangType;
use crate::base::NodeId;

/// A named entry in a schema tree.
///
/// Parent and child links are arena indices owned by the
/// [`SchemaTree`](super::SchemaTree); they are filled in when the node is
/// attached and never point outside the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub(super) name: SmolStr,
    pub(super) ty: Option<YangType>,
    pub(super) parent: Option<NodeId>,
    /// Maps local child name to its NodeId (nodes are stored in the arena)
    pub(super) children: IndexMap<SmolStr, NodeId>,
    pub(super) is_list: bool,
    pub(super) key: Option<SmolStr>,
}

impl SchemaNode {
    fn bare(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            parent: None,
            children: IndexMap::new(),
            is_list: false,
            key: None,
        }
    }

    /// A node with no type of its own (module, container, choice...).
    pub fn container(name: impl Into<SmolStr>) -> Self {
        Self::bare(name)
    }

    /// A typed leaf.
    pub fn leaf(name: impl Into<SmolStr>, ty: impl Into<YangType>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::bare(name)
        }
    }

    /// A list keyed by `key` (the raw YANG key statement).
    pub fn list(name: impl Into<SmolStr>, key: impl Into<SmolStr>) -> Self {
        Self {
            is_list: true,
            key: Some(key.into()),
            ..Self::bare(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&YangType> {
        self.ty.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Look up a direct child by local name.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Iterate over `(name, id)` of direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Individual key leaf names; YANG allows several, space separated.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.key.as_deref().unwrap_or_default().split_whitespace()
    }

    pub fn is_leafref(&self) -> bool {
        self.ty.as_ref().is_some_and(YangType::is_leafref)
    }

    /// The leafref path, if this node is a leafref.
    pub fn leafref_path(&self) -> Option<&str> {
        self.ty
            .as_ref()
            .filter(|ty| ty.is_leafref())
            .map(|ty| ty.path.as_str())
    }
}
