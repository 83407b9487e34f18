//! The element arena and its [`ElementFactory`] implementation.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::host::ElementFactory;
use crate::rewrite::attributes::Attributes;

const NO_CHILDREN: &[NodeId] = &[];

/// Element tree stored in a slotmap arena.
///
/// Construction is bottom-up: children exist before the element that adopts
/// them, so every node starts detached and the host picks the root with
/// [`Dom::set_root`].
#[derive(Default)]
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` as a detached node.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Store `data` and adopt it as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.insert(data);
        self.append_child(parent, id);
        id
    }

    /// Adopt `child` as the last child of `parent`, taking it away from any
    /// previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes.contains_key(parent), "unknown parent");
        debug_assert!(self.nodes.contains_key(child), "unknown child");

        if let Some(previous) = self.parent.insert(child, parent) {
            if let Some(siblings) = self.children.get_mut(previous) {
                siblings.retain(|&id| id != child);
            }
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children in construction order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(NO_CHILDREN, Vec::as_slice)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ElementFactory for Dom {
    type Element = NodeId;

    fn create_element(
        &mut self,
        tag: &str,
        attributes: Attributes,
        children: Vec<NodeId>,
    ) -> NodeId {
        let id = self.insert(NodeData::new(tag).with_attributes(attributes));
        for child in children {
            self.append_child(id, child);
        }
        id
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(*element) {
            node.add_class(class);
        }
    }
}
