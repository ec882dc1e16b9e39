// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The profile arena and its selection set.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::node::ProfileNode;
use crate::types::{Frame, NodeId};

/// Selection key that always sorts first.
pub const ALL_SELECTION: &str = "all";

/// Immutable-by-convention arena of profile nodes plus named roots.
///
/// A profile holds one or more independent trees ("selections", for example
/// one per thread). Selection keys are kept sorted with [`ALL_SELECTION`]
/// first and the remaining keys in ascending order.
///
/// Parents are recorded at insertion time so that walking up from a node
/// never requires a search from the root.
///
/// ## Example
///
/// ```rust
/// use flame_tree::{Profile, ProfileNode};
///
/// let profile = Profile::from_selections([
///     ("worker", ProfileNode::new("run", 10)),
///     ("all", ProfileNode::new("root", 100).with_child(ProfileNode::new("main", 60))),
/// ]);
///
/// let keys: Vec<_> = profile.selection_keys().collect();
/// assert_eq!(keys, ["all", "worker"]);
///
/// let root = profile.selection("all").unwrap();
/// let main = profile.children_of(root)[0];
/// assert_eq!(profile.parent_of(main), Some(root));
/// ```
#[derive(Clone, Default)]
pub struct Profile {
    nodes: Vec<Slot>,
    selections: Vec<(String, NodeId)>,
}

impl core::fmt::Debug for Profile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Profile")
            .field("nodes", &self.nodes.len())
            .field("selections", &self.selections)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Slot {
    frame: Frame,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Ordering of selection keys: `"all"` first, then ascending.
pub fn selection_order(a: &str, b: &str) -> Ordering {
    match (a == ALL_SELECTION, b == ALL_SELECTION) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl Profile {
    /// Create an empty profile with no selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from named nested trees.
    ///
    /// Nodes are numbered in pre-order per selection. A repeated key keeps the
    /// last tree supplied for it.
    pub fn from_selections<I, K>(selections: I) -> Self
    where
        I: IntoIterator<Item = (K, ProfileNode)>,
        K: Into<String>,
    {
        let mut profile = Self::new();
        for (key, tree) in selections {
            let root = profile.insert_tree(tree);
            profile.add_selection(key, root);
        }
        profile
    }

    /// Flatten a nested tree into the arena and return its root.
    pub fn insert_tree(&mut self, tree: ProfileNode) -> NodeId {
        let ProfileNode { frame, children } = tree;
        let root = self.insert(None, frame);
        // Children are pushed in reverse so they pop in draw order, keeping
        // identifiers in pre-order.
        let mut stack: Vec<(NodeId, ProfileNode)> =
            children.into_iter().rev().map(|c| (root, c)).collect();
        while let Some((parent, node)) = stack.pop() {
            let ProfileNode { frame, children } = node;
            let id = self.insert(Some(parent), frame);
            stack.extend(children.into_iter().rev().map(|c| (id, c)));
        }
        root
    }

    /// Insert a frame as the last child of `parent` (or as a detached root if `None`).
    ///
    /// A `parent` that does not belong to this profile is treated as `None`.
    pub fn insert(&mut self, parent: Option<NodeId>, frame: Frame) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId indices are 32-bit; profiles stay well below that."
        )]
        let id = NodeId(self.nodes.len() as u32);
        let parent = parent.filter(|p| self.contains(*p));
        self.nodes.push(Slot {
            frame,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.idx()].children.push(id);
        }
        id
    }

    /// Register `root` under a selection key, replacing any previous root for it.
    ///
    /// Roots that do not belong to this profile are ignored.
    pub fn add_selection(&mut self, key: impl Into<String>, root: NodeId) {
        if !self.contains(root) {
            return;
        }
        let key = key.into();
        match self
            .selections
            .binary_search_by(|(k, _)| selection_order(k, &key))
        {
            Ok(i) => self.selections[i].1 = root,
            Err(i) => self.selections.insert(i, (key, root)),
        }
    }

    /// Returns `true` if the profile has no selections.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Selection keys in display order.
    pub fn selection_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.selections.iter().map(|(k, _)| k.as_str())
    }

    /// The first selection in display order, if any.
    pub fn first_selection(&self) -> Option<(&str, NodeId)> {
        self.selections.first().map(|(k, id)| (k.as_str(), *id))
    }

    /// Root of the named selection.
    pub fn selection(&self, key: &str) -> Option<NodeId> {
        self.selections
            .binary_search_by(|(k, _)| selection_order(k, key))
            .ok()
            .map(|i| self.selections[i].1)
    }

    /// Returns `true` if `id` was issued by this profile.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Frame data for a node.
    pub fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.nodes.get(id.idx()).map(|slot| &slot.frame)
    }

    /// Children of a node in draw order, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.idx())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node, or `None` for roots and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|slot| slot.parent)
    }

    /// Returns `true` if `id` is `root` or one of its descendants.
    pub fn is_within(&self, id: NodeId, root: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut current = Some(id);
        while let Some(node) = current {
            if node == root {
                return true;
            }
            current = self.parent_of(node);
        }
        false
    }
}
