// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive band layout with a per-node position cache.

use alloc::vec::Vec;

use flame_tree::{Frame, NodeId, Profile};
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

/// Share of the parent's width given to `child`.
///
/// Every child of a parent with a zero count gets `0`, whatever its fraction.
/// Otherwise an explicit [`Frame::fraction`] wins, and without one the child's
/// count is divided by `parent_count`. Weights are not normalized, so siblings
/// may sum to more than one. Non-finite or negative weights collapse to `0`.
pub fn child_weight(child: &Frame, parent_count: u64) -> f64 {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Sample counts far below 2^53 in practice."
    )]
    let weight = match child.fraction {
        _ if parent_count == 0 => 0.0,
        Some(fraction) => fraction,
        None => child.count as f64 / parent_count as f64,
    };
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// The result of laying out one subtree into a viewport.
///
/// Each pass overwrites the position cache completely: nodes that were not
/// visited (for example because they lie below the viewport) have no bounds
/// afterwards, so hit testing never sees rectangles from an earlier pass.
///
/// ## Example
///
/// ```rust
/// use flame_layout::Layout;
/// use flame_tree::{Profile, ProfileNode};
/// use kurbo::{Point, Rect, Size};
///
/// let profile = Profile::from_selections([(
///     "all",
///     ProfileNode::new("root", 100)
///         .with_children([ProfileNode::new("a", 60), ProfileNode::new("b", 40)]),
/// )]);
/// let root = profile.selection("all").unwrap();
///
/// let mut layout = Layout::new();
/// layout.compute(&profile, root, Size::new(1000.0, 400.0), 24.0, Point::ZERO);
///
/// let b = profile.children_of(root)[1];
/// assert_eq!(layout.bounds(b), Some(Rect::new(600.0, 24.0, 1000.0, 48.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Layout {
    root: Option<NodeId>,
    viewport: Size,
    row_height: f64,
    boxes: HashMap<NodeId, Rect>,
    visible: Vec<NodeId>,
    more_below: bool,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out `root` and its descendants.
    ///
    /// `root` spans the full viewport width at `origin`; every row is
    /// `row_height` tall and children are packed left to right in draw order.
    /// A row scrolled entirely above the viewport is not reported as visible,
    /// but its children are still visited. Descent stops at the first row
    /// that reaches past the bottom edge, which sets [`Layout::has_more_below`].
    pub fn compute(
        &mut self,
        profile: &Profile,
        root: NodeId,
        viewport: Size,
        row_height: f64,
        origin: Point,
    ) {
        self.clear();
        if !profile.contains(root) {
            return;
        }
        self.root = Some(root);
        self.viewport = viewport;
        self.row_height = row_height;
        self.layout_recursive(profile, root, viewport.width, origin.x, origin.y);
    }

    /// Drop all cached positions.
    pub fn clear(&mut self) {
        self.root = None;
        self.boxes.clear();
        self.visible.clear();
        self.more_below = false;
    }

    // Recursion depth is bounded by the rows between the root and the bottom
    // edge, so it grows with viewport height and scroll offset, not tree size.
    fn layout_recursive(&mut self, profile: &Profile, id: NodeId, width: f64, x: f64, y: f64) {
        let Some(frame) = profile.frame(id) else {
            return;
        };
        let row_height = self.row_height;
        let bottom = y + row_height;
        self.boxes
            .insert(id, Rect::from_origin_size((x, y), (width, row_height)));
        if bottom >= 0.0 {
            self.visible.push(id);
        }
        if bottom > self.viewport.height {
            self.more_below = true;
            return;
        }
        let parent_count = frame.count;
        let mut child_x = x;
        for &child in profile.children_of(id) {
            let Some(child_frame) = profile.frame(child) else {
                continue;
            };
            let child_width = width * child_weight(child_frame, parent_count);
            self.layout_recursive(profile, child, child_width, child_x, bottom);
            child_x += child_width;
        }
    }

    /// Root of the last pass, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Viewport of the last pass.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Row height of the last pass.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Cached rectangle of a node from the last pass.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.boxes.get(&id).copied()
    }

    /// Nodes whose rows are not scrolled above the viewport, in pre-order.
    pub fn visible(&self) -> &[NodeId] {
        &self.visible
    }

    /// Visible nodes paired with their rectangles, in paint order.
    pub fn visible_bounds(&self) -> impl Iterator<Item = (NodeId, Rect)> + '_ {
        self.visible
            .iter()
            .filter_map(|id| self.boxes.get(id).map(|rect| (*id, *rect)))
    }

    /// Returns `true` if the last pass stopped descending at the bottom edge.
    pub fn has_more_below(&self) -> bool {
        self.more_below
    }

    /// Returns `true` if no pass has run since the last [`Layout::clear`].
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
