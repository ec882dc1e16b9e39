// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-to-frame lookup over a computed [`Layout`].

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use flame_tree::{NodeId, Profile};
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::layout::Layout;

/// Root-to-node path of a hit. Flame graphs are rarely deeper than this inline capacity
/// within one viewport.
pub type HitPath = SmallVec<[NodeId; 16]>;

/// Result of a hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The frame whose row contains the point.
    pub node: NodeId,
    /// Path from the layout root to `node` (inclusive).
    pub path: HitPath,
}

impl Hit {
    /// Depth of the hit below the layout root.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Horizontal containment, with the box rounded outward to whole pixels.
fn spans_column(rect: Rect, x: f64) -> bool {
    x >= rect.x0.floor() && x <= rect.x1.ceil()
}

impl Layout {
    /// Find the frame whose row contains `point`.
    ///
    /// Starting at the layout root, a node is entered only when the point lies
    /// within its column and at or below its top edge. If the point is also
    /// within the node's row, that node is the answer and its children are not
    /// examined. Otherwise the children are tried in draw order and the first
    /// match wins. Points in unsampled space to the right of the last child,
    /// or anywhere the last pass did not reach, produce `None`.
    ///
    /// Only the branch that can contain the point is walked.
    pub fn hit_test(&self, profile: &Profile, point: Point) -> Option<Hit> {
        let root = self.root()?;
        let mut path = HitPath::new();
        if self.hit_recursive(profile, root, point, &mut path) {
            let node = *path.last()?;
            Some(Hit { node, path })
        } else {
            None
        }
    }

    /// Convenience wrapper returning only the node of [`Layout::hit_test`].
    pub fn node_at(&self, profile: &Profile, point: Point) -> Option<NodeId> {
        self.hit_test(profile, point).map(|hit| hit.node)
    }

    // Only nodes with cached bounds are entered, so depth never exceeds the
    // rows the last layout pass visited.
    fn hit_recursive(
        &self,
        profile: &Profile,
        id: NodeId,
        point: Point,
        path: &mut HitPath,
    ) -> bool {
        let Some(rect) = self.bounds(id) else {
            return false;
        };
        if !spans_column(rect, point.x) || point.y < rect.y0 {
            return false;
        }
        path.push(id);
        if point.y <= rect.y1 {
            return true;
        }
        for &child in profile.children_of(id) {
            if self.hit_recursive(profile, child, point, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flame_tree::ProfileNode;
    use kurbo::Size;

    fn setup() -> (Profile, Layout, NodeId) {
        let profile = Profile::from_selections([(
            "all",
            ProfileNode::new("root", 100).with_children([
                ProfileNode::new("a", 60).with_child(ProfileNode::new("a1", 30)),
                ProfileNode::new("b", 30),
            ]),
        )]);
        let root = profile.selection("all").unwrap();
        let mut layout = Layout::new();
        layout.compute(&profile, root, Size::new(1000.0, 240.0), 24.0, Point::ZERO);
        (profile, layout, root)
    }

    #[test]
    fn point_in_row_returns_that_row() {
        let (profile, layout, root) = setup();
        let a = profile.children_of(root)[0];
        let b = profile.children_of(root)[1];
        let a1 = profile.children_of(a)[0];

        assert_eq!(layout.node_at(&profile, Point::new(500.0, 10.0)), Some(root));
        assert_eq!(layout.node_at(&profile, Point::new(100.0, 30.0)), Some(a));
        assert_eq!(layout.node_at(&profile, Point::new(700.0, 30.0)), Some(b));
        assert_eq!(layout.node_at(&profile, Point::new(100.0, 60.0)), Some(a1));

        let hit = layout.hit_test(&profile, Point::new(100.0, 60.0)).unwrap();
        assert_eq!(hit.path.as_slice(), &[root, a, a1]);
        assert_eq!(hit.depth(), 2);
    }

    #[test]
    fn row_edges_belong_to_the_upper_row() {
        let (profile, layout, root) = setup();
        // y = 24 is both the bottom of the root row and the top of its children.
        assert_eq!(layout.node_at(&profile, Point::new(100.0, 24.0)), Some(root));
    }

    #[test]
    fn unsampled_space_is_empty() {
        let (profile, layout, root) = setup();
        let a = profile.children_of(root)[0];
        // Children cover 0..900; 950 is unsampled.
        assert_eq!(layout.node_at(&profile, Point::new(950.0, 30.0)), None);
        // a1 covers 0..300 under a (0..600).
        assert_eq!(layout.node_at(&profile, Point::new(450.0, 60.0)), None);
        // Below every laid out row.
        assert_eq!(layout.node_at(&profile, Point::new(100.0, 200.0)), None);
        assert_eq!(layout.node_at(&profile, Point::new(100.0, 30.0)), Some(a));
    }

    #[test]
    fn outside_the_viewport_misses() {
        let (profile, layout, _) = setup();
        assert_eq!(layout.node_at(&profile, Point::new(-5.0, 10.0)), None);
        assert_eq!(layout.node_at(&profile, Point::new(1001.5, 10.0)), None);
        assert_eq!(layout.node_at(&profile, Point::new(10.0, -1.0)), None);
    }

    #[test]
    fn sub_pixel_frames_stay_hittable() {
        let profile = Profile::from_selections([(
            "all",
            ProfileNode::new("root", 1000).with_children([
                ProfileNode::new("thin", 1),
                ProfileNode::new("wide", 997),
            ]),
        )]);
        let root = profile.selection("all").unwrap();
        let [thin, wide] = [profile.children_of(root)[0], profile.children_of(root)[1]];
        let mut layout = Layout::new();
        layout.compute(&profile, root, Size::new(100.0, 100.0), 10.0, Point::ZERO);

        // "thin" spans 0.0..0.1; rounded outward it covers 0..1.
        assert!(layout.bounds(thin).unwrap().width() < 1.0);
        assert_eq!(layout.node_at(&profile, Point::new(0.5, 15.0)), Some(thin));
        assert_eq!(layout.node_at(&profile, Point::new(1.0, 15.0)), Some(thin));
        assert_eq!(layout.node_at(&profile, Point::new(1.5, 15.0)), Some(wide));
    }

    #[test]
    fn empty_layout_has_no_hits() {
        let profile = Profile::new();
        let layout = Layout::new();
        assert!(layout.hit_test(&profile, Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn hit_testing_is_idempotent() {
        let (profile, layout, _) = setup();
        for &(x, y) in &[(10.0, 10.0), (620.0, 40.0), (950.0, 30.0), (250.0, 70.0)] {
            let p = Point::new(x, y);
            let first = layout.hit_test(&profile, p);
            for _ in 0..3 {
                assert_eq!(layout.hit_test(&profile, p), first);
            }
        }
    }
}
