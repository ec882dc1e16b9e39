// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection, zoom, and scroll state.

use alloc::string::{String, ToString};

use flame_tree::{NodeId, Profile};
use log::debug;

/// What a wheel gesture did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The scroll position changed.
    Scrolled,
    /// The zoom root moved up to its parent.
    ZoomedOut,
    /// Nothing changed.
    Ignored,
}

/// Navigation state over a [`Profile`].
///
/// Tracks the current selection key, the active (zoomed) root, and a vertical
/// scroll offset. The offset is never positive: `0` shows the active root's
/// row at the top and more negative values move down through deeper rows.
///
/// The active root is always the selection root or one of its descendants.
/// Every transition is total: requests that cannot apply leave the state
/// untouched and report `false` (or [`WheelOutcome::Ignored`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    selection: Option<String>,
    root: Option<NodeId>,
    active: Option<NodeId>,
    scroll: f64,
}

impl Navigation {
    /// Create an empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Start over on the first selection of `profile`.
    pub fn reset_to_profile(&mut self, profile: &Profile) {
        self.clear();
        if let Some((key, root)) = profile.first_selection() {
            self.selection = Some(key.to_string());
            self.root = Some(root);
            self.active = Some(root);
        }
    }

    /// Switch to the selection `key`, showing its root unscrolled.
    ///
    /// Returns `false` for keys that `profile` does not have.
    pub fn select(&mut self, profile: &Profile, key: &str) -> bool {
        let Some(root) = profile.selection(key) else {
            return false;
        };
        debug!("select {key:?}");
        self.selection = Some(key.to_string());
        self.root = Some(root);
        self.active = Some(root);
        self.scroll = 0.0;
        true
    }

    /// Return to the root of the current selection, unscrolled.
    pub fn reset(&mut self) -> bool {
        if self.root.is_none() {
            return false;
        }
        debug!("reset to selection root");
        self.active = self.root;
        self.scroll = 0.0;
        true
    }

    /// Make `node` the active root and scroll to its top.
    ///
    /// Ignored when `node` is already active or lies outside the current
    /// selection. An ignored call keeps the current scroll offset.
    pub fn zoom_in(&mut self, profile: &Profile, node: NodeId) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        if self.active == Some(node) || !profile.is_within(node, root) {
            return false;
        }
        debug!("zoom in to {node:?}");
        self.active = Some(node);
        self.scroll = 0.0;
        true
    }

    /// Make the parent of the active root active.
    ///
    /// Ignored when the active root is the selection root.
    pub fn zoom_out(&mut self, profile: &Profile) -> bool {
        let (Some(root), Some(active)) = (self.root, self.active) else {
            return false;
        };
        if active == root {
            return false;
        }
        let Some(parent) = profile.parent_of(active) else {
            return false;
        };
        debug!("zoom out to {parent:?}");
        self.active = Some(parent);
        self.scroll = 0.0;
        true
    }

    /// Move the view down by `delta` pixels (up for negative values).
    ///
    /// The offset is clamped so it never goes above the active root's row.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        if self.active.is_none() || !delta.is_finite() {
            return false;
        }
        let next = (self.scroll - delta).min(0.0);
        if next == self.scroll {
            return false;
        }
        self.scroll = next;
        true
    }

    /// Apply a vertical wheel gesture.
    ///
    /// Positive `delta_y` scrolls down and is ignored when nothing more is
    /// below (`can_scroll_down == false`). At the top, an upward gesture
    /// larger than one row zooms out instead of scrolling.
    pub fn wheel(
        &mut self,
        profile: &Profile,
        delta_y: f64,
        row_height: f64,
        can_scroll_down: bool,
    ) -> WheelOutcome {
        if self.active.is_none() || !delta_y.is_finite() {
            return WheelOutcome::Ignored;
        }
        if delta_y > 0.0 && !can_scroll_down {
            return WheelOutcome::Ignored;
        }
        if delta_y < 0.0 && self.is_at_top() && -delta_y > row_height {
            return if self.zoom_out(profile) {
                WheelOutcome::ZoomedOut
            } else {
                WheelOutcome::Ignored
            };
        }
        if self.scroll_by(delta_y) {
            WheelOutcome::Scrolled
        } else {
            WheelOutcome::Ignored
        }
    }

    /// Key of the current selection.
    pub fn current_selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Root of the current selection.
    pub fn selection_root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node rendered as the top row.
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Current scroll offset (`<= 0`).
    pub fn scroll_position(&self) -> f64 {
        self.scroll
    }

    /// Returns `true` if the active root's row is at the top of the view.
    pub fn is_at_top(&self) -> bool {
        self.scroll == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flame_tree::ProfileNode;

    struct Fixture {
        profile: Profile,
        root: NodeId,
        a: NodeId,
        a1: NodeId,
        b: NodeId,
    }

    fn fixture() -> Fixture {
        let profile = Profile::from_selections([
            (
                "all",
                ProfileNode::new("root", 100).with_children([
                    ProfileNode::new("a", 60).with_child(ProfileNode::new("a1", 30)),
                    ProfileNode::new("b", 40),
                ]),
            ),
            ("thread-1", ProfileNode::new("t1", 10)),
        ]);
        let root = profile.selection("all").unwrap();
        let a = profile.children_of(root)[0];
        let a1 = profile.children_of(a)[0];
        let b = profile.children_of(root)[1];
        Fixture {
            profile,
            root,
            a,
            a1,
            b,
        }
    }

    fn started(f: &Fixture) -> Navigation {
        let mut nav = Navigation::new();
        nav.reset_to_profile(&f.profile);
        nav
    }

    #[test]
    fn starts_on_first_selection() {
        let f = fixture();
        let nav = started(&f);
        assert_eq!(nav.current_selection(), Some("all"));
        assert_eq!(nav.active(), Some(f.root));
        assert_eq!(nav.scroll_position(), 0.0);

        let mut empty = Navigation::new();
        empty.reset_to_profile(&Profile::new());
        assert_eq!(empty, Navigation::default());
    }

    #[test]
    fn select_resets_zoom_and_scroll() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(nav.zoom_in(&f.profile, f.a));
        assert!(nav.scroll_by(30.0));

        assert!(nav.select(&f.profile, "thread-1"));
        let t1 = f.profile.selection("thread-1").unwrap();
        assert_eq!(nav.current_selection(), Some("thread-1"));
        assert_eq!(nav.active(), Some(t1));
        assert_eq!(nav.scroll_position(), 0.0);

        assert!(!nav.select(&f.profile, "missing"));
        assert_eq!(nav.current_selection(), Some("thread-1"));
    }

    #[test]
    fn zoom_in_then_out_round_trips() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(nav.zoom_in(&f.profile, f.a));
        assert!(nav.zoom_in(&f.profile, f.a1));
        assert!(nav.zoom_out(&f.profile));
        assert_eq!(nav.active(), Some(f.a));
        assert!(nav.zoom_out(&f.profile));
        assert_eq!(nav.active(), Some(f.root));
        assert!(!nav.zoom_out(&f.profile), "selection root has no parent to show");
        assert_eq!(nav.active(), Some(f.root));
    }

    #[test]
    fn zoom_in_rejects_active_and_foreign_nodes() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(!nav.zoom_in(&f.profile, f.root));
        let t1 = f.profile.selection("thread-1").unwrap();
        assert!(!nav.zoom_in(&f.profile, t1));
        assert_eq!(nav.active(), Some(f.root));
        assert!(nav.zoom_in(&f.profile, f.b));
        assert!(!nav.zoom_in(&f.profile, f.b));
    }

    #[test]
    fn zoom_in_resets_scroll() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(nav.scroll_by(48.0));
        assert_eq!(nav.scroll_position(), -48.0);
        assert!(nav.zoom_in(&f.profile, f.a));
        assert_eq!(nav.scroll_position(), 0.0);
    }

    #[test]
    fn zoom_in_on_active_root_keeps_scroll() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(nav.scroll_by(20.0));
        assert!(!nav.zoom_in(&f.profile, f.root));
        assert_eq!(nav.active(), Some(f.root));
        assert_eq!(nav.scroll_position(), -20.0, "a no-op zoom leaves the offset alone");
    }

    #[test]
    fn scroll_never_goes_positive() {
        let f = fixture();
        let mut nav = started(&f);
        assert!(!nav.scroll_by(-100.0));
        assert_eq!(nav.scroll_position(), 0.0);
        assert!(nav.scroll_by(70.0));
        assert!(nav.scroll_by(-20.0));
        assert_eq!(nav.scroll_position(), -50.0);
        assert!(nav.scroll_by(-500.0));
        assert_eq!(nav.scroll_position(), 0.0);
        assert!(!nav.scroll_by(f64::NAN));
    }

    #[test]
    fn reset_returns_to_selection_root() {
        let f = fixture();
        let mut nav = started(&f);
        nav.zoom_in(&f.profile, f.a1);
        nav.scroll_by(10.0);
        assert!(nav.reset());
        assert_eq!(nav.active(), Some(f.root));
        assert_eq!(nav.scroll_position(), 0.0);
        assert_eq!(nav.current_selection(), Some("all"));
        assert!(!Navigation::new().reset());
    }

    #[test]
    fn wheel_up_at_top_zooms_out_past_one_row() {
        let f = fixture();
        let mut nav = started(&f);
        nav.zoom_in(&f.profile, f.a);
        assert_eq!(
            nav.wheel(&f.profile, -10.0, 24.0, true),
            WheelOutcome::Ignored
        );
        assert_eq!(nav.active(), Some(f.a));
        assert_eq!(
            nav.wheel(&f.profile, -24.0, 24.0, true),
            WheelOutcome::Ignored,
            "exactly one row is not enough"
        );
        assert_eq!(
            nav.wheel(&f.profile, -50.0, 24.0, true),
            WheelOutcome::ZoomedOut
        );
        assert_eq!(nav.active(), Some(f.root));
        assert_eq!(
            nav.wheel(&f.profile, -50.0, 24.0, true),
            WheelOutcome::Ignored
        );
    }

    #[test]
    fn wheel_up_while_scrolled_scrolls() {
        let f = fixture();
        let mut nav = started(&f);
        nav.zoom_in(&f.profile, f.a);
        assert_eq!(nav.wheel(&f.profile, 30.0, 24.0, true), WheelOutcome::Scrolled);
        assert_eq!(
            nav.wheel(&f.profile, -100.0, 24.0, true),
            WheelOutcome::Scrolled
        );
        assert_eq!(nav.scroll_position(), 0.0);
        assert_eq!(nav.active(), Some(f.a), "scrolling back to the top does not zoom out");
    }

    #[test]
    fn wheel_down_needs_content_below() {
        let f = fixture();
        let mut nav = started(&f);
        assert_eq!(
            nav.wheel(&f.profile, 30.0, 24.0, false),
            WheelOutcome::Ignored
        );
        assert_eq!(nav.scroll_position(), 0.0);
        assert_eq!(nav.wheel(&f.profile, 30.0, 24.0, true), WheelOutcome::Scrolled);
        assert_eq!(nav.scroll_position(), -30.0);
    }

    #[test]
    fn cleared_state_ignores_everything() {
        let f = fixture();
        let mut nav = Navigation::new();
        assert!(!nav.zoom_in(&f.profile, f.a));
        assert!(!nav.zoom_out(&f.profile));
        assert!(!nav.scroll_by(10.0));
        assert_eq!(nav.wheel(&f.profile, 10.0, 24.0, true), WheelOutcome::Ignored);
    }
}
