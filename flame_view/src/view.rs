// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view coordinator: owns the profile, navigation state, and last layout.

use alloc::vec::Vec;

use flame_color::NodeColors;
use flame_layout::{BandGeometry, HoverOutline, Layout};
use flame_tree::{Frame, NodeId, Profile};
use kurbo::{Point, Rect, Size};
use log::{debug, trace, warn};

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::navigation::{Navigation, WheelOutcome};

/// Receives notifications from a [`FlameView`].
///
/// Both methods default to doing nothing; `()` is the no-op listener.
pub trait ViewListener {
    /// The user switched to another selection.
    fn selection_changed(&mut self, key: &str) {
        let _ = key;
    }

    /// The user clicked a frame with the platform "open" modifier held.
    fn ctrl_activated(&mut self, profile: &Profile, node: NodeId) {
        let _ = (profile, node);
    }
}

impl ViewListener for () {}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked frame became the zoom root.
    ZoomedIn(NodeId),
    /// The clicked frame was forwarded to [`ViewListener::ctrl_activated`].
    CtrlActivated(NodeId),
    /// The view went back to the selection root.
    Reset,
    /// Nothing changed.
    Ignored,
}

/// One frame ready to paint.
#[derive(Clone, Copy, Debug)]
pub struct Band<'a> {
    /// The frame's node.
    pub node: NodeId,
    /// The frame's data, for labels.
    pub frame: &'a Frame,
    /// Layout rectangle (what hit testing uses).
    pub bounds: Rect,
    /// Fill and label shapes.
    pub geometry: BandGeometry,
    /// Fill, stroke, and text colors.
    pub colors: NodeColors,
}

/// Details about the frame under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverInfo {
    /// The hovered node.
    pub node: NodeId,
    /// Its layout rectangle.
    pub bounds: Rect,
    /// Highlight shapes to draw over it.
    pub outline: HoverOutline,
    /// Count relative to the selection root, or `None` if the root has no samples.
    pub share_of_root: Option<f64>,
    /// Count relative to the zoom root, present only while zoomed into a
    /// frame whose count differs from the selection root's.
    pub share_of_top: Option<f64>,
}

/// An interactive flame graph over one [`Profile`].
///
/// The view is driven by host events (resize, pointer, wheel, selection) and
/// answers with paint [`Band`]s and hit-test results. State changes only mark
/// the layout stale; it is recomputed once, on the next read, so bursts of
/// events between paints cost a single layout pass. Reads always see a layout
/// that reflects every change made so far.
///
/// After [`FlameView::destroy`] the view is inert: mutating calls are logged
/// and ignored, and reads return nothing.
///
/// ## Example
///
/// ```rust
/// use flame_tree::{Profile, ProfileNode};
/// use flame_view::{ClickOutcome, FlameView, ViewConfig};
/// use kurbo::{Point, Size};
///
/// let profile = Profile::from_selections([(
///     "all",
///     ProfileNode::new("root", 100)
///         .with_children([ProfileNode::new("a", 60), ProfileNode::new("b", 40)]),
/// )]);
///
/// let config = ViewConfig::default().with_row_height(24.0);
/// let mut view = FlameView::new(config, Size::new(1000.0, 400.0)).unwrap();
/// view.set_profile(Some(profile));
///
/// let b = view.query(Point::new(700.0, 30.0)).unwrap();
/// assert_eq!(view.click(Point::new(700.0, 30.0), false), ClickOutcome::ZoomedIn(b));
/// assert_eq!(view.active_node(), Some(b));
/// ```
pub struct FlameView<L: ViewListener = ()> {
    config: ViewConfig,
    row_height: f64,
    viewport: Size,
    profile: Option<Profile>,
    navigation: Navigation,
    layout: Layout,
    dirty: bool,
    destroyed: bool,
    listener: L,
}

impl<L: ViewListener> core::fmt::Debug for FlameView<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlameView")
            .field("row_height", &self.row_height)
            .field("viewport", &self.viewport)
            .field("profile", &self.profile)
            .field("navigation", &self.navigation)
            .field("dirty", &self.dirty)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

fn validate_viewport(viewport: Size) -> Result<Size, ViewError> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(viewport.width) && ok(viewport.height) {
        Ok(viewport)
    } else {
        Err(ViewError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Sample counts far below 2^53 in practice."
)]
fn share(count: u64, of: u64) -> Option<f64> {
    (of != 0).then(|| count as f64 / of as f64)
}

impl FlameView {
    /// Create a view without a listener.
    pub fn new(config: ViewConfig, viewport: Size) -> Result<Self, ViewError> {
        Self::with_listener(config, viewport, ())
    }
}

impl<L: ViewListener> FlameView<L> {
    /// Create a view that reports to `listener`.
    ///
    /// Fails if the configuration yields an unusable row height or the
    /// viewport is negative or not finite.
    pub fn with_listener(
        config: ViewConfig,
        viewport: Size,
        listener: L,
    ) -> Result<Self, ViewError> {
        let row_height = config.resolve_row_height()?;
        let viewport = validate_viewport(viewport)?;
        Ok(Self {
            config,
            row_height,
            viewport,
            profile: None,
            navigation: Navigation::new(),
            layout: Layout::new(),
            dirty: true,
            destroyed: false,
            listener,
        })
    }

    fn live(&self, op: &str) -> bool {
        if self.destroyed {
            warn!("{op} called on a destroyed flame view");
        }
        !self.destroyed
    }

    /// Replace the profile and start over on its first selection.
    ///
    /// `None`, or a profile without selections, clears the view.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        if !self.live("set_profile") {
            return;
        }
        let profile = profile.filter(|p| !p.is_empty());
        match &profile {
            Some(p) => self.navigation.reset_to_profile(p),
            None => self.navigation.clear(),
        }
        debug!(
            "profile replaced; selection {:?}",
            self.navigation.current_selection()
        );
        self.profile = profile;
        self.layout.clear();
        self.dirty = true;
    }

    /// Resize the viewport (device pixels).
    ///
    /// Negative or non-finite sizes are ignored.
    pub fn set_viewport(&mut self, viewport: Size) {
        if !self.live("set_viewport") {
            return;
        }
        match validate_viewport(viewport) {
            Ok(viewport) if viewport != self.viewport => {
                self.viewport = viewport;
                self.dirty = true;
            }
            Ok(_) => {}
            Err(err) => warn!("ignoring viewport: {err}"),
        }
    }

    /// Replace the configuration, for example after a device scale change.
    pub fn set_config(&mut self, config: ViewConfig) -> Result<(), ViewError> {
        if !self.live("set_config") {
            return Ok(());
        }
        self.row_height = config.resolve_row_height()?;
        self.config = config;
        self.dirty = true;
        Ok(())
    }

    /// Switch to another selection and notify the listener.
    ///
    /// Unknown keys are ignored.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.live("select") {
            return false;
        }
        let Some(profile) = self.profile.as_ref() else {
            return false;
        };
        if !self.navigation.select(profile, key) {
            warn!("unknown selection {key:?}");
            return false;
        }
        self.dirty = true;
        self.listener.selection_changed(key);
        true
    }

    /// Return to the root of the current selection.
    pub fn reset(&mut self) {
        if !self.live("reset") {
            return;
        }
        if self.navigation.reset() {
            self.dirty = true;
        }
    }

    /// Zoom to `node` if it belongs to the current selection.
    pub fn zoom_to(&mut self, node: NodeId) -> bool {
        if !self.live("zoom_to") {
            return false;
        }
        let Some(profile) = self.profile.as_ref() else {
            return false;
        };
        let zoomed = self.navigation.zoom_in(profile, node);
        self.dirty |= zoomed;
        zoomed
    }

    /// Stop responding to input and release the profile.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        debug!("flame view destroyed");
        self.destroyed = true;
        self.profile = None;
        self.navigation.clear();
        self.layout.clear();
    }

    /// Returns `true` after [`FlameView::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        match (self.profile.as_ref(), self.navigation.active()) {
            (Some(profile), Some(active)) => {
                let origin = Point::new(0.0, self.navigation.scroll_position());
                self.layout
                    .compute(profile, active, self.viewport, self.row_height, origin);
                trace!(
                    "layout: {} visible rows from {active:?}, more below: {}",
                    self.layout.visible().len(),
                    self.layout.has_more_below()
                );
            }
            _ => self.layout.clear(),
        }
    }

    /// The frame under `point`, if any.
    pub fn query(&mut self, point: Point) -> Option<NodeId> {
        if self.destroyed {
            return None;
        }
        self.refresh();
        let profile = self.profile.as_ref()?;
        self.layout.node_at(profile, point)
    }

    /// Hover details for the frame under `point`.
    pub fn hover(&mut self, point: Point) -> Option<HoverInfo> {
        let node = self.query(point)?;
        let profile = self.profile.as_ref()?;
        let bounds = self.layout.bounds(node)?;
        let count = |id: NodeId| profile.frame(id).map_or(0, |f| f.count);
        let root_count = self.navigation.selection_root().map_or(0, count);
        let top_count = self.navigation.active().map_or(0, count);
        let node_count = count(node);
        Some(HoverInfo {
            node,
            bounds,
            outline: self.config.row_style.hover_outline(bounds),
            share_of_root: share(node_count, root_count),
            share_of_top: if top_count == root_count {
                None
            } else {
                share(node_count, top_count)
            },
        })
    }

    /// Handle a click. With `modified` (Ctrl/Cmd held) the frame under the
    /// pointer is forwarded to the listener; otherwise it becomes the zoom root.
    pub fn click(&mut self, point: Point, modified: bool) -> ClickOutcome {
        if !self.live("click") {
            return ClickOutcome::Ignored;
        }
        self.refresh();
        let Some(profile) = self.profile.as_ref() else {
            return ClickOutcome::Ignored;
        };
        let Some(node) = self.layout.node_at(profile, point) else {
            return ClickOutcome::Ignored;
        };
        if modified {
            self.listener.ctrl_activated(profile, node);
            return ClickOutcome::CtrlActivated(node);
        }
        if self.navigation.zoom_in(profile, node) {
            self.dirty = true;
            ClickOutcome::ZoomedIn(node)
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Handle a double click: zoom like a click, or reset the view when the
    /// pointer is over empty space.
    pub fn double_click(&mut self, point: Point) -> ClickOutcome {
        if !self.live("double_click") {
            return ClickOutcome::Ignored;
        }
        if self.query(point).is_some() {
            return self.click(point, false);
        }
        if self.navigation.reset() {
            self.dirty = true;
            ClickOutcome::Reset
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Handle a vertical wheel gesture (positive scrolls down).
    pub fn wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if !self.live("wheel") {
            return WheelOutcome::Ignored;
        }
        self.refresh();
        let Some(profile) = self.profile.as_ref() else {
            return WheelOutcome::Ignored;
        };
        let outcome = self.navigation.wheel(
            profile,
            delta_y,
            self.row_height,
            self.layout.has_more_below(),
        );
        if outcome != WheelOutcome::Ignored {
            self.dirty = true;
        }
        outcome
    }

    /// Frames to paint, in paint order (parents before children).
    pub fn bands(&mut self) -> Vec<Band<'_>> {
        if self.destroyed {
            return Vec::new();
        }
        self.refresh();
        let Some(profile) = self.profile.as_ref() else {
            return Vec::new();
        };
        let style = self.config.row_style;
        let palette = &self.config.palette;
        self.layout
            .visible_bounds()
            .filter_map(|(node, bounds)| {
                let frame = profile.frame(node)?;
                Some(Band {
                    node,
                    frame,
                    bounds,
                    geometry: style.band(bounds),
                    colors: palette.colors_for(frame),
                })
            })
            .collect()
    }

    /// Returns `true` if the last layout stopped at the bottom edge.
    pub fn can_scroll_down(&mut self) -> bool {
        self.refresh();
        self.layout.has_more_below()
    }

    /// The loaded profile.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Selection keys in display order.
    pub fn selection_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.profile.iter().flat_map(|p| p.selection_keys())
    }

    /// Key of the current selection.
    pub fn current_selection(&self) -> Option<&str> {
        self.navigation.current_selection()
    }

    /// The node shown as the top row.
    pub fn active_node(&self) -> Option<NodeId> {
        self.navigation.active()
    }

    /// Current scroll offset (`<= 0`).
    pub fn scroll_position(&self) -> f64 {
        self.navigation.scroll_position()
    }

    /// Row height in device pixels.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Current viewport.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The configuration in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
