// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flame_layout --heading-base-level=0

//! Flame Layout: band layout and hit testing for flame graphs.
//!
//! - [`Layout::compute`] assigns every visited frame a rectangle: the zoom
//!   root spans the viewport width, each row is one fixed height, and children
//!   are packed left to right by [`child_weight`].
//! - [`Layout::hit_test`] maps a point back to the frame whose row contains it,
//!   walking only the branch under the point.
//! - [`RowStyle`] turns layout rectangles into paint shapes ([`BandGeometry`],
//!   [`HoverOutline`]) and computes the row height from [`FontMetrics`].
//!
//! Positions are stored in a side table keyed by [`NodeId`](flame_tree::NodeId);
//! the [`Profile`](flame_tree::Profile) itself is only read.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod layout;
mod paint;

pub use hit::{Hit, HitPath};
pub use layout::{Layout, child_weight};
pub use paint::{
    BandGeometry, FontMetrics, HoverOutline, LabelSlot, MIN_BAND_WIDTH, MIN_LABEL_WIDTH, RowStyle,
};
