// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flame_view --heading-base-level=0

//! Flame View: an interactive flame graph, minus the drawing.
//!
//! [`FlameView`] ties the other crates together. It holds a
//! [`Profile`](flame_tree::Profile), tracks which selection is shown and which
//! frame is zoomed in ([`Navigation`]), lays frames out on demand, and answers
//! host input:
//!
//! - a click zooms into the frame under the pointer, or with the "open"
//!   modifier held reports it to a [`ViewListener`];
//! - a double click on empty space returns to the selection root;
//! - the wheel scrolls, and an upward flick at the top zooms back out;
//! - hovering yields [`HoverInfo`] with the frame's share of the root.
//!
//! Painting is left to the host: [`FlameView::bands`] returns each visible
//! frame with its rectangle, paint shapes, and colors.
//!
//! Invalid construction input is reported as a [`ViewError`]. Everything
//! after that degrades quietly and logs through the `log` facade.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`, `flame_layout`, and `thiserror`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod navigation;
mod view;

pub use config::ViewConfig;
pub use error::ViewError;
pub use navigation::{Navigation, WheelOutcome};
pub use view::{Band, ClickOutcome, FlameView, HoverInfo, ViewListener};
