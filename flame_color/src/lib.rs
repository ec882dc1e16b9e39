// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flame_color --heading-base-level=0

//! Flame Color: stable colors for flame graph frames.
//!
//! A frame's color is a pure function of its source location and flags:
//!
//! 1. [`source_hash`] folds `file` followed by the decimal `line` into an `i32`
//!    with a wrapping `hash * 31 + unit` recurrence over UTF-16 code units.
//! 2. The hash seeds a [`Mulberry32`] generator (any [`UnitRng`] can stand in).
//! 3. A [`Palette`] picks the category [`Tint`] from the frame flags and
//!    jitters it with draws from the generator.
//!
//! Frames without a location all hash to `0` and therefore share a color.
//!
//! ```rust
//! use flame_color::Palette;
//! use flame_tree::Frame;
//!
//! let palette = Palette::default();
//! let mut a = Frame::new("parse", 10);
//! a.file = "src/parser.rs".into();
//! a.line = 88;
//! let mut b = a.clone();
//! b.count = 3;
//!
//! assert_eq!(palette.colors_for(&a), palette.colors_for(&b));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hash;
mod palette;
mod rng;

pub use hash::{rolling_hash, source_hash};
pub use palette::{NodeColors, Palette, Rgba, Tint};
pub use rng::{Mulberry32, UnitRng};
