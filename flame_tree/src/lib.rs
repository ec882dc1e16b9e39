// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flame_tree --heading-base-level=0

//! Flame Tree: the profile model behind a flame graph.
//!
//! - [`ProfileNode`]: nested, owned input as produced by a profiler front end.
//! - [`Profile`]: an arena of nodes addressed by [`NodeId`], with parent links and a
//!   sorted set of named roots ("selections", for example one per thread).
//! - [`Frame`]: per-node sample data (label, source location, count, optional
//!   width fraction, [`FrameFlags`]).
//!
//! The profile is never restructured by consumers. Layout results, such as the
//! on-screen rectangle of a node, live in side tables keyed by [`NodeId`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
mod profile;
mod types;

pub use node::ProfileNode;
pub use profile::{ALL_SELECTION, Profile, selection_order};
pub use types::{Frame, FrameFlags, NodeId};
