// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the profile tree: node identifiers, flags, and frame data.

use alloc::string::String;

/// Identifier for a node in a [`Profile`](crate::Profile).
///
/// Identifiers are dense indices into the profile's arena. They are only
/// meaningful for the profile that issued them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw arena index of this identifier.
    pub const fn index(self) -> u32 {
        self.0
    }
}

bitflags::bitflags! {
    /// Semantic tags attached to a frame.
    ///
    /// The bit layout is shared with profile producers and must not change.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FrameFlags: u8 {
        /// Frame is a dynamic/runtime dispatch.
        const RUNTIME_DISPATCH = 0b0000_0001;
        /// Frame belongs to garbage collection.
        const GC = 0b0000_0010;
        /// Frame belongs to compilation (or is otherwise unknown).
        const COMPILED = 0b0000_1000;
        /// Frame is a native (C) frame.
        const NATIVE = 0b0001_0000;
    }
}

impl FrameFlags {
    /// Human-readable tags for the set bits, in bit order.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::RUNTIME_DISPATCH, "runtime-dispatch"),
            (Self::GC, "GC"),
            (Self::COMPILED, "compilation"),
            (Self::NATIVE, "task"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
    }
}

/// Per-node sample data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Display label, usually the function name.
    pub func: String,
    /// Source file. Empty when unknown.
    pub file: String,
    /// Source line. Zero when unknown.
    pub line: u32,
    /// Sample count.
    ///
    /// Children may account for less than this; the remainder is drawn as
    /// empty space.
    pub count: u64,
    /// Explicit share of the parent's width in `[0, 1]`.
    ///
    /// Takes precedence over `count / parent.count` when present.
    pub fraction: Option<f64>,
    /// Semantic tags.
    pub flags: FrameFlags,
    /// Optional replacement for the "N samples" text shown by hosts.
    pub count_label: Option<String>,
}

impl Frame {
    /// Create a frame with a label and a sample count.
    pub fn new(func: impl Into<String>, count: u64) -> Self {
        Self {
            func: func.into(),
            count,
            ..Self::default()
        }
    }

    /// Returns `true` if the frame carries a source location.
    pub fn has_location(&self) -> bool {
        !self.file.is_empty() || self.line > 0
    }
}
