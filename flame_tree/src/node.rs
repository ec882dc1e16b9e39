// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested, caller-facing profile input.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Frame, FrameFlags};

/// A profile node with owned children, as produced by a profiler front end.
///
/// This is the input shape accepted by [`Profile::from_selections`](crate::Profile::from_selections).
/// Child order is significant: it is the left-to-right draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileNode {
    /// Sample data for this node.
    pub frame: Frame,
    /// Callees, in draw order.
    pub children: Vec<Self>,
}

impl ProfileNode {
    /// Create a leaf with a label and a sample count.
    pub fn new(func: impl Into<String>, count: u64) -> Self {
        Self {
            frame: Frame::new(func, count),
            children: Vec::new(),
        }
    }

    /// Set the source location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.frame.file = file.into();
        self.frame.line = line;
        self
    }

    /// Set the semantic flags.
    #[must_use]
    pub fn with_flags(mut self, flags: FrameFlags) -> Self {
        self.frame.flags = flags;
        self
    }

    /// Set an explicit width fraction.
    #[must_use]
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.frame.fraction = Some(fraction);
        self
    }

    /// Set a host-provided count label.
    #[must_use]
    pub fn with_count_label(mut self, label: impl Into<String>) -> Self {
        self.frame.count_label = Some(label.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}
