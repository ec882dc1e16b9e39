// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Reasons a [`FlameView`](crate::FlameView) cannot be built from a configuration.
///
/// Once constructed, a view never fails: invalid runtime input is ignored
/// and logged instead.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// The row height is zero, negative, or not finite.
    #[error("row height must be finite and positive, got {0}")]
    InvalidRowHeight(f64),
    /// The device scale factor is zero, negative, or not finite.
    #[error("device scale must be finite and positive, got {0}")]
    InvalidScale(f64),
    /// The viewport has a negative or non-finite dimension.
    #[error("viewport must be finite and non-negative, got {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}
