// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View configuration.

use flame_color::Palette;
use flame_layout::{FontMetrics, RowStyle};

use crate::error::ViewError;

/// Static settings for a [`FlameView`](crate::FlameView).
///
/// The row height is derived from [`FontMetrics`] and [`RowStyle`] unless an
/// explicit height is set with [`ViewConfig::with_row_height`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewConfig {
    /// Border, padding, and device scale.
    pub row_style: RowStyle,
    /// Measurements of the label font.
    pub font: FontMetrics,
    /// Explicit row height in device pixels, overriding the font-derived one.
    pub row_height: Option<f64>,
    /// Frame colors.
    pub palette: Palette,
}

impl ViewConfig {
    /// Use a fixed row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = Some(row_height);
        self
    }

    /// Use a device scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.row_style.scale = scale;
        self
    }

    /// Use different font measurements.
    #[must_use]
    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    /// Use a different palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The effective row height, validated.
    pub fn resolve_row_height(&self) -> Result<f64, ViewError> {
        let scale = self.row_style.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ViewError::InvalidScale(scale));
        }
        let height = self
            .row_height
            .unwrap_or_else(|| self.row_style.row_height(self.font));
        if height.is_finite() && height > 0.0 {
            Ok(height)
        } else {
            Err(ViewError::InvalidRowHeight(height))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_row_height() {
        assert_eq!(ViewConfig::default().resolve_row_height(), Ok(22.0));
        assert_eq!(
            ViewConfig::default().with_scale(2.0).resolve_row_height(),
            Ok(44.0)
        );
    }

    #[test]
    fn explicit_row_height_wins() {
        let config = ViewConfig::default().with_row_height(24.0);
        assert_eq!(config.resolve_row_height(), Ok(24.0));
    }

    #[test]
    fn rejects_unusable_values() {
        assert_eq!(
            ViewConfig::default().with_row_height(0.0).resolve_row_height(),
            Err(ViewError::InvalidRowHeight(0.0))
        );
        assert!(matches!(
            ViewConfig::default()
                .with_row_height(f64::INFINITY)
                .resolve_row_height(),
            Err(ViewError::InvalidRowHeight(_))
        ));
        assert_eq!(
            ViewConfig::default().with_scale(0.0).resolve_row_height(),
            Err(ViewError::InvalidScale(0.0))
        );
    }
}
