// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint geometry derived from layout rectangles.
//!
//! Layout rectangles are what hit testing sees. The shapes handed to a paint
//! surface are derived here: a fill inset by the border, a clipped label slot
//! when there is room for text, and the outline drawn around a hovered frame.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Narrowest fill painted for a frame, in device pixels.
pub const MIN_BAND_WIDTH: f64 = 1.0;

/// Text is only placed in label slots wider than this.
pub const MIN_LABEL_WIDTH: f64 = 10.0;

/// Font measurements used to size rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the font box.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the font box.
    pub descent: f64,
}

impl Default for FontMetrics {
    /// Metrics of a typical 12px sans-serif face.
    fn default() -> Self {
        Self {
            ascent: 11.0,
            descent: 3.0,
        }
    }
}

/// Spacing around each band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowStyle {
    /// Gap drawn above each band, and the hover outline thickness.
    pub border_width: f64,
    /// Space between the band edge and its label.
    pub padding: f64,
    /// Device pixels per logical pixel.
    pub scale: f64,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            padding: 2.0,
            scale: 1.0,
        }
    }
}

/// Where a frame's label goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSlot {
    /// Text must be clipped to this rectangle.
    pub clip: Rect,
    /// Start of the text, vertically centered (middle baseline).
    pub anchor: Point,
}

/// Shapes used to paint one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandGeometry {
    /// Filled area, at least [`MIN_BAND_WIDTH`] wide.
    pub fill: Rect,
    /// Label placement, absent when the band is too narrow for text.
    pub label: Option<LabelSlot>,
}

/// Highlight drawn over a hovered frame: `outer` is filled, then `inner` is cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverOutline {
    /// Filled highlight area.
    pub outer: Rect,
    /// Area cleared inside the highlight, leaving a frame-shaped outline.
    pub inner: Option<Rect>,
}

impl RowStyle {
    /// Height of one row in device pixels, rounded up.
    pub fn row_height(&self, metrics: FontMetrics) -> f64 {
        ((metrics.ascent + metrics.descent + 2.0 * self.border_width + 2.0 * self.padding)
            * self.scale)
            .ceil()
    }

    /// Paint shapes for a frame laid out at `bounds`.
    pub fn band(&self, bounds: Rect) -> BandGeometry {
        let width = bounds.width().max(MIN_BAND_WIDTH);
        let border = self.border_width;
        let padding = self.padding;
        let fill = Rect::new(bounds.x0, bounds.y0 + border, bounds.x0 + width, bounds.y1);
        let text_width = width - 2.0 * padding - 2.0 * border;
        let label = (text_width > MIN_LABEL_WIDTH).then(|| LabelSlot {
            clip: Rect::from_origin_size(
                (bounds.x0 + border + padding, bounds.y0 + border + padding),
                (text_width, bounds.height() - border - 2.0 * padding),
            ),
            anchor: Point::new(
                bounds.x0 + border + padding,
                bounds.y0 + bounds.height() / 2.0 + border,
            ),
        });
        BandGeometry { fill, label }
    }

    /// Highlight shapes for a hovered frame laid out at `bounds`.
    pub fn hover_outline(&self, bounds: Rect) -> HoverOutline {
        let border = self.border_width;
        let outer = Rect::new(
            bounds.x0,
            bounds.y0 + border,
            bounds.x0 + bounds.width().max(MIN_BAND_WIDTH),
            bounds.y1,
        );
        let inset = border * self.scale;
        let inner_width = bounds.width() - 2.0 * inset;
        let inner = (inner_width > 1.0).then(|| {
            Rect::from_origin_size(
                (bounds.x0 + inset, bounds.y0 + 2.0 * inset),
                (inner_width, bounds.height() - 3.0 * inset),
            )
        });
        HoverOutline { outer, inner }
    }
}
