//! Viewport state for the virtualized row list.

use std::ops::Range;

use serde::Serialize;

use crate::config::{GridConfig, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT};

/// A row the renderer should draw, positioned inside the full-height spacer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRow {
    /// Index into the displayed set.
    pub index: usize,
    /// Top edge in pixels (`index * row_height`).
    pub start: f64,
    /// Row height in pixels.
    pub size: f64,
}

/// Viewport state - the scrolled window over a list of uniform-height rows
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewport {
    /// Vertical scroll position in pixels
    pub scroll_top: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Height of every row in pixels
    pub row_height: f64,
    /// Extra rows kept on each side of the visible window
    pub overscan: usize,
}

impl Default for RowViewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor a non-negative pixel quotient to a row index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_index(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.floor() as usize
    } else {
        0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_index(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.ceil() as usize
    } else {
        0
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_pixels(count: usize) -> f64 {
    count as f64
}

impl RowViewport {
    /// Create a new viewport with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_top: 0.0,
            height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Viewport geometry taken from a validated config.
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            scroll_top: 0.0,
            height: config.viewport_height,
            row_height: config.row_height,
            overscan: config.overscan,
        }
    }

    /// Height of the scrollable content for `count` rows.
    #[must_use]
    pub fn total_height(&self, count: usize) -> f64 {
        as_pixels(count) * self.row_height
    }

    /// Top edge of row `index`.
    #[must_use]
    pub fn row_offset(&self, index: usize) -> f64 {
        as_pixels(index) * self.row_height
    }

    /// Largest valid scroll position for `count` rows.
    #[must_use]
    pub fn max_scroll(&self, count: usize) -> f64 {
        (self.total_height(count) - self.height).max(0.0)
    }

    /// Row under content coordinate `y`, if any.
    #[must_use]
    pub fn row_at_y(&self, y: f64, count: usize) -> Option<usize> {
        if y.is_nan() || y < 0.0 || self.row_height <= 0.0 {
            return None;
        }
        let index = floor_index(y / self.row_height);
        (index < count).then_some(index)
    }

    /// Rows intersecting the viewport, without overscan.
    #[must_use]
    pub fn visible_rows(&self, count: usize) -> Range<usize> {
        if count == 0 || self.row_height <= 0.0 {
            return 0..0;
        }
        let first = floor_index(self.scroll_top / self.row_height).min(count - 1);
        let end = ceil_index((self.scroll_top + self.height) / self.row_height)
            .max(first + 1)
            .min(count);
        first..end
    }

    /// Rows to render: the visible rows widened by the overscan margin and
    /// clamped to `0..count`.
    #[must_use]
    pub fn visible_range(&self, count: usize) -> Range<usize> {
        let visible = self.visible_rows(count);
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(count);
        start..end
    }

    /// Positioned rows for [`RowViewport::visible_range`].
    #[must_use]
    pub fn virtual_rows(&self, count: usize) -> Vec<VirtualRow> {
        self.visible_range(count)
            .map(|index| VirtualRow {
                index,
                start: self.row_offset(index),
                size: self.row_height,
            })
            .collect()
    }

    /// Clamp scroll position to valid range.
    pub fn clamp_scroll(&mut self, count: usize) {
        let max = self.max_scroll(count);
        self.scroll_top = if self.scroll_top.is_finite() {
            self.scroll_top.clamp(0.0, max)
        } else {
            0.0
        };
    }

    /// Scroll by a delta. Returns the delta actually applied after clamping.
    pub fn scroll_by(&mut self, delta: f64, count: usize) -> f64 {
        let before = self.scroll_top;
        self.scroll_top += delta;
        self.clamp_scroll(count);
        self.scroll_top - before
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, top: f64, count: usize) {
        self.scroll_top = top;
        self.clamp_scroll(count);
    }

    /// Resize the viewport, keeping the scroll position valid.
    pub fn resize(&mut self, height: f64, count: usize) {
        self.height = if height.is_finite() {
            height.max(0.0)
        } else {
            0.0
        };
        self.clamp_scroll(count);
    }
}
