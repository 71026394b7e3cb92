//! Scroll-related logic for `BookGrid`.
//!
//! The page reports the scroll container's `scrollTop` and height; the grid
//! answers with the row window to render and the spacer height.

use wasm_bindgen::prelude::*;

use super::{to_u32, BookGrid};

#[wasm_bindgen]
impl BookGrid {
    /// Set the absolute scroll position. Returns the clamped position.
    #[wasm_bindgen]
    pub fn set_scroll(&mut self, top: f64) -> f64 {
        self.viewport.set_scroll(top, self.state.displayed_len());
        self.viewport.scroll_top
    }

    /// Scroll by `delta` pixels. Returns the delta actually applied.
    #[wasm_bindgen]
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let applied = self.viewport.scroll_by(delta, self.state.displayed_len());
        if applied.abs() > f64::EPSILON {
            tracing::trace!(applied, top = self.viewport.scroll_top, "scrolled");
        }
        applied
    }

    #[wasm_bindgen]
    pub fn scroll_top(&self) -> f64 {
        self.viewport.scroll_top
    }

    /// Resize the scroll container.
    #[wasm_bindgen]
    pub fn resize(&mut self, height: f64) {
        self.viewport.resize(height, self.state.displayed_len());
    }

    /// Height of the full-length spacer element.
    #[wasm_bindgen]
    pub fn total_height(&self) -> f64 {
        self.viewport.total_height(self.state.displayed_len())
    }

    /// `[start, end)` of the displayed rows to render, overscan included.
    #[wasm_bindgen]
    pub fn visible_range(&self) -> Vec<u32> {
        let range = self.viewport.visible_range(self.state.displayed_len());
        vec![to_u32(range.start), to_u32(range.end)]
    }

    /// Displayed row under a content-space `y` coordinate.
    #[wasm_bindgen]
    pub fn row_at_y(&self, y: f64) -> Option<u32> {
        self.viewport
            .row_at_y(y, self.state.displayed_len())
            .map(to_u32)
    }
}
