//! Row virtualization.
//!
//! This module handles:
//! - Uniform row offsets and total content height
//! - Managing viewport state (scroll position, visible range)
//! - Overscan around the visible window

mod viewport;

pub use viewport::{RowViewport, VirtualRow};
