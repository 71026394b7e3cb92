//! Upload request tracking.
//!
//! The host reads a picked file asynchronously and reports back later. A
//! second pick can land before the first read completes, so every upload
//! gets a token and only the most recent token may change the catalog.

use wasm_bindgen::prelude::*;

/// Identifies one upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadToken(u64);

impl UploadToken {
    /// Rebuild a token from the number handed to the host.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What a completed upload did to the catalog.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Rows were replaced by the parsed file.
    Applied,
    /// The file could not be read or parsed; the catalog is now empty.
    Failed,
    /// A newer upload was started; this result was ignored.
    Stale,
}

/// Issues upload tokens and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct UploadTracker {
    latest: u64,
    pending: bool,
}

impl UploadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload, superseding any in flight. Tokens only ever grow.
    pub fn issue(&mut self) -> UploadToken {
        self.latest = self.latest.saturating_add(1);
        self.pending = true;
        UploadToken(self.latest)
    }

    /// Whether `token` belongs to the most recent upload.
    #[must_use]
    pub fn is_current(&self, token: UploadToken) -> bool {
        token.0 == self.latest
    }

    /// Mark `token` as finished. Returns `false` for a stale or already
    /// settled token; a stale token leaves the current upload pending.
    pub fn settle(&mut self, token: UploadToken) -> bool {
        if !self.pending || !self.is_current(token) {
            return false;
        }
        self.pending = false;
        true
    }

    /// An upload has been issued and not yet settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut tracker = UploadTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
    }

    #[test]
    fn test_stale_settle_keeps_pending() {
        let mut tracker = UploadTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.settle(first));
        assert!(tracker.is_pending());
        assert!(tracker.settle(second));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_tokens_keep_growing_past_u32() {
        let mut tracker = UploadTracker {
            latest: u64::from(u32::MAX),
            pending: false,
        };
        let old = UploadToken::from_raw(0);
        let next = tracker.issue();
        assert!(next.value() > u64::from(u32::MAX));
        assert!(!tracker.is_current(old));
        assert!(!tracker.settle(old));
        assert!(tracker.settle(next));
    }

    #[test]
    fn test_settle_once() {
        let mut tracker = UploadTracker::new();
        let token = tracker.issue();
        assert!(tracker.settle(token));
        assert!(!tracker.settle(token));
    }

    #[test]
    fn test_raw_round_trip() {
        let mut tracker = UploadTracker::new();
        let token = tracker.issue();
        assert!(tracker.is_current(UploadToken::from_raw(token.value())));
    }
}
