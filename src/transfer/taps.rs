//! Tap-count detection for touch input.
//!
//! One pending tap is tracked at a time. Taps on the same source within
//! the window stack up to a triple tap; a tap on another source replaces
//! the pending one. The gesture fires when the window passes without a
//! further tap, so a double tap never also fires a single tap.

use std::time::{Duration, Instant};

/// Resolved tap gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapGesture {
    Single,
    Double,
    Triple,
}

impl TapGesture {
    fn from_count(count: u8) -> Self {
        match count {
            0 | 1 => TapGesture::Single,
            2 => TapGesture::Double,
            _ => TapGesture::Triple,
        }
    }
}

#[derive(Clone, Debug)]
struct PendingTap<S> {
    source: S,
    count: u8,
    last: Instant,
}

/// Debounces taps per source.
///
/// `S` identifies what was tapped (a slot, a search result, ...).
#[derive(Clone, Debug)]
pub struct TapTracker<S> {
    window: Duration,
    pending: Option<PendingTap<S>>,
}

impl<S: Clone + PartialEq> TapTracker<S> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// Register a tap on `source` at `now`.
    ///
    /// A tap on another source, or after the window, discards the pending
    /// tap without firing it. Call `poll` first to collect it.
    pub fn tap(&mut self, source: S, now: Instant) {
        match &mut self.pending {
            Some(p) if p.source == source && now.duration_since(p.last) <= self.window => {
                p.count = (p.count + 1).min(3);
                p.last = now;
            }
            _ => {
                self.pending = Some(PendingTap { source, count: 1, last: now });
            }
        }
    }

    /// Fire the pending gesture once its window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<(S, TapGesture)> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.duration_since(p.last) > self.window);
        if !ready {
            return None;
        }
        self.pending
            .take()
            .map(|p| (p.source, TapGesture::from_count(p.count)))
    }

    /// Drop the pending tap without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Source of the pending tap, if any.
    #[must_use]
    pub fn pending_source(&self) -> Option<&S> {
        self.pending.as_ref().map(|p| &p.source)
    }
}
