// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-session highlight state machine.
//!
//! A tap session is the interval between a pointer going down on a matched
//! range and the highlight for that range going away. The machine has two
//! states, `Idle` and `Highlighted`, and three transitions:
//!
//! - **Idle → Highlighted** — [`TapState::begin`], on down/moved inside a
//!   matched range. At most one range is highlighted at a time; a new
//!   highlight fully replaces the prior one.
//! - **Highlighted → Idle (delayed)** — [`TapState::release`], on pointer-up.
//!   The revert is scheduled [`REVERT_DELAY_MS`] in the future so the
//!   highlight stays visible briefly after the finger lifts.
//! - **Highlighted → Idle (immediate)** — [`TapState::cancel`], on
//!   cancelled/stationary phases.
//!
//! ## Session identity
//!
//! Every highlight carries a [`SessionId`], and every scheduled revert is
//! tagged with the session it belongs to. [`TapState::poll`] drops a due
//! revert whose session is no longer the active one, so a revert left over
//! from a previous tap can never clear a newer tap's highlight — even when
//! the second tap starts inside the first one's revert window.
//!
//! ## Time
//!
//! Timestamps are caller-supplied milliseconds from any monotonic origin.
//! The machine never sleeps and never schedules callbacks; the host calls
//! [`TapState::poll`] from its frame or timer pump and repaints when a
//! highlight is returned.
//!
//! ```
//! use taproot_event_state::tap::{Emphasis, REVERT_DELAY_MS, TapState};
//! use taproot_text::TextRange;
//!
//! let mut taps = TapState::new();
//! taps.begin(TextRange::new(6, 5), Emphasis::Mention);
//! taps.release(1_000);
//! assert!(taps.is_highlighted()); // still visible right after release
//! assert!(taps.poll(1_000 + REVERT_DELAY_MS).is_some());
//! assert!(!taps.is_highlighted());
//! ```

use alloc::vec::Vec;
use taproot_text::TextRange;

/// How long a released highlight stays visible before reverting.
pub const REVERT_DELAY_MS: u64 = 250;

/// Phase of a pointer gesture, as reported by the host's event dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerPhase {
    /// Contact began.
    Down,
    /// Contact moved while held.
    Moved,
    /// Contact lifted; the only phase that completes a tap.
    Up,
    /// The system cancelled the gesture.
    Cancelled,
    /// Contact is held without movement.
    Stationary,
}

/// Which emphasis a highlighted range gets.
///
/// Mentions are emphasized distinctly; every other category shares the
/// second emphasis. Mapping emphasis to actual colors is the host's job.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Emphasis {
    /// The mention emphasis.
    Mention,
    /// The emphasis for hashtags, URLs, and everything else.
    Other,
}

/// Identity of one tap session, used to tie reverts to the highlight they
/// were scheduled for.
pub type SessionId = u64;

/// The currently highlighted range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Highlight {
    /// Session this highlight belongs to.
    pub session: SessionId,
    /// The exact matched range being emphasized.
    pub range: TextRange,
    /// Category-specific emphasis.
    pub emphasis: Emphasis,
}

/// A scheduled un-highlight, valid only while its session is still active.
#[derive(Clone, Copy, Debug)]
struct Revert {
    session: SessionId,
    due: u64,
}

/// Highlight state machine for tap sessions.
///
/// Owned by the hosting component, one per label. All methods are cheap and
/// none block; see the module docs for the state diagram.
#[derive(Clone, Debug, Default)]
pub struct TapState {
    next_session: SessionId,
    active: Option<Highlight>,
    reverts: Vec<Revert>,
}

impl TapState {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active highlight, if any.
    pub fn active(&self) -> Option<&Highlight> {
        self.active.as_ref()
    }

    /// Whether a range is currently highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.active.is_some()
    }

    /// Enter (or stay in) the highlighted state for `range`.
    ///
    /// Repeated calls for the same range and emphasis keep the existing
    /// session, so a stream of moved events does not churn session ids.
    /// Anything else replaces the prior highlight wholly and starts a new
    /// session.
    pub fn begin(&mut self, range: TextRange, emphasis: Emphasis) -> SessionId {
        if let Some(h) = &self.active
            && h.range == range
            && h.emphasis == emphasis
        {
            return h.session;
        }
        let session = self.next_session;
        self.next_session += 1;
        self.active = Some(Highlight {
            session,
            range,
            emphasis,
        });
        session
    }

    /// Schedule the delayed revert for the active highlight.
    ///
    /// The highlight stays visible; it reverts when [`TapState::poll`] is
    /// called at or after `now + REVERT_DELAY_MS`. Returns the session the
    /// revert was scheduled for, or `None` when nothing is highlighted.
    pub fn release(&mut self, now: u64) -> Option<SessionId> {
        let session = self.active.as_ref()?.session;
        self.reverts.push(Revert {
            session,
            due: now + REVERT_DELAY_MS,
        });
        Some(session)
    }

    /// Revert immediately (cancelled/stationary phases).
    ///
    /// Returns the highlight that was cleared, if any. Reverts already
    /// scheduled for it become stale and are dropped on a later poll.
    pub fn cancel(&mut self) -> Option<Highlight> {
        self.active.take()
    }

    /// Expire due reverts.
    ///
    /// Drains every revert with `due <= now`. A due revert clears the active
    /// highlight only when the session ids still agree; a revert belonging
    /// to a superseded session is discarded without touching the highlight.
    /// Returns the highlight that was cleared, if any.
    pub fn poll(&mut self, now: u64) -> Option<Highlight> {
        let mut cleared = None;
        self.reverts.retain(|rev| {
            if rev.due > now {
                return true;
            }
            if self.active.map(|h| h.session) == Some(rev.session) {
                cleared = self.active.take();
            }
            false
        });
        cleared
    }

    /// Earliest pending revert deadline, for hosts that want to sleep until
    /// the next interesting time instead of polling every frame.
    pub fn next_deadline(&self) -> Option<u64> {
        self.reverts.iter().map(|r| r.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> TextRange {
        TextRange::new(6, 5)
    }

    #[test]
    fn begin_highlights_exactly_one_range() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Mention);
        let h = taps.active().unwrap();
        assert_eq!(h.range, range());
        assert_eq!(h.emphasis, Emphasis::Mention);
    }

    #[test]
    fn new_highlight_replaces_prior() {
        let mut taps = TapState::new();
        let first = taps.begin(TextRange::new(0, 3), Emphasis::Other);
        let second = taps.begin(range(), Emphasis::Mention);
        assert_ne!(first, second);
        assert_eq!(taps.active().unwrap().range, range());
    }

    #[test]
    fn repeated_begin_keeps_session() {
        let mut taps = TapState::new();
        let a = taps.begin(range(), Emphasis::Mention);
        let b = taps.begin(range(), Emphasis::Mention);
        assert_eq!(a, b);
    }

    #[test]
    fn cancel_reverts_immediately() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Other);
        let cleared = taps.cancel().unwrap();
        assert_eq!(cleared.range, range());
        assert!(!taps.is_highlighted());
    }

    #[test]
    fn cancel_when_idle_is_a_noop() {
        let mut taps = TapState::new();
        assert!(taps.cancel().is_none());
    }

    #[test]
    fn release_keeps_highlight_until_delay_elapses() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Mention);
        taps.release(1_000);
        assert!(taps.is_highlighted());
        assert!(taps.poll(1_000 + REVERT_DELAY_MS - 1).is_none());
        assert!(taps.is_highlighted());
        let cleared = taps.poll(1_000 + REVERT_DELAY_MS).unwrap();
        assert_eq!(cleared.range, range());
        assert!(!taps.is_highlighted());
    }

    #[test]
    fn release_when_idle_schedules_nothing() {
        let mut taps = TapState::new();
        assert_eq!(taps.release(1_000), None);
        assert_eq!(taps.next_deadline(), None);
    }

    #[test]
    fn stale_revert_does_not_clear_newer_session() {
        let mut taps = TapState::new();
        taps.begin(TextRange::new(0, 3), Emphasis::Other);
        taps.release(1_000);
        // Second tap begins inside the first tap's revert window.
        taps.begin(range(), Emphasis::Mention);
        // The first session's revert comes due; it must be dropped.
        assert!(taps.poll(1_300).is_none());
        assert_eq!(taps.active().unwrap().range, range());
        // The pending list is drained either way.
        assert_eq!(taps.next_deadline(), None);
    }

    #[test]
    fn newer_sessions_own_revert_still_fires() {
        let mut taps = TapState::new();
        taps.begin(TextRange::new(0, 3), Emphasis::Other);
        taps.release(1_000);
        taps.begin(range(), Emphasis::Mention);
        taps.release(1_100);
        // First revert (due 1250) is stale; second (due 1350) clears.
        assert!(taps.poll(1_300).is_none());
        let cleared = taps.poll(1_350).unwrap();
        assert_eq!(cleared.range, range());
    }

    #[test]
    fn cancel_staleness_survives_poll() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Mention);
        taps.release(1_000);
        taps.cancel();
        // The revert for the cancelled session is dropped quietly.
        assert!(taps.poll(2_000).is_none());
        assert!(!taps.is_highlighted());
    }

    #[test]
    fn double_release_clears_once() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Other);
        taps.release(1_000);
        taps.release(1_010);
        let cleared = taps.poll(2_000);
        assert!(cleared.is_some());
        assert!(taps.poll(3_000).is_none());
    }

    #[test]
    fn next_deadline_reports_earliest() {
        let mut taps = TapState::new();
        taps.begin(range(), Emphasis::Other);
        taps.release(1_000);
        taps.begin(TextRange::new(0, 2), Emphasis::Other);
        taps.release(1_100);
        assert_eq!(taps.next_deadline(), Some(1_000 + REVERT_DELAY_MS));
    }
}
