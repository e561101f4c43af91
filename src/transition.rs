// SPDX-License-Identifier: MPL-2.0
//! Timed four-phase transition state machine.
//!
//! A `TransitionController` paces a single visual transition through
//! `Default → Enter → Entering → Entered`. The queue engine runs one per
//! entrance animation, one per departing item, and one for the whole-queue
//! clear collapse. The view layer reads the current [`TransitionState`] to
//! pick the animation phase to paint; it never drives the machine itself.

use std::time::{Duration, Instant};

/// Phase of a timed transition.
///
/// `Enter` is the armed phase right after `start`; after a short arm delay
/// the machine moves to `Entering` (the animated phase), and after the
/// caller-supplied timeout it settles in `Entered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    /// Not started, or reset.
    #[default]
    Default,
    /// Armed; waiting for the arm delay to elapse.
    Enter,
    /// Mid-animation; waiting for the transition timeout.
    Entering,
    /// Finished. Stays here until `reset`.
    Entered,
}

/// Drives one transition through its phases against caller-supplied instants.
///
/// Deadlines are computed from the `now` passed to [`start`](Self::start) and
/// [`tick`](Self::tick), so the controller is deterministic under test.
/// Side effects attached to the `Entered` change must be idempotent: the
/// state remains observable as `Entered` until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: TransitionState,
    started: bool,
    delay: Duration,
    timeout: Duration,
    deadline: Option<Instant>,
}

impl TransitionController {
    /// Creates a controller with the given arm delay and transition timeout.
    #[must_use]
    pub fn new(delay: Duration, timeout: Duration) -> Self {
        Self {
            state: TransitionState::Default,
            started: false,
            delay,
            timeout,
            deadline: None,
        }
    }

    /// Arms the transition. No-op if already started.
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.state = TransitionState::Enter;
        self.deadline = Some(now + self.delay);
    }

    /// Advances past any expired deadlines.
    ///
    /// Returns the new state when this call changed it, `None` otherwise.
    /// A large jump in `now` can advance `Enter → Entering` in one call, but
    /// the `Entering` deadline is anchored at the tick that entered it, so
    /// `Entered` always takes a later tick.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionState> {
        if !self.started {
            return None;
        }
        let mut changed = None;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            match self.state {
                TransitionState::Enter => {
                    self.state = TransitionState::Entering;
                    self.deadline = Some(now + self.timeout);
                }
                TransitionState::Entering => {
                    self.state = TransitionState::Entered;
                    self.deadline = None;
                }
                TransitionState::Default | TransitionState::Entered => {
                    self.deadline = None;
                }
            }
            changed = Some(self.state);
        }
        changed
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Whether `start` has been called since the last reset.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns to `Default` and clears the started flag.
    pub fn reset(&mut self) {
        self.state = TransitionState::Default;
        self.started = false;
        self.deadline = None;
    }
}
