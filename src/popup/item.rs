// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`Item`] record and its [`Category`] and
//! [`ItemStatus`] enums. An item's status only ever moves forward along
//! `Mounting → Rendered → Unmounting`; a duplicate-text "retrigger" is a
//! visual nudge signal, never a status change.

use crate::error::Fault;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for an item, assigned by the owning queue at admission.
///
/// Ids are strictly increasing per queue and stable for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification category. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Info,
    Warning,
    Error,
}

impl Category {
    /// Uppercase display name, suitable for category badges.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Info => "INFO",
            Category::Warning => "WARNING",
            Category::Error => "ERROR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an item. Drives both the view and the engine's
/// locking decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    /// Entrance animation in progress.
    #[default]
    Mounting,
    /// Steady state, fully visible.
    Rendered,
    /// Exit animation in progress; spliced out when it completes.
    Unmounting,
}

impl ItemStatus {
    fn rank(self) -> u8 {
        match self {
            ItemStatus::Mounting => 0,
            ItemStatus::Rendered => 1,
            ItemStatus::Unmounting => 2,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Mounting => "MOUNTING",
            ItemStatus::Rendered => "RENDERED",
            ItemStatus::Unmounting => "UNMOUNTING",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notification record.
#[derive(Debug, Clone)]
pub struct Item {
    /// Assigned by the owning queue; `None` until admission.
    id: Option<ItemId>,
    category: Category,
    text: String,
    status: ItemStatus,
    /// Auto-dismiss duration. `None` means manual dismiss only.
    lifetime: Option<Duration>,
    /// Last measured rendered extent, set by the view after layout.
    measured_height: Option<f32>,
    /// Bumped on each duplicate-text retrigger; the view replays its nudge
    /// animation whenever it observes a change.
    trigger_seq: u32,
    /// Auto-dismiss deadline, armed when the item reaches `Rendered`.
    dismiss_at: Option<Instant>,
}

impl Item {
    /// Creates a new item in `Mounting` status with no id assigned.
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            id: None,
            category,
            text: text.into(),
            status: ItemStatus::Mounting,
            lifetime: None,
            measured_height: None,
            trigger_seq: 0,
            dismiss_at: None,
        }
    }

    /// Creates an info item.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Category::Info, text)
    }

    /// Creates a warning item.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Category::Warning, text)
    }

    /// Creates an error item.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Category::Error, text)
    }

    /// Sets the auto-dismiss lifetime. Zero disables auto-dismiss.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = (!lifetime.is_zero()).then_some(lifetime);
        self
    }

    /// Returns the item's id, or `None` before admission.
    #[must_use]
    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Message payload; also the de-duplication key.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn status(&self) -> ItemStatus {
        self.status
    }

    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    /// Last measured height, or `None` until the view reports one.
    #[must_use]
    pub fn measured_height(&self) -> Option<f32> {
        self.measured_height
    }

    /// Records the rendered extent measured by the view after layout.
    pub fn update_height(&mut self, height: f32) {
        self.measured_height = Some(height);
    }

    /// Retrigger sequence number. Bumped on duplicate-text admission.
    #[must_use]
    pub fn trigger_seq(&self) -> u32 {
        self.trigger_seq
    }

    /// Advances the status. Re-entering the current status is a no-op; a
    /// backward move is a [`Fault`] and leaves the status unchanged.
    pub(crate) fn set_status(&mut self, next: ItemStatus) {
        if next == self.status {
            return;
        }
        if next.rank() < self.status.rank() {
            let fault = Fault::InvalidTransition {
                from: self.status,
                to: next,
            };
            tracing::error!(%fault, "rejected status change");
            debug_assert!(false, "{}", fault);
            return;
        }
        tracing::debug!(id = ?self.id, from = %self.status, to = %next, "status change");
        self.status = next;
    }

    /// Signals the duplicate-text visual nudge.
    pub(crate) fn trigger(&mut self) {
        self.trigger_seq = self.trigger_seq.wrapping_add(1);
    }

    /// Arms the auto-dismiss countdown, if this item has a lifetime.
    /// Idempotent while already counting down.
    pub(crate) fn begin_countdown(&mut self, now: Instant) {
        if self.dismiss_at.is_some() {
            return;
        }
        if let Some(lifetime) = self.lifetime {
            self.dismiss_at = Some(now + lifetime);
        }
    }

    /// Stops the auto-dismiss countdown.
    pub(crate) fn cancel_countdown(&mut self) {
        self.dismiss_at = None;
    }

    /// Whether a countdown is currently armed.
    #[must_use]
    pub fn has_countdown(&self) -> bool {
        self.dismiss_at.is_some()
    }

    /// Whether the armed countdown has expired.
    pub(crate) fn countdown_due(&self, now: Instant) -> bool {
        self.dismiss_at.is_some_and(|deadline| now >= deadline)
    }

    /// Whole seconds left on the countdown, for a countdown-ring view.
    /// `None` when no countdown is armed.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> Option<u64> {
        self.dismiss_at
            .map(|deadline| deadline.saturating_duration_since(now).as_secs())
    }
}
