// SPDX-License-Identifier: MPL-2.0
//! Change notifications for the view layer.
//!
//! The engine records an [`Event`] after each observable mutation. A view
//! drains them with [`PopupQueue::drain_events`](super::PopupQueue::drain_events)
//! and re-renders what changed; the engine has no dependency on any
//! reactivity framework.

use super::item::{ItemId, ItemStatus};

/// An observable state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An item was admitted into the queue.
    Added(ItemId),
    /// A duplicate-text add nudged an existing item instead of admitting.
    Retriggered(ItemId),
    /// An item's lifecycle status advanced.
    StatusChanged(ItemId, ItemStatus),
    /// An item finished its exit animation and was spliced out.
    Removed(ItemId),
    /// The whole-queue clear collapse began.
    ClearStarted,
    /// The clear finished; the queue is empty and all locks are released.
    Cleared,
}
