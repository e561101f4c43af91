// SPDX-License-Identifier: MPL-2.0
//! The popup queue orchestrator.
//!
//! [`PopupQueue`] sequences item lifecycles (mount → render → unmount →
//! splice) under the `{onadd, ondel, onclear}` locks so overlapping
//! animations never step on each other. The host event loop drives every
//! timer through [`tick`](PopupQueue::tick); all deadlines are computed
//! against the injected instant, so the engine is deterministic under test.

use super::event::Event;
use super::item::{Category, Item, ItemId, ItemStatus};
use super::locks::{Deferred, LockName, LockSet};
use super::queue::ItemQueue;
use crate::config::PopupConfig;
use crate::error::Fault;
use crate::transition::{TransitionController, TransitionState};
use std::time::{Duration, Instant};

/// Orchestrates item lifecycle transitions for one toast surface.
///
/// Created once per UI surface that shows notifications and torn down with
/// it. Mutations never fail: expected races (stale timer fires, double
/// removals) degrade to no-ops.
#[derive(Debug)]
pub struct PopupQueue {
    config: PopupConfig,
    items: ItemQueue,
    locks: LockSet,
    /// Monotonic id source for this queue.
    next_id: u64,
    /// True while the whole-queue collapse animation runs.
    clearing: bool,
    /// Queue-level measured height; doubles as the "view has mounted" gate
    /// for `clear`.
    height: Option<f32>,
    /// Entrance animation, reused for each admitted head.
    enter: TransitionController,
    /// Exit animation of the one departing item, if any.
    exit: Option<(ItemId, TransitionController)>,
    /// Whole-queue collapse animation.
    clear_anim: TransitionController,
    /// Tail watched by a removal that arrived while it was still entering.
    unmount_watch: Option<ItemId>,
    events: Vec<Event>,
}

impl Default for PopupQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupQueue {
    /// Creates a queue with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PopupConfig::default())
    }

    /// Creates a queue with the given timing configuration.
    #[must_use]
    pub fn with_config(config: PopupConfig) -> Self {
        let enter = TransitionController::new(config.enter_delay(), config.enter_timeout());
        let clear_anim = TransitionController::new(config.enter_delay(), config.clear_timeout());
        Self {
            config,
            items: ItemQueue::new(),
            locks: LockSet::new(),
            next_id: 0,
            clearing: false,
            height: None,
            enter,
            exit: None,
            clear_anim,
            unmount_watch: None,
            events: Vec::new(),
        }
    }

    // ----------------------------------------------------------------------
    // Mutation entry points
    // ----------------------------------------------------------------------

    /// Requests admission of an item.
    ///
    /// Assigns an id if the item has none. An existing item with identical
    /// text is retriggered instead of admitting a duplicate. While an
    /// entrance animation is in flight the request is deferred and replayed
    /// (last request first) as prior entrances finish.
    pub fn add(&mut self, mut item: Item) {
        let id = match item.id() {
            Some(id) => id,
            None => {
                let id = ItemId::new(self.next_id);
                self.next_id += 1;
                item.assign_id(id);
                id
            }
        };

        if let Some(existing) = self.items.find_by_text_mut(item.text()) {
            existing.trigger();
            let existing_id = existing.id();
            tracing::debug!(%id, "duplicate text, retriggering existing item");
            if let Some(existing_id) = existing_id {
                self.events.push(Event::Retriggered(existing_id));
            }
            return;
        }

        if self.locks.is_locked(LockName::OnAdd) {
            tracing::debug!(%id, "entrance busy, deferring add");
            self.locks.defer(LockName::OnAdd, Deferred::Add(item));
            return;
        }

        self.admit(item, id);
    }

    /// Requests removal of the oldest item (tail-first).
    ///
    /// While an exit animation is in flight, redundant calls coalesce into a
    /// pending-removal count capped at the current item count. Removal of a
    /// tail that is still entering waits for it to finish, then proceeds.
    pub fn remove(&mut self) {
        if self.clearing || self.items.is_empty() {
            return;
        }
        if self.locks.is_locked(LockName::OnDel) {
            if self.locks.pending_len(LockName::OnDel) < self.items.len() {
                self.locks.defer(LockName::OnDel, Deferred::Remove);
            }
            return;
        }
        let Some(tail) = self.items.peek_tail() else {
            return;
        };
        let tail_id = tail.id();
        match tail.status() {
            ItemStatus::Mounting => {
                // Wait for the entrance to finish; hold ondel meanwhile so
                // no other removal interleaves.
                self.locks.acquire(LockName::OnDel);
                self.unmount_watch = tail_id;
                tracing::debug!(id = ?tail_id, "tail still entering, removal parked");
            }
            ItemStatus::Rendered => {
                self.locks.acquire(LockName::OnDel);
                if let Some(id) = tail_id {
                    self.begin_unmount(id);
                }
            }
            ItemStatus::Unmounting => {
                // Already on its way out.
            }
        }
    }

    /// Requests the animated whole-queue clear.
    ///
    /// No-op while already clearing, when empty, or before the view has
    /// reported a measured height. If an entrance is in flight, the collapse
    /// waits for the head to finish entering first.
    pub fn clear(&mut self) {
        if self.clearing || self.items.is_empty() || self.height.is_none() {
            return;
        }
        if self.locks.is_locked(LockName::OnClear) {
            return;
        }
        self.locks.acquire(LockName::OnClear);
        if self.locks.is_locked(LockName::OnAdd) {
            tracing::debug!("entrance in flight, clear waits for head to render");
            return;
        }
        self.locks.acquire(LockName::OnAdd);
        self.begin_clearing();
    }

    /// Completes the clear: empties the queue with per-item teardown,
    /// discards removals queued during the collapse, and releases all three
    /// locks (releasing `onadd` may replay a deferred add). Idempotent; also
    /// invoked by [`tick`](Self::tick) when the collapse animation finishes,
    /// so a view driving its own animation may call it directly instead.
    pub fn finish_clearing(&mut self) {
        if !self.clearing {
            return;
        }
        self.items.clear();
        self.exit = None;
        self.unmount_watch = None;
        self.enter.reset();
        self.clear_anim.reset();
        self.clearing = false;

        let dropped = self.locks.discard_pending(LockName::OnDel);
        if dropped > 0 {
            tracing::debug!(dropped, "discarded removals queued during clear");
        }
        let _ = self.locks.release(LockName::OnClear);
        let _ = self.locks.release(LockName::OnDel);
        self.events.push(Event::Cleared);
        tracing::debug!("clear finished");

        if let Some(Deferred::Add(item)) = self.locks.release(LockName::OnAdd) {
            self.add(item);
        }
    }

    /// Adds an info item. `lifetime` falls back to the configured default.
    pub fn info(&mut self, text: impl Into<String>, lifetime: Option<Duration>) {
        self.add_with(Category::Info, text.into(), lifetime);
    }

    /// Adds a warning item. `lifetime` falls back to the configured default.
    pub fn warning(&mut self, text: impl Into<String>, lifetime: Option<Duration>) {
        self.add_with(Category::Warning, text.into(), lifetime);
    }

    /// Adds an error item. `lifetime` falls back to the configured default.
    pub fn error(&mut self, text: impl Into<String>, lifetime: Option<Duration>) {
        self.add_with(Category::Error, text.into(), lifetime);
    }

    fn add_with(&mut self, category: Category, text: String, lifetime: Option<Duration>) {
        let lifetime = lifetime.or_else(|| self.config.default_lifetime());
        let mut item = Item::new(category, text);
        if let Some(lifetime) = lifetime {
            item = item.with_lifetime(lifetime);
        }
        self.add(item);
    }

    // ----------------------------------------------------------------------
    // Timer pump
    // ----------------------------------------------------------------------

    /// Advances every running animation and armed countdown.
    ///
    /// Call from the host event loop; the cadence only bounds how promptly
    /// deadlines are observed.
    pub fn tick(&mut self, now: Instant) {
        self.tick_enter(now);
        self.tick_exit(now);
        self.tick_clear(now);
        self.tick_auto_dismiss(now);
    }

    fn tick_enter(&mut self, now: Instant) {
        let Some(head) = self.items.peek_head() else {
            return;
        };
        if head.status() != ItemStatus::Mounting {
            return;
        }
        if !self.enter.is_started() {
            self.enter.start(now);
        }
        if self.enter.tick(now) != Some(TransitionState::Entered) {
            return;
        }
        self.enter.reset();

        let mut head_id = None;
        if let Some(item) = self.items.head_mut() {
            item.set_status(ItemStatus::Rendered);
            item.begin_countdown(now);
            head_id = item.id();
        }
        if let Some(id) = head_id {
            self.events.push(Event::StatusChanged(id, ItemStatus::Rendered));
        }

        if self.locks.is_locked(LockName::OnClear) {
            // A clear was waiting for this entrance; onadd stays held.
            self.begin_clearing();
            return;
        }
        if let Some(Deferred::Add(item)) = self.locks.release(LockName::OnAdd) {
            self.add(item);
        }
        if head_id.is_some() && self.unmount_watch == head_id {
            self.unmount_watch = None;
            if let Some(id) = head_id {
                self.begin_unmount(id);
            }
        }
    }

    fn tick_exit(&mut self, now: Instant) {
        let Some((id, controller)) = self.exit.as_mut() else {
            return;
        };
        if !controller.is_started() {
            controller.start(now);
        }
        if controller.tick(now) != Some(TransitionState::Entered) {
            return;
        }
        let id = *id;
        self.exit = None;

        if self.items.remove_by_id(id) {
            self.events.push(Event::Removed(id));
            tracing::debug!(%id, "exit finished, item spliced out");
        } else {
            tracing::debug!(fault = %Fault::StaleTimerFire(id), "exit target already gone");
        }
        if let Some(Deferred::Remove) = self.locks.release(LockName::OnDel) {
            self.remove();
        }
    }

    fn tick_clear(&mut self, now: Instant) {
        if !self.clearing {
            return;
        }
        if !self.clear_anim.is_started() {
            self.clear_anim.start(now);
        }
        if self.clear_anim.tick(now) == Some(TransitionState::Entered) {
            self.finish_clearing();
        }
    }

    fn tick_auto_dismiss(&mut self, now: Instant) {
        if self.clearing {
            return;
        }
        let due: Vec<ItemId> = self
            .items
            .iter()
            .filter(|item| item.status() == ItemStatus::Rendered && item.countdown_due(now))
            .filter_map(Item::id)
            .collect();
        for id in due {
            if let Some(item) = self.items.get_mut(id) {
                item.cancel_countdown();
            }
            tracing::debug!(%id, "lifetime expired, requesting removal");
            self.remove();
        }
    }

    // ----------------------------------------------------------------------
    // Internals
    // ----------------------------------------------------------------------

    fn admit(&mut self, item: Item, id: ItemId) {
        self.items.add(item);
        self.locks.acquire(LockName::OnAdd);
        self.enter.reset();
        self.events.push(Event::Added(id));
        tracing::debug!(%id, "item admitted");
    }

    fn begin_unmount(&mut self, id: ItemId) {
        let Some(item) = self.items.get_mut(id) else {
            // The watched item vanished (e.g. a clear won the race).
            tracing::debug!(fault = %Fault::StaleTimerFire(id), "unmount target already gone");
            if let Some(Deferred::Remove) = self.locks.release(LockName::OnDel) {
                self.remove();
            }
            return;
        };
        item.cancel_countdown();
        item.set_status(ItemStatus::Unmounting);
        self.events.push(Event::StatusChanged(id, ItemStatus::Unmounting));
        self.exit = Some((
            id,
            TransitionController::new(self.config.enter_delay(), self.config.exit_timeout()),
        ));
    }

    fn begin_clearing(&mut self) {
        self.clearing = true;
        self.clear_anim.reset();
        self.events.push(Event::ClearStarted);
        tracing::debug!("clear collapse started");
    }

    // ----------------------------------------------------------------------
    // View-facing state
    // ----------------------------------------------------------------------

    /// Items head to tail (newest to oldest), read-only.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the whole-queue collapse is in progress.
    #[must_use]
    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    /// Last queue-level height reported by the view.
    #[must_use]
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Records the queue-level extent measured by the view after layout.
    /// The first report also marks the view as mounted, enabling `clear`.
    pub fn update_height(&mut self, height: f32) {
        self.height = Some(height);
    }

    /// Records a measured extent for one item. Returns whether it was found.
    pub fn update_item_height(&mut self, id: ItemId, height: f32) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.update_height(height);
                true
            }
            None => false,
        }
    }

    /// Whether the named lock is currently held.
    #[must_use]
    pub fn lock_held(&self, name: LockName) -> bool {
        self.locks.is_locked(name)
    }

    /// Coalesced removals waiting for the in-flight exit to finish.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.locks.pending_len(LockName::OnDel)
    }

    /// Adds deferred while an entrance was in flight.
    #[must_use]
    pub fn pending_adds(&self) -> usize {
        self.locks.pending_len(LockName::OnAdd)
    }

    /// The entrance animation's controller, for phase-aware rendering.
    #[must_use]
    pub fn enter_transition(&self) -> &TransitionController {
        &self.enter
    }

    /// The departing item and its exit controller, if an exit is in flight.
    #[must_use]
    pub fn exit_transition(&self) -> Option<(ItemId, &TransitionController)> {
        self.exit.as_ref().map(|(id, controller)| (*id, controller))
    }

    /// The clear collapse controller.
    #[must_use]
    pub fn clear_transition(&self) -> &TransitionController {
        &self.clear_anim
    }

    /// The timing configuration this queue was built with.
    #[must_use]
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Drains the change notifications accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
