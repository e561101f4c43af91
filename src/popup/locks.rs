// SPDX-License-Identifier: MPL-2.0
//! Named logical locks with deferred-replay pending lists.
//!
//! These locks serialize animation phases for visual correctness; they are
//! not memory-safety primitives. Each lock carries a pending list of
//! operations that arrived while it was held. [`LockSet::release`] hands back
//! at most one deferred operation, popped LIFO (the last request wins
//! priority), which the owner re-invokes synchronously; that replay can chain
//! through further acquire/release cycles.

use super::item::Item;
use crate::error::Fault;
use std::fmt;

/// The three mutation categories serialized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockName {
    /// Entrance animations.
    OnAdd,
    /// Exit animations.
    OnDel,
    /// The whole-queue clear collapse.
    OnClear,
}

impl LockName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LockName::OnAdd => "onadd",
            LockName::OnDel => "ondel",
            LockName::OnClear => "onclear",
        }
    }
}

impl fmt::Display for LockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation parked while its lock was held.
#[derive(Debug)]
pub(crate) enum Deferred {
    /// A full admission request carrying the item to admit.
    Add(Item),
    /// A coalesced removal request.
    Remove,
}

#[derive(Debug, Default)]
struct Lock {
    locked: bool,
    pending: Vec<Deferred>,
}

/// The engine's `{onadd, ondel, onclear}` lock table.
#[derive(Debug, Default)]
pub struct LockSet {
    on_add: Lock,
    on_del: Lock,
    on_clear: Lock,
}

impl LockSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, name: LockName) -> &Lock {
        match name {
            LockName::OnAdd => &self.on_add,
            LockName::OnDel => &self.on_del,
            LockName::OnClear => &self.on_clear,
        }
    }

    fn lock_mut(&mut self, name: LockName) -> &mut Lock {
        match name {
            LockName::OnAdd => &mut self.on_add,
            LockName::OnDel => &mut self.on_del,
            LockName::OnClear => &mut self.on_clear,
        }
    }

    /// Marks the lock as held.
    pub(crate) fn acquire(&mut self, name: LockName) {
        tracing::debug!(lock = %name, "acquire");
        self.lock_mut(name).locked = true;
    }

    /// Releases the lock and hands back the next deferred operation (LIFO),
    /// if any, for the caller to replay.
    pub(crate) fn release(&mut self, name: LockName) -> Option<Deferred> {
        let lock = self.lock_mut(name);
        lock.locked = false;
        let deferred = lock.pending.pop();
        tracing::debug!(lock = %name, replaying = deferred.is_some(), "release");
        deferred
    }

    #[must_use]
    pub fn is_locked(&self, name: LockName) -> bool {
        self.lock(name).locked
    }

    /// Parks an operation under a held lock.
    ///
    /// Deferring on an unlocked name indicates a corrupted lock/queue
    /// coupling; it is a [`Fault`], tolerated in release builds.
    pub(crate) fn defer(&mut self, name: LockName, deferred: Deferred) {
        if !self.is_locked(name) {
            let fault = Fault::DeferWithoutLock(name);
            tracing::error!(%fault, "defer on unlocked lock");
            debug_assert!(false, "{}", fault);
        }
        self.lock_mut(name).pending.push(deferred);
    }

    /// Number of operations parked under the lock.
    #[must_use]
    pub fn pending_len(&self, name: LockName) -> usize {
        self.lock(name).pending.len()
    }

    /// Drops every parked operation under the lock, returning how many.
    pub(crate) fn discard_pending(&mut self, name: LockName) -> usize {
        let lock = self.lock_mut(name);
        let dropped = lock.pending.len();
        lock.pending.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_start_released_and_empty() {
        let locks = LockSet::new();
        for name in [LockName::OnAdd, LockName::OnDel, LockName::OnClear] {
            assert!(!locks.is_locked(name));
            assert_eq!(locks.pending_len(name), 0);
        }
    }

    #[test]
    fn acquire_and_release_toggle_the_flag() {
        let mut locks = LockSet::new();
        locks.acquire(LockName::OnAdd);
        assert!(locks.is_locked(LockName::OnAdd));
        assert!(!locks.is_locked(LockName::OnDel));

        assert!(locks.release(LockName::OnAdd).is_none());
        assert!(!locks.is_locked(LockName::OnAdd));
    }

    #[test]
    fn release_replays_pending_lifo() {
        let mut locks = LockSet::new();
        locks.acquire(LockName::OnAdd);
        locks.defer(LockName::OnAdd, Deferred::Add(Item::info("a")));
        locks.defer(LockName::OnAdd, Deferred::Add(Item::info("b")));
        locks.defer(LockName::OnAdd, Deferred::Add(Item::info("c")));

        // Last deferred comes back first.
        let first = locks.release(LockName::OnAdd);
        match first {
            Some(Deferred::Add(item)) => assert_eq!(item.text(), "c"),
            other => panic!("expected deferred add, got {:?}", other),
        }

        locks.acquire(LockName::OnAdd);
        let second = locks.release(LockName::OnAdd);
        match second {
            Some(Deferred::Add(item)) => assert_eq!(item.text(), "b"),
            other => panic!("expected deferred add, got {:?}", other),
        }
    }

    #[test]
    fn release_hands_back_at_most_one() {
        let mut locks = LockSet::new();
        locks.acquire(LockName::OnDel);
        locks.defer(LockName::OnDel, Deferred::Remove);
        locks.defer(LockName::OnDel, Deferred::Remove);

        assert!(locks.release(LockName::OnDel).is_some());
        assert_eq!(locks.pending_len(LockName::OnDel), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "defer on unlocked lock")]
    fn defer_without_lock_asserts_in_debug() {
        let mut locks = LockSet::new();
        locks.defer(LockName::OnAdd, Deferred::Add(Item::info("x")));
    }

    #[test]
    fn discard_pending_drops_everything() {
        let mut locks = LockSet::new();
        locks.acquire(LockName::OnDel);
        locks.defer(LockName::OnDel, Deferred::Remove);
        locks.defer(LockName::OnDel, Deferred::Remove);

        assert_eq!(locks.discard_pending(LockName::OnDel), 2);
        assert_eq!(locks.pending_len(LockName::OnDel), 0);
        assert!(locks.release(LockName::OnDel).is_none());
    }
}
