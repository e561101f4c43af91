// SPDX-License-Identifier: MPL-2.0
//! Ordered item collection, newest-first.
//!
//! Head is the most recently admitted item; tail is the oldest and next to
//! expire. Removal always tears the item down individually (stopping its
//! auto-dismiss countdown) so no stale deadline can outlive its item.

use super::item::{Item, ItemId};
use std::collections::VecDeque;

/// Double-ended collection of [`Item`]s with head/tail access and
/// mid-removal. Id uniqueness is guaranteed by the owning
/// [`PopupQueue`](super::PopupQueue), which assigns ids monotonically.
#[derive(Debug, Default)]
pub struct ItemQueue {
    items: VecDeque<Item>,
}

impl ItemQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently added item.
    #[must_use]
    pub fn peek_head(&self) -> Option<&Item> {
        self.items.front()
    }

    /// Oldest item, next to expire.
    #[must_use]
    pub fn peek_tail(&self) -> Option<&Item> {
        self.items.back()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut Item> {
        self.items.front_mut()
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == Some(id))
    }

    pub(crate) fn find_by_text_mut(&mut self, text: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.text() == text)
    }

    /// Inserts at the head.
    pub fn add(&mut self, item: Item) {
        self.items.push_front(item);
    }

    /// Splices out the item with the given id, stopping its countdown.
    ///
    /// Returns whether it was found.
    pub fn remove_by_id(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id() == Some(id)) else {
            return false;
        };
        if let Some(item) = self.items.get_mut(pos) {
            item.cancel_countdown();
        }
        self.items.remove(pos);
        true
    }

    /// Removes and returns the tail, stopping its countdown.
    pub fn pop_tail(&mut self) -> Option<Item> {
        let mut item = self.items.pop_back()?;
        item.cancel_countdown();
        Some(item)
    }

    /// Removes all items, tearing each down individually. A bulk reset that
    /// skipped per-item countdown cancellation would leak deadlines.
    pub fn clear(&mut self) {
        while let Some(mut item) = self.items.pop_back() {
            item.cancel_countdown();
        }
    }

    /// Iterates head to tail (newest to oldest).
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn item(id: u64, text: &str) -> Item {
        let mut item = Item::info(text);
        item.assign_id(ItemId::new(id));
        item
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = ItemQueue::new();
        assert!(queue.is_empty());
        assert!(queue.peek_head().is_none());
        assert!(queue.peek_tail().is_none());
    }

    #[test]
    fn add_inserts_at_head() {
        let mut queue = ItemQueue::new();
        queue.add(item(0, "first"));
        queue.add(item(1, "second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_head().map(Item::text), Some("second"));
        assert_eq!(queue.peek_tail().map(Item::text), Some("first"));
    }

    #[test]
    fn remove_by_id_splices_mid_queue() {
        let mut queue = ItemQueue::new();
        queue.add(item(0, "a"));
        queue.add(item(1, "b"));
        queue.add(item(2, "c"));

        assert!(queue.remove_by_id(ItemId::new(1)));
        let texts: Vec<&str> = queue.iter().map(Item::text).collect();
        assert_eq!(texts, vec!["c", "a"]);
    }

    #[test]
    fn remove_by_id_missing_returns_false() {
        let mut queue = ItemQueue::new();
        queue.add(item(0, "a"));
        assert!(!queue.remove_by_id(ItemId::new(99)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn pop_tail_returns_oldest_with_countdown_stopped() {
        let now = Instant::now();
        let mut queue = ItemQueue::new();
        let mut timed = Item::info("old").with_lifetime(Duration::from_secs(5));
        timed.assign_id(ItemId::new(0));
        timed.begin_countdown(now);
        queue.add(timed);
        queue.add(item(1, "new"));

        let popped = queue.pop_tail().expect("tail should exist");
        assert_eq!(popped.text(), "old");
        assert!(!popped.has_countdown());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = ItemQueue::new();
        for i in 0..4 {
            queue.add(item(i, "x"));
        }
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn find_by_text_matches_anywhere() {
        let mut queue = ItemQueue::new();
        queue.add(item(0, "a"));
        queue.add(item(1, "b"));

        assert!(queue.find_by_text_mut("a").is_some());
        assert!(queue.find_by_text_mut("b").is_some());
        assert!(queue.find_by_text_mut("c").is_none());
    }
}
