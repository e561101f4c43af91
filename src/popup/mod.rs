// SPDX-License-Identifier: MPL-2.0
//! Popup notification queue engine.
//!
//! This module contains the state machine behind a toast stack, without any
//! rendering.
//!
//! # Components
//!
//! - [`item`] - A single notification record with its lifecycle status
//! - [`queue`] - Ordered item collection, newest-first
//! - [`locks`] - Named logical locks with deferred-replay pending lists
//! - [`engine`] - The [`PopupQueue`] orchestrator
//! - [`event`] - Change notifications drained by the view layer
//!
//! # Usage
//!
//! ```
//! use toast_queue::popup::PopupQueue;
//! use std::time::Instant;
//!
//! let mut popup = PopupQueue::new();
//! popup.info("Transaction has been created", None);
//!
//! // Drive the engine from the host event loop.
//! popup.tick(Instant::now());
//!
//! // The view reads items and transition states, then drains events.
//! for item in popup.items() {
//!     let _ = (item.category(), item.text(), item.status());
//! }
//! let _events = popup.drain_events();
//! ```
//!
//! # Design Considerations
//!
//! - One entrance and one exit animation at most may be in flight; they may
//!   overlap each other but never themselves
//! - Operations arriving while their lock is held are deferred and replayed
//!   LIFO on release (the last request wins priority)
//! - Every timer-driven path is an idempotent no-op when its target is gone

pub mod engine;
pub mod event;
pub mod item;
pub mod locks;
pub mod queue;

pub use engine::PopupQueue;
pub use event::Event;
pub use item::{Category, Item, ItemId, ItemStatus};
pub use locks::{LockName, LockSet};
pub use queue::ItemQueue;
