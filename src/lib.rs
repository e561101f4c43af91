// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is an animation-aware notification queue engine.
//!
//! It models the state machine behind a toast/popup widget stack: an ordered
//! queue of notification items mutated under concurrent enter/exit
//! animations, serialized by named logical locks with deferred-replay
//! semantics, and paced by timed transition controllers. No rendering happens
//! here; a view layer reads the exposed state (items, statuses, transition
//! phases) and feeds back only measured layout heights.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod error;
pub mod popup;
pub mod transition;

pub use popup::{Category, Event, Item, ItemId, ItemStatus, PopupQueue};
pub use transition::{TransitionController, TransitionState};
