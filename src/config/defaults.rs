// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the engine's timing configuration.
//!
//! This module is the single source of truth for the animation pacing
//! constants. Timeouts are in milliseconds, lifetimes in whole seconds.

// ==========================================================================
// Transition Pacing Defaults
// ==========================================================================

/// Arm delay before a transition starts animating (the "next tick" pause).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 10;

/// Duration of an item's entrance animation.
pub const DEFAULT_ENTER_TIMEOUT_MS: u64 = 1_700;

/// Duration of an item's exit animation.
pub const DEFAULT_EXIT_TIMEOUT_MS: u64 = 1_800;

/// Duration of the whole-queue clear collapse.
pub const DEFAULT_CLEAR_TIMEOUT_MS: u64 = 1_000;

/// Upper bound applied to every transition timeout on access.
pub const MAX_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Default auto-dismiss lifetime for convenience-constructed items (seconds).
/// Zero disables auto-dismiss.
pub const DEFAULT_LIFETIME_SECS: u64 = 5;

/// Upper bound applied to lifetimes on access (seconds).
pub const MAX_LIFETIME_SECS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ENTER_DELAY_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_ENTER_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_EXIT_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_CLEAR_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_LIFETIME_SECS <= MAX_LIFETIME_SECS);
};
