// SPDX-License-Identifier: MPL-2.0
//! Engine timing configuration, with optional TOML persistence.
//!
//! A [`PopupConfig`] supplies every animation-phase duration and the default
//! auto-dismiss lifetime. The engine never reads ambient state: each
//! [`PopupQueue`](crate::popup::PopupQueue) owns the config it was built
//! with. Values deserialized from a file are clamped on access rather than
//! rejected.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config;
//! use std::path::Path;
//!
//! let mut config = config::load_from_path(Path::new("toasts.toml")).unwrap_or_default();
//! config.exit_timeout_ms = 900;
//! config::save_to_path(&config, Path::new("toasts.toml")).expect("failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub use defaults::{
    DEFAULT_CLEAR_TIMEOUT_MS, DEFAULT_ENTER_DELAY_MS, DEFAULT_ENTER_TIMEOUT_MS,
    DEFAULT_EXIT_TIMEOUT_MS, DEFAULT_LIFETIME_SECS, MAX_LIFETIME_SECS, MAX_TIMEOUT_MS,
};

/// Timing configuration for a popup queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Arm delay before any transition starts animating (ms).
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    /// Entrance animation duration (ms).
    #[serde(default = "default_enter_timeout_ms")]
    pub enter_timeout_ms: u64,
    /// Exit animation duration (ms).
    #[serde(default = "default_exit_timeout_ms")]
    pub exit_timeout_ms: u64,
    /// Whole-queue clear collapse duration (ms).
    #[serde(default = "default_clear_timeout_ms")]
    pub clear_timeout_ms: u64,
    /// Auto-dismiss lifetime applied by `info`/`warning`/`error` when none is
    /// given explicitly (seconds). Zero disables auto-dismiss.
    #[serde(default = "default_lifetime_secs")]
    pub default_lifetime_secs: u64,
}

fn default_enter_delay_ms() -> u64 {
    DEFAULT_ENTER_DELAY_MS
}
fn default_enter_timeout_ms() -> u64 {
    DEFAULT_ENTER_TIMEOUT_MS
}
fn default_exit_timeout_ms() -> u64 {
    DEFAULT_EXIT_TIMEOUT_MS
}
fn default_clear_timeout_ms() -> u64 {
    DEFAULT_CLEAR_TIMEOUT_MS
}
fn default_lifetime_secs() -> u64 {
    DEFAULT_LIFETIME_SECS
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_ENTER_DELAY_MS,
            enter_timeout_ms: DEFAULT_ENTER_TIMEOUT_MS,
            exit_timeout_ms: DEFAULT_EXIT_TIMEOUT_MS,
            clear_timeout_ms: DEFAULT_CLEAR_TIMEOUT_MS,
            default_lifetime_secs: DEFAULT_LIFETIME_SECS,
        }
    }
}

impl PopupConfig {
    /// Arm delay before transitions start animating, clamped.
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms.min(MAX_TIMEOUT_MS))
    }

    /// Entrance animation duration, clamped.
    #[must_use]
    pub fn enter_timeout(&self) -> Duration {
        Duration::from_millis(self.enter_timeout_ms.min(MAX_TIMEOUT_MS))
    }

    /// Exit animation duration, clamped.
    #[must_use]
    pub fn exit_timeout(&self) -> Duration {
        Duration::from_millis(self.exit_timeout_ms.min(MAX_TIMEOUT_MS))
    }

    /// Clear collapse duration, clamped.
    #[must_use]
    pub fn clear_timeout(&self) -> Duration {
        Duration::from_millis(self.clear_timeout_ms.min(MAX_TIMEOUT_MS))
    }

    /// Default auto-dismiss lifetime, or `None` when disabled.
    #[must_use]
    pub fn default_lifetime(&self) -> Option<Duration> {
        match self.default_lifetime_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs.min(MAX_LIFETIME_SECS))),
        }
    }
}

/// Loads a config from a TOML file, falling back to defaults on parse errors.
pub fn load_from_path(path: &Path) -> Result<PopupConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves a config as pretty TOML, creating parent directories as needed.
pub fn save_to_path(config: &PopupConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
