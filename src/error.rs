// SPDX-License-Identifier: MPL-2.0
//! Error and fault types.
//!
//! The engine itself has no I/O and no user-visible failure mode: mutation
//! entry points always return normally, and expected races (a timer firing
//! after its item was removed) are silent no-ops. [`Error`] covers only
//! configuration persistence. [`Fault`] names the programmer-error class:
//! faults are logged and asserted on in development builds, and degrade to
//! no-ops in release builds.

use crate::popup::{ItemId, ItemStatus, LockName};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A violated internal contract.
///
/// Faults are never propagated to callers. They are reported through
/// `tracing` and a `debug_assert!`, so development builds fail loudly while
/// release builds treat the offending call as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// An item status change that does not follow the forward-only lineage.
    InvalidTransition { from: ItemStatus, to: ItemStatus },
    /// A deferred operation was queued under a lock that is not held.
    DeferWithoutLock(LockName),
    /// A scheduled callback fired for an item that no longer exists.
    StaleTimerFire(ItemId),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::InvalidTransition { from, to } => {
                write!(f, "invalid transition: {} -> {}", from, to)
            }
            Fault::DeferWithoutLock(name) => {
                write!(f, "defer on unlocked lock: {}", name)
            }
            Fault::StaleTimerFire(id) => {
                write!(f, "stale timer fire for item {}", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fault_display_names_the_transition() {
        let fault = Fault::InvalidTransition {
            from: ItemStatus::Rendered,
            to: ItemStatus::Mounting,
        };
        let text = format!("{}", fault);
        assert!(text.contains("invalid transition"));
        assert!(text.contains("RENDERED"));
        assert!(text.contains("MOUNTING"));
    }

    #[test]
    fn fault_display_names_the_lock() {
        let fault = Fault::DeferWithoutLock(LockName::OnAdd);
        assert!(format!("{}", fault).contains("onadd"));
    }
}
