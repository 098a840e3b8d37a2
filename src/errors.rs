//! Recoverable registry errors.
//!
//! Programmer errors made while registering (empty value sets, a member listed twice, clashing descriptions) are not
//! represented here: they panic at startup. Everything a caller can reasonably hit at runtime is a [`RegistryError`].

use thiserror::Error;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The enum type was never registered.
    #[error("enum {name} (uid {uid:?}) is not registered yet")]
    NotRegistered { uid: &'static str, name: &'static str },

    /// The type is registered but the value (or description) is not one of its members.
    ///
    /// `expected` lists every accepted value, `got` echoes the rejected input.
    #[error("invalid value for {name}: must be one of [{}], got {got}", .expected.join(", "))]
    InvalidValue {
        name: &'static str,
        expected: Vec<String>,
        got: String,
    },

    /// The uid was registered by a different Rust type.
    #[error("uid {uid:?} is registered to {registered}, not {requested}")]
    UidConflict {
        uid: &'static str,
        registered: &'static str,
        requested: &'static str,
    },

    /// A process-wide registry was already installed.
    #[error("a global enum registry is already installed")]
    AlreadyInstalled,
}

/// Convenience alias used throughout the crate.
pub type RegistryResult<T> = Result<T, RegistryError>;
