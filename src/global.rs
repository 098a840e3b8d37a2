//! Optional process-wide registry.
//!
//! Most code should pass an [`EnumRegistry`] around explicitly. For programs that want package-level helpers, a frozen
//! registry can be installed exactly once and then queried through the free functions in this module.
//!
//! ## Notes
//! - Installation is run-once (`OnceLock`): the first [`install`] wins, later calls return
//!   [`RegistryError::AlreadyInstalled`].
//! - Before anything is installed, queries behave as if nothing were registered.

use std::sync::OnceLock;

use crate::errors::{RegistryError, RegistryResult};
use crate::member::EnumMember;
use crate::registry::EnumRegistry;

static GLOBAL: OnceLock<EnumRegistry> = OnceLock::new();
static EMPTY: OnceLock<EnumRegistry> = OnceLock::new();

/// Install `registry` as the process-wide registry.
///
/// ## Errors
/// - [`RegistryError::AlreadyInstalled`] if a registry was installed before; `registry` is dropped.
pub fn install(registry: EnumRegistry) -> RegistryResult<&'static EnumRegistry> {
    let mut fresh = false;
    let installed = GLOBAL.get_or_init(|| {
        fresh = true;
        registry
    });
    if !fresh {
        tracing::warn!("global enum registry already installed; ignoring");
        return Err(RegistryError::AlreadyInstalled);
    }
    tracing::debug!(count = installed.len(), "installed global enum registry");
    Ok(installed)
}

/// The installed registry, if any.
pub fn get() -> Option<&'static EnumRegistry> {
    GLOBAL.get()
}

/// The installed registry, or a shared empty registry before installation.
pub fn registry() -> &'static EnumRegistry {
    GLOBAL.get().unwrap_or_else(|| EMPTY.get_or_init(EnumRegistry::empty))
}

/// [`EnumRegistry::validate`] against the global registry.
pub fn validate<E: EnumMember>(value: E) -> RegistryResult<()> {
    registry().validate(value)
}

/// [`EnumRegistry::parse`] against the global registry.
pub fn parse<E: EnumMember>(description: &str) -> RegistryResult<E> {
    registry().parse(description)
}

/// [`EnumRegistry::list`] against the global registry.
pub fn list<E: EnumMember>() -> &'static [E] {
    registry().list()
}

/// [`EnumRegistry::strings`] against the global registry.
pub fn strings<E: EnumMember>() -> Vec<&'static str> {
    registry().strings::<E>()
}

/// [`EnumRegistry::description`] against the global registry.
pub fn description<E: EnumMember>(value: E) -> Option<&'static str> {
    registry().description(value)
}
