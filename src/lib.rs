#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Runtime registry of closed, integer-backed enum value sets.
//!
//! A type declares its valid members and a human-readable description for each, once, at startup. Afterwards any
//! code holding the registry can validate values, enumerate members and descriptions, and resolve a description back
//! to its member.
//!
//! ## Notes
//!
//! - Registration and lookup are separate phases: [`RegistryBuilder`] is mutated, then frozen into an immutable
//!   [`EnumRegistry`].
//! - Types describe themselves through [`EnumMember`] (derivable); no reflection and no zero-value tricks.
//! - Programmer errors during registration (empty value set, repeated member, clashing descriptions) panic. Lookups
//!   return [`RegistryError`].
//!
//! ## Examples
//! ```rust
//! use enum_registry::{EnumMember, RegistryBuilder, is};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
//! #[repr(u8)]
//! enum Weekend {
//!     Saturday = 6,
//!     Sunday = 7,
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register([(Weekend::Saturday, "sat"), (Weekend::Sunday, "sun")]);
//! let registry = builder.freeze();
//!
//! assert_eq!(registry.strings::<Weekend>(), vec!["sat", "sun"]);
//! assert!(is(Weekend::Sunday, Weekend::Saturday, &[Weekend::Sunday]));
//! ```

// Lets `#[derive(EnumMember)]` expand to `::enum_registry::...` inside this crate as well.
extern crate self as enum_registry;

pub mod config;
pub mod entry;
pub mod errors;
pub mod global;
pub mod member;
pub mod numeric;
pub mod reference;
pub mod registry;

pub use config::{DuplicateDescriptions, RegistryConfig};
pub use entry::{EnumInfo, Entry, MemberInfo};
pub use errors::{RegistryError, RegistryResult};
pub use member::{EnumMember, is};
pub use numeric::Numeric;
pub use registry::{EnumRegistry, RegistryBuilder};

pub use enum_registry_derive::EnumMember;
