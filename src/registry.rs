//! Registration and lookup of enum value sets.
//!
//! The registry has two phases:
//! - **registration**: a [`RegistryBuilder`] is mutated once per enum type, typically during program startup;
//! - **lookup**: [`RegistryBuilder::freeze`] produces an immutable [`EnumRegistry`] that is `Send + Sync` and can be
//!   shared freely (by reference, `Arc`, or [`crate::global::install`]).
//!
//! Since registration needs `&mut RegistryBuilder` and lookups need the frozen registry, the two phases can never
//! overlap.
//!
//! ## Examples
//! ```rust
//! use enum_registry::{EnumMember, RegistryBuilder, RegistryError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
//! #[enum_member(uid = "docs.Color")]
//! struct Color(u8);
//!
//! impl Color {
//!     const RED: Color = Color(0);
//!     const GREEN: Color = Color(1);
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register([(Color::RED, "red"), (Color::GREEN, "green")]);
//! let registry = builder.freeze();
//!
//! assert_eq!(registry.parse::<Color>("green"), Ok(Color::GREEN));
//! assert!(registry.validate(Color::RED).is_ok());
//! assert!(matches!(registry.validate(Color(9)), Err(RegistryError::InvalidValue { .. })));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::config::RegistryConfig;
use crate::entry::{EnumInfo, Entry, ErasedEntry, RegistrationFault};
use crate::errors::{RegistryError, RegistryResult};
use crate::member::EnumMember;

/// Mutable registry used during the registration phase.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    registry: EnumRegistry,
}

impl RegistryBuilder {
    /// Create an empty builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            registry: EnumRegistry::default(),
        }
    }

    /// Register the members of `E` together with their descriptions.
    ///
    /// Registering a uid that is already present is a no-op: the first registration stays authoritative and a
    /// warning is logged.
    ///
    /// ## Panics
    /// - If `descriptions` is empty.
    /// - If a member is listed more than once.
    /// - If two members share a description and the configured policy is
    ///   [`DuplicateDescriptions::Reject`](crate::DuplicateDescriptions::Reject).
    #[track_caller]
    pub fn register<E, I, D>(&mut self, descriptions: I) -> &mut Self
    where
        E: EnumMember,
        I: IntoIterator<Item = (E, D)>,
        D: Into<String>,
    {
        let pairs: Vec<(E, String)> = descriptions.into_iter().map(|(member, d)| (member, d.into())).collect();
        // An empty value set is fatal even when the uid is already taken.
        if pairs.is_empty() {
            registration_failed::<E>(RegistrationFault::Empty { name: E::NAME });
        }

        if let Some(existing) = self.registry.entries.get(E::UID) {
            tracing::warn!(
                uid = E::UID,
                enum_name = E::NAME,
                registered_as = existing.name(),
                "enum already registered; ignoring duplicate registration"
            );
            return self;
        }

        let entry = match Entry::from_pairs(pairs, self.config.duplicate_descriptions) {
            Ok(entry) => entry,
            Err(fault) => registration_failed::<E>(fault),
        };

        tracing::info!(
            uid = E::UID,
            enum_name = E::NAME,
            count = entry.len(),
            "registered enum"
        );
        self.registry.entries.insert(E::UID, Box::new(entry));
        self
    }

    /// Check whether `E`'s uid has been registered.
    pub fn is_registered<E: EnumMember>(&self) -> bool {
        self.registry.is_registered::<E>()
    }

    /// Number of registered enum types.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// End the registration phase.
    pub fn freeze(self) -> EnumRegistry {
        tracing::debug!(count = self.registry.len(), "froze enum registry");
        self.registry
    }
}

#[cold]
#[track_caller]
fn registration_failed<E: EnumMember>(fault: RegistrationFault) -> ! {
    tracing::error!(uid = E::UID, enum_name = E::NAME, "{fault}");
    panic!("{fault}");
}

/// Immutable registry of enum types, keyed by [`EnumMember::UID`].
#[derive(Default)]
pub struct EnumRegistry {
    entries: HashMap<&'static str, Box<dyn ErasedEntry>>,
}

impl fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut uids: Vec<&str> = self.entries.keys().copied().collect();
        uids.sort_unstable();
        f.debug_struct("EnumRegistry").field("uids", &uids).finish()
    }
}

impl EnumRegistry {
    /// A registry with no types registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Typed entry for `E`, or `None` if `E` is not registered (or its uid belongs to another type).
    pub fn entry<E: EnumMember>(&self) -> Option<&Entry<E>> {
        self.lookup::<E>().ok()
    }

    /// Check whether `E`'s uid is registered.
    pub fn is_registered<E: EnumMember>(&self) -> bool {
        self.entries.contains_key(E::UID)
    }

    /// Number of registered enum types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no enum type is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `value` is one of the registered members of its type.
    ///
    /// ## Errors
    /// - [`RegistryError::NotRegistered`] if `E` was never registered.
    /// - [`RegistryError::UidConflict`] if `E::UID` was registered by another type.
    /// - [`RegistryError::InvalidValue`] if `value` is not a member; lists every valid value.
    pub fn validate<E: EnumMember>(&self, value: E) -> RegistryResult<()> {
        let entry = self.lookup::<E>()?;
        if entry.contains(value) {
            return Ok(());
        }
        Err(RegistryError::InvalidValue {
            name: E::NAME,
            expected: entry.values().iter().map(|v| v.repr().to_string()).collect(),
            got: value.repr().to_string(),
        })
    }

    /// Resolve a description back to its member.
    ///
    /// ## Errors
    /// - [`RegistryError::NotRegistered`] if `E` was never registered.
    /// - [`RegistryError::UidConflict`] if `E::UID` was registered by another type.
    /// - [`RegistryError::InvalidValue`] if no member has this description; lists every known description.
    pub fn parse<E: EnumMember>(&self, description: &str) -> RegistryResult<E> {
        let entry = self.lookup::<E>()?;
        entry.lookup(description).ok_or_else(|| RegistryError::InvalidValue {
            name: E::NAME,
            expected: entry.strings().into_iter().map(str::to_owned).collect(),
            got: description.to_owned(),
        })
    }

    /// All registered members of `E` sorted by representation; empty if `E` is not registered.
    pub fn list<E: EnumMember>(&self) -> &[E] {
        self.entry::<E>().map(Entry::values).unwrap_or_default()
    }

    /// Descriptions aligned with [`EnumRegistry::list`]; empty if `E` is not registered.
    pub fn strings<E: EnumMember>(&self) -> Vec<&str> {
        self.entry::<E>().map(Entry::strings).unwrap_or_default()
    }

    /// Description of a single member; `None` if `E` is not registered or `value` is not a member.
    pub fn description<E: EnumMember>(&self, value: E) -> Option<&str> {
        self.entry::<E>()?.description(value)
    }

    /// Snapshots of every registered type, sorted by uid.
    pub fn infos(&self) -> Vec<EnumInfo> {
        let mut infos: Vec<EnumInfo> = self.entries.values().map(|entry| entry.info()).collect();
        infos.sort_by(|a, b| a.uid.cmp(b.uid));
        infos
    }

    fn lookup<E: EnumMember>(&self) -> RegistryResult<&Entry<E>> {
        let erased = self.entries.get(E::UID).ok_or(RegistryError::NotRegistered {
            uid: E::UID,
            name: E::NAME,
        })?;
        erased
            .as_any()
            .downcast_ref::<Entry<E>>()
            .ok_or_else(|| RegistryError::UidConflict {
                uid: E::UID,
                registered: erased.name(),
                requested: E::NAME,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DuplicateDescriptions;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, crate::EnumMember)]
    #[enum_member(uid = "tests.Color")]
    struct Color(i32);

    impl Color {
        const RED: Color = Color(0);
        const GREEN: Color = Color(1);
        const BLUE: Color = Color(2);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, crate::EnumMember)]
    #[enum_member(uid = "tests.Color", name = "Shade")]
    struct Shade(u8);

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, crate::EnumMember)]
    #[enum_member(uid = "tests.Shape")]
    struct Shape(u8);

    fn colors() -> EnumRegistry {
        let mut builder = RegistryBuilder::new();
        builder.register([(Color::RED, "red"), (Color::GREEN, "green"), (Color::BLUE, "blue")]);
        builder.freeze()
    }

    #[test]
    fn validate_accepts_members() {
        let registry = colors();
        for color in [Color::RED, Color::GREEN, Color::BLUE] {
            assert_eq!(registry.validate(color), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_non_members_with_expected_values() {
        let err = colors().validate(Color(99)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidValue {
                name: "Color",
                expected: vec!["0".into(), "1".into(), "2".into()],
                got: "99".into(),
            }
        );
    }

    #[test]
    fn parse_round_trips_descriptions() {
        let registry = colors();
        assert_eq!(registry.parse::<Color>("green"), Ok(Color::GREEN));
        let err = registry.parse::<Color>("purple").unwrap_err();
        match err {
            RegistryError::InvalidValue { expected, got, .. } => {
                assert_eq!(got, "purple");
                assert_eq!(expected, vec!["red", "green", "blue"]);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn list_and_strings_are_aligned() {
        let registry = colors();
        assert_eq!(registry.list::<Color>(), &[Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(registry.strings::<Color>(), vec!["red", "green", "blue"]);
        assert_eq!(registry.description(Color::BLUE), Some("blue"));
        assert_eq!(registry.description(Color(7)), None);
    }

    #[test]
    fn unregistered_type_is_empty_or_not_registered() {
        let registry = colors();
        assert!(registry.list::<Shape>().is_empty());
        assert!(registry.strings::<Shape>().is_empty());
        assert_eq!(registry.description(Shape(0)), None);
        assert_eq!(
            registry.validate(Shape(0)),
            Err(RegistryError::NotRegistered {
                uid: "tests.Shape",
                name: "Shape",
            })
        );
        assert!(matches!(
            registry.parse::<Shape>("circle"),
            Err(RegistryError::NotRegistered { .. })
        ));
    }

    #[test]
    fn second_registration_is_ignored() {
        let mut builder = RegistryBuilder::new();
        builder
            .register([(Color::RED, "red"), (Color::GREEN, "green")])
            .register([(Color::BLUE, "azure")]);
        let registry = builder.freeze();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.strings::<Color>(), vec!["red", "green"]);
        assert!(registry.parse::<Color>("azure").is_err());
    }

    #[test]
    fn uid_shared_by_two_types_is_a_conflict() {
        let mut builder = RegistryBuilder::new();
        builder.register([(Color::RED, "red")]);
        builder.register([(Shade(0), "dark")]);
        assert!(builder.is_registered::<Shade>());
        let registry = builder.freeze();

        assert_eq!(
            registry.validate(Shade(0)),
            Err(RegistryError::UidConflict {
                uid: "tests.Color",
                registered: "Color",
                requested: "Shade",
            })
        );
        assert!(registry.list::<Shade>().is_empty());
        assert_eq!(registry.list::<Color>(), &[Color::RED]);
    }

    #[test]
    #[should_panic(expected = "no values provided to register for enum Color")]
    fn empty_registration_panics() {
        let mut builder = RegistryBuilder::new();
        builder.register(Vec::<(Color, &str)>::new());
    }

    #[test]
    #[should_panic(expected = "no values provided to register for enum Color")]
    fn empty_registration_panics_even_after_first_registration() {
        let mut builder = RegistryBuilder::new();
        builder.register([(Color::RED, "red")]);
        builder.register(Vec::<(Color, &str)>::new());
    }

    #[test]
    #[should_panic(expected = "share the description")]
    fn duplicate_description_panics_by_default() {
        let mut builder = RegistryBuilder::new();
        builder.register([(Color::RED, "warm"), (Color::GREEN, "warm")]);
    }

    #[test]
    fn duplicate_description_tolerated_when_configured() {
        let config = RegistryConfig::new().with_duplicate_descriptions(DuplicateDescriptions::LastWins);
        let mut builder = RegistryBuilder::with_config(config);
        builder.register([(Color::BLUE, "cool"), (Color::GREEN, "cool")]);
        let registry = builder.freeze();
        assert_eq!(registry.parse::<Color>("cool"), Ok(Color::BLUE));
        assert_eq!(registry.strings::<Color>(), vec!["cool", "cool"]);
    }

    #[test]
    fn infos_are_sorted_by_uid() {
        let mut builder = RegistryBuilder::new();
        builder.register([(Shape(1), "circle")]);
        builder.register([(Color::RED, "red")]);
        let uids: Vec<&str> = builder.freeze().infos().iter().map(|i| i.uid).collect();
        assert_eq!(uids, vec!["tests.Color", "tests.Shape"]);
    }

    #[test]
    fn builder_reports_progress() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.is_empty());
        builder.register([(Shape(1), "circle")]);
        assert_eq!(builder.len(), 1);
        assert!(builder.is_registered::<Shape>());
        assert!(!builder.is_registered::<Color>());
    }

    #[test]
    fn debug_lists_uids() {
        let debug = format!("{:?}", colors());
        assert_eq!(debug, "EnumRegistry { uids: [\"tests.Color\"] }");
    }
}
