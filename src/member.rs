//! The capability every registrable enum type implements.
//!
//! A type opts into the registry by implementing [`EnumMember`], usually through `#[derive(EnumMember)]`. The trait
//! carries the type's identity (`UID`, `NAME`) as associated constants, so lookups never need an instance of the type.

use std::fmt::Debug;
use std::hash::Hash;

use crate::numeric::Numeric;

/// An integer-backed value drawn from a closed, registered set.
///
/// ## Notes
/// - `UID` must be unique across every type registered in the same registry. Two types sharing a uid are reported as
///   [`RegistryError::UidConflict`](crate::RegistryError::UidConflict) on lookup.
/// - `NAME` is only used in diagnostics and generated docs.
/// - Equality must agree with `repr()`: two members are equal iff their representations are equal.
///
/// ## Examples
/// ```rust
/// use enum_registry::EnumMember;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// #[enum_member(uid = "docs.Level")]
/// struct Level(u8);
///
/// assert_eq!(Level::UID, "docs.Level");
/// assert_eq!(Level::NAME, "Level");
/// assert_eq!(Level(3).repr(), 3);
/// ```
///
/// ## Derive errors
/// The derive only accepts single-field tuple structs and fieldless enums.
///
/// ```compile_fail
/// use enum_registry::EnumMember;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// struct Pair(u8, u8);
/// ```
///
/// ```compile_fail
/// use enum_registry::EnumMember;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// struct Wrapped<T>(T);
/// ```
///
/// ```compile_fail
/// use enum_registry::EnumMember;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// enum Payload {
///     Empty,
///     Byte(u8),
/// }
/// ```
///
/// ```compile_fail
/// use enum_registry::EnumMember;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// #[enum_member(label = "x")]
/// struct Code(u8);
/// ```
pub trait EnumMember: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Underlying integer representation.
    type Repr: Numeric;

    /// Stable identifier of the enum type.
    const UID: &'static str;

    /// Short human-readable type name.
    const NAME: &'static str;

    /// Return the underlying representation of this member.
    fn repr(self) -> Self::Repr;
}

/// Check whether `value` equals `target` or any of `others`.
///
/// This is pure equality: no registry is consulted, so it works for unregistered types too.
///
/// ## Examples
/// ```rust
/// use enum_registry::{EnumMember, is};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// struct Shape(i32);
///
/// assert!(is(Shape(2), Shape(1), &[Shape(2)]));
/// assert!(!is(Shape(3), Shape(1), &[Shape(2)]));
/// ```
pub fn is<E: PartialEq>(value: E, target: E, others: &[E]) -> bool {
    value == target || others.contains(&value)
}
