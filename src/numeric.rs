//! Numeric representations accepted for enum members.
//!
//! Registered enum types are "integer-like": every member is backed by one primitive integer. [`Numeric`] names that
//! closed set so the registry can order, compare and print members without knowing the concrete type.
//!
//! ## Notes
//! - The trait is sealed. Floats are deliberately absent (`NaN` breaks `Eq`/`Ord`, which lookups rely on).

use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer type usable as the underlying representation of an enum member.
///
/// ## Examples
/// ```rust
/// use enum_registry::Numeric;
///
/// fn max_of<N: Numeric>(a: N, b: N) -> N {
///     a.max(b)
/// }
///
/// assert_eq!(max_of(3_u8, 7_u8), 7);
/// ```
pub trait Numeric: sealed::Sealed + Copy + Ord + Hash + Debug + Display + Send + Sync + 'static {}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Numeric for $ty {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
