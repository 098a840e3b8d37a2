//! Per-type registry metadata.
//!
//! An [`Entry`] is built once, when its type is registered, and is read-only afterwards. Members are kept sorted by
//! their representation so that `list`/`strings` are deterministic and membership checks are a binary search.
//!
//! The registry stores entries of many different member types in one map, so entries are also visible through the
//! object-safe `ErasedEntry` view and can be snapshotted into an owned [`EnumInfo`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::config::DuplicateDescriptions;
use crate::member::EnumMember;

/// Registered metadata for one enum type.
#[derive(Debug)]
pub struct Entry<E: EnumMember> {
    values: Vec<E>,
    descriptions: Vec<String>,
    reverse: HashMap<String, E>,
}

/// A registration call that can never be valid.
///
/// The builder turns these into panics; they are separate from [`crate::RegistryError`] because no caller is expected
/// to recover from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RegistrationFault {
    Empty {
        name: &'static str,
    },
    DuplicateMember {
        name: &'static str,
        member: String,
    },
    DuplicateDescription {
        name: &'static str,
        description: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for RegistrationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationFault::Empty { name } => write!(f, "no values provided to register for enum {name}"),
            RegistrationFault::DuplicateMember { name, member } => {
                write!(f, "enum {name}: member {member} is listed more than once")
            }
            RegistrationFault::DuplicateDescription {
                name,
                description,
                first,
                second,
            } => write!(
                f,
                "enum {name}: members {first} and {second} share the description {description:?}"
            ),
        }
    }
}

impl<E: EnumMember> Entry<E> {
    /// Build an entry from `(member, description)` pairs.
    ///
    /// ## Errors
    /// - [`RegistrationFault::Empty`] if `pairs` is empty.
    /// - [`RegistrationFault::DuplicateMember`] if a member appears twice.
    /// - [`RegistrationFault::DuplicateDescription`] if two members share a description and `policy` is `Reject`.
    pub(crate) fn from_pairs(
        mut pairs: Vec<(E, String)>,
        policy: DuplicateDescriptions,
    ) -> Result<Self, RegistrationFault> {
        if pairs.is_empty() {
            return Err(RegistrationFault::Empty { name: E::NAME });
        }

        pairs.sort_by_key(|(member, _)| member.repr());
        if let Some(pair) = pairs.windows(2).find(|w| w[0].0.repr() == w[1].0.repr()) {
            return Err(RegistrationFault::DuplicateMember {
                name: E::NAME,
                member: format!("{:?}", pair[0].0),
            });
        }

        let mut values = Vec::with_capacity(pairs.len());
        let mut descriptions = Vec::with_capacity(pairs.len());
        let mut reverse = HashMap::with_capacity(pairs.len());

        for (member, description) in pairs {
            if let Some(previous) = reverse.insert(description.clone(), member) {
                match policy {
                    DuplicateDescriptions::Reject => {
                        return Err(RegistrationFault::DuplicateDescription {
                            name: E::NAME,
                            description,
                            first: format!("{previous:?}"),
                            second: format!("{member:?}"),
                        });
                    }
                    DuplicateDescriptions::LastWins => {
                        tracing::warn!(
                            uid = E::UID,
                            enum_name = E::NAME,
                            description = %description,
                            shadowed = ?previous,
                            kept = ?member,
                            "duplicate enum description; lookup resolves to the later member"
                        );
                    }
                }
            }
            values.push(member);
            descriptions.push(description);
        }

        Ok(Self {
            values,
            descriptions,
            reverse,
        })
    }

    /// Stable identifier of the registered type.
    pub fn uid(&self) -> &'static str {
        E::UID
    }

    /// Short name of the registered type.
    pub fn name(&self) -> &'static str {
        E::NAME
    }

    /// All members, sorted by representation.
    pub fn values(&self) -> &[E] {
        &self.values
    }

    /// Descriptions aligned index-for-index with [`Entry::values`].
    pub fn strings(&self) -> Vec<&str> {
        self.descriptions.iter().map(String::as_str).collect()
    }

    /// Number of registered members.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the entry has no members (never the case once registered).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check set membership (by representation).
    pub fn contains(&self, value: E) -> bool {
        self.position(value).is_some()
    }

    /// Description of `value`, or `None` if it is not a member.
    pub fn description(&self, value: E) -> Option<&str> {
        self.position(value).map(|idx| self.descriptions[idx].as_str())
    }

    /// Member denoted by `description` (exact, case-sensitive match).
    pub fn lookup(&self, description: &str) -> Option<E> {
        self.reverse.get(description).copied()
    }

    /// Snapshot this entry into an owned, type-erased [`EnumInfo`].
    pub fn info(&self) -> EnumInfo {
        EnumInfo {
            uid: E::UID,
            name: E::NAME,
            members: self
                .values
                .iter()
                .zip(&self.descriptions)
                .map(|(value, description)| MemberInfo {
                    value: value.repr().to_string(),
                    description: description.clone(),
                })
                .collect(),
        }
    }

    fn position(&self, value: E) -> Option<usize> {
        let repr = value.repr();
        self.values.binary_search_by_key(&repr, |v| v.repr()).ok()
    }
}

/// Owned snapshot of one registered enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct EnumInfo {
    pub uid: &'static str,
    pub name: &'static str,
    pub members: Vec<MemberInfo>,
}

/// One member of an [`EnumInfo`]; `value` is the decimal representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MemberInfo {
    pub value: String,
    pub description: String,
}

/// Object-safe view of an [`Entry`] of any member type.
pub(crate) trait ErasedEntry: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn name(&self) -> &'static str;
    fn info(&self) -> EnumInfo;
}

impl<E: EnumMember> ErasedEntry for Entry<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        E::NAME
    }

    fn info(&self) -> EnumInfo {
        Entry::info(self)
    }
}
