//! Registration-time configuration.

/// Options applied while registering enum types.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// What to do when two members of one type share a description
    pub duplicate_descriptions: DuplicateDescriptions,
}

/// Policy for two members registered with the same description.
///
/// Description lookup must be unambiguous to round-trip, so the default rejects the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateDescriptions {
    /// Panic at registration time.
    #[default]
    Reject,
    /// Keep the member with the highest representation for description lookup and log a warning.
    LastWins,
}

impl RegistryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate description policy
    pub fn with_duplicate_descriptions(mut self, policy: DuplicateDescriptions) -> Self {
        self.duplicate_descriptions = policy;
        self
    }
}
