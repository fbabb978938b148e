//! Contributor identities.

use uuid::Uuid;

/// Unique identifier for a mounted contributor.
///
/// Registries key their entries by plain strings so callers with a natural
/// key can use it directly. Contributors without one (a modal instance, a
/// measured element) generate a `ContributorId` once and reuse it for their
/// whole lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContributorId(Uuid);

impl ContributorId {
    /// Create a new unique contributor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContributorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContributorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContributorId> for String {
    fn from(id: ContributorId) -> Self {
        id.to_string()
    }
}
