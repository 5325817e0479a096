use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod document;
pub mod fixtures;
pub mod session;
pub mod settings;
pub mod store;

pub use document::{
    Annotation, AnnotationKind, AuditEntry, Document, DocumentMetadata, DocumentStatus,
};
pub use session::{AuthError, DEMO_PASSWORD, Session};
pub use store::{AuditRecord, CorpusStats, DocumentStore};

/// Identifier for a document in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new unique document identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rehydrate a document identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short display form: the fragment after the last dash (`doc-001` -> `001`).
    pub fn short(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or(&self.0)
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a mock user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new unique user identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rehydrate a user identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow role granted to a mock user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Validates auto-extracted document metadata.
    Metadonneur,
    /// Corrects AI-suggested text annotations.
    Annotateur,
    /// Performs final validation of annotated documents.
    Expert,
}

impl UserRole {
    /// Display label shown next to the user name.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Metadonneur => "Métadonneur",
            UserRole::Annotateur => "Annotateur",
            UserRole::Expert => "Expert métier",
        }
    }
}

/// Mock user account offered on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_strips_prefix() {
        let id = DocumentId::from_string("doc-001");
        assert_eq!(id.short(), "001");
    }

    #[test]
    fn short_id_without_dash_returns_whole() {
        let id = DocumentId::from_string("standalone");
        assert_eq!(id.short(), "standalone");
    }

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(DocumentId::new(), DocumentId::new());
    }
}
