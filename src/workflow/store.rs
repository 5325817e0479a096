//! Read-only access to the fixture corpus with the workflow queries the
//! dashboards need: role work queues, corpus stats, and audit views.

use super::document::{AuditEntry, Document, DocumentStatus};
use super::{DocumentId, UserRole, fixtures};

/// How many audit entries the inline "recent history" panels show.
pub const RECENT_AUDIT_LIMIT: usize = 3;

/// Corpus counters for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Audit entry joined with the document it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct AuditRecord<'a> {
    pub document_id: &'a DocumentId,
    pub document_name: &'a str,
    pub entry: &'a AuditEntry,
}

/// In-memory document collection; the sole "datastore" of the prototype.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Wrap an explicit document list (used by tests).
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Store over the built-in demo corpus.
    pub fn demo() -> Self {
        Self::new(fixtures::demo_documents())
    }

    /// All documents in fixture order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up one document by id.
    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    /// Statuses a role is expected to act on.
    pub fn queue_statuses(role: UserRole) -> [DocumentStatus; 2] {
        match role {
            UserRole::Metadonneur => [
                DocumentStatus::MetadataExtracted,
                DocumentStatus::MetadataValidated,
            ],
            UserRole::Annotateur => {
                [DocumentStatus::MetadataValidated, DocumentStatus::Annotated]
            }
            UserRole::Expert => [DocumentStatus::Annotated, DocumentStatus::ExpertValidated],
        }
    }

    /// Documents whose status falls in the role's queue, in fixture order.
    pub fn work_queue(&self, role: UserRole) -> Vec<&Document> {
        let statuses = Self::queue_statuses(role);
        self.documents
            .iter()
            .filter(|doc| statuses.contains(&doc.status))
            .collect()
    }

    /// Counters for the dashboard stat cards.
    pub fn stats(&self) -> CorpusStats {
        let total = self.documents.len();
        let completed = self
            .documents
            .iter()
            .filter(|doc| doc.status.is_terminal())
            .count();
        CorpusStats {
            total,
            pending: total - completed,
            completed,
        }
    }

    /// Every audit entry across the corpus, newest first.
    pub fn audit_records(&self) -> Vec<AuditRecord<'_>> {
        let mut records: Vec<AuditRecord<'_>> = self
            .documents
            .iter()
            .flat_map(|doc| {
                doc.audit_trail.iter().map(move |entry| AuditRecord {
                    document_id: &doc.id,
                    document_name: &doc.filename,
                    entry,
                })
            })
            .collect();
        records.sort_by(|a, b| b.entry.timestamp.cmp(&a.entry.timestamp));
        records
    }

    /// The most recent audit entries for one document, newest first.
    ///
    /// Sorts before truncating so the newest entries survive regardless of
    /// fixture order.
    pub fn recent_audit_entries(doc: &Document, limit: usize) -> Vec<&AuditEntry> {
        let mut entries: Vec<&AuditEntry> = doc.audit_trail.iter().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn ids(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|doc| doc.id.to_string()).collect()
    }

    #[test]
    fn metadonneur_queue_matches_status_predicate() {
        let store = DocumentStore::demo();
        assert_eq!(
            ids(&store.work_queue(UserRole::Metadonneur)),
            vec!["doc-001", "doc-003"]
        );
    }

    #[test]
    fn annotateur_queue_matches_status_predicate() {
        let store = DocumentStore::demo();
        assert_eq!(
            ids(&store.work_queue(UserRole::Annotateur)),
            vec!["doc-001", "doc-002"]
        );
    }

    #[test]
    fn expert_queue_matches_status_predicate() {
        let store = DocumentStore::demo();
        assert_eq!(
            ids(&store.work_queue(UserRole::Expert)),
            vec!["doc-002", "doc-005"]
        );
    }

    #[test]
    fn stats_split_pending_and_completed() {
        let store = DocumentStore::demo();
        let stats = store.stats();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 5);
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let store = DocumentStore::demo();
        assert!(store.document(&DocumentId::from_string("doc-999")).is_none());
    }

    #[test]
    fn audit_records_are_sorted_newest_first() {
        let store = DocumentStore::demo();
        let records = store.audit_records();
        assert!(!records.is_empty());
        for pair in records.windows(2) {
            assert!(pair[0].entry.timestamp >= pair[1].entry.timestamp);
        }
    }

    #[test]
    fn recent_audit_sorts_before_truncating() {
        // Oldest entries first in the fixture; the newest three must win.
        let mut doc = fixtures::demo_documents().remove(5);
        assert!(doc.audit_trail.len() > RECENT_AUDIT_LIMIT);
        doc.audit_trail.sort_by_key(|entry| entry.timestamp);
        let recent = DocumentStore::recent_audit_entries(&doc, RECENT_AUDIT_LIMIT);
        assert_eq!(recent.len(), RECENT_AUDIT_LIMIT);
        assert_eq!(recent[0].timestamp, datetime!(2024-01-11 09:51 UTC));
        assert!(recent[0].timestamp >= recent[1].timestamp);
        assert!(recent[1].timestamp >= recent[2].timestamp);
    }
}
