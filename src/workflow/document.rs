//! Document model rendered by the role dashboards.
//!
//! These types mirror the fixture schema: a document carries one metadata
//! record, AI-suggested annotations over its content, and an audit trail.
//! Nothing here enforces workflow invariants; the prototype renders whatever
//! the fixtures contain.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::DocumentId;

/// Lifecycle steps a document moves through in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Uploaded,
    MetadataExtracted,
    MetadataValidated,
    Annotated,
    ExpertValidated,
    Completed,
}

impl DocumentStatus {
    /// Display label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "Uploadé",
            DocumentStatus::MetadataExtracted => "Métadonnées extraites",
            DocumentStatus::MetadataValidated => "Métadonnées validées",
            DocumentStatus::Annotated => "Annoté",
            DocumentStatus::ExpertValidated => "Validé par expert",
            DocumentStatus::Completed => "Terminé",
        }
    }

    /// Whether the document has finished the workflow.
    pub fn is_terminal(self) -> bool {
        matches!(self, DocumentStatus::Completed)
    }
}

/// Metadata attached to a document by the mock extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Confidence score reported by the mock extractor (0.0-1.0).
    pub extraction_confidence: f32,
    #[serde(default)]
    pub validated_by: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub validated_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub extracted_at: OffsetDateTime,
}

/// Kind tag carried by a text annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Entity,
    Concept,
    Relation,
}

impl AnnotationKind {
    /// Display label for annotation badges.
    pub fn label(self) -> &'static str {
        match self {
            AnnotationKind::Entity => "Entité",
            AnnotationKind::Concept => "Concept",
            AnnotationKind::Relation => "Relation",
        }
    }
}

/// AI-suggested span over the document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    /// Annotated text as authored in the fixture.
    pub text: String,
    /// Start byte offset into the document content.
    pub start: usize,
    /// End byte offset into the document content (exclusive).
    pub end: usize,
    pub kind: AnnotationKind,
    pub confidence: f32,
    pub ai_generated: bool,
    #[serde(default)]
    pub validated_by: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub validated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub corrected_by: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub corrected_at: Option<OffsetDateTime>,
}

impl Annotation {
    /// Whether a human has signed off on this annotation.
    pub fn is_reviewed(&self) -> bool {
        self.validated_by.is_some() || self.corrected_by.is_some()
    }

    /// Slice the annotated span out of `content`.
    ///
    /// Offsets come straight from the fixtures, so they are clamped to the
    /// content length and nudged to char boundaries; a malformed span yields
    /// `None` instead of panicking.
    pub fn span_text<'a>(&self, content: &'a str) -> Option<&'a str> {
        if self.start >= self.end {
            return None;
        }
        let start = floor_char_boundary(content, self.start.min(content.len()));
        let end = floor_char_boundary(content, self.end.min(content.len()));
        if start >= end {
            return None;
        }
        content.get(start..end)
    }
}

/// Largest char boundary less than or equal to `index`.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// One recorded action in a document's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    /// Action label, e.g. "Métadonnées validées".
    pub action: String,
    pub actor_id: String,
    pub actor_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub details: String,
    #[serde(default)]
    pub previous_value: Option<serde_json::Value>,
    #[serde(default)]
    pub new_value: Option<serde_json::Value>,
}

/// A document and everything the prototype knows about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
    pub status: DocumentStatus,
    pub content: String,
    pub metadata: DocumentMetadata,
    pub annotations: Vec<Annotation>,
    pub audit_trail: Vec<AuditEntry>,
}

impl Document {
    /// Metadata title when present, filename otherwise.
    pub fn display_title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or(&self.filename)
    }

    /// Uppercased filename extension, if any.
    pub fn file_extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(start: usize, end: usize) -> Annotation {
        Annotation {
            id: "ann-test".into(),
            text: String::new(),
            start,
            end,
            kind: AnnotationKind::Entity,
            confidence: 0.5,
            ai_generated: true,
            validated_by: None,
            validated_at: None,
            corrected_by: None,
            corrected_at: None,
        }
    }

    #[test]
    fn span_text_slices_exact_range() {
        let content = "société Alpha";
        // "société " is 10 bytes; the span covers "Alpha".
        let ann = annotation(10, 15);
        assert_eq!(ann.span_text(content), Some("Alpha"));
    }

    #[test]
    fn span_text_clamps_past_end() {
        let ann = annotation(4, 999);
        assert_eq!(ann.span_text("long texte"), Some(" texte"));
    }

    #[test]
    fn span_text_rejects_inverted_range() {
        let ann = annotation(10, 4);
        assert_eq!(ann.span_text("long texte"), None);
    }

    #[test]
    fn span_text_nudges_to_char_boundary() {
        // Byte 1 falls inside the two-byte 'é'.
        let ann = annotation(1, 3);
        assert_eq!(ann.span_text("été"), Some("ét"));
    }

    #[test]
    fn display_title_falls_back_to_filename() {
        let docs = super::super::fixtures::demo_documents();
        let uploaded = docs
            .iter()
            .find(|doc| doc.status == DocumentStatus::Uploaded)
            .unwrap();
        assert_eq!(uploaded.display_title(), uploaded.filename);
    }

    #[test]
    fn file_extension_is_uppercased() {
        let docs = super::super::fixtures::demo_documents();
        assert_eq!(docs[0].file_extension().as_deref(), Some("PDF"));
    }
}
