//! Helpers to convert domain data into egui-facing view structs.
//!
//! Badge colors come from literal lookup tables; nothing is computed from an
//! underlying process.

use egui::Color32;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::egui_app::state::{AnnotationRowView, AuditRowView, ContentSegment, DocumentRowView};
use crate::workflow::{Annotation, AnnotationKind, AuditEntry, AuditRecord, Document, DocumentId, DocumentStatus};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");
const DATETIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

/// Format a timestamp as `15/01/2024`.
pub fn format_date(ts: OffsetDateTime) -> String {
    ts.format(DATE_FORMAT).unwrap_or_else(|_| "?".into())
}

/// Format a timestamp as `15/01/2024 14:20`.
pub fn format_datetime(ts: OffsetDateTime) -> String {
    ts.format(DATETIME_FORMAT).unwrap_or_else(|_| "?".into())
}

/// Confidence as a rounded percentage.
pub fn confidence_pct(confidence: f32) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Traffic-light text color for a confidence percentage.
pub fn confidence_color(pct: u8) -> Color32 {
    if pct >= 90 {
        Color32::from_rgb(120, 200, 150)
    } else if pct >= 70 {
        Color32::from_rgb(222, 190, 110)
    } else {
        Color32::from_rgb(224, 120, 110)
    }
}

/// Status badge (fill, text) pair from the literal status lookup table.
pub fn status_badge_colors(status: DocumentStatus) -> (Color32, Color32) {
    match status {
        DocumentStatus::Uploaded => (Color32::from_rgb(52, 54, 58), Color32::from_rgb(198, 202, 208)),
        DocumentStatus::MetadataExtracted => {
            (Color32::from_rgb(78, 64, 26), Color32::from_rgb(235, 202, 120))
        }
        DocumentStatus::MetadataValidated => {
            (Color32::from_rgb(30, 52, 84), Color32::from_rgb(140, 185, 255))
        }
        DocumentStatus::Annotated => (Color32::from_rgb(30, 66, 44), Color32::from_rgb(150, 215, 170)),
        DocumentStatus::ExpertValidated => {
            (Color32::from_rgb(56, 40, 80), Color32::from_rgb(200, 165, 255))
        }
        DocumentStatus::Completed => (Color32::from_rgb(30, 66, 44), Color32::from_rgb(150, 215, 170)),
    }
}

/// Context badge derived from the metadata category: Guideline and
/// commercial contracts read as "Pharmaceutique", internal reports as
/// "Technique", studies as "Biologie".
pub fn context_badge(category: Option<&str>) -> (&'static str, Color32, Color32) {
    match category {
        Some("Guideline") | Some("Contrat commercial") => (
            "Pharmaceutique",
            Color32::from_rgb(22, 66, 72),
            Color32::from_rgb(130, 215, 225),
        ),
        Some("Rapport interne") => (
            "Technique",
            Color32::from_rgb(56, 40, 80),
            Color32::from_rgb(200, 165, 255),
        ),
        Some("Rapport d'étude") => (
            "Biologie",
            Color32::from_rgb(30, 66, 44),
            Color32::from_rgb(150, 215, 170),
        ),
        _ => (
            "Général",
            Color32::from_rgb(52, 54, 58),
            Color32::from_rgb(198, 202, 208),
        ),
    }
}

/// Action badge colors from the literal contains-based lookup.
pub fn action_badge_colors(action: &str) -> (Color32, Color32) {
    if action.contains("uploadé") {
        (Color32::from_rgb(30, 52, 84), Color32::from_rgb(140, 185, 255))
    } else if action.contains("extraites") || action.contains("Extraction") {
        (Color32::from_rgb(78, 64, 26), Color32::from_rgb(235, 202, 120))
    } else if action.contains("validées") || action.contains("Validation") || action.contains("experte") {
        (Color32::from_rgb(30, 66, 44), Color32::from_rgb(150, 215, 170))
    } else if action.contains("corrigées") || action.contains("Correction") {
        (Color32::from_rgb(84, 52, 24), Color32::from_rgb(235, 170, 110))
    } else {
        (Color32::from_rgb(52, 54, 58), Color32::from_rgb(198, 202, 208))
    }
}

/// Highlight background for an annotated span, by kind.
pub fn kind_highlight(kind: AnnotationKind) -> Color32 {
    match kind {
        AnnotationKind::Entity => Color32::from_rgb(96, 82, 30),
        AnnotationKind::Concept => Color32::from_rgb(34, 62, 98),
        AnnotationKind::Relation => Color32::from_rgb(70, 48, 96),
    }
}

/// Convert a document into the row shared by the dashboards.
pub fn document_row(doc: &Document) -> DocumentRowView {
    let (status_fill, status_text) = status_badge_colors(doc.status);
    let (context_label, context_fill, context_text) =
        context_badge(doc.metadata.category.as_deref());
    DocumentRowView {
        id: doc.id.clone(),
        title: doc.display_title().to_string(),
        filename: doc.filename.clone(),
        short_id: doc.id.short().to_string(),
        uploaded_label: format_date(doc.uploaded_at),
        extracted_label: format_datetime(doc.metadata.extracted_at),
        status_label: doc.status.label(),
        status_fill,
        status_text,
        context_label,
        context_fill,
        context_text,
        category: doc.metadata.category.clone(),
        extension: doc.file_extension(),
        confidence_pct: confidence_pct(doc.metadata.extraction_confidence),
        author: doc.metadata.author.clone(),
        first_tag: doc.metadata.tags.first().cloned(),
    }
}

/// Convert an audit entry into a display row.
pub fn audit_row(document_name: &str, entry: &AuditEntry) -> AuditRowView {
    let (action_fill, action_text) = action_badge_colors(&entry.action);
    AuditRowView {
        document_name: document_name.to_string(),
        action: entry.action.clone(),
        action_fill,
        action_text,
        actor: entry.actor_name.clone(),
        timestamp_label: format_datetime(entry.timestamp),
        details: entry.details.clone(),
        previous_value: entry.previous_value.as_ref().map(|value| value.to_string()),
        new_value: entry.new_value.as_ref().map(|value| value.to_string()),
    }
}

/// Convert an annotation into the side-panel row.
pub fn annotation_row(annotation: &Annotation) -> AnnotationRowView {
    AnnotationRowView {
        id: annotation.id.clone(),
        text: annotation.text.clone(),
        kind_label: annotation.kind.label(),
        reviewed: annotation.is_reviewed(),
        confidence_pct: confidence_pct(annotation.confidence),
    }
}

/// Filter flattened audit records by fuzzy query and optional document.
///
/// An empty query matches everything; the query is matched against action,
/// actor name, and details together.
pub fn filter_audit_rows(
    records: &[AuditRecord<'_>],
    query: &str,
    document: Option<&DocumentId>,
) -> Vec<AuditRowView> {
    let matcher = SkimMatcherV2::default();
    let query = query.trim();
    records
        .iter()
        .filter(|record| document.is_none_or(|id| record.document_id == id))
        .filter(|record| {
            if query.is_empty() {
                return true;
            }
            let haystack = format!(
                "{} {} {}",
                record.entry.action, record.entry.actor_name, record.entry.details
            );
            matcher.fuzzy_match(&haystack, query).is_some()
        })
        .map(|record| audit_row(record.document_name, record.entry))
        .collect()
}

/// Split document content into plain and highlighted segments.
///
/// Spans are applied in start order; overlapping or malformed spans are
/// skipped rather than rendered twice.
pub fn content_segments(content: &str, annotations: &[Annotation]) -> Vec<ContentSegment> {
    let mut spans: Vec<&Annotation> = annotations.iter().collect();
    spans.sort_by_key(|ann| ann.start);

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for ann in spans {
        if ann.start < cursor {
            continue;
        }
        let Some(text) = ann.span_text(content) else {
            continue;
        };
        let start = ann.start.min(content.len());
        if start > cursor {
            if let Some(plain) = content.get(cursor..start) {
                segments.push(ContentSegment {
                    text: plain.to_string(),
                    highlight: None,
                });
            }
        }
        segments.push(ContentSegment {
            text: text.to_string(),
            highlight: Some(kind_highlight(ann.kind)),
        });
        cursor = start + text.len();
    }
    if cursor < content.len() {
        if let Some(rest) = content.get(cursor..) {
            segments.push(ContentSegment {
                text: rest.to_string(),
                highlight: None,
            });
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::DocumentStore;
    use time::macros::datetime;

    #[test]
    fn datetime_formatting_is_day_first() {
        let ts = datetime!(2024-01-15 14:20 UTC);
        assert_eq!(format_datetime(ts), "15/01/2024 14:20");
        assert_eq!(format_date(ts), "15/01/2024");
    }

    #[test]
    fn confidence_is_rounded_to_percent() {
        assert_eq!(confidence_pct(0.92), 92);
        assert_eq!(confidence_pct(0.005), 1);
        assert_eq!(confidence_pct(1.7), 100);
    }

    #[test]
    fn document_row_carries_badges_and_labels() {
        let store = DocumentStore::demo();
        let doc = store.documents().first().unwrap();
        let row = document_row(doc);
        assert_eq!(row.short_id, "001");
        assert_eq!(row.status_label, "Métadonnées validées");
        assert_eq!(row.context_label, "Pharmaceutique");
        assert_eq!(row.confidence_pct, 92);
        assert_eq!(row.extension.as_deref(), Some("PDF"));
    }

    #[test]
    fn audit_filter_empty_query_keeps_everything() {
        let store = DocumentStore::demo();
        let records = store.audit_records();
        let rows = filter_audit_rows(&records, "", None);
        assert_eq!(rows.len(), records.len());
    }

    #[test]
    fn audit_filter_restricts_to_one_document() {
        let store = DocumentStore::demo();
        let records = store.audit_records();
        let id = store.documents()[0].id.clone();
        let rows = filter_audit_rows(&records, "", Some(&id));
        assert_eq!(rows.len(), store.documents()[0].audit_trail.len());
        assert!(rows.iter().all(|row| row.document_name == "contrat_service_2024.pdf"));
    }

    #[test]
    fn audit_filter_matches_actor_names_fuzzily() {
        let store = DocumentStore::demo();
        let records = store.audit_records();
        let rows = filter_audit_rows(&records, "Sophie", None);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.actor.contains("Sophie")
            || row.details.contains("Sophie")
            || row.action.contains("Sophie")));
    }

    #[test]
    fn content_segments_reassemble_the_content() {
        let store = DocumentStore::demo();
        for doc in store.documents() {
            let segments = content_segments(&doc.content, &doc.annotations);
            let rebuilt: String = segments.iter().map(|seg| seg.text.as_str()).collect();
            assert_eq!(rebuilt, doc.content, "segments drift for {}", doc.id);
            let highlighted = segments.iter().filter(|seg| seg.highlight.is_some()).count();
            assert_eq!(highlighted, doc.annotations.len());
        }
    }

    #[test]
    fn content_segments_skip_overlapping_spans() {
        let store = DocumentStore::demo();
        let doc = store.documents().first().unwrap();
        let mut annotations = doc.annotations.clone();
        // Duplicate the first span; the copy overlaps and must be dropped.
        let mut duplicate = annotations[0].clone();
        duplicate.id = "ann-dup".into();
        duplicate.start += 1;
        annotations.push(duplicate);
        let segments = content_segments(&doc.content, &annotations);
        let rebuilt: String = segments.iter().map(|seg| seg.text.as_str()).collect();
        assert_eq!(rebuilt, doc.content);
    }
}
