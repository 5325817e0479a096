//! Shared state types for the egui UI.
//!
//! Everything here is render-friendly: plain strings, resolved colors, and
//! precomputed row views the renderer can iterate without touching the
//! domain layer.

use egui::Color32;

use crate::workflow::{CorpusStats, DocumentId, UserRole};

/// Screens the app can display.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// Marketing landing page with the login card.
    Landing,
    /// Role workspace with the tab bar.
    Workspace,
    /// Full-screen annotation page for one document.
    ///
    /// The id may point at nothing; the renderer then shows the
    /// "Document non trouvé" fallback.
    Annotation { document: DocumentId },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Landing
    }
}

/// Tabs offered inside the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkspaceTab {
    Dashboard,
    Metadata,
    Annotation,
    Validation,
    Audit,
}

impl WorkspaceTab {
    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            WorkspaceTab::Dashboard => "Tableau de bord",
            WorkspaceTab::Metadata => "Validation Métadonnées",
            WorkspaceTab::Annotation => "Annotation & Correction",
            WorkspaceTab::Validation => "Validation Finale",
            WorkspaceTab::Audit => "Audit & Traçabilité",
        }
    }

    /// Tabs offered for a role; the dashboard always comes first.
    pub fn for_role(role: UserRole) -> Vec<WorkspaceTab> {
        match role {
            UserRole::Metadonneur => vec![WorkspaceTab::Dashboard, WorkspaceTab::Metadata],
            UserRole::Annotateur => vec![WorkspaceTab::Dashboard, WorkspaceTab::Annotation],
            UserRole::Expert => vec![
                WorkspaceTab::Dashboard,
                WorkspaceTab::Validation,
                WorkspaceTab::Audit,
            ],
        }
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub screen: Screen,
    pub active_tab: WorkspaceTab,
    pub status: StatusBarState,
    pub login: LoginFormState,
    pub dashboard: DashboardState,
    pub metadata: MetadataPanelState,
    pub annotation_table: AnnotationTableState,
    pub expert: ExpertPanelState,
    pub audit: AuditPanelState,
    pub annotation_page: AnnotationPageState,
}

impl Default for WorkspaceTab {
    fn default() -> Self {
        WorkspaceTab::Dashboard
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status before anyone logs in.
    pub fn idle() -> Self {
        Self {
            text: "Connectez-vous avec un compte de démonstration".into(),
            badge_label: "Prêt".into(),
            badge_color: Color32::from_rgb(42, 42, 42),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Landing-page login card state.
#[derive(Clone, Debug)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    /// Login failure message, shown under the form.
    pub error: Option<String>,
    pub show_demo_accounts: bool,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            show_demo_accounts: true,
        }
    }
}

/// Dashboard stat cards and the role work queue.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stats: CorpusStats,
    pub queue: Vec<DocumentRowView>,
}

/// Metadata validation list + editor state.
#[derive(Clone, Debug, Default)]
pub struct MetadataPanelState {
    /// Documents awaiting metadata validation.
    pub pending: Vec<DocumentRowView>,
    /// Document currently open in the editor.
    pub selected: Option<DocumentId>,
    pub form: MetadataFormState,
}

/// Local form fields for the metadata editor.
///
/// Pre-filled with hard-coded example values; edits are discarded when the
/// editor is closed.
#[derive(Clone, Debug, Default)]
pub struct MetadataFormState {
    pub title: String,
    pub document_type: String,
    pub document_context: String,
    pub language: String,
    pub publication_date: String,
    pub source: String,
    pub version: String,
    pub source_url: String,
}

impl MetadataFormState {
    /// The example values the prototype pre-fills on selection.
    pub fn example() -> Self {
        Self {
            title: "Registration guide for UI and API users".into(),
            document_type: "Guideline".into(),
            document_context: "Réglementation pharmaceutique".into(),
            language: "Anglais".into(),
            publication_date: "06/05/2025".into(),
            source: "EMA".into(),
            version: String::new(),
            source_url: "https://www.ema.europa.eu/en/documents/ot".into(),
        }
    }
}

/// Annotation dashboard table state.
#[derive(Clone, Debug, Default)]
pub struct AnnotationTableState {
    pub rows: Vec<DocumentRowView>,
}

/// Expert validation table state.
#[derive(Clone, Debug, Default)]
pub struct ExpertPanelState {
    pub rows: Vec<DocumentRowView>,
    /// Documents whose inline audit history is expanded.
    pub expanded_audit: Vec<DocumentId>,
}

/// Audit trail filters and the filtered rows.
#[derive(Clone, Debug, Default)]
pub struct AuditPanelState {
    pub search_query: String,
    /// `None` means "Tous les documents".
    pub document_filter: Option<DocumentId>,
    pub rows: Vec<AuditRowView>,
}

/// Annotation page local toggles.
#[derive(Clone, Debug, Default)]
pub struct AnnotationPageState {
    pub show_audit: bool,
}

/// Render-friendly document row shared by the dashboards.
#[derive(Clone, Debug)]
pub struct DocumentRowView {
    pub id: DocumentId,
    pub title: String,
    pub filename: String,
    pub short_id: String,
    pub uploaded_label: String,
    pub extracted_label: String,
    pub status_label: &'static str,
    pub status_fill: Color32,
    pub status_text: Color32,
    pub context_label: &'static str,
    pub context_fill: Color32,
    pub context_text: Color32,
    pub category: Option<String>,
    pub extension: Option<String>,
    pub confidence_pct: u8,
    pub author: Option<String>,
    pub first_tag: Option<String>,
}

/// Render-friendly audit row.
#[derive(Clone, Debug)]
pub struct AuditRowView {
    pub document_name: String,
    pub action: String,
    pub action_fill: Color32,
    pub action_text: Color32,
    pub actor: String,
    pub timestamp_label: String,
    pub details: String,
    pub previous_value: Option<String>,
    pub new_value: Option<String>,
}

/// Render-friendly annotation row for the annotation page side panel.
#[derive(Clone, Debug)]
pub struct AnnotationRowView {
    pub id: String,
    pub text: String,
    pub kind_label: &'static str,
    pub reviewed: bool,
    pub confidence_pct: u8,
}

/// Piece of document content, optionally carrying an annotation highlight.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentSegment {
    pub text: String,
    /// Background color when the segment is an annotated span.
    pub highlight: Option<Color32>,
}
