//! Controller bridging the mock workflow to the egui renderer.
//!
//! Owns the session, the fixture store, and the render-friendly `UiState`.
//! Mutating actions exist only as tracing events and status-bar notices; the
//! corpus itself is read-only.

use egui::Color32;
use tracing::{info, warn};

use crate::egui_app::state::*;
use crate::egui_app::view_model;
use crate::workflow::{
    Document, DocumentId, DocumentStore, Session, User, UserRole, fixtures, settings,
    store::RECENT_AUDIT_LIMIT,
};

/// Maintains app state and bridges the workflow domain to the egui UI.
pub struct DocuFlowController {
    pub ui: UiState,
    store: DocumentStore,
    users: Vec<User>,
    session: Session,
    settings: settings::AppSettings,
    /// Whether settings changes are written back to disk.
    persist_settings: bool,
}

impl DocuFlowController {
    /// Controller over the built-in demo corpus, persisting settings.
    pub fn new() -> Self {
        let mut controller = Self::with_data(DocumentStore::demo(), fixtures::demo_users());
        controller.persist_settings = true;
        controller
    }

    /// Controller over explicit data; settings stay in memory (used by tests).
    pub fn with_data(store: DocumentStore, users: Vec<User>) -> Self {
        Self {
            ui: UiState::default(),
            store,
            users,
            session: Session::new(),
            settings: settings::AppSettings::default(),
            persist_settings: false,
        }
    }

    /// Load persisted settings and populate initial UI state.
    ///
    /// Failures fall back to defaults so a corrupt file never blocks startup.
    pub fn load_settings(&mut self) {
        match settings::load_or_default() {
            Ok(loaded) => {
                if let Some(email) = &loaded.remembered_email {
                    self.ui.login.email = email.clone();
                }
                self.ui.login.show_demo_accounts = loaded.ui.show_demo_accounts;
                self.settings = loaded;
            }
            Err(err) => {
                warn!("Failed to load settings: {err}");
                self.set_status(
                    "Paramètres illisibles, valeurs par défaut utilisées".into(),
                    StatusTone::Warning,
                );
            }
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Look up a document for the annotation page; `None` drives the
    /// "Document non trouvé" fallback.
    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.store.document(id)
    }

    /// Attempt login with the landing-form credentials.
    pub fn submit_login(&mut self) {
        let email = self.ui.login.email.clone();
        let password = self.ui.login.password.clone();
        match self.session.login(&self.users, &email, &password) {
            Ok(user) => {
                self.ui.login.password.clear();
                self.ui.login.error = None;
                self.ui.screen = Screen::Workspace;
                self.ui.active_tab = WorkspaceTab::Dashboard;
                self.remember_email(email.trim());
                self.refresh_views();
                if self.settings.ui.expand_expert_audit && user.role == UserRole::Expert {
                    self.ui.expert.expanded_audit =
                        self.ui.expert.rows.iter().map(|row| row.id.clone()).collect();
                }
                self.set_status(
                    format!("Connecté en tant que {} ({})", user.name, user.role.label()),
                    StatusTone::Info,
                );
            }
            Err(err) => {
                self.ui.login.error = Some(err.to_string());
                self.set_status("Connexion refusée".into(), StatusTone::Error);
            }
        }
    }

    /// Clear the session and return to the landing page.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.logout() {
            info!(email = %user.email, "logout");
        }
        let remembered = self.settings.remembered_email.clone();
        self.ui = UiState::default();
        if let Some(email) = remembered {
            self.ui.login.email = email;
        }
        self.ui.login.show_demo_accounts = self.settings.ui.show_demo_accounts;
        self.set_status("Déconnecté".into(), StatusTone::Idle);
    }

    /// Tabs offered to the active user; empty while unauthenticated.
    pub fn tabs(&self) -> Vec<WorkspaceTab> {
        self.current_user()
            .map(|user| WorkspaceTab::for_role(user.role))
            .unwrap_or_default()
    }

    /// Switch workspace tabs; any open editor is discarded.
    pub fn select_tab(&mut self, tab: WorkspaceTab) {
        if self.ui.active_tab == tab {
            return;
        }
        self.ui.active_tab = tab;
        self.ui.metadata.selected = None;
        self.ui.metadata.form = MetadataFormState::default();
        self.refresh_views();
    }

    /// Open the full-screen annotation page for a document id.
    pub fn open_annotation_page(&mut self, id: DocumentId) {
        if self.store.document(&id).is_none() {
            warn!(document = %id, "annotation page requested for unknown document");
        }
        self.ui.annotation_page = AnnotationPageState::default();
        self.ui.screen = Screen::Annotation { document: id };
    }

    /// Back action from the annotation page.
    pub fn close_annotation_page(&mut self) {
        self.ui.screen = if self.session.is_authenticated() {
            Screen::Workspace
        } else {
            Screen::Landing
        };
    }

    pub fn toggle_annotation_audit(&mut self) {
        self.ui.annotation_page.show_audit = !self.ui.annotation_page.show_audit;
    }

    /// Open the metadata editor pre-filled with the example values.
    pub fn open_metadata_editor(&mut self, id: DocumentId) {
        self.ui.metadata.selected = Some(id);
        self.ui.metadata.form = MetadataFormState::example();
    }

    /// Leave the metadata editor; local edits are discarded.
    pub fn close_metadata_editor(&mut self) {
        self.ui.metadata.selected = None;
        self.ui.metadata.form = MetadataFormState::default();
    }

    /// "Sauvegarder" in the metadata editor: a demo no-op.
    pub fn save_metadata(&mut self) {
        if let Some(id) = &self.ui.metadata.selected {
            info!(document = %id, title = %self.ui.metadata.form.title,
                "metadata save requested (demo, nothing persisted)");
        }
        self.set_status(
            "Métadonnées enregistrées (démo : aucune donnée persistée)".into(),
            StatusTone::Info,
        );
    }

    /// "Réextraire" in the metadata editor: a demo no-op.
    pub fn reextract_metadata(&mut self) {
        if let Some(id) = &self.ui.metadata.selected {
            info!(document = %id, "re-extraction requested (demo, nothing runs)");
        }
        self.set_status("Réextraction simulée".into(), StatusTone::Info);
    }

    /// Accept one AI suggestion; only logged.
    pub fn validate_annotation(&mut self, document: &DocumentId, annotation_id: &str) {
        info!(document = %document, annotation = annotation_id, "annotation validated (demo)");
        self.set_status(format!("Annotation {annotation_id} validée"), StatusTone::Info);
    }

    /// Reject one AI suggestion; only logged.
    pub fn reject_annotation(&mut self, document: &DocumentId, annotation_id: &str) {
        info!(document = %document, annotation = annotation_id, "annotation rejected (demo)");
        self.set_status(format!("Annotation {annotation_id} rejetée"), StatusTone::Info);
    }

    /// "Valider les annotations" on the annotation page; only logged.
    pub fn validate_all_annotations(&mut self, document: &DocumentId) {
        info!(document = %document, "bulk annotation validation (demo)");
        self.set_status("Annotations validées (démo)".into(), StatusTone::Info);
    }

    /// "Exporter" on the annotation page; only logged.
    pub fn export_annotations(&mut self, document: &DocumentId) {
        info!(document = %document, "annotation export requested (demo)");
        self.set_status("Export simulé".into(), StatusTone::Info);
    }

    /// Expand or collapse the inline audit history of an expert-table row.
    pub fn toggle_expert_audit(&mut self, id: &DocumentId) {
        if let Some(position) = self.ui.expert.expanded_audit.iter().position(|d| d == id) {
            self.ui.expert.expanded_audit.remove(position);
        } else {
            self.ui.expert.expanded_audit.push(id.clone());
        }
    }

    pub fn expert_audit_expanded(&self, id: &DocumentId) -> bool {
        self.ui.expert.expanded_audit.iter().any(|d| d == id)
    }

    /// Three most recent audit rows for a document, newest first.
    pub fn recent_audit_rows(&self, id: &DocumentId) -> Vec<AuditRowView> {
        let Some(doc) = self.store.document(id) else {
            return Vec::new();
        };
        DocumentStore::recent_audit_entries(doc, RECENT_AUDIT_LIMIT)
            .into_iter()
            .map(|entry| view_model::audit_row(&doc.filename, entry))
            .collect()
    }

    /// Options for the audit document selector.
    pub fn document_filter_options(&self) -> Vec<(DocumentId, String)> {
        self.store
            .documents()
            .iter()
            .map(|doc| (doc.id.clone(), doc.filename.clone()))
            .collect()
    }

    pub fn set_audit_document_filter(&mut self, filter: Option<DocumentId>) {
        self.ui.audit.document_filter = filter;
        self.refresh_audit();
    }

    /// Re-run the audit filter after the query or selector changed.
    pub fn refresh_audit(&mut self) {
        let records = self.store.audit_records();
        self.ui.audit.rows = view_model::filter_audit_rows(
            &records,
            &self.ui.audit.search_query,
            self.ui.audit.document_filter.as_ref(),
        );
    }

    /// Rebuild every row view from the store for the active role.
    fn refresh_views(&mut self) {
        self.ui.dashboard.stats = self.store.stats();
        self.ui.dashboard.queue = self
            .current_user()
            .map(|user| {
                self.store
                    .work_queue(user.role)
                    .into_iter()
                    .map(view_model::document_row)
                    .collect()
            })
            .unwrap_or_default();
        self.ui.metadata.pending = self
            .store
            .work_queue(UserRole::Metadonneur)
            .into_iter()
            .map(view_model::document_row)
            .collect();
        self.ui.annotation_table.rows = self
            .store
            .work_queue(UserRole::Annotateur)
            .into_iter()
            .map(view_model::document_row)
            .collect();
        self.ui.expert.rows = self
            .store
            .work_queue(UserRole::Expert)
            .into_iter()
            .map(view_model::document_row)
            .collect();
        self.refresh_audit();
    }

    fn remember_email(&mut self, email: &str) {
        self.settings.remembered_email = Some(email.to_string());
        if !self.persist_settings {
            return;
        }
        if let Err(err) = settings::save(&self.settings) {
            warn!("Failed to persist settings: {err}");
        }
    }

    /// Update the footer status line.
    pub fn set_status(&mut self, text: String, tone: StatusTone) {
        let (badge_label, badge_color) = status_badge(tone);
        self.ui.status = StatusBarState {
            text,
            badge_label,
            badge_color,
        };
    }
}

impl Default for DocuFlowController {
    fn default() -> Self {
        Self::with_data(DocumentStore::demo(), fixtures::demo_users())
    }
}

/// Badge tone for the footer status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Prêt".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Attention".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Erreur".into(), Color32::from_rgb(192, 57, 43)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::DEMO_PASSWORD;

    fn demo_controller() -> DocuFlowController {
        DocuFlowController::with_data(DocumentStore::demo(), fixtures::demo_users())
    }

    fn login_as(controller: &mut DocuFlowController, email: &str) {
        controller.ui.login.email = email.into();
        controller.ui.login.password = DEMO_PASSWORD.into();
        controller.submit_login();
    }

    #[test]
    fn successful_login_lands_on_dashboard() {
        let mut controller = demo_controller();
        login_as(&mut controller, "marie@company.com");
        assert_eq!(controller.ui.screen, Screen::Workspace);
        assert_eq!(controller.ui.active_tab, WorkspaceTab::Dashboard);
        assert_eq!(
            controller.current_user().map(|user| user.role),
            Some(UserRole::Metadonneur)
        );
        assert!(controller.ui.login.password.is_empty());
        assert_eq!(controller.ui.dashboard.stats.total, 6);
        assert_eq!(controller.ui.dashboard.queue.len(), 2);
    }

    #[test]
    fn failed_login_shows_error_and_stays_on_landing() {
        let mut controller = demo_controller();
        controller.ui.login.email = "marie@company.com".into();
        controller.ui.login.password = "motdepasse".into();
        controller.submit_login();
        assert_eq!(controller.ui.screen, Screen::Landing);
        assert_eq!(
            controller.ui.login.error.as_deref(),
            Some("Email ou mot de passe incorrect")
        );
        assert!(controller.current_user().is_none());
    }

    #[test]
    fn tabs_follow_the_active_role() {
        let mut controller = demo_controller();
        assert!(controller.tabs().is_empty());
        login_as(&mut controller, "sophie@company.com");
        assert_eq!(
            controller.tabs(),
            vec![
                WorkspaceTab::Dashboard,
                WorkspaceTab::Validation,
                WorkspaceTab::Audit
            ]
        );
    }

    #[test]
    fn switching_tabs_discards_the_metadata_editor() {
        let mut controller = demo_controller();
        login_as(&mut controller, "marie@company.com");
        controller.select_tab(WorkspaceTab::Metadata);
        let id = controller.ui.metadata.pending[0].id.clone();
        controller.open_metadata_editor(id);
        controller.ui.metadata.form.title = "Titre modifié localement".into();
        controller.select_tab(WorkspaceTab::Dashboard);
        controller.select_tab(WorkspaceTab::Metadata);
        assert!(controller.ui.metadata.selected.is_none());
        assert!(controller.ui.metadata.form.title.is_empty());
    }

    #[test]
    fn unknown_document_id_still_opens_the_annotation_screen() {
        let mut controller = demo_controller();
        login_as(&mut controller, "jean@company.com");
        let missing = DocumentId::from_string("doc-999");
        controller.open_annotation_page(missing.clone());
        assert_eq!(
            controller.ui.screen,
            Screen::Annotation { document: missing.clone() }
        );
        assert!(controller.document(&missing).is_none());
        controller.close_annotation_page();
        assert_eq!(controller.ui.screen, Screen::Workspace);
    }

    #[test]
    fn back_from_annotation_without_session_returns_to_landing() {
        let mut controller = demo_controller();
        controller.open_annotation_page(DocumentId::from_string("doc-001"));
        controller.close_annotation_page();
        assert_eq!(controller.ui.screen, Screen::Landing);
    }

    #[test]
    fn expert_audit_toggle_flips_per_document() {
        let mut controller = demo_controller();
        login_as(&mut controller, "sophie@company.com");
        let id = controller.ui.expert.rows[0].id.clone();
        assert!(!controller.expert_audit_expanded(&id));
        controller.toggle_expert_audit(&id);
        assert!(controller.expert_audit_expanded(&id));
        controller.toggle_expert_audit(&id);
        assert!(!controller.expert_audit_expanded(&id));
    }

    #[test]
    fn recent_audit_rows_are_capped_and_newest_first() {
        let controller = demo_controller();
        let rows = controller.recent_audit_rows(&DocumentId::from_string("doc-006"));
        assert_eq!(rows.len(), RECENT_AUDIT_LIMIT);
        assert_eq!(rows[0].action, "Traitement terminé");
    }

    #[test]
    fn audit_query_filters_rows() {
        let mut controller = demo_controller();
        login_as(&mut controller, "sophie@company.com");
        let all = controller.ui.audit.rows.len();
        controller.ui.audit.search_query = "Correction".into();
        controller.refresh_audit();
        assert!(controller.ui.audit.rows.len() < all);
        assert!(!controller.ui.audit.rows.is_empty());
    }

    #[test]
    fn audit_document_filter_restricts_rows() {
        let mut controller = demo_controller();
        login_as(&mut controller, "sophie@company.com");
        controller.set_audit_document_filter(Some(DocumentId::from_string("doc-004")));
        assert_eq!(controller.ui.audit.rows.len(), 1);
        assert_eq!(
            controller.ui.audit.rows[0].document_name,
            "normes_securite_informatique.pdf"
        );
    }

    #[test]
    fn logout_returns_to_landing_and_keeps_remembered_email() {
        let mut controller = demo_controller();
        login_as(&mut controller, "marie@company.com");
        controller.logout();
        assert_eq!(controller.ui.screen, Screen::Landing);
        assert!(controller.current_user().is_none());
        assert_eq!(controller.ui.login.email, "marie@company.com");
    }
}
