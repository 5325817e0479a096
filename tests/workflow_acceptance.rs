//! End-to-end acceptance checks for the prototype workflow, driven through
//! the controller the way the renderer drives it.

use docuflow::egui_app::controller::DocuFlowController;
use docuflow::egui_app::state::{Screen, WorkspaceTab};
use docuflow::workflow::{
    DEMO_PASSWORD, DocumentId, DocumentStatus, DocumentStore, UserRole, fixtures,
};

fn controller() -> DocuFlowController {
    DocuFlowController::with_data(DocumentStore::demo(), fixtures::demo_users())
}

fn login(controller: &mut DocuFlowController, email: &str, password: &str) {
    controller.ui.login.email = email.into();
    controller.ui.login.password = password.into();
    controller.submit_login();
}

#[test]
fn known_email_and_demo_password_reach_the_role_dashboard() {
    for (email, role) in [
        ("marie@company.com", UserRole::Metadonneur),
        ("jean@company.com", UserRole::Annotateur),
        ("sophie@company.com", UserRole::Expert),
    ] {
        let mut controller = controller();
        login(&mut controller, email, DEMO_PASSWORD);
        assert_eq!(controller.ui.screen, Screen::Workspace, "screen for {email}");
        assert_eq!(controller.ui.active_tab, WorkspaceTab::Dashboard);
        assert_eq!(controller.current_user().map(|user| user.role), Some(role));
    }
}

#[test]
fn unknown_email_shows_the_error_and_stays_unauthenticated() {
    let mut controller = controller();
    login(&mut controller, "personne@company.com", DEMO_PASSWORD);
    assert_eq!(controller.ui.screen, Screen::Landing);
    assert_eq!(
        controller.ui.login.error.as_deref(),
        Some("Email ou mot de passe incorrect")
    );
    assert!(controller.current_user().is_none());
}

#[test]
fn wrong_password_shows_the_error_and_stays_unauthenticated() {
    let mut controller = controller();
    login(&mut controller, "marie@company.com", "password124");
    assert_eq!(controller.ui.screen, Screen::Landing);
    assert!(controller.current_user().is_none());
}

#[test]
fn role_filters_select_exactly_the_matching_statuses() {
    let store = DocumentStore::demo();
    let cases = [
        (
            UserRole::Metadonneur,
            [
                DocumentStatus::MetadataExtracted,
                DocumentStatus::MetadataValidated,
            ],
        ),
        (
            UserRole::Annotateur,
            [
                DocumentStatus::MetadataValidated,
                DocumentStatus::Annotated,
            ],
        ),
        (
            UserRole::Expert,
            [DocumentStatus::Annotated, DocumentStatus::ExpertValidated],
        ),
    ];
    for (role, statuses) in cases {
        let queue = store.work_queue(role);
        assert!(!queue.is_empty(), "empty queue for {role:?}");
        for doc in &queue {
            assert!(statuses.contains(&doc.status), "{:?} leaked into {role:?}", doc.status);
        }
        let expected = store
            .documents()
            .iter()
            .filter(|doc| statuses.contains(&doc.status))
            .count();
        assert_eq!(queue.len(), expected, "missing documents for {role:?}");
    }
}

#[test]
fn dashboard_queue_follows_the_logged_in_role() {
    let mut controller = controller();
    login(&mut controller, "jean@company.com", DEMO_PASSWORD);
    let ids: Vec<String> = controller
        .ui
        .dashboard
        .queue
        .iter()
        .map(|row| row.id.to_string())
        .collect();
    assert_eq!(ids, vec!["doc-001", "doc-002"]);
}

#[test]
fn nonexistent_document_id_renders_the_not_found_state_with_back() {
    let mut controller = controller();
    login(&mut controller, "jean@company.com", DEMO_PASSWORD);
    let missing = DocumentId::from_string("doc-404");
    controller.open_annotation_page(missing.clone());
    match &controller.ui.screen {
        Screen::Annotation { document } => {
            assert_eq!(document, &missing);
            assert!(controller.document(document).is_none());
        }
        other => panic!("expected annotation screen, got {other:?}"),
    }
    controller.close_annotation_page();
    assert_eq!(controller.ui.screen, Screen::Workspace);
}

#[test]
fn audit_toggle_exposes_three_most_recent_entries_descending() {
    let mut controller = controller();
    login(&mut controller, "sophie@company.com", DEMO_PASSWORD);
    let id = DocumentId::from_string("doc-005");
    assert!(!controller.expert_audit_expanded(&id));
    controller.toggle_expert_audit(&id);
    assert!(controller.expert_audit_expanded(&id));

    let rows = controller.recent_audit_rows(&id);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].action, "Validation experte");
    assert_eq!(rows[1].action, "Annotations validées");
    assert_eq!(rows[2].action, "Métadonnées validées");

    controller.toggle_expert_audit(&id);
    assert!(!controller.expert_audit_expanded(&id));
}

#[test]
fn audit_journal_is_flattened_and_sorted_newest_first() {
    let store = DocumentStore::demo();
    let records = store.audit_records();
    let total: usize = store
        .documents()
        .iter()
        .map(|doc| doc.audit_trail.len())
        .sum();
    assert_eq!(records.len(), total);
    for pair in records.windows(2) {
        assert!(pair[0].entry.timestamp >= pair[1].entry.timestamp);
    }
}

#[test]
fn metadata_edits_are_discarded_when_leaving_the_editor() {
    let mut controller = controller();
    login(&mut controller, "marie@company.com", DEMO_PASSWORD);
    controller.select_tab(WorkspaceTab::Metadata);
    let id = controller.ui.metadata.pending[0].id.clone();
    controller.open_metadata_editor(id.clone());
    assert_eq!(
        controller.ui.metadata.form.title,
        "Registration guide for UI and API users"
    );
    controller.ui.metadata.form.title = "Titre local".into();
    controller.close_metadata_editor();
    controller.open_metadata_editor(id);
    assert_eq!(
        controller.ui.metadata.form.title,
        "Registration guide for UI and API users"
    );
}
