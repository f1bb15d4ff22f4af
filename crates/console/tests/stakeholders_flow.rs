//! Stakeholders page against the stub API: typed role payloads and the
//! confirm-gated delete.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{serve, StubState};
use cr_console::pages::StakeholdersPage;
use domain::models::Role;

fn router(state: Arc<StubState>) -> Router {
    async fn list(State(state): State<Arc<StubState>>) -> Json<Value> {
        state.list_calls.fetch_add(1, Ordering::SeqCst);
        Json(json!([
            {"id": 1, "name": "A. Menon", "role": "Developer"},
            {"id": 2, "name": "B. Das", "role": "BA"}
        ]))
    }

    async fn create(
        State(state): State<Arc<StubState>>,
        Json(body): Json<Value>,
    ) -> axum::response::Response {
        *state.captured_body.lock().unwrap() = Some(body);
        (
            StatusCode::CREATED,
            Json(json!({"message": "Stakeholder added successfully", "id": 3})),
        )
            .into_response()
    }

    async fn remove(
        State(state): State<Arc<StubState>>,
        Path(_id): Path<i64>,
    ) -> Json<Value> {
        state.delete_calls.fetch_add(1, Ordering::SeqCst);
        Json(json!({"message": "Stakeholder deleted successfully"}))
    }

    Router::new()
        .route("/api/stakeholders", get(list).post(create))
        .route("/api/stakeholders/:id", axum::routing::delete(remove))
        .with_state(state)
}

#[tokio::test]
async fn test_create_serializes_role_as_api_string() {
    let state = StubState::new();
    let gateway = serve(router(state.clone())).await;
    let mut page = StakeholdersPage::new(gateway);

    page.form.draft_mut().name = "C. Fernandes".to_string();
    page.form.draft_mut().role = Some(Role::Tester);
    assert!(page.submit_form().await);

    let body = state.captured_body.lock().unwrap().clone().expect("POST body");
    assert_eq!(body["name"], "C. Fernandes");
    assert_eq!(body["role"], "Tester");
    assert_eq!(
        page.message_box.message(),
        Some("Stakeholder added successfully".to_string())
    );
    assert_eq!(state.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_role_blocks_submission_locally() {
    let state = StubState::new();
    let gateway = serve(router(state.clone())).await;
    let mut page = StakeholdersPage::new(gateway);

    page.form.draft_mut().name = "C. Fernandes".to_string();
    assert!(!page.submit_form().await);
    assert_eq!(
        page.error_box.message(),
        Some("Please fill in all fields.".to_string())
    );
    assert!(state.captured_body.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_begin_edit_populates_typed_payload() {
    let state = StubState::new();
    let gateway = serve(router(state.clone())).await;
    let mut page = StakeholdersPage::new(gateway);

    page.load().await;
    assert!(page.begin_edit(2));
    assert_eq!(page.form.draft().name, "B. Das");
    assert_eq!(page.form.draft().role, Some(Role::Ba));
    assert_eq!(page.form.submit_label(), "Update");
}

#[tokio::test]
async fn test_delete_cancel_issues_no_calls() {
    let state = StubState::new();
    let gateway = serve(router(state.clone())).await;
    let mut page = StakeholdersPage::new(gateway);

    assert!(!page.delete(1, |dialog| dialog.cancel()).await);
    assert_eq!(state.delete_calls.load(Ordering::SeqCst), 0);
    assert_eq!(state.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_confirm_deletes_and_reloads() {
    let state = StubState::new();
    let gateway = serve(router(state.clone())).await;
    let mut page = StakeholdersPage::new(gateway);

    assert!(page.delete(1, |dialog| dialog.confirm()).await);
    assert_eq!(state.delete_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.list_calls.load(Ordering::SeqCst), 1);
}
