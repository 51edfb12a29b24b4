use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use mouflow::approvals::EditorState;
use mouflow::{ApprovalEditor, ApprovalStatus, ErrorKind, SubmitPolicy};

use super::service_harness::{self, APPROVALS_PATH, UPDATE_APPROVAL_PATH};

#[tokio::test]
async fn selected_status_is_submitted_and_baseline_stays_stale() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_approvals(&server, service_harness::two_entry_list()).await;
    Mock::given(method("POST"))
        .and(path(UPDATE_APPROVAL_PATH))
        .and(body_json(json!({ "email": "b@x.com", "status": "Rejected" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = ApprovalEditor::new(SubmitPolicy::default());
    editor.load(&client).await.unwrap();

    editor
        .select_status("b@x.com", ApprovalStatus::Rejected)
        .unwrap();
    editor.submit(&client, "b@x.com").await.unwrap();

    let baseline = editor.baseline().unwrap();
    assert_eq!(baseline[1].email, "b@x.com");
    assert_eq!(baseline[1].status, ApprovalStatus::Approved);
    assert_eq!(
        editor.displayed_status("b@x.com"),
        Some(ApprovalStatus::Rejected)
    );
    server.verify().await;
}

#[tokio::test]
async fn reload_picks_up_the_service_state_and_clears_edits() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_approvals(&server, service_harness::two_entry_list()).await;

    let mut editor = ApprovalEditor::new(SubmitPolicy::default());
    editor.load(&client).await.unwrap();
    editor
        .select_status("b@x.com", ApprovalStatus::Rejected)
        .unwrap();

    server.reset().await;
    service_harness::mount_approvals(
        &server,
        json!({ "approvals": [
            { "name": "Ann", "email": "a@x.com", "role": "Legal", "status": "Idle" },
            { "name": "Ben", "email": "b@x.com", "role": "Dean", "status": "Rejected" }
        ]}),
    )
    .await;
    editor.load(&client).await.unwrap();

    assert!(editor.pending().is_some_and(|p| p.is_empty()));
    assert_eq!(
        editor.baseline().unwrap()[1].status,
        ApprovalStatus::Rejected
    );
}

#[tokio::test]
async fn failed_fetch_makes_the_editor_unavailable() {
    let (server, client) = service_harness::start().await;
    Mock::given(method("GET"))
        .and(path(APPROVALS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut editor = ApprovalEditor::new(SubmitPolicy::default());
    let err = editor.load(&client).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Service);
    assert!(matches!(editor.state(), EditorState::Unavailable { .. }));
    assert!(editor.rows().is_empty());

    let err = editor
        .select_status("a@x.com", ApprovalStatus::Approved)
        .unwrap_err();
    assert_eq!(err, mouflow::ValidationError::NotReady);
}

#[tokio::test]
async fn concurrent_submits_complete_independently() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_approvals(&server, service_harness::two_entry_list()).await;
    Mock::given(method("POST"))
        .and(path(UPDATE_APPROVAL_PATH))
        .and(body_json(json!({ "email": "a@x.com", "status": "Approved" })))
        .respond_with(ResponseTemplate::new(500).set_body_string("db locked"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(UPDATE_APPROVAL_PATH))
        .and(body_json(json!({ "email": "b@x.com", "status": "Idle" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let mut editor = ApprovalEditor::new(SubmitPolicy::default());
    editor.load(&client).await.unwrap();
    editor
        .select_status("a@x.com", ApprovalStatus::Approved)
        .unwrap();
    editor.select_status("b@x.com", ApprovalStatus::Idle).unwrap();

    let (a, b) = tokio::join!(
        editor.submit(&client, "a@x.com"),
        editor.submit(&client, "b@x.com"),
    );

    assert_eq!(a.unwrap_err().kind(), ErrorKind::Service);
    assert_eq!(b.unwrap().message(), Some("ok"));
    assert_eq!(
        editor.displayed_status("a@x.com"),
        Some(ApprovalStatus::Approved)
    );
}

#[tokio::test]
async fn submit_pending_sends_every_edit_once() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_approvals(&server, service_harness::two_entry_list()).await;
    Mock::given(method("POST"))
        .and(path(UPDATE_APPROVAL_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let mut editor = ApprovalEditor::new(SubmitPolicy::default());
    editor.load(&client).await.unwrap();
    editor
        .select_status("b@x.com", ApprovalStatus::Rejected)
        .unwrap();
    editor
        .select_status("a@x.com", ApprovalStatus::Approved)
        .unwrap();

    let results = editor.submit_pending(&client).await;
    let emails: Vec<&str> = results.iter().map(|(email, _)| email.as_str()).collect();
    assert_eq!(emails, ["a@x.com", "b@x.com"]);
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    let mut bodies = service_harness::update_requests(&server).await;
    bodies.sort_by(|l, r| l["email"].as_str().cmp(&r["email"].as_str()));
    assert_eq!(bodies[0], json!({ "email": "a@x.com", "status": "Approved" }));
    assert_eq!(bodies[1], json!({ "email": "b@x.com", "status": "Rejected" }));
    server.verify().await;
}
