use wiremock::ResponseTemplate;

use mouflow::{ErrorKind, GenerationSession, MouError, Stage};

use super::service_harness;

#[tokio::test]
async fn failure_on_first_use_leaves_no_stages() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(&server, ResponseTemplate::new(502)).await;

    let mut session = GenerationSession::default();
    let err = session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Service);
    assert!(!session.is_busy());
    assert!(session.current().is_none());
    assert!(session.rendered().is_empty());
}

#[tokio::test]
async fn failure_keeps_the_previous_result() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::full_result_body()),
    )
    .await;

    let mut session = GenerationSession::default();
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();
    let before = session.current().cloned();

    server.reset().await;
    service_harness::mount_generate(&server, ResponseTemplate::new(500)).await;
    let err = session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap_err();

    assert!(matches!(err, MouError::Service(_)));
    assert!(!session.is_busy());
    assert_eq!(session.current().cloned(), before);
    assert_eq!(session.rendered().len(), 5);
}

#[tokio::test]
async fn success_replaces_every_stage_at_once() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::full_result_body()),
    )
    .await;

    let mut session = GenerationSession::default();
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();

    server.reset().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::draft_only_body()),
    )
    .await;
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();

    let stages: Vec<Stage> = session.rendered().iter().map(|s| s.stage).collect();
    assert_eq!(stages, [Stage::Draft]);
}

#[tokio::test]
async fn second_call_is_rejected_while_one_is_in_flight() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::draft_only_body()),
    )
    .await;

    let request = service_harness::acme_request();
    let mut session = GenerationSession::default();
    let ticket = session.begin(&request).unwrap();
    assert!(session.is_busy());

    let err = session.begin(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Busy);

    let outcome = ticket.run(&client).await;
    session.complete(outcome).unwrap();
    assert!(!session.is_busy());
    assert!(session.current().is_some_and(|r| r.has_draft()));
}
