use wiremock::ResponseTemplate;

use mouflow::pipeline::{STANDARD_ORDER, StageDescriptor, StageLine};
use mouflow::{GenerationSession, PipelineRenderer, Stage};

use super::service_harness;

#[tokio::test]
async fn draft_only_result_renders_one_stage() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::draft_only_body()),
    )
    .await;

    let mut session = GenerationSession::default();
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();

    let rendered = session.rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].stage, Stage::Draft);
    assert_eq!(
        rendered[0].lines,
        [StageLine::Text("This MoU is entered into by Acme...".into())]
    );
}

#[tokio::test]
async fn full_result_renders_all_stages_in_order() {
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

    let rendered = session.rendered();
    let order: Vec<Stage> = rendered.iter().map(|s| s.stage).collect();
    assert_eq!(order, STANDARD_ORDER);

    let clauses = &rendered[1];
    assert!(clauses.lines.contains(&StageLine::Item {
        key: "C-7".into(),
        text: "Term and termination".into(),
    }));

    let emails = &rendered[2];
    assert_eq!(
        emails.lines,
        [StageLine::Field {
            label: "Email sent to".into(),
            value: "legal@acme.test, dean@uni.test".into(),
        }]
    );

    let summary = &rendered[3];
    assert_eq!(summary.lines.len(), 3);
    assert!(summary.lines.contains(&StageLine::Field {
        label: "dean@uni.test".into(),
        value: "Approved".into(),
    }));
}

#[tokio::test]
async fn custom_renderer_drops_and_retitles_stages() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(service_harness::full_result_body()),
    )
    .await;

    let renderer = PipelineRenderer::builder()
        .without(Stage::Emails)
        .stage(StageDescriptor {
            title: || "Revision".to_string(),
            ..StageDescriptor::standard(Stage::Version)
        })
        .build();
    let mut session = GenerationSession::new(renderer);
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();

    let rendered = session.rendered();
    let order: Vec<Stage> = rendered.iter().map(|s| s.stage).collect();
    assert_eq!(
        order,
        [Stage::Draft, Stage::Clauses, Stage::ApprovalSummary, Stage::Version]
    );
    assert_eq!(rendered[3].title, "Revision");
}

#[tokio::test]
async fn off_type_version_still_renders_the_draft() {
    let (server, client) = service_harness::start().await;
    service_harness::mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "draft_text": "D",
                "version_number": 2,
                "approval_status": { "a@x.com": null }
            }
        })),
    )
    .await;

    let mut session = GenerationSession::default();
    session
        .generate(&client, &service_harness::acme_request())
        .await
        .unwrap();

    let rendered = session.rendered();
    let order: Vec<Stage> = rendered.iter().map(|s| s.stage).collect();
    assert_eq!(order, [Stage::Draft, Stage::Version]);
    assert_eq!(rendered[0].lines, [StageLine::Text("D".into())]);
}
