#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mouflow::HttpServiceClient;
use mouflow::mou::{MouField, MouRequest, RequestBuilder};

pub const GENERATE_PATH: &str = "/api/generate-draft/";
pub const APPROVALS_PATH: &str = "/api/approvals/";
pub const UPDATE_APPROVAL_PATH: &str = "/api/update-approval/";

pub async fn start() -> (MockServer, HttpServiceClient) {
    let server = MockServer::start().await;
    let client = HttpServiceClient::new(&server.uri()).expect("mock server uri should be valid");
    (server, client)
}

/// The Acme request used across the generation tests.
pub fn acme_request() -> MouRequest {
    let mut builder = RequestBuilder::new();
    builder.set_field(MouField::CompanyName, "Acme").unwrap();
    builder.set_field(MouField::Objective, "Co-develop X").unwrap();
    builder.set_field(MouField::Scope, "Pilot").unwrap();
    builder.set_field(MouField::PartnershipType, "Research").unwrap();
    builder.set_field(MouField::MouDate, "2025-06-01").unwrap();
    builder.into_request()
}

pub fn draft_only_body() -> Value {
    json!({ "result": { "draft_text": "This MoU is entered into by Acme..." } })
}

pub fn full_result_body() -> Value {
    json!({
        "result": {
            "draft_text": "This MoU is entered into by Acme...",
            "retrieved_clauses": [
                { "clause_id": "C-1", "text": "Confidentiality", "clause_type": "legal" },
                { "clause_id": "C-7", "text": "Term and termination", "partnership_type": "Research" }
            ],
            "emails_sent": ["legal@acme.test", "dean@uni.test", "legal@acme.test"],
            "approval_status": { "legal@acme.test": "Pending", "dean@uni.test": "Approved" },
            "overall_mou_status": "Pending",
            "version_number": "v2",
            "version_diff": "- old term\n+ new term"
        }
    })
}

/// Two recipients: `a@x.com` idle, `b@x.com` approved.
pub fn two_entry_list() -> Value {
    json!({
        "approvals": [
            { "name": "Ann", "email": "a@x.com", "role": "Legal", "status": "Idle" },
            { "name": "Ben", "email": "b@x.com", "role": "Dean", "status": "Approved" }
        ]
    })
}

pub async fn mount_generate(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

pub async fn mount_approvals(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(APPROVALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn update_requests(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("mock server should record received requests")
        .into_iter()
        .filter(|r| r.url.path() == UPDATE_APPROVAL_PATH)
        .map(|r| serde_json::from_slice(&r.body).expect("update body should be json"))
        .collect()
}
