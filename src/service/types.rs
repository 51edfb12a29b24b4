//! Wire shapes for the generation/approval service.

use crate::approvals::{ApprovalEntry, ApprovalStatus};
use crate::pipeline::result::dedup_recipients;
use crate::pipeline::{Clause, PipelineResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub result: Option<WireResult>,
}

/// Every field is optional; `null` and absent are the same thing.
///
/// Each field decodes on its own: a value of the wrong shape drops that field
/// (or that entry) and leaves the others intact. Numbers and booleans where
/// text is expected are kept as their string form.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub draft_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_clauses")]
    pub retrieved_clauses: Option<Vec<WireClause>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub emails_sent: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub approval_status: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub overall_mou_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub version_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub version_diff: Option<String>,
}

/// Clause as returned by retrieval. Extra metadata (`clause_type`,
/// `partnership_type`) is ignored; entries without a `clause_id` are dropped.
#[derive(Debug)]
pub(crate) struct WireClause {
    pub clause_id: String,
    pub text: String,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().filter_map(scalar_text).collect()))
}

fn lenient_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error> {
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .filter_map(|(key, value)| scalar_text(value).map(|value| (key, value)))
            .collect(),
    ))
}

fn lenient_clauses<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<WireClause>>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().filter_map(clause_from_value).collect()))
}

fn clause_from_value(value: Value) -> Option<WireClause> {
    let Value::Object(mut fields) = value else {
        return None;
    };
    let clause_id = fields.remove("clause_id").and_then(scalar_text)?;
    let text = fields
        .remove("text")
        .and_then(scalar_text)
        .unwrap_or_default();
    Some(WireClause { clause_id, text })
}

impl From<WireResult> for PipelineResult {
    fn from(wire: WireResult) -> Self {
        Self {
            draft_text: wire.draft_text,
            retrieved_clauses: wire
                .retrieved_clauses
                .unwrap_or_default()
                .into_iter()
                .map(|c| Clause {
                    clause_id: c.clause_id,
                    text: c.text,
                })
                .collect(),
            emails_sent: dedup_recipients(wire.emails_sent.unwrap_or_default()),
            approval_status: wire.approval_status.unwrap_or_default(),
            overall_mou_status: wire.overall_mou_status,
            version_number: wire.version_number,
            version_diff: wire.version_diff,
        }
    }
}

impl From<GenerateResponse> for PipelineResult {
    fn from(response: GenerateResponse) -> Self {
        response.result.unwrap_or_default().into()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApprovalsResponse {
    pub approvals: Vec<ApprovalEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateApprovalRequest<'a> {
    pub email: &'a str,
    pub status: ApprovalStatus,
}

/// Opaque acknowledgement of an approval update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Acknowledgement {
    /// Response body, if any. Non-JSON bodies are kept as a JSON string.
    pub payload: Option<serde_json::Value>,
}

impl Acknowledgement {
    pub(crate) fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        let payload = serde_json::from_str(trimmed)
            .unwrap_or_else(|_| serde_json::Value::String(trimmed.to_string()));
        Self {
            payload: Some(payload),
        }
    }

    /// `message` field of a JSON acknowledgement, when the service sends one.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(serde_json::Value::as_str)
    }
}
