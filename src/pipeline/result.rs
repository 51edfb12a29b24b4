use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub clause_id: String,
    pub text: String,
}

/// Everything one generation call produced. `None` / empty means the stage
/// was not produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineResult {
    pub draft_text: Option<String>,
    pub retrieved_clauses: Vec<Clause>,
    /// Recipients notified, first occurrence order, no duplicates.
    pub emails_sent: Vec<String>,
    pub approval_status: BTreeMap<String, String>,
    pub overall_mou_status: Option<String>,
    pub version_number: Option<String>,
    pub version_diff: Option<String>,
}

pub(crate) fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl PipelineResult {
    pub fn has_draft(&self) -> bool {
        non_empty(self.draft_text.as_deref())
    }

    pub fn has_clauses(&self) -> bool {
        !self.retrieved_clauses.is_empty()
    }

    pub fn has_emails(&self) -> bool {
        !self.emails_sent.is_empty()
    }

    pub fn has_approval_summary(&self) -> bool {
        non_empty(self.overall_mou_status.as_deref())
    }

    pub fn has_version(&self) -> bool {
        non_empty(self.version_number.as_deref())
    }
}

/// Drop repeated recipients, keeping the first occurrence.
pub(crate) fn dedup_recipients(emails: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(emails.len());
    emails
        .into_iter()
        .filter(|email| seen.insert(email.clone()))
        .collect()
}
