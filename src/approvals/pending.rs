use super::types::ApprovalStatus;
use std::collections::HashMap;

/// Sparse overlay of locally chosen statuses, keyed by recipient email.
///
/// An email with no entry has no uncommitted edit, whatever the UI shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdits {
    edits: HashMap<String, ApprovalStatus>,
}

impl PendingEdits {
    pub fn get(&self, email: &str) -> Option<ApprovalStatus> {
        self.edits.get(email).copied()
    }

    pub fn set(&mut self, email: &str, status: ApprovalStatus) {
        self.edits.insert(email.to_string(), status);
    }

    pub fn contains(&self, email: &str) -> bool {
        self.edits.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ApprovalStatus)> {
        self.edits.iter().map(|(email, status)| (email.as_str(), *status))
    }
}
