//! Approval review state: a fetched baseline plus a pending-edit overlay.
//!
//! The baseline is whatever the last `list_approvals` call returned and is
//! never edited locally. Selections go into [`PendingEdits`]; submitting sends
//! one recipient's edit and leaves both structures as they were, so the
//! baseline stays stale until the next activation.

use super::pending::PendingEdits;
use super::types::{ApprovalEntry, ApprovalStatus, SubmitPolicy};
use crate::error::{MouError, ServiceError, ValidationError};
use crate::service::{Acknowledgement, ServiceClient};
use futures_util::future::join_all;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalBoard {
    baseline: Vec<ApprovalEntry>,
    pending: PendingEdits,
}

impl ApprovalBoard {
    fn entry(&self, email: &str) -> Option<&ApprovalEntry> {
        self.baseline.iter().find(|e| e.email == email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Never activated.
    #[default]
    Inactive,
    Loading,
    Ready(ApprovalBoard),
    /// The last fetch failed; there is no data to show.
    Unavailable { reason: String },
}

/// One line of the approval table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRow<'a> {
    pub entry: &'a ApprovalEntry,
    /// Pending edit if there is one, else the baseline status.
    pub displayed: ApprovalStatus,
    pub pending: Option<ApprovalStatus>,
}

#[derive(Debug, Default)]
pub struct ApprovalEditor {
    policy: SubmitPolicy,
    state: EditorState,
}

impl ApprovalEditor {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            state: EditorState::Inactive,
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, EditorState::Ready(_))
    }

    /// Enter `Loading`, dropping any previous baseline and pending edits.
    pub fn activate(&mut self) {
        self.state = EditorState::Loading;
    }

    pub fn finish_loading(
        &mut self,
        outcome: Result<Vec<ApprovalEntry>, ServiceError>,
    ) -> Result<(), MouError> {
        match outcome {
            Ok(baseline) => {
                info!(entries = baseline.len(), "approval list loaded");
                self.state = EditorState::Ready(ApprovalBoard {
                    baseline,
                    pending: PendingEdits::default(),
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "approval list unavailable");
                self.state = EditorState::Unavailable {
                    reason: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    /// Activate and fetch. No retry on failure.
    pub async fn load(&mut self, client: &dyn ServiceClient) -> Result<(), MouError> {
        self.activate();
        let outcome = client.list_approvals().await;
        self.finish_loading(outcome)
    }

    fn board(&self) -> Result<&ApprovalBoard, ValidationError> {
        match &self.state {
            EditorState::Ready(board) => Ok(board),
            _ => Err(ValidationError::NotReady),
        }
    }

    pub fn baseline(&self) -> Option<&[ApprovalEntry]> {
        self.board().ok().map(|b| b.baseline.as_slice())
    }

    pub fn pending(&self) -> Option<&PendingEdits> {
        self.board().ok().map(|b| &b.pending)
    }

    pub fn rows(&self) -> Vec<ApprovalRow<'_>> {
        let Ok(board) = self.board() else {
            return Vec::new();
        };
        board
            .baseline
            .iter()
            .map(|entry| {
                let pending = board.pending.get(&entry.email);
                ApprovalRow {
                    entry,
                    displayed: pending.unwrap_or(entry.status),
                    pending,
                }
            })
            .collect()
    }

    pub fn displayed_status(&self, email: &str) -> Option<ApprovalStatus> {
        let board = self.board().ok()?;
        let entry = board.entry(email)?;
        Some(board.pending.get(email).unwrap_or(entry.status))
    }

    /// Record a local choice. The baseline is not touched.
    pub fn select_status(
        &mut self,
        email: &str,
        status: ApprovalStatus,
    ) -> Result<(), ValidationError> {
        let EditorState::Ready(board) = &mut self.state else {
            return Err(ValidationError::NotReady);
        };
        if board.entry(email).is_none() {
            return Err(ValidationError::UnknownRecipient {
                email: email.to_string(),
            });
        }
        debug!(email, %status, "pending approval edit");
        board.pending.set(email, status);
        Ok(())
    }

    /// Selector-style edit: confirming the baseline value of a row that has no
    /// pending edit records nothing. Returns whether an edit was recorded.
    pub fn choose_status(
        &mut self,
        email: &str,
        status: ApprovalStatus,
    ) -> Result<bool, ValidationError> {
        let unchanged = {
            let board = self.board()?;
            let entry = board
                .entry(email)
                .ok_or_else(|| ValidationError::UnknownRecipient {
                    email: email.to_string(),
                })?;
            !board.pending.contains(email) && entry.status == status
        };
        if unchanged {
            return Ok(false);
        }
        self.select_status(email, status)?;
        Ok(true)
    }

    /// Status that `submit` would send for `email` under the current policy.
    pub fn resolve_submission(&self, email: &str) -> Result<ApprovalStatus, ValidationError> {
        let board = self.board()?;
        let entry = board
            .entry(email)
            .ok_or_else(|| ValidationError::UnknownRecipient {
                email: email.to_string(),
            })?;

        match (board.pending.get(email), self.policy) {
            (Some(status), _) => Ok(status),
            (None, SubmitPolicy::AcceptDisplayedValue) => Ok(entry.status),
            (None, SubmitPolicy::RequireExplicitChange) => Err(ValidationError::NoPendingEdit {
                email: email.to_string(),
            }),
        }
    }

    /// Send one recipient's status. Validation failures make no network call.
    ///
    /// Borrows the editor immutably, so submits for different recipients can
    /// be in flight together. Baseline and pending edits are left as they were
    /// whatever the outcome.
    pub async fn submit(
        &self,
        client: &dyn ServiceClient,
        email: &str,
    ) -> Result<Acknowledgement, MouError> {
        let status = self.resolve_submission(email)?;
        match client.update_approval(email, status).await {
            Ok(ack) => {
                info!(email, %status, "approval update acknowledged");
                Ok(ack)
            }
            Err(err) => {
                warn!(email, %status, error = %err, "approval update failed");
                Err(err.into())
            }
        }
    }

    /// Submit every pending edit concurrently. Each result stands alone.
    pub async fn submit_pending(
        &self,
        client: &dyn ServiceClient,
    ) -> Vec<(String, Result<Acknowledgement, MouError>)> {
        let Some(pending) = self.pending() else {
            return Vec::new();
        };
        let mut emails: Vec<&str> = pending.iter().map(|(email, _)| email).collect();
        emails.sort_unstable();

        let results = join_all(emails.iter().map(|email| self.submit(client, email))).await;
        emails
            .into_iter()
            .map(str::to_string)
            .zip(results)
            .collect()
    }
}
