use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Review status of one recipient. The service uses exactly these three values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ApprovalStatus {
    Approved,
    Rejected,
    Idle,
}

impl ApprovalStatus {
    /// Parse a user-typed status, surrounding whitespace ignored.
    pub fn from_label(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value.trim()).map_err(|_| ValidationError::UnknownStatus {
            value: value.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEntry {
    pub name: String,
    /// Recipient identifier.
    pub email: String,
    pub role: String,
    pub status: ApprovalStatus,
}

/// What `submit` does for a recipient whose status was never explicitly changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SubmitPolicy {
    /// Only an explicit selection counts; the displayed baseline value does not.
    #[default]
    RequireExplicitChange,
    /// Fall back to the displayed (baseline) status.
    AcceptDisplayedValue,
}
