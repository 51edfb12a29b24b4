use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `mouflow`.
///
/// Library callers match on these to decide what to show the user; the CLI
/// layer continues to use `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum MouError {
    // ── Network / service ───────────────────────────────────────────────
    #[error("service: {0}")]
    Service(#[from] ServiceError),

    // ── Client-side validation ──────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Busy guard ──────────────────────────────────────────────────────
    #[error("a generation request is already in flight")]
    Busy,
}

/// The two user-facing failure kinds, plus the busy-guard rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Service,
    Validation,
    Busy,
}

impl MouError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Service(_) => ErrorKind::Service,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Busy => ErrorKind::Busy,
        }
    }
}

// ─── Service errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{endpoint} request failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("{endpoint} response could not be decoded: {message}")]
    Decode { endpoint: String, message: String },

    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(String),
}

// ─── Validation errors ──────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("select a status for {email} before submitting")]
    NoPendingEdit { email: String },

    #[error("no approval entry for {email}")]
    UnknownRecipient { email: String },

    #[error("approval list is not loaded")]
    NotReady,

    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("unknown request field {name:?}")]
    UnknownField { name: String },

    #[error("unknown approval status {value:?}")]
    UnknownStatus { value: String },
}
